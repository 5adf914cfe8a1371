use anyhow::{bail, Result};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::letters::{ALPHABET, CONSONANTS, VOWELS};

/// A name-generation strategy together with its fixed parameters.
///
/// Built once from the user's answers, then invoked per draw so that
/// repeated generations reuse the same parameters with fresh randomness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameStyle {
    /// Names starting with the given letters, padded to `length`.
    Prefix { prefix: String, length: usize },
    /// Names drawn only from the given letters.
    Alphabet { letters: String, length: usize },
    /// Names alternating consonants and vowels.
    Pronounceable { length: usize },
}

impl NameStyle {
    pub fn generate(&self, rng: &mut impl Rng) -> Result<String> {
        match self {
            NameStyle::Prefix { prefix, length } => Ok(starting_with(prefix, *length, rng)),
            NameStyle::Alphabet { letters, length } => from_alphabet(letters, *length, rng),
            NameStyle::Pronounceable { length } => Ok(pronounceable(*length, rng)),
        }
    }
}

/// Makes a name of exactly `length` characters starting with `prefix`.
///
/// A prefix longer than `length` is truncated; a shorter one is padded
/// with uniformly random lowercase letters.
fn starting_with(prefix: &str, length: usize, rng: &mut impl Rng) -> String {
    let mut chars: Vec<char> = prefix.to_lowercase().chars().take(length).collect();
    while chars.len() < length {
        chars.push(*ALPHABET.choose(rng).unwrap());
    }
    capitalize(chars)
}

/// Makes a name using only the letters in `letters`.
///
/// Non-alphabetic characters are ignored; duplicates are harmless since
/// each draw is uniform over the pool.
fn from_alphabet(letters: &str, length: usize, rng: &mut impl Rng) -> Result<String> {
    let pool: Vec<char> = letters
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(|c| c.to_lowercase())
        .collect();
    if pool.is_empty() {
        bail!("invalid input: no usable letters in {letters:?}");
    }
    let chars = (0..length).map(|_| *pool.choose(rng).unwrap()).collect();
    Ok(capitalize(chars))
}

/// Makes a name that looks pronounceable by alternating consonants and
/// vowels, starting from a randomly chosen class.
fn pronounceable(length: usize, rng: &mut impl Rng) -> String {
    let consonant_first = rng.gen::<bool>();
    let chars = (0..length)
        .map(|i| {
            if (i % 2 == 0) == consonant_first {
                *CONSONANTS.choose(rng).unwrap()
            } else {
                *VOWELS.choose(rng).unwrap()
            }
        })
        .collect();
    capitalize(chars)
}

fn capitalize(chars: Vec<char>) -> String {
    let mut name = String::with_capacity(chars.len());
    let mut rest = chars.into_iter();
    if let Some(first) = rest.next() {
        name.extend(first.to_uppercase());
    }
    name.extend(rest);
    name
}
