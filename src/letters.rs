/// The five lowercase Latin vowels.
pub const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// The remaining 21 lowercase Latin letters.
pub const CONSONANTS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w', 'x',
    'y', 'z',
];

/// All 26 lowercase Latin letters.
pub const ALPHABET: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}
