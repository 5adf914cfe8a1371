use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::commands::interaction::{interactive, Interactor};
use crate::letters::ALPHABET;
use crate::random_name::NameStyle;

/// Generate random names interactively.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct GenerateCommand {
    /// Seed the random generator for a reproducible session.
    #[clap(long = "seed")]
    pub seed: Option<u64>,
}

/// How an interactive session ended.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    /// The user quit from the post-generation prompt.
    Quit,
    /// The user gave an unrecognized menu or loop answer.
    Aborted,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.execute(&interactive(), &mut rng)?;
        Ok(())
    }

    fn execute(&self, interactor: &impl Interactor, rng: &mut impl Rng) -> Result<Outcome> {
        print_banner();
        let style = match collect_style(interactor, rng)? {
            Some(style) => style,
            None => {
                println!("Invalid choice. Exiting.");
                return Ok(Outcome::Aborted);
            }
        };
        tracing::debug!("collected {style:?}");
        generate_loop(&style, interactor, rng)
    }
}

fn print_banner() {
    println!("=== Name Generator ===");
    println!("Choose how you want to generate names:");
    println!("A) Start with given letters");
    println!("B) Use only chosen letters");
    println!("C) Pronounceable (consonant-vowel pattern)");
}

/// Asks for a mode and its parameters. Returns `None` when the mode
/// letter is not recognized.
fn collect_style(interactor: &impl Interactor, rng: &mut impl Rng) -> Result<Option<NameStyle>> {
    let mode = interactor.input("Enter A, B or C")?.trim().to_uppercase();
    let style = match mode.as_str() {
        "A" => {
            let mut prefix = interactor
                .input("Enter starting letters (prefix)")?
                .trim()
                .to_string();
            if prefix.is_empty() {
                prefix = ALPHABET.choose(rng).unwrap().to_string();
                tracing::trace!("blank prefix, substituted {prefix:?}");
            }
            let length =
                prompt_bounded_number(interactor, "Enter total name length (e.g. 4-12)", 1, 30)?;
            NameStyle::Prefix {
                prefix,
                length: length as usize,
            }
        }
        "B" => {
            let supplied = interactor.input("Enter allowed letters (e.g. abcxyz)")?;
            let mut letters: String = supplied.chars().filter(|c| c.is_alphabetic()).collect();
            if letters.is_empty() {
                println!("No valid letters - defaulting to 'abcde'.");
                letters = "abcde".to_string();
            }
            let length = prompt_bounded_number(interactor, "Enter name length (e.g. 3-12)", 1, 30)?;
            NameStyle::Alphabet {
                letters,
                length: length as usize,
            }
        }
        "C" => {
            let length = prompt_bounded_number(interactor, "Enter name length (e.g. 3-10)", 2, 12)?;
            NameStyle::Pronounceable {
                length: length as usize,
            }
        }
        _ => return Ok(None),
    };
    Ok(Some(style))
}

/// Prompts until the user supplies an integer within `[min, max]`.
fn prompt_bounded_number(
    interactor: &impl Interactor,
    prompt: &str,
    min: u32,
    max: u32,
) -> Result<u32> {
    loop {
        let line = interactor.input(prompt)?;
        let answer = line.trim();
        if !answer.is_empty() && answer.chars().all(|c| c.is_ascii_digit()) {
            match answer.parse::<u32>() {
                Ok(n) if n < min => println!("Please enter a number >= {min}."),
                Ok(n) if n > max => println!("Please enter a number <= {max}."),
                Ok(n) => return Ok(n),
                // all-digit strings can still overflow the integer type
                Err(_) => println!("Please enter a valid number."),
            }
        } else {
            println!("Please enter a valid number.");
        }
    }
}

fn generate_loop(
    style: &NameStyle,
    interactor: &impl Interactor,
    rng: &mut impl Rng,
) -> Result<Outcome> {
    loop {
        let name = match style.generate(rng) {
            Ok(name) => name,
            Err(err) => {
                println!("Error generating name: {err}");
                return Ok(Outcome::Aborted);
            }
        };
        println!();
        println!("Generated name: {name}");
        println!();
        println!("What would you like to do next?");
        println!("1. Quit");
        println!("2. Generate another name");
        match interactor.input("Enter 1 or 2")?.trim() {
            "1" => {
                println!("Goodbye! Thanks for using the name generator.");
                return Ok(Outcome::Quit);
            }
            "2" => continue,
            _ => {
                println!("Invalid choice, exiting.");
                return Ok(Outcome::Aborted);
            }
        }
    }
}

#[cfg(test)]
mod generate_tests {
    use super::*;
    use crate::commands::interaction::MockInteractor;
    use crate::letters::is_vowel;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    fn scripted(lines: &[&str]) -> MockInteractor {
        let queue: Mutex<VecDeque<String>> =
            Mutex::new(lines.iter().map(|s| s.to_string()).collect());
        let mut mock = MockInteractor::new();
        mock.expect_input().returning(move |_| {
            Ok(queue
                .lock()
                .unwrap()
                .pop_front()
                .expect("script ran out of input"))
        });
        mock
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    #[test]
    fn validator_rejects_garbage_until_a_bounded_number_arrives() {
        let mock = scripted(&["abc", "-1", "0", "5"]);
        assert_eq!(prompt_bounded_number(&mock, "length", 1, 50).unwrap(), 5);
    }

    #[test]
    fn validator_rejects_numbers_above_the_bound() {
        let mock = scripted(&["31", "30"]);
        assert_eq!(prompt_bounded_number(&mock, "length", 1, 30).unwrap(), 30);
    }

    #[test]
    fn validator_survives_integer_overflow() {
        let mock = scripted(&["99999999999999999999", "7"]);
        assert_eq!(prompt_bounded_number(&mock, "length", 1, 30).unwrap(), 7);
    }

    #[test]
    fn mode_a_collects_prefix_and_length() {
        let mock = scripted(&["a", "Al", "6"]);
        let style = collect_style(&mock, &mut rng()).unwrap().unwrap();
        assert_eq!(
            style,
            NameStyle::Prefix {
                prefix: "Al".to_string(),
                length: 6
            }
        );
    }

    #[test]
    fn mode_a_substitutes_a_random_letter_for_a_blank_prefix() {
        let mock = scripted(&["A", "", "5"]);
        let style = collect_style(&mock, &mut rng()).unwrap().unwrap();
        match style {
            NameStyle::Prefix { prefix, length } => {
                assert_eq!(length, 5);
                assert_eq!(prefix.len(), 1);
                assert!(prefix.chars().all(|c| c.is_ascii_lowercase()));
            }
            other => panic!("unexpected style {other:?}"),
        }
    }

    #[test]
    fn mode_b_strips_non_letters() {
        let mock = scripted(&["b", "a1b2c3", "5"]);
        let style = collect_style(&mock, &mut rng()).unwrap().unwrap();
        assert_eq!(
            style,
            NameStyle::Alphabet {
                letters: "abc".to_string(),
                length: 5
            }
        );
    }

    #[test]
    fn mode_b_defaults_to_abcde_without_letters() {
        let mock = scripted(&["B", "123", "4"]);
        let style = collect_style(&mock, &mut rng()).unwrap().unwrap();
        assert_eq!(
            style,
            NameStyle::Alphabet {
                letters: "abcde".to_string(),
                length: 4
            }
        );
    }

    #[test]
    fn mode_c_collects_length_only() {
        let mock = scripted(&["c", "4"]);
        let style = collect_style(&mock, &mut rng()).unwrap().unwrap();
        assert_eq!(style, NameStyle::Pronounceable { length: 4 });
    }

    #[test]
    fn unrecognized_mode_is_rejected() {
        let mock = scripted(&["x"]);
        assert!(collect_style(&mock, &mut rng()).unwrap().is_none());
    }

    #[test]
    fn mode_b_session_draws_only_allowed_letters() {
        let mut rng = rng();
        let mock = scripted(&["B", "abc", "5"]);
        let style = collect_style(&mock, &mut rng).unwrap().unwrap();
        let name = style.generate(&mut rng).unwrap();
        assert_eq!(name.len(), 5);
        assert!(name.chars().next().unwrap().is_ascii_uppercase());
        assert!(name.to_lowercase().chars().all(|c| "abc".contains(c)));
    }

    #[test]
    fn mode_c_session_alternates_classes() {
        let mut rng = rng();
        let mock = scripted(&["C", "4"]);
        let style = collect_style(&mock, &mut rng).unwrap().unwrap();
        let name = style.generate(&mut rng).unwrap();
        let classes: Vec<bool> = name.to_lowercase().chars().map(is_vowel).collect();
        for pair in classes.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn session_generates_until_quit() {
        let command = GenerateCommand { seed: Some(11) };
        let mock = scripted(&["A", "Al", "6", "2", "2", "1"]);
        let outcome = command.execute(&mock, &mut rng()).unwrap();
        assert_eq!(outcome, Outcome::Quit);
    }

    #[test]
    fn unrecognized_menu_choice_aborts_the_session() {
        let command = GenerateCommand { seed: None };
        let mock = scripted(&["Q"]);
        let outcome = command.execute(&mock, &mut rng()).unwrap();
        assert_eq!(outcome, Outcome::Aborted);
    }

    #[test]
    fn unrecognized_loop_answer_exits() {
        let command = GenerateCommand { seed: None };
        let mock = scripted(&["C", "4", "9"]);
        let outcome = command.execute(&mock, &mut rng()).unwrap();
        assert_eq!(outcome, Outcome::Aborted);
    }
}
