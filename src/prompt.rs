//! Interactive prompting.
//!
//! Everything terminal-bound sits behind [`Prompter`] so the orchestrator
//! can be driven by a scripted reader in tests. Prompts go to stderr to
//! stay out of the per-file status output on stdout.

use std::io::{self, BufRead};

pub trait Prompter {
    /// Bounded single-character choice. Empty input picks the default,
    /// anything unrecognized re-prompts.
    fn ask_choice(&mut self, prompt: &str, choices: &[(char, &str)], default_key: char) -> char;

    /// Yes/no question. Accepts y/yes/j/ja and n/no/nein; empty input
    /// picks the default.
    fn ask_yes_no(&mut self, prompt: &str, default: bool) -> bool;
}

/// Line-oriented prompter over any buffered reader.
pub struct LinePrompter<R> {
    input: R,
}

impl LinePrompter<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        LinePrompter {
            input: io::stdin().lock(),
        }
    }
}

impl<R: BufRead> LinePrompter<R> {
    pub fn new(input: R) -> Self {
        LinePrompter { input }
    }

    /// One trimmed, lowercased line. `None` on EOF or read error, which
    /// callers treat as "take the default" so a closed stdin cannot spin.
    fn read_answer(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_lowercase()),
        }
    }
}

impl<R: BufRead> Prompter for LinePrompter<R> {
    fn ask_choice(&mut self, prompt: &str, choices: &[(char, &str)], default_key: char) -> char {
        let options = choices
            .iter()
            .map(|(key, label)| format!("{key}={label}"))
            .collect::<Vec<_>>()
            .join("/");
        let default_label = choices
            .iter()
            .find(|(key, _)| *key == default_key)
            .map(|(_, label)| *label)
            .unwrap_or("");

        loop {
            eprint!("{prompt} ({options}) [Default: {default_key}={default_label}]: ");

            let Some(answer) = self.read_answer() else {
                return default_key;
            };
            if answer.is_empty() {
                return default_key;
            }

            let mut chars = answer.chars();
            if let (Some(key), None) = (chars.next(), chars.next()) {
                if choices.iter().any(|(k, _)| *k == key) {
                    return key;
                }
            }

            let keys = choices
                .iter()
                .map(|(key, _)| key.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            eprintln!("Please enter one of: {keys} (or press Enter for default).");
        }
    }

    fn ask_yes_no(&mut self, prompt: &str, default: bool) -> bool {
        let default_key = if default { "y" } else { "n" };

        loop {
            eprint!("{prompt} (y/n) [Default: {default_key}]: ");

            let Some(answer) = self.read_answer() else {
                return default;
            };
            match answer.as_str() {
                "" => return default,
                "y" | "yes" | "j" | "ja" => return true,
                "n" | "no" | "nein" => return false,
                _ => eprintln!("Please enter y/n (or press Enter for default)."),
            }
        }
    }
}
