//! Candidate validation.
//!
//! Checks run in a fixed order and the first failure wins:
//! empty, already used, not spellable from the root, not a dictionary word,
//! too short, identical to the root.

use crate::dictionary::{Dictionary, Language};
use std::collections::HashMap;

pub const MIN_WORD_LENGTH: usize = 3;

/// A (title, message) pair shown to the player when a word is rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    fn new(title: &str, message: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            message: message.into(),
        }
    }
}

/// Why a candidate was not accepted. None of these alter the game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("No word entered")]
    Empty,
    #[error("No game in progress")]
    NotStarted,
    #[error("Word already used")]
    Duplicate,
    #[error("Word not possible")]
    NotPossible,
    #[error("Word not recognised")]
    NotRecognised,
    #[error("Word is too short")]
    TooShort,
    #[error("Word is duplicate")]
    RootWord,
}

impl Rejection {
    /// `None` for silent rejections, which show nothing to the player.
    #[must_use]
    pub fn alert(self, root_word: &str) -> Option<Alert> {
        let title = self.to_string();
        let message = match self {
            Self::Empty | Self::NotStarted => return None,
            Self::Duplicate => "Be more creative".to_string(),
            Self::NotPossible => format!("You can't spell this word from {root_word}"),
            Self::NotRecognised => "You can't just make them up, you know".to_string(),
            Self::TooShort => format!(
                "Your word shouldn't be less than {MIN_WORD_LENGTH} characters long"
            ),
            Self::RootWord => "You can't use same word as the given one".to_string(),
        };
        Some(Alert::new(&title, message))
    }
}

/// Whether `candidate` can be spelled using each letter of `root` at most once.
/// Case-insensitive.
#[must_use]
pub fn is_subset_derivable(candidate: &str, root: &str) -> bool {
    let mut available: HashMap<char, usize> = HashMap::new();
    for c in root.chars().flat_map(char::to_lowercase) {
        *available.entry(c).or_insert(0) += 1;
    }
    for c in candidate.chars().flat_map(char::to_lowercase) {
        match available.get_mut(&c) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }
    true
}

#[must_use]
pub fn is_original(candidate: &str, used_words: &[String]) -> bool {
    !used_words.iter().any(|w| w == candidate)
}

#[must_use]
pub fn is_long_enough(candidate: &str) -> bool {
    candidate.chars().count() >= MIN_WORD_LENGTH
}

/// Run every check against an already-normalized candidate.
pub fn validate<D: Dictionary + ?Sized>(
    candidate: &str,
    root_word: &str,
    used_words: &[String],
    dictionary: &D,
) -> Result<(), Rejection> {
    if candidate.is_empty() {
        return Err(Rejection::Empty);
    }
    if !is_original(candidate, used_words) {
        return Err(Rejection::Duplicate);
    }
    if !is_subset_derivable(candidate, root_word) {
        return Err(Rejection::NotPossible);
    }
    if !dictionary.is_known_word(candidate, Language::English) {
        return Err(Rejection::NotRecognised);
    }
    if !is_long_enough(candidate) {
        return Err(Rejection::TooShort);
    }
    if candidate == root_word {
        return Err(Rejection::RootWord);
    }
    Ok(())
}
