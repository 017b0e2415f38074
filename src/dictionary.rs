//! Spell-check capability used to decide whether a candidate is a real word.

use crate::error::StartupError;
use crate::wordbank::{EMBEDDED_DICTIONARY, load_dictionary_from_file, load_wordlist_from_str};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// Languages a dictionary can be queried in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    English,
}

impl Language {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

pub trait Dictionary {
    fn is_known_word(&self, word: &str, language: Language) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_known_word(&self, word: &str, language: Language) -> bool {
        (**self).is_known_word(word, language)
    }
}

/// A bundled English word set.
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    #[must_use]
    pub fn embedded() -> Self {
        Self::from_str_list(EMBEDDED_DICTIONARY)
    }

    #[must_use]
    pub fn from_str_list(data: &str) -> Self {
        Self::new(load_wordlist_from_str(data))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StartupError> {
        Ok(Self::new(load_dictionary_from_file(path)?))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordSet {
    fn is_known_word(&self, word: &str, language: Language) -> bool {
        match language {
            Language::English => self.words.contains(&word.to_lowercase()),
        }
    }
}
