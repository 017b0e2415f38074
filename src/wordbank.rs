use crate::error::StartupError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_START_WORDS: &str = include_str!("resources/start.txt");
pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/dictionary.txt");

fn normalize_entry(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();
    if !word.is_empty() && word.chars().all(char::is_alphabetic) {
        Some(word)
    } else {
        None
    }
}

pub fn load_wordlist_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(normalize_entry).collect()
}

fn read_wordlist<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize_entry(&line?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Load the list root words are drawn from.
pub fn load_wordlist_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, StartupError> {
    let path = path.as_ref();
    read_wordlist(path).map_err(|source| StartupError::WordListUnavailable {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a newline-delimited dictionary file.
pub fn load_dictionary_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, StartupError> {
    let path = path.as_ref();
    read_wordlist(path).map_err(|source| StartupError::DictionaryUnavailable {
        path: path.to_path_buf(),
        source,
    })
}
