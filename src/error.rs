use std::io;
use std::path::{Path, PathBuf};

/// Failures that stop the game before it starts.
///
/// These are never retried: without a start word list or a dictionary there
/// is no game to play.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("could not load start word list from '{}': {source}", .path.display())]
    WordListUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not load dictionary from '{}': {source}", .path.display())]
    DictionaryUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StartupError {
    pub fn path(&self) -> &Path {
        match self {
            Self::WordListUnavailable { path, .. } | Self::DictionaryUnavailable { path, .. } => {
                path.as_path()
            }
        }
    }
}
