// Library interface for word-scramble
// This allows integration tests to access internal modules

pub mod cli;
pub mod dictionary;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod tui;
pub mod validator;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use dictionary::{Dictionary, Language, WordSet};
pub use error::StartupError;
pub use game_state::{
    Accepted, DEFAULT_ROOT_WORD, GameInterface, GameSession, RoundView, UserAction, game_loop,
    game_loop_with_rng,
};
pub use validator::{Alert, MIN_WORD_LENGTH, Rejection, is_subset_derivable, validate};
pub use wordbank::{load_dictionary_from_file, load_wordlist_from_file, load_wordlist_from_str};
