use crate::game_state::{Accepted, GameInterface, RoundView, UserAction};
use crate::validator::Alert;
use crate::debug_log;
use clap::Parser;
use log::error;
use std::borrow::Cow;
use std::io::{self, BufRead, Write};

const NEW_GAME_COMMAND: &str = ":new";
const QUIT_COMMAND: &str = ":quit";

/// Spell as many words as you can from the letters of a root word
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited list of root words
    #[arg(short = 'i', long = "input")]
    pub wordlist_path: Option<String>,

    /// Path to a newline-delimited dictionary used to recognise words
    #[arg(short = 'd', long = "dictionary")]
    pub dictionary_path: Option<String>,

    /// Use a plain line prompt instead of the terminal UI
    #[arg(long)]
    pub plain: bool,

    /// Seed root word selection for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Do not write a log file
    #[arg(long)]
    pub no_log: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Parse one line of player input.
///
/// Commands are prefixed with ':' so they can never collide with a word.
#[must_use]
pub fn parse_action(line: &str) -> UserAction {
    match line.trim().to_lowercase().as_str() {
        NEW_GAME_COMMAND => UserAction::NewGame,
        QUIT_COMMAND => UserAction::Exit,
        _ => UserAction::Submit(line.to_string()),
    }
}

pub fn format_used_word(word: &str) -> String {
    format!("({}) {word}", word.chars().count())
}

/// Line-oriented implementation of `GameInterface`.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead> CliInterface<R, std::io::Stdout> {
    pub fn new(reader: R) -> Self {
        Self::with_writer(reader, std::io::stdout())
    }
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn with_writer(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn say(&mut self, text: &str) {
        let _ = writeln!(self.writer, "{text}");
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn read_action(&mut self) -> Option<UserAction> {
        let _ = write!(self.writer, "> ");
        let _ = self.writer.flush();
        let mut bytes = Vec::new();
        loop {
            match self.reader.read_until(b'\n', &mut bytes) {
                Ok(0) => return None,
                Ok(_) => break,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    error!("read_action() - input error: {e}");
                    return None;
                }
            }
        }
        let input = String::from_utf8_lossy(&bytes);
        if matches!(input, Cow::Owned(_)) {
            debug_log!("read_action() - replaced invalid UTF-8 in {:?}", bytes);
        }
        Some(parse_action(&input))
    }

    fn display_new_game(&mut self, round: &RoundView) {
        self.say(&format!("\nYour word is: {}", round.root_word.to_uppercase()));
        self.say(&format!(
            "Enter words made from its letters ('{NEW_GAME_COMMAND}' for a new word, '{QUIT_COMMAND}' to quit)."
        ));
    }

    fn display_accepted(&mut self, accepted: &Accepted, round: &RoundView) {
        self.say(&format!(
            "{} +{} | Your score is {} ({} words)",
            format_used_word(&accepted.word),
            accepted.points,
            accepted.score,
            round.used_words.len()
        ));
    }

    fn display_rejection(&mut self, alert: &Alert) {
        self.say(&format!("{}: {}", alert.title, alert.message));
    }

    fn display_exit_message(&mut self) {
        self.say("Exiting.");
    }
}
