use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process::ExitCode;
use word_scramble::cli::{Cli, CliInterface, parse_cli};
use word_scramble::tui::TuiInterface;
use word_scramble::wordbank::EMBEDDED_START_WORDS;
use word_scramble::{
    GameInterface, GameSession, StartupError, WordSet, game_loop_with_rng, load_wordlist_from_file,
    load_wordlist_from_str, logging,
};

fn build_session(cli: &Cli) -> Result<GameSession<WordSet>, StartupError> {
    let start_words = match &cli.wordlist_path {
        Some(path) => load_wordlist_from_file(path)?,
        None => load_wordlist_from_str(EMBEDDED_START_WORDS),
    };
    let dictionary = match &cli.dictionary_path {
        Some(path) => WordSet::from_file(path)?,
        None => WordSet::embedded(),
    };
    info!(
        "Loaded {} start words and {} dictionary words",
        start_words.len(),
        dictionary.len()
    );
    Ok(GameSession::new(start_words, dictionary))
}

fn run(cli: &Cli, session: &mut GameSession<WordSet>) -> io::Result<()> {
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut interface: Box<dyn GameInterface> = if cli.plain {
        Box::new(CliInterface::new(io::stdin().lock()))
    } else {
        Box::new(TuiInterface::new()?)
    };
    game_loop_with_rng(session, interface.as_mut(), &mut rng);
    Ok(())
}

fn main() -> ExitCode {
    let cli = parse_cli();
    if !cli.no_log
        && let Some(path) = logging::init()
    {
        info!("Logging to {}", path.display());
    }

    let mut session = match build_session(&cli) {
        Ok(session) => session,
        Err(e) => {
            error!("Startup failed reading {}: {e}", e.path().display());
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = run(&cli, &mut session) {
        error!("Terminal error: {e}");
        eprintln!("Terminal error: {e}");
        return ExitCode::FAILURE;
    }

    info!(
        "Game over: {} words, score {}",
        session.word_count(),
        session.score()
    );
    ExitCode::SUCCESS
}
