use crate::dictionary::Dictionary;
use crate::validator::{Alert, Rejection, validate};
use crate::{debug_log, info_log};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Root word used when the start list has nothing to pick from.
pub const DEFAULT_ROOT_WORD: &str = "silkworm";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Submit(String),
    NewGame,
    Exit,
}

/// A word that made it into the used-word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub word: String,
    pub points: usize,
    pub score: usize,
}

/// Read-only snapshot of a round handed to front ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundView {
    pub root_word: String,
    pub used_words: Vec<String>,
    pub score: usize,
}

/// Front-end seam: the line prompt and the terminal UI both implement this.
pub trait GameInterface {
    /// `None` means input is exhausted and the loop should stop.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_new_game(&mut self, round: &RoundView);
    fn display_accepted(&mut self, accepted: &Accepted, round: &RoundView);
    fn display_rejection(&mut self, alert: &Alert);
    fn display_exit_message(&mut self);
}

#[derive(Debug, Clone)]
struct Round {
    root_word: String,
    used_words: Vec<String>,
    score: usize,
}

#[derive(Debug, Clone)]
enum Phase {
    Idle,
    Playing(Round),
}

/// One player's game, owned by whichever front end drives it.
#[derive(Debug)]
pub struct GameSession<D> {
    start_words: Vec<String>,
    dictionary: D,
    phase: Phase,
}

impl<D: Dictionary> GameSession<D> {
    pub fn new(start_words: Vec<String>, dictionary: D) -> Self {
        Self {
            start_words,
            dictionary,
            phase: Phase::Idle,
        }
    }

    pub fn start(&mut self) {
        self.start_with_rng(&mut rand::rng());
    }

    /// Pick a fresh root word and clear the previous round.
    pub fn start_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let root_word = self
            .start_words
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| DEFAULT_ROOT_WORD.to_string());
        debug_log!("start_with_rng() - root word '{}'", root_word);
        self.phase = Phase::Playing(Round {
            root_word,
            used_words: Vec::new(),
            score: 0,
        });
    }

    pub fn submit(&mut self, candidate: &str) -> Result<Accepted, Rejection> {
        let answer = normalize(candidate);
        let Phase::Playing(round) = &mut self.phase else {
            return Err(Rejection::NotStarted);
        };

        validate(&answer, &round.root_word, &round.used_words, &self.dictionary)?;

        let points = answer.chars().count();
        round.score += points;
        round.used_words.insert(0, answer.clone());
        info_log!("submit() - accepted '{}' (+{}), score {}", answer, points, round.score);
        Ok(Accepted {
            word: answer,
            points,
            score: round.score,
        })
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        matches!(self.phase, Phase::Playing(_))
    }

    #[must_use]
    pub fn root_word(&self) -> Option<&str> {
        match &self.phase {
            Phase::Playing(round) => Some(&round.root_word),
            Phase::Idle => None,
        }
    }

    /// Most recent first.
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        match &self.phase {
            Phase::Playing(round) => &round.used_words,
            Phase::Idle => &[],
        }
    }

    #[must_use]
    pub fn score(&self) -> usize {
        match &self.phase {
            Phase::Playing(round) => round.score,
            Phase::Idle => 0,
        }
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.used_words().len()
    }

    #[must_use]
    pub fn view(&self) -> RoundView {
        RoundView {
            root_word: self.root_word().unwrap_or_default().to_string(),
            used_words: self.used_words().to_vec(),
            score: self.score(),
        }
    }
}

/// Lowercase and trim surrounding whitespace.
#[must_use]
pub fn normalize(candidate: &str) -> String {
    candidate.trim().to_lowercase()
}

pub fn game_loop<D: Dictionary, I: GameInterface + ?Sized>(
    session: &mut GameSession<D>,
    interface: &mut I,
) {
    game_loop_with_rng(session, interface, &mut rand::rng());
}

/// Drive a session from a front end until it asks to exit or runs out of input.
pub fn game_loop_with_rng<D, I, R>(session: &mut GameSession<D>, interface: &mut I, rng: &mut R)
where
    D: Dictionary,
    I: GameInterface + ?Sized,
    R: Rng + ?Sized,
{
    session.start_with_rng(rng);
    interface.display_new_game(&session.view());

    loop {
        let Some(action) = interface.read_action() else {
            info_log!("game_loop() - input exhausted");
            break;
        };

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::NewGame => {
                session.start_with_rng(rng);
                interface.display_new_game(&session.view());
            }
            UserAction::Submit(candidate) => match session.submit(&candidate) {
                Ok(accepted) => interface.display_accepted(&accepted, &session.view()),
                Err(rejection) => {
                    debug_log!("game_loop() - '{}' rejected: {:?}", candidate, rejection);
                    let root = session.root_word().unwrap_or_default();
                    if let Some(alert) = rejection.alert(root) {
                        interface.display_rejection(&alert);
                    }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordSet;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session(start: &[&str]) -> GameSession<WordSet> {
        let dict = WordSet::new([
            "silkworm", "silk", "worm", "milk", "slow", "cat", "dog", "act", "god", "is",
        ]);
        GameSession::new(start.iter().map(|s| s.to_string()).collect(), dict)
    }

    #[derive(Default)]
    struct ScriptedInterface {
        actions: Vec<UserAction>,
        new_games: Vec<RoundView>,
        accepted: Vec<Accepted>,
        alerts: Vec<Alert>,
        exited: bool,
    }

    impl ScriptedInterface {
        fn new(actions: Vec<UserAction>) -> Self {
            let mut actions = actions;
            actions.reverse();
            Self {
                actions,
                ..Self::default()
            }
        }
    }

    impl GameInterface for ScriptedInterface {
        fn read_action(&mut self) -> Option<UserAction> {
            self.actions.pop()
        }
        fn display_new_game(&mut self, round: &RoundView) {
            self.new_games.push(round.clone());
        }
        fn display_accepted(&mut self, accepted: &Accepted, _round: &RoundView) {
            self.accepted.push(accepted.clone());
        }
        fn display_rejection(&mut self, alert: &Alert) {
            self.alerts.push(alert.clone());
        }
        fn display_exit_message(&mut self) {
            self.exited = true;
        }
    }

    #[test]
    fn test_idle_before_start() {
        let mut game = session(&["silkworm"]);
        assert!(!game.is_playing());
        assert_eq!(game.root_word(), None);
        assert_eq!(game.submit("silk"), Err(Rejection::NotStarted));
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_silkworm_silk_scores_four() {
        let mut game = session(&["silkworm"]);
        game.start();
        assert_eq!(game.root_word(), Some("silkworm"));
        let accepted = game.submit("silk").unwrap();
        assert_eq!(accepted.points, 4);
        assert_eq!(game.score(), 4);
        assert_eq!(game.used_words(), &["silk".to_string()]);
    }

    #[test]
    fn test_submit_normalizes() {
        let mut game = session(&["silkworm"]);
        game.start();
        let accepted = game.submit("  SiLK \n").unwrap();
        assert_eq!(accepted.word, "silk");
        assert_eq!(game.submit("silk"), Err(Rejection::Duplicate));
    }

    #[test]
    fn test_used_words_most_recent_first() {
        let mut game = session(&["silkworm"]);
        game.start();
        game.submit("silk").unwrap();
        game.submit("worm").unwrap();
        game.submit("milk").unwrap();
        assert_eq!(game.used_words(), &["milk", "worm", "silk"]);
        assert_eq!(game.word_count(), 3);
        assert_eq!(game.score(), 12);
    }

    #[test]
    fn test_cat_dog_scores_six() {
        let mut game = session(&["catdog"]);
        game.start();
        game.submit("cat").unwrap();
        game.submit("dog").unwrap();
        assert_eq!(game.score(), 6);
    }

    #[test]
    fn test_rejection_leaves_state_untouched() {
        let mut game = session(&["silkworm"]);
        game.start();
        game.submit("silk").unwrap();
        for bad in ["", "silk", "cat", "wilk", "is", "silkworm"] {
            assert!(game.submit(bad).is_err(), "{bad}");
        }
        assert_eq!(game.used_words(), &["silk".to_string()]);
        assert_eq!(game.score(), 4);
    }

    #[test]
    fn test_root_word_always_rejected() {
        let mut game = session(&["silkworm"]);
        game.start();
        assert_eq!(game.submit("SILKWORM"), Err(Rejection::RootWord));
    }

    #[test]
    fn test_restart_resets_round() {
        let mut game = session(&["silkworm"]);
        game.start();
        game.submit("silk").unwrap();
        game.start();
        assert!(game.used_words().is_empty());
        assert_eq!(game.score(), 0);
        assert_eq!(game.submit("silk").unwrap().score, 4);
    }

    #[test]
    fn test_empty_start_list_falls_back() {
        let mut game = session(&[]);
        game.start();
        assert_eq!(game.root_word(), Some(DEFAULT_ROOT_WORD));
    }

    #[test]
    fn test_seeded_start_is_reproducible() {
        let words = ["silkworm", "mountain", "triangle", "elephant", "absolute"];
        let mut a = session(&words);
        let mut b = session(&words);
        a.start_with_rng(&mut StdRng::seed_from_u64(7));
        b.start_with_rng(&mut StdRng::seed_from_u64(7));
        assert_eq!(a.root_word(), b.root_word());
        assert!(words.contains(&a.root_word().unwrap()));
    }

    #[test]
    fn test_game_loop_routes_actions() {
        let mut game = session(&["silkworm"]);
        let mut ui = ScriptedInterface::new(vec![
            UserAction::Submit("silk".to_string()),
            UserAction::Submit(String::new()),
            UserAction::Submit("cat".to_string()),
            UserAction::NewGame,
            UserAction::Submit("worm".to_string()),
            UserAction::Exit,
            UserAction::Submit("milk".to_string()),
        ]);
        game_loop(&mut game, &mut ui);

        assert_eq!(ui.new_games.len(), 2);
        assert_eq!(ui.accepted.len(), 2);
        assert_eq!(ui.accepted[1].score, 4);
        // empty input shows no alert
        assert_eq!(ui.alerts.len(), 1);
        assert_eq!(ui.alerts[0].title, "Word not possible");
        assert!(ui.exited);
        assert_eq!(game.used_words(), &["worm".to_string()]);
    }

    #[test]
    fn test_game_loop_stops_when_input_runs_out() {
        let mut game = session(&["silkworm"]);
        let mut ui = ScriptedInterface::new(vec![UserAction::Submit("silk".to_string())]);
        game_loop(&mut game, &mut ui);
        assert!(!ui.exited);
        assert_eq!(game.score(), 4);
    }
}
