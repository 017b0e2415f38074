//! TUI (Terminal User Interface) module for Word Scramble
//!
//! Renders the round with Ratatui: the root word as the title, an input
//! field, the used-word list (most recent first) under a score header, and a
//! modal alert when a word is rejected.
//!
//! # State Machine
//! - `EnteringWord` → `ShowingAlert` (on rejection) → back to `EnteringWord`
//! - There is no terminal state; Ctrl-N starts a new round, ESC quits.

use crate::game_state::{Accepted, GameInterface, RoundView, UserAction};
use crate::validator::Alert;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const MAX_INPUT_LENGTH: usize = 32;
const ALERT_WIDTH: u16 = 50;
const ALERT_HEIGHT: u16 = 7;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Debug, Clone, PartialEq, Eq)]
enum TuiState {
    EnteringWord,
    ShowingAlert(Alert),
}

struct RenderContext<'a> {
    root_word: &'a str,
    used_words: &'a [String],
    score: usize,
    current_input: &'a str,
    state: &'a TuiState,
    message: &'a str,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Owns the terminal for its lifetime and restores it on drop.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    root_word: String,
    used_words: Vec<String>,
    score: usize,
    current_input: String,
    state: TuiState,
    message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            root_word: String::new(),
            used_words: Vec::new(),
            score: 0,
            current_input: String::new(),
            state: TuiState::EnteringWord,
            message: String::new(),
            status: "Ready".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            root_word: &self.root_word,
            used_words: &self.used_words,
            score: self.score,
            current_input: &self.current_input,
            state: &self.state,
            message: &self.message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Root word
                Constraint::Length(3), // Input
                Constraint::Min(6),    // Used words
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0], ctx.root_word);
        Self::render_input(f, chunks[1], ctx.current_input, ctx.message);
        Self::render_used_words(f, chunks[2], ctx.used_words, ctx.score);
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4], ctx.state);

        if let TuiState::ShowingAlert(alert) = ctx.state {
            Self::render_alert(f, alert);
        }
    }

    fn render_title(f: &mut Frame, area: Rect, root_word: &str) {
        let title = Paragraph::new(root_word.to_uppercase())
            .style(HEADER_STYLE)
            .block(Block::default().title("Word Scramble").borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_input(f: &mut Frame, area: Rect, current_input: &str, message: &str) {
        let mut spans = vec![Span::raw(current_input.to_string()), Span::styled("_", INFO_STYLE)];
        if !message.is_empty() {
            spans.push(Span::raw("   "));
            spans.push(Span::styled(message.to_string(), MESSAGE_STYLE));
        }
        let paragraph = Paragraph::new(Line::from(spans))
            .block(Block::default().title("Enter your word").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_used_words(f: &mut Frame, area: Rect, used_words: &[String], score: usize) {
        let items: Vec<ListItem> = used_words
            .iter()
            .map(|word| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("({:>2}) ", word.chars().count()), INFO_STYLE),
                    Span::raw(word.clone()),
                ]))
            })
            .collect();
        let list = List::new(items).block(
            Block::default()
                .title(Span::styled(format!("Your score is {score}"), SUCCESS_STYLE))
                .borders(Borders::ALL),
        );
        f.render_widget(list, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: &TuiState) {
        let text = match state {
            TuiState::EnteringWord => "ENTER: Submit | CTRL-N: New word | ESC: Quit",
            TuiState::ShowingAlert(_) => "ENTER: OK",
        };
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_alert(f: &mut Frame, alert: &Alert) {
        let area = centered_rect(f.area(), ALERT_WIDTH, ALERT_HEIGHT);
        let lines = vec![
            Line::from(Span::raw(alert.message.clone())),
            Line::from(""),
            Line::from(Span::styled("[ OK ]", HEADER_STYLE)),
        ];
        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(Span::styled(alert.title.clone(), ERROR_STYLE))
                    .borders(Borders::ALL),
            );
        f.render_widget(Clear, area);
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => {
                // Only Press events; Release and Repeat would double the input
                if key.kind != event::KeyEventKind::Press {
                    return Ok(None);
                }
                debug_log!(
                    "handle_input() - key code={:?}, modifiers={:?}",
                    key.code,
                    key.modifiers
                );
                Ok(self.handle_key(key))
            }
            other => {
                debug_log!("handle_input() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        if matches!(self.state, TuiState::ShowingAlert(_)) {
            self.handle_alert_input(key);
            return None;
        }
        self.handle_word_input(key)
    }

    fn handle_word_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        let has_ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let has_alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('n' | 'N') if has_ctrl => {
                info_log!("handle_word_input() - CTRL-N, returning NewGame");
                return Some(UserAction::NewGame);
            }
            KeyCode::Esc => {
                info_log!("handle_word_input() - ESC pressed, returning Exit");
                return Some(UserAction::Exit);
            }
            KeyCode::Enter => {
                let candidate = self.current_input.clone();
                info_log!("handle_word_input() - submitting '{}'", candidate);
                return Some(UserAction::Submit(candidate));
            }
            KeyCode::Backspace => {
                self.current_input.pop();
            }
            KeyCode::Char(c)
                if !has_ctrl
                    && !has_alt
                    && !c.is_control()
                    && c != '\u{FFFD}'
                    && self.current_input.chars().count() < MAX_INPUT_LENGTH =>
            {
                self.current_input.push(c);
            }
            _ => {
                debug_log!("handle_word_input() - Ignoring key: {:?}", key.code);
            }
        }
        self.message.clear();
        None
    }

    fn handle_alert_input(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            self.state = TuiState::EnteringWord;
            self.status = "Ready".to_string();
        }
    }

    fn sync_round(&mut self, round: &RoundView) {
        self.root_word.clone_from(&round.root_word);
        self.used_words.clone_from(&round.used_words);
        self.score = round.score;
    }
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    rect
}

impl GameInterface for TuiInterface {
    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }
            match self.handle_input() {
                Ok(Some(action)) => return Some(action),
                Ok(None) => {}
                Err(e) => {
                    info_log!("read_action() - Input error: {}, returning Exit", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_new_game(&mut self, round: &RoundView) {
        self.sync_round(round);
        self.current_input.clear();
        self.state = TuiState::EnteringWord;
        self.message.clear();
        self.status = format!("New word: {}", round.root_word.to_uppercase());
        self.draw_or_log();
    }

    fn display_accepted(&mut self, accepted: &Accepted, round: &RoundView) {
        self.sync_round(round);
        self.current_input.clear();
        self.message = format!("+{}", accepted.points);
        self.status = format!("'{}' accepted", accepted.word);
        self.draw_or_log();
    }

    fn display_rejection(&mut self, alert: &Alert) {
        self.status.clone_from(&alert.title);
        self.state = TuiState::ShowingAlert(alert.clone());
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.status = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
