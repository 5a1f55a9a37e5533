//! TUI application state and logic

use crate::game::{Game, GameState, Input, Outcome};
use crate::input::from_key_name;
use crate::output::share_grid;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App {
    pub game: Game,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(game: Game) -> Self {
        let mut app = Self {
            game,
            messages: Vec::new(),
            should_quit: false,
        };

        match app.game.state() {
            GameState::Won | GameState::Lost => {
                app.add_message("Today's game is already finished.", MessageStyle::Info);
                app.announce_result();
            }
            GameState::NoActiveAttempt | GameState::BuildingAttempt => {
                let text = format!(
                    "Guess the {}-letter word in {} tries.",
                    app.game.answer().len(),
                    app.game.max_attempts()
                );
                app.add_message(&text, MessageStyle::Info);
            }
        }
        app
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c' | 'q') if ctrl => self.should_quit = true,
            KeyCode::Char('q') if self.game.state().is_over() => self.should_quit = true,
            _ if ctrl => {}
            code => {
                if let Some(input) = key_name(code).as_deref().and_then(from_key_name) {
                    self.handle_input(input);
                }
            }
        }
    }

    /// Forward a normalized input to the game and report the result
    pub fn handle_input(&mut self, input: Input) {
        let before = self.game.state();
        match self.game.handle(input) {
            Outcome::Committed(_) => match self.game.state() {
                GameState::Won | GameState::Lost => self.announce_result(),
                GameState::NoActiveAttempt | GameState::BuildingAttempt => {}
            },
            Outcome::Ignored if input == Input::Submit && before == GameState::BuildingAttempt => {
                self.add_message("Not enough letters", MessageStyle::Error);
            }
            Outcome::Edited | Outcome::Ignored => {}
        }
    }

    fn announce_result(&mut self) {
        let used = self.game.attempts().len();
        match self.game.state() {
            GameState::Won => {
                let celebration = match used {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            GameState::Lost => {
                let text = format!("The word was {}", self.game.answer());
                self.add_message(&text, MessageStyle::Error);
            }
            GameState::NoActiveAttempt | GameState::BuildingAttempt => return,
        }
        self.add_message("Press 'q' to quit.", MessageStyle::Info);
    }

    /// Share grid for a finished game
    #[must_use]
    pub fn share_text(&self) -> Option<String> {
        let state = self.game.state();
        state.is_over().then(|| {
            share_grid(self.game.attempts(), state, self.game.max_attempts())
        })
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Name a terminal key the way the input normalizer expects
#[must_use]
pub fn key_name(code: KeyCode) -> Option<String> {
    let name = match code {
        KeyCode::Enter => "Enter",
        KeyCode::Backspace => "Backspace",
        KeyCode::Delete => "Delete",
        KeyCode::Esc => "Escape",
        KeyCode::Char(c) => return Some(c.to_string()),
        _ => return None,
    };
    Some(name.to_string())
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    finish(res)
}

// Runs once the terminal is restored so the share grid lands on the normal screen
fn finish(res: Result<Option<String>>) -> Result<()> {
    if let Some(share) = res? {
        println!("{share}");
    }
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Option<String>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            debug!(code = ?key.code, "key pressed");
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.share_text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn app() -> App {
        App::new(Game::new(Word::new("ghast").unwrap(), 6))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn key_names() {
        assert_eq!(key_name(KeyCode::Enter).as_deref(), Some("Enter"));
        assert_eq!(key_name(KeyCode::Esc).as_deref(), Some("Escape"));
        assert_eq!(key_name(KeyCode::Char('a')).as_deref(), Some("a"));
        assert_eq!(key_name(KeyCode::Tab), None);
    }

    #[test]
    fn typing_and_submitting() {
        let mut app = app();
        type_word(&mut app, "ghost");
        assert_eq!(app.game.committed(), 1);
        assert_eq!(app.game.state(), GameState::BuildingAttempt);
    }

    #[test]
    fn escape_and_backspace_delete() {
        let mut app = app();
        for c in "gho".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.game.current().unwrap().text(), "G");
    }

    #[test]
    fn short_submit_shows_error() {
        let mut app = app();
        type_word(&mut app, "gh");
        let last = app.messages.last().unwrap();
        assert_eq!(last.text, "Not enough letters");
        assert_eq!(last.style, MessageStyle::Error);
    }

    #[test]
    fn q_types_until_game_is_over() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.game.current().unwrap().text(), "Q");

        press(&mut app, KeyCode::Backspace);
        type_word(&mut app, "ghast");
        assert!(app.share_text().unwrap().starts_with("Wordgame 1/6"));
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn losing_reveals_answer() {
        let mut app = App::new(Game::new(Word::new("ghast").unwrap(), 1));
        type_word(&mut app, "brick");
        assert!(app.messages.iter().any(|m| m.text == "The word was GHAST"));
    }

    #[test]
    fn loop_errors_reach_the_caller() {
        let err = finish(Err(anyhow::anyhow!("terminal went away"))).unwrap_err();
        assert_eq!(err.to_string(), "terminal went away");
        assert!(finish(Ok(None)).is_ok());
    }
}
