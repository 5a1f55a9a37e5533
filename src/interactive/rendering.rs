//! TUI rendering with ratatui
//!
//! Board, keyboard legend, messages and a status bar, all drawn from a fresh
//! game snapshot each frame.

use super::app::{App, MessageStyle};
use crate::core::{Attempt, LetterStatus};
use crate::game::{GameState, Legend, Snapshot};
use crate::output::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let snapshot = app.game.snapshot();
    let board_height = u16::try_from(snapshot.board.rows().len() * 2).unwrap_or(u16::MAX);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                              // Header
            Constraint::Length(board_height.saturating_add(2)), // Board
            Constraint::Length(5),                              // Keyboard
            Constraint::Min(3),                                 // Messages
            Constraint::Length(1),                              // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, &snapshot, chunks[1]);
    render_keyboard(f, &snapshot.legend, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, &snapshot, chunks[4]);
}

/// Tile style for a status
#[must_use]
pub fn tile_style(status: LetterStatus) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    match status {
        LetterStatus::Correct => style.fg(Color::Black).bg(Color::Green),
        LetterStatus::Present => style.fg(Color::Black).bg(Color::Yellow),
        LetterStatus::Absent => style.fg(Color::White).bg(Color::DarkGray),
        LetterStatus::Pending => style.fg(Color::White),
        LetterStatus::Unset => Style::default().fg(Color::DarkGray),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDGAME")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn attempt_line(attempt: &Attempt) -> Line<'static> {
    let spans: Vec<Span> = attempt
        .tiles()
        .iter()
        .flat_map(|tile| {
            let letter = tile.letter().unwrap_or('·');
            [
                Span::styled(format!(" {letter} "), tile_style(tile.status())),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

fn render_board(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let lines: Vec<Line> = snapshot
        .board
        .rows()
        .iter()
        .flat_map(|row| [attempt_line(row), Line::default()])
        .collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, legend: &Legend, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|letter| {
                    [
                        Span::styled(format!(" {letter} "), key_style(legend.status(letter))),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn key_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Unset | LetterStatus::Pending => Style::default().fg(Color::White),
        LetterStatus::Correct | LetterStatus::Present | LetterStatus::Absent => {
            tile_style(status)
        }
    }
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, snapshot: &Snapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let progress = match snapshot.state {
        GameState::Won => "Solved!".to_string(),
        GameState::Lost => "Out of attempts".to_string(),
        GameState::NoActiveAttempt | GameState::BuildingAttempt => format!(
            "Attempt {}/{}",
            app.game.committed() + 1,
            app.game.max_attempts()
        ),
    };
    f.render_widget(
        Paragraph::new(progress).alignment(Alignment::Center),
        chunks[0],
    );

    let help_text = if snapshot.state.is_over() {
        "q: Quit"
    } else {
        "Enter: Submit | Backspace/Esc: Delete | Ctrl-C: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::Game;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn tile_styles_follow_status() {
        assert_eq!(tile_style(LetterStatus::Correct).bg, Some(Color::Green));
        assert_eq!(tile_style(LetterStatus::Present).bg, Some(Color::Yellow));
        assert_eq!(tile_style(LetterStatus::Absent).bg, Some(Color::DarkGray));
        assert_eq!(tile_style(LetterStatus::Pending).bg, None);
    }

    #[test]
    fn renders_board_and_keyboard() {
        let mut game = Game::new(Word::new("ghast").unwrap(), 6);
        game.handle_all(crate::input::from_line("ghost"));
        let app = App::new(game);

        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("WORDGAME"));
        assert!(text.contains(" G "));
        assert!(text.contains("Attempt 2/6"));
    }
}
