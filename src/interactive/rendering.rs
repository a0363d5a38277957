//! TUI rendering with ratatui
//!
//! Board, score and message panels for the puzzle interface.

use super::app::{App, MessageStyle};
use crate::core::is_pangram;
use crate::engine::PuzzleState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

const CENTER_COLOR: Color = Color::Yellow;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    match app.state() {
        Some(state) => {
            let main_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(55), // Board
                    Constraint::Percentage(45), // Progress
                ])
                .split(chunks[1]);

            render_board_panel(f, state, main_chunks[0]);
            render_progress_panel(f, app, state, main_chunks[1]);
        }
        None => render_loading(f, app, chunks[1]),
    }

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🐝 SPELLING BEE")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(header, area);
}

fn render_loading(f: &mut Frame, app: &App, area: Rect) {
    let (text, color) = match &app.load_error {
        Some(err) => (
            format!("Could not load the dictionary:\n{err}\n\nPress Esc to quit."),
            Color::Red,
        ),
        None if app.is_loading() => ("Loading dictionary...".to_string(), Color::Cyan),
        None => (
            "No puzzle available. Press Esc to quit.".to_string(),
            Color::Red,
        ),
    };

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_board_panel(f: &mut Frame, state: &PuzzleState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(7),    // Tiles
            Constraint::Length(3), // Entered word
        ])
        .split(area);

    render_tiles(f, state, chunks[0]);
    render_entry(f, state, chunks[1]);
}

fn tile_span(letter: char, center: bool) -> Span<'static> {
    let style = if center {
        Style::default()
            .fg(Color::Black)
            .bg(CENTER_COLOR)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Gray)
            .add_modifier(Modifier::BOLD)
    };
    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style)
}

/// Honeycomb of the six outer tiles around the center, two/three/two per row
fn board_lines(state: &PuzzleState) -> Vec<Line<'static>> {
    let outer: Vec<char> = state
        .outer_tiles()
        .iter()
        .map(|tile| tile.letter.as_char())
        .collect();
    let center = state.center_letter().as_char();
    let gap = || Span::raw("   ");

    vec![
        Line::from(""),
        Line::from(vec![tile_span(outer[0], false), gap(), tile_span(outer[1], false)]),
        Line::from(""),
        Line::from(vec![
            tile_span(outer[2], false),
            gap(),
            tile_span(center, true),
            gap(),
            tile_span(outer[3], false),
        ]),
        Line::from(""),
        Line::from(vec![tile_span(outer[4], false), gap(), tile_span(outer[5], false)]),
    ]
}

fn render_tiles(f: &mut Frame, state: &PuzzleState, area: Rect) {
    let board = Paragraph::new(board_lines(state))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Letters ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_entry(f: &mut Frame, state: &PuzzleState, area: Rect) {
    let center = state.center_letter().as_char();
    let letters: Vec<Span> = state
        .entered()
        .chars()
        .map(|c| {
            let style = if c == center {
                Style::default()
                    .fg(CENTER_COLOR)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Span::styled(c.to_ascii_uppercase().to_string(), style)
        })
        .collect();

    let (title, color) = if state.is_invalid() {
        (" ✗ Not accepted ", Color::Red)
    } else {
        (" Your word ", Color::Cyan)
    };

    let entry = Paragraph::new(Line::from(letters))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(entry, area);
}

fn render_progress_panel(f: &mut Frame, app: &App, state: &PuzzleState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Score gauge
            Constraint::Percentage(60), // Found words
            Constraint::Min(4),         // Messages
        ])
        .split(area);

    render_score(f, state, chunks[0]);
    render_found_words(f, state, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_score(f: &mut Frame, state: &PuzzleState, area: Rect) {
    let percent = if state.max_score() == 0 {
        0
    } else {
        (u64::from(state.score()) * 100 / u64::from(state.max_score())).min(100)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Score ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(CENTER_COLOR))
        .percent(u16::try_from(percent).unwrap_or(100))
        .label(format!(
            "{} | {}/{} points",
            state.rank(),
            state.score(),
            state.max_score()
        ));

    f.render_widget(gauge, area);
}

fn render_found_words(f: &mut Frame, state: &PuzzleState, area: Rect) {
    let mut words: Vec<&str> = state.accepted_words().iter().map(String::as_str).collect();
    words.sort_unstable();

    let items: Vec<ListItem> = words
        .into_iter()
        .map(|word| {
            let style = if is_pangram(word, state.tiles()) {
                Style::default()
                    .fg(CENTER_COLOR)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(word.to_string()).style(style)
        })
        .collect();

    let title = format!(
        " Found {}/{} ",
        state.accepted_words().len(),
        state.solution_count()
    );
    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(list, area);
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
                MessageStyle::Pangram => Style::default()
                    .fg(CENTER_COLOR)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.state().is_some() {
        "Type letters | Enter: Submit | Backspace: Delete | Del: Clear | Space: Shuffle | Ctrl+N: New | Esc: Quit"
    } else {
        "Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{BuildOptions, DictionaryIndex, DictionarySource, spawn_build};
    use crate::engine::{EngineSettings, PuzzleEngine};
    use ratatui::{Terminal, backend::TestBackend};
    use std::sync::Arc;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn board_shows_every_tile_once() {
        let index = DictionaryIndex::build(["heating", "thing"], &BuildOptions::default());
        let mut engine = PuzzleEngine::with_seed(EngineSettings::default(), 1);
        engine.attach(Arc::new(index));
        engine.start_round("heating").unwrap();

        let lines = board_lines(engine.state().unwrap());
        let text: String = lines
            .iter()
            .flat_map(|line| line.spans.iter().map(|span| span.content.to_string()))
            .collect();
        let mut letters: Vec<char> = text.chars().filter(char::is_ascii_alphabetic).collect();
        letters.sort_unstable();
        assert_eq!(letters, vec!['A', 'E', 'G', 'H', 'I', 'N', 'T']);
        // Center sits in the middle row
        assert!(lines[3].spans[2].content.contains('H'));
    }

    #[test]
    fn game_screen_renders() {
        let index = DictionaryIndex::build(["heating", "thing"], &BuildOptions::default());
        let mut engine = PuzzleEngine::with_seed(EngineSettings::default(), 1);
        engine.attach(Arc::new(index));
        let app = App::with_engine(engine);

        let text = screen(&app);
        assert!(text.contains("SPELLING BEE"));
        assert!(text.contains("Found 0/2"));
    }

    #[test]
    fn loading_screen_renders() {
        let engine = PuzzleEngine::with_seed(EngineSettings::default(), 1);
        let pending = spawn_build(DictionarySource::Embedded, BuildOptions::default());
        let app = App::new(engine, pending);

        let text = screen(&app);
        assert!(text.contains("Loading dictionary"));
    }
}
