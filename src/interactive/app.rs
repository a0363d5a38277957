//! TUI application state and logic

use crate::dictionary::PendingIndex;
use crate::engine::{EngineError, PuzzleEngine, PuzzleState, SubmitOutcome};
use crate::output::formatters::format_outcome;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// How long the event loop waits for a key before running timers
const POLL_INTERVAL: Duration = Duration::from_millis(50);

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub engine: PuzzleEngine,
    pending: Option<PendingIndex>,
    pub messages: Vec<Message>,
    pub load_error: Option<String>,
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
    Pangram,
    Error,
}

impl App {
    /// App that shows the loading screen until `pending` finishes
    #[must_use]
    pub fn new(engine: PuzzleEngine, pending: PendingIndex) -> Self {
        Self {
            engine,
            pending: Some(pending),
            messages: Vec::new(),
            load_error: None,
            should_quit: false,
        }
    }

    /// App around an engine whose dictionary is already attached
    #[must_use]
    pub fn with_engine(engine: PuzzleEngine) -> Self {
        let mut app = Self {
            engine,
            pending: None,
            messages: Vec::new(),
            load_error: None,
            should_quit: false,
        };
        if app.engine.state().is_none() {
            app.new_game();
        }
        app
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub const fn state(&self) -> Option<&PuzzleState> {
        self.engine.state()
    }

    /// Attach the dictionary once the background build has finished
    pub fn poll_dictionary(&mut self) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };
        let Some(result) = pending.try_take() else {
            return;
        };
        self.pending = None;

        match result {
            Ok(index) => {
                let words = index.len();
                self.engine.attach(Arc::new(index));
                self.add_message(&format!("Loaded {words} words"), MessageStyle::Info);
                self.new_game();
            }
            Err(err) => {
                tracing::error!(%err, "dictionary failed to load");
                self.load_error = Some(err.to_string());
            }
        }
    }

    pub fn new_game(&mut self) {
        match self.engine.new_game() {
            Ok(state) => {
                let text = format!(
                    "New puzzle: {} words to find, center letter {}",
                    state.solution_count(),
                    state.center_letter().as_char().to_ascii_uppercase()
                );
                self.add_message(&text, MessageStyle::Info);
            }
            Err(err) => {
                tracing::error!(%err, "could not start a round");
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn submit(&mut self) {
        let outcome = match self.engine.submit() {
            Ok(outcome) => outcome,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        let style = match outcome {
            SubmitOutcome::Accepted { pangram: true, .. } => MessageStyle::Pangram,
            SubmitOutcome::Accepted { .. } => MessageStyle::Success,
            SubmitOutcome::Rejected(_) => MessageStyle::Error,
        };
        self.add_message(&format_outcome(&outcome), style);

        if outcome.is_accepted()
            && let Some(state) = self.engine.state()
            && state.accepted_words().len() == state.solution_count()
        {
            self.add_message(
                "Every word found! Ctrl+N for a new puzzle.",
                MessageStyle::Pangram,
            );
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            _ if self.is_loading() || self.engine.state().is_none() => {}
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Char(' ') => {
                let result = self.engine.shuffle();
                self.report(result);
            }
            KeyCode::Char(c) if !ctrl => {
                if let Some(tile) = self.engine.state().and_then(|state| state.tile_for(c)) {
                    let result = self.engine.input_letter(tile);
                    self.report(result);
                }
            }
            KeyCode::Backspace => {
                let result = self.engine.backspace();
                self.report(result);
            }
            KeyCode::Delete => {
                let result = self.engine.clear();
                self.report(result);
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    /// Show a failed engine action in the message panel
    fn report(&mut self, result: Result<(), EngineError>) {
        if let Err(err) = result {
            tracing::warn!(%err, "engine action failed");
            self.add_message(&err.to_string(), MessageStyle::Error);
        }
    }

    /// Timers and background work between key presses
    pub fn on_tick(&mut self) {
        self.poll_dictionary();
        self.engine.tick();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
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

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.on_tick();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{
        BuildOptions, DictionaryIndex, DictionarySource, spawn_build,
    };
    use crate::engine::EngineSettings;
    use std::path::PathBuf;
    use std::thread;

    fn app() -> App {
        let index = DictionaryIndex::build(
            ["heating", "thing", "thin", "night"],
            &BuildOptions::default(),
        );
        let mut engine = PuzzleEngine::with_seed(EngineSettings::default(), 5);
        engine.attach(Arc::new(index));
        App::with_engine(engine)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn wait_for_load(app: &mut App) {
        for _ in 0..500 {
            app.poll_dictionary();
            if !app.is_loading() {
                return;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("dictionary never finished loading");
    }

    #[test]
    fn typing_and_submitting() {
        let mut app = app();
        type_word(&mut app, "thing");
        assert_eq!(app.state().unwrap().entered(), "thing");

        press(&mut app, KeyCode::Enter);
        let state = app.state().unwrap();
        assert_eq!(state.accepted_words(), ["thing"]);
        assert_eq!(state.entered(), "");
        assert_eq!(app.messages.last().unwrap().text, "thing +5");
    }

    #[test]
    fn letters_outside_puzzle_ignored() {
        let mut app = app();
        type_word(&mut app, "txzh");
        assert_eq!(app.state().unwrap().entered(), "th");
    }

    #[test]
    fn uppercase_letters_typed() {
        let mut app = app();
        type_word(&mut app, "THIN");
        assert_eq!(app.state().unwrap().entered(), "thin");
    }

    #[test]
    fn rejected_word_keeps_buffer() {
        let mut app = app();
        type_word(&mut app, "thi");
        press(&mut app, KeyCode::Enter);

        let state = app.state().unwrap();
        assert_eq!(state.entered(), "thi");
        assert!(state.is_invalid());
        let last = app.messages.last().unwrap();
        assert_eq!(last.text, "Too short");
        assert_eq!(last.style, MessageStyle::Error);
    }

    #[test]
    fn editing_keys() {
        let mut app = app();
        type_word(&mut app, "thin");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.state().unwrap().entered(), "thi");
        press(&mut app, KeyCode::Delete);
        assert_eq!(app.state().unwrap().entered(), "");
    }

    #[test]
    fn space_shuffles_outer_tiles() {
        let mut app = app();
        let before = *app.state().unwrap().tiles();
        for _ in 0..10 {
            press(&mut app, KeyCode::Char(' '));
        }
        let after = app.state().unwrap().tiles();
        assert_eq!(after[0], before[0]);
        assert_eq!(app.state().unwrap().entered(), "");
    }

    #[test]
    fn finding_everything_announced() {
        let mut app = app();
        for word in ["heating", "thing", "thin", "night"] {
            type_word(&mut app, word);
            press(&mut app, KeyCode::Enter);
        }
        assert!(app.messages.last().unwrap().text.starts_with("Every word found"));
    }

    #[test]
    fn failed_actions_reach_message_panel() {
        let mut app = app();
        app.report(Ok(()));
        let before = app.messages.len();

        app.report(Err(EngineError::NoActiveRound));
        assert_eq!(app.messages.len(), before + 1);
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(last.text, EngineError::NoActiveRound.to_string());
    }

    #[test]
    fn ctrl_n_starts_new_round() {
        let mut app = app();
        type_word(&mut app, "thin");
        press(&mut app, KeyCode::Enter);
        ctrl(&mut app, 'n');

        let state = app.state().unwrap();
        assert!(state.accepted_words().is_empty());
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = self::app();
        ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }

    #[test]
    fn loads_in_background() {
        let engine = PuzzleEngine::with_seed(EngineSettings::default(), 2);
        let pending = spawn_build(DictionarySource::Embedded, BuildOptions::default());
        let mut app = App::new(engine, pending);

        // Keys other than quit do nothing while loading
        press(&mut app, KeyCode::Enter);

        wait_for_load(&mut app);
        assert!(app.engine.is_ready());
        assert!(app.state().is_some());
        assert!(app.load_error.is_none());
    }

    #[test]
    fn load_failure_reported() {
        let engine = PuzzleEngine::with_seed(EngineSettings::default(), 2);
        let source = DictionarySource::File(PathBuf::from("/nonexistent/spelling_bee/words.txt"));
        let mut app = App::new(engine, spawn_build(source, BuildOptions::default()));

        wait_for_load(&mut app);
        assert!(app.load_error.is_some());
        assert!(app.state().is_none());

        // Still quittable
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
