//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: type a word and press Enter to submit it.

use crate::core::Tile;
use crate::engine::{EngineError, PuzzleEngine, PuzzleState, SubmitOutcome};
use crate::output::formatters::{format_outcome, format_tiles, score_bar};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the engine
/// has no dictionary attached.
pub fn run_simple(engine: &mut PuzzleEngine) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(engine, stdin.lock(), stdout.lock())
}

/// Drive a game from `input` until `:quit` or end of input
///
/// Starts a round if none is in progress.
///
/// # Errors
///
/// Returns an error on I/O failure or if the engine is not ready.
pub fn play_lines<R: BufRead, W: Write>(
    engine: &mut PuzzleEngine,
    input: R,
    mut out: W,
) -> Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, "{}", "   S P E L L I N G   B E E".bright_yellow().bold())?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "Type a word and press Enter. Commands: :shuffle :new :words :help :quit\n"
    )?;

    if engine.state().is_none() {
        engine.new_game()?;
    }
    print_board(&mut out, current(engine)?)?;

    for line in input.lines() {
        let line = line?;
        engine.tick();

        let entry = line.trim().to_ascii_lowercase();
        match entry.as_str() {
            "" => {}
            ":quit" | ":q" => break,
            ":help" | ":h" => print_help(&mut out)?,
            ":shuffle" | ":s" => {
                engine.shuffle()?;
                print_board(&mut out, current(engine)?)?;
            }
            ":new" | ":n" => {
                engine.new_game()?;
                writeln!(out, "\n{}", "New puzzle!".bright_green())?;
                print_board(&mut out, current(engine)?)?;
            }
            ":words" | ":w" => print_found(&mut out, current(engine)?)?,
            command if command.starts_with(':') => {
                writeln!(out, "{} {command}", "Unknown command:".red())?;
            }
            word => submit_word(engine, word, &mut out)?,
        }
    }

    writeln!(out, "\nThanks for playing!")?;
    Ok(())
}

fn current(engine: &PuzzleEngine) -> Result<&PuzzleState, EngineError> {
    engine.state().ok_or(EngineError::NoActiveRound)
}

fn submit_word<W: Write>(engine: &mut PuzzleEngine, word: &str, out: &mut W) -> Result<()> {
    let tiles: Option<Vec<Tile>> = {
        let state = current(engine)?;
        word.chars().map(|c| state.tile_for(c)).collect()
    };
    let Some(tiles) = tiles else {
        writeln!(out, "{}", "Uses letters outside the puzzle".red())?;
        return Ok(());
    };

    engine.clear()?;
    for tile in tiles {
        engine.input_letter(tile)?;
    }
    let outcome = engine.submit()?;
    writeln!(out, "{}", colorize_outcome(&outcome))?;

    let state = current(engine)?;
    if outcome.is_accepted() {
        writeln!(out, "{}", score_line(state))?;
        if state.accepted_words().len() == state.solution_count() {
            writeln!(
                out,
                "{}",
                "You found every word! Type :new for another puzzle.".bright_yellow().bold()
            )?;
        }
    }
    Ok(())
}

fn colorize_outcome(outcome: &SubmitOutcome) -> String {
    let text = format_outcome(outcome);
    match outcome {
        SubmitOutcome::Accepted { pangram: true, .. } => text.bright_yellow().bold().to_string(),
        SubmitOutcome::Accepted { .. } => text.green().to_string(),
        SubmitOutcome::Rejected(_) => text.red().to_string(),
    }
}

fn score_line(state: &PuzzleState) -> String {
    format!(
        "{} [{}] {}/{}",
        state.rank().to_string().bright_cyan().bold(),
        score_bar(state.score(), state.max_score(), 20),
        state.score(),
        state.max_score()
    )
}

fn print_board<W: Write>(out: &mut W, state: &PuzzleState) -> io::Result<()> {
    writeln!(out, "Letters: {}", format_tiles(state.tiles()).bold())?;
    writeln!(
        out,
        "Every word must use {}. {} words to find.",
        state.center_letter().as_char().to_ascii_uppercase().to_string().bright_yellow().bold(),
        state.solution_count()
    )?;
    writeln!(out, "{}", score_line(state))
}

fn print_found<W: Write>(out: &mut W, state: &PuzzleState) -> io::Result<()> {
    let found = state.accepted_words();
    writeln!(out, "Found {}/{} words:", found.len(), state.solution_count())?;
    let mut sorted: Vec<&str> = found.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    for word in sorted {
        writeln!(out, "  • {word}")?;
    }
    Ok(())
}

fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Words need four or more letters and must include the center letter.")?;
    writeln!(out, "  :shuffle  rearrange the outer letters")?;
    writeln!(out, "  :new      start a new puzzle")?;
    writeln!(out, "  :words    list the words found so far")?;
    writeln!(out, "  :quit     leave the game")
}
