//! Survey every puzzle the dictionary can produce
//!
//! Builds the puzzle for each pangram candidate and collects statistics on how
//! many words and points each one offers.

use crate::dictionary::DictionaryIndex;
use crate::engine::{EngineSettings, PuzzleState, round_totals};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Totals for one seed word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleSummary {
    pub pangram: String,
    pub center: char,
    pub solutions: usize,
    pub max_score: u32,
}

/// Statistics over every surveyed puzzle
#[derive(Debug)]
pub struct SurveyStatistics {
    pub puzzles: usize,
    pub average_solutions: f64,
    pub average_max_score: f64,
    pub richest: Option<PuzzleSummary>,
    pub poorest: Option<PuzzleSummary>,
    /// Puzzle count per solution-count bucket of width 5
    pub distribution: Vec<(usize, usize)>,
    pub total_time: Duration,
}

/// Totals for the puzzle seeded by `pangram`
#[must_use]
pub fn summarize_puzzle(
    index: &DictionaryIndex,
    settings: &EngineSettings,
    pangram: &str,
) -> Option<PuzzleSummary> {
    let state = PuzzleState::from_pangram(pangram)?;
    let (max_score, solutions) = round_totals(index, state.tiles(), settings);
    Some(PuzzleSummary {
        pangram: state.pangram().to_string(),
        center: state.center_letter().as_char(),
        solutions,
        max_score,
    })
}

/// Survey all pangram candidates (or the first `limit`) in parallel
#[must_use]
pub fn run_survey(
    index: &DictionaryIndex,
    settings: &EngineSettings,
    limit: Option<usize>,
) -> SurveyStatistics {
    let seeds: Vec<&str> = index
        .pangram_candidates()
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    let pb = ProgressBar::new(seeds.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message("building puzzles");

    let start = Instant::now();
    let summaries: Vec<PuzzleSummary> = seeds
        .par_iter()
        .filter_map(|seed| {
            let summary = summarize_puzzle(index, settings, seed);
            pb.inc(1);
            summary
        })
        .collect();
    pb.finish_with_message("done");

    tracing::info!(puzzles = summaries.len(), "survey finished");
    collect_statistics(summaries, start.elapsed())
}

fn collect_statistics(summaries: Vec<PuzzleSummary>, total_time: Duration) -> SurveyStatistics {
    let puzzles = summaries.len();
    let (average_solutions, average_max_score) = if puzzles == 0 {
        (0.0, 0.0)
    } else {
        let solutions: usize = summaries.iter().map(|s| s.solutions).sum();
        let points: u64 = summaries.iter().map(|s| u64::from(s.max_score)).sum();
        (
            solutions as f64 / puzzles as f64,
            points as f64 / puzzles as f64,
        )
    };

    let mut buckets: Vec<(usize, usize)> = Vec::new();
    for summary in &summaries {
        let bucket = summary.solutions / 5 * 5;
        match buckets.iter_mut().find(|(start, _)| *start == bucket) {
            Some((_, count)) => *count += 1,
            None => buckets.push((bucket, 1)),
        }
    }
    buckets.sort_unstable();

    // Ties go to the alphabetically first seed so results do not depend on thread timing
    let richest = summaries
        .iter()
        .max_by(|a, b| {
            a.solutions
                .cmp(&b.solutions)
                .then_with(|| b.pangram.cmp(&a.pangram))
        })
        .cloned();
    let poorest = summaries
        .iter()
        .min_by(|a, b| {
            a.solutions
                .cmp(&b.solutions)
                .then_with(|| a.pangram.cmp(&b.pangram))
        })
        .cloned();

    SurveyStatistics {
        puzzles,
        average_solutions,
        average_max_score,
        richest,
        poorest,
        distribution: buckets,
        total_time,
    }
}
