//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{AnalysisResult, SurveyStatistics};
use colored::Colorize;

/// Print every word a puzzle accepts
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PUZZLE:".bright_cyan().bold(),
        result.pangram.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let outer: String = result
        .outer
        .iter()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    println!(
        "\n   Center:     {}",
        result.center.to_ascii_uppercase().to_string().bright_yellow().bold()
    );
    println!("   Outer:      {outer}");
    println!("   Words:      {}", result.solutions.len());
    println!(
        "   Max score:  {}",
        result.max_score.to_string().bright_green().bold()
    );

    println!("\n📖 {}", "Solutions:".bright_cyan().bold());
    for (word, points) in &result.solutions {
        if result.pangrams.contains(word) {
            println!("   {:<16} {:>3}", word.bright_yellow().bold(), points);
        } else {
            println!("   {word:<16} {points:>3}");
        }
    }
}

/// Print statistics over all surveyed puzzles
pub fn print_survey_result(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PUZZLE SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if stats.puzzles == 0 {
        println!("\n{}", "No word in the dictionary can seed a puzzle.".red());
        return;
    }

    println!("\n📊 {}", "Overview:".bright_cyan().bold());
    println!("   Puzzles:          {}", stats.puzzles);
    println!(
        "   Average words:    {}",
        format!("{:.1}", stats.average_solutions).bright_yellow().bold()
    );
    println!("   Average max:      {:.1} points", stats.average_max_score);
    if let Some(richest) = &stats.richest {
        println!(
            "   Richest:          {} ({}, {} words, {} points)",
            richest.pangram.green(),
            richest.center.to_ascii_uppercase(),
            richest.solutions,
            richest.max_score
        );
    }
    if let Some(poorest) = &stats.poorest {
        println!(
            "   Poorest:          {} ({}, {} words, {} points)",
            poorest.pangram.yellow(),
            poorest.center.to_ascii_uppercase(),
            poorest.solutions,
            poorest.max_score
        );
    }
    println!("   Time taken:       {:.2}s", stats.total_time.as_secs_f64());

    println!("\n📈 {}", "Words per puzzle:".bright_cyan().bold());
    for &(start, count) in &stats.distribution {
        let pct = (count as f64 / stats.puzzles as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!(
            "   {:>3}-{:<3} {} {count:4} ({pct:5.1}%)",
            start,
            start + 4,
            bar.green()
        );
    }
}
