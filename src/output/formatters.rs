//! Formatting utilities for terminal output

use crate::core::Tile;
use crate::engine::SubmitOutcome;

/// Format tiles as uppercase letters with the center in brackets
#[must_use]
pub fn format_tiles(tiles: &[Tile]) -> String {
    tiles
        .iter()
        .map(|tile| {
            let letter = tile.letter.as_char().to_ascii_uppercase();
            if tile.is_center {
                format!("[{letter}]")
            } else {
                letter.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing progress toward the puzzle's maximum score
#[must_use]
pub fn score_bar(score: u32, max_score: u32, width: usize) -> String {
    create_progress_bar(f64::from(score), f64::from(max_score), width)
}

/// One-line description of a submission result
#[must_use]
pub fn format_outcome(outcome: &SubmitOutcome) -> String {
    match outcome {
        SubmitOutcome::Accepted {
            word,
            points,
            pangram: true,
        } => format!("Pangram! {word} +{points}"),
        SubmitOutcome::Accepted { word, points, .. } => format!("{word} +{points}"),
        SubmitOutcome::Rejected(rejection) => rejection.message().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Letter;
    use crate::engine::Rejection;

    #[test]
    fn tiles_mark_center() {
        let tiles: Vec<Tile> = "bee"
            .chars()
            .enumerate()
            .map(|(i, c)| Tile::new(Letter::new(c).unwrap(), i == 0))
            .collect();
        assert_eq!(format_tiles(&tiles), "[B] E E");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn score_bar_with_no_points_available() {
        assert_eq!(score_bar(0, 0, 4), "░░░░");
    }

    #[test]
    fn outcome_text() {
        let pangram = SubmitOutcome::Accepted {
            word: "heating".to_string(),
            points: 14,
            pangram: true,
        };
        assert_eq!(format_outcome(&pangram), "Pangram! heating +14");

        let plain = SubmitOutcome::Accepted {
            word: "thin".to_string(),
            points: 1,
            pangram: false,
        };
        assert_eq!(format_outcome(&plain), "thin +1");

        let rejected = SubmitOutcome::Rejected(Rejection::MissingCenter);
        assert_eq!(format_outcome(&rejected), "Missing center letter");
    }
}
