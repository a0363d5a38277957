//! Command implementations

pub mod analyze;
pub mod simple;
pub mod survey;

pub use analyze::{AnalysisResult, analyze_puzzle};
pub use simple::{play_lines, run_simple};
pub use survey::{PuzzleSummary, SurveyStatistics, run_survey, summarize_puzzle};
