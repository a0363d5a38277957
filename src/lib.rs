//! Spelling Bee
//!
//! A seven-letter word puzzle: build words from the tiles, always using the
//! center letter, and score extra for pangrams that use all seven.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use spelling_bee::dictionary::{BuildOptions, DictionaryIndex};
//! use spelling_bee::engine::{EngineSettings, PuzzleEngine};
//!
//! let index = DictionaryIndex::build(["heating", "thing", "night"], &BuildOptions::default());
//! let mut engine = PuzzleEngine::with_index(Arc::new(index), EngineSettings::default());
//!
//! let state = engine.new_game().unwrap();
//! println!("Center letter: {}", state.center_letter());
//! println!("Words to find: {}", state.solution_count());
//! ```

// Core domain types and scoring rules
pub mod core;

// Word list ingestion and lookup
pub mod dictionary;

// Game state and player actions
pub mod engine;

// TOML configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
