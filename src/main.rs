//! Spelling Bee - CLI
//!
//! Seven-letter word puzzle with TUI and line-based modes, plus puzzle
//! analysis tools.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use spelling_bee::{
    commands::{analyze_puzzle, run_simple, run_survey},
    config::GameConfig,
    dictionary::{DictionaryIndex, DictionarySource, spawn_build},
    engine::PuzzleEngine,
    interactive::{App, run_tui},
    output::{print_analysis_result, print_survey_result},
};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "spelling_bee",
    about = "Find words in seven letters; every word needs the center letter",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'embedded' (built in) or path to a file, one word per line
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Config file (default: <config dir>/spelling_bee/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed for reproducible puzzles and shuffles
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type whole words, no TUI)
    Simple,

    /// List every word a puzzle accepts
    Analyze {
        /// Seed word; a random pangram when omitted
        word: Option<String>,
    },

    /// Build the puzzle for every pangram candidate and report statistics
    Survey {
        /// Limit number of puzzles to build
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_tracing(matches!(command, Commands::Play));

    let mut config = GameConfig::load(cli.config.as_deref())?;
    apply_overrides(&mut config, cli.wordlist.as_deref(), cli.seed);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Analyze { word } => run_analyze_command(&config, word.as_deref()),
        Commands::Survey { limit } => run_survey_command(&config, limit),
    }
}

/// CLI flags take precedence over the config file
fn apply_overrides(config: &mut GameConfig, wordlist: Option<&str>, seed: Option<u64>) {
    match wordlist {
        Some("embedded") => config.dictionary.path = None,
        Some(path) => config.dictionary.path = Some(PathBuf::from(path)),
        None => {}
    }
    if seed.is_some() {
        config.game.seed = seed;
    }
}

fn init_tracing(tui: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if !tui {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(env_filter)
            .init();
        return;
    }

    if let Some((log_path, file)) = open_log_file() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();
        tracing::info!(path = %log_path.display(), "logging initialized");
        return;
    }

    // Without a log file, drop logs rather than writing over the TUI
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> Option<(PathBuf, fs::File)> {
    let dir = dirs::cache_dir()?.join("spelling_bee");
    fs::create_dir_all(&dir).ok()?;
    let path = dir.join("spelling_bee.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;
    Some((path, file))
}

fn new_engine(config: &GameConfig) -> PuzzleEngine {
    let settings = config.engine_settings();
    match config.game.seed {
        Some(seed) => PuzzleEngine::with_seed(settings, seed),
        None => PuzzleEngine::new(settings),
    }
}

fn load_index(config: &GameConfig) -> Result<DictionaryIndex> {
    let source = config.source();
    let index = source
        .build(&config.build_options())
        .with_context(|| format!("loading dictionary from {}", describe(&source)))?;
    Ok(index)
}

fn ready_engine(config: &GameConfig) -> Result<PuzzleEngine> {
    let mut engine = new_engine(config);
    engine.attach(Arc::new(load_index(config)?));
    Ok(engine)
}

fn describe(source: &DictionarySource) -> String {
    match source {
        DictionarySource::Embedded => "embedded word list".to_string(),
        DictionarySource::File(path) => path.display().to_string(),
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    let pending = spawn_build(config.source(), config.build_options());
    let app = App::new(new_engine(config), pending);
    run_tui(app)
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let mut engine = ready_engine(config)?;
    run_simple(&mut engine)
}

fn run_analyze_command(config: &GameConfig, word: Option<&str>) -> Result<()> {
    let mut engine = ready_engine(config)?;
    let result = analyze_puzzle(&mut engine, word)?;
    print_analysis_result(&result);
    Ok(())
}

fn run_survey_command(config: &GameConfig, limit: Option<usize>) -> Result<()> {
    let index = load_index(config)?;
    println!(
        "Surveying {} pangram candidates from {}...",
        limit.map_or(index.candidate_count(), |n| n.min(index.candidate_count())),
        describe(&config.source())
    );
    let stats = run_survey(&index, &config.engine_settings(), limit);
    print_survey_result(&stats);
    Ok(())
}
