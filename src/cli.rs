use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use decem::{PuzzleBank, PuzzleGenerator, SolutionChecker, TARGET};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Decem - the daily make-ten puzzle
#[derive(Parser, Debug)]
#[command(name = "decem")]
#[command(about = "Generate the daily make-ten puzzle and check answers against it")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// JSON file with fallback puzzles, replacing the built-in bank
    #[arg(long, global = true)]
    pub bank: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a day's puzzle
    Generate {
        /// Puzzle date (YYYY-MM-DD); defaults to today (UTC)
        #[arg(long)]
        date: Option<String>,

        /// Also print the reference solution
        #[arg(long)]
        reveal: bool,

        /// Print the full puzzle as JSON (includes the solution)
        #[arg(long)]
        json: bool,
    },
    /// Check an answer against a day's puzzle
    Check {
        /// Candidate expression, e.g. "(2 + 3) * 4 / 2"
        expression: String,

        /// Puzzle date (YYYY-MM-DD); defaults to today (UTC)
        #[arg(long)]
        date: Option<String>,
    },
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
}

fn parse_date(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .with_context(|| format!("invalid date '{}', expected YYYY-MM-DD", text)),
        None => Ok(Utc::now().date_naive()),
    }
}

fn load_generator(bank: Option<&PathBuf>) -> Result<PuzzleGenerator> {
    match bank {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read bank file {}", path.display()))?;
            let bank = PuzzleBank::from_json_str(&json)
                .with_context(|| format!("invalid bank file {}", path.display()))?;
            info!("loaded {} fallback puzzles from {}", bank.len(), path.display());
            Ok(PuzzleGenerator::with_bank(bank))
        }
        None => Ok(PuzzleGenerator::new()),
    }
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(&args.log_level);

    let generator = load_generator(args.bank.as_ref())?;

    match args.command {
        Command::Generate { date, reveal, json } => {
            let date = parse_date(date.as_deref())?;
            let puzzle = generator.generate(date);

            if json {
                println!("{}", serde_json::to_string_pretty(&puzzle)?);
                return Ok(());
            }

            println!("Puzzle for {}", puzzle.date);
            println!(
                "Combine all of these numbers, each exactly once, to make {}:",
                TARGET
            );
            println!(
                "  {}",
                puzzle
                    .numbers
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("  ")
            );
            if reveal {
                println!("Reference solution: {}", puzzle.solution);
            }
            Ok(())
        }
        Command::Check { expression, date } => {
            let date = parse_date(date.as_deref())?;
            let puzzle = generator.generate(date);
            let report = SolutionChecker::new().check(&expression, &puzzle);

            if report.ok {
                println!("Correct! {} = {}", expression.trim(), TARGET);
            } else if let Some(reason) = &report.reason {
                println!("Incorrect: {}", reason);
            }
            Ok(())
        }
    }
}
