//! Command-line configuration.
//!
//! The two startup questions (new or continue, file or manual) can be answered
//! here; whatever is left unanswered is asked on the startup screen.

use crate::database::db::DEFAULT_DB_PATH;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "flashcards")]
#[command(about = "Study flashcards and quiz yourself", long_about = None)]
pub struct Cli {
    /// SQLite database file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_DB_PATH)]
    pub db: PathBuf,

    /// Start a new collection, deleting the saved flashcards
    #[arg(long, conflicts_with = "continue_saved")]
    pub new: bool,

    /// Continue with the saved flashcards
    #[arg(long = "continue")]
    pub continue_saved: bool,

    /// Load `question;answer` lines from a file at startup
    #[arg(long, value_name = "FILE", conflicts_with = "manual")]
    pub import: Option<PathBuf>,

    /// Add flashcards manually instead of loading a file
    #[arg(long)]
    pub manual: bool,
}

/// Answer to "new collection or continue?"
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartChoice {
    New,
    Continue,
}

/// Answer to "load from a file or add manually?"
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceChoice {
    File(PathBuf),
    Manual,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub start: Option<StartChoice>,
    pub source: Option<SourceChoice>,
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        let start = if cli.new {
            Some(StartChoice::New)
        } else if cli.continue_saved {
            Some(StartChoice::Continue)
        } else {
            None
        };
        let source = match cli.import {
            Some(path) => Some(SourceChoice::File(path)),
            None if cli.manual => Some(SourceChoice::Manual),
            None => None,
        };

        Self {
            db_path: cli.db,
            start,
            source,
        }
    }
}

impl AppConfig {
    pub fn from_args() -> Self {
        Cli::parse().into()
    }

    /// True when both startup questions were answered on the command line.
    pub fn startup_resolved(&self) -> bool {
        self.start.is_some() && self.source.is_some()
    }
}
