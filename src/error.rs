//! Error type shared by the store, navigation and quiz logic.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlashcardError {
    /// Question or answer was empty after trimming
    #[error("Invalid flashcard: {0}")]
    Validation(String),

    /// A bulk import line did not have exactly one `;` separator
    #[error("Malformed record on line {line}: {content:?}")]
    MalformedRecord { line: usize, content: String },

    /// Navigation hit the first or last card
    #[error("No more flashcards")]
    NoMoreCards,

    /// The store is empty
    #[error("No flashcards available")]
    NoCards,

    /// An answer was submitted while no quiz is running
    #[error("No quiz is running")]
    QuizNotRunning,

    /// The current quiz card was already judged
    #[error("This flashcard has already been answered")]
    AlreadyAnswered,

    /// The database could not be opened at startup
    #[error("Database at {path:?} could not be opened: {source}")]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Database error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FlashcardError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, FlashcardError>;
