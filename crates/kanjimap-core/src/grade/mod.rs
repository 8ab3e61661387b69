//! Per-grade table construction.
//!
//! [`GradeBuilder`] pulls the character list for a grade from a
//! [`KanjiSource`], selects readings for each character and collects them
//! into an insertion-ordered [`GradeMap`].

mod builder;
mod map;


pub use builder::{BuildError, BuildOptions, CharFailure, GradeBuilder, GradeReport, Progress};
pub use map::GradeMap;

use crate::reading::CharacterReadingData;

/// Remote kanji data, addressed by grade number or by character.
pub trait KanjiSource {
    /// Characters taught in `grade`, in the source's order.
    fn list_characters(&self, grade: u8) -> Result<Vec<String>, FetchError>;

    /// Raw reading data for one character.
    fn reading_data(&self, character: &str) -> Result<CharacterReadingData, FetchError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("request timed out")]
    Timeout,

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl FetchError {
    /// Transport failures, timeouts, throttling and server errors may clear
    /// up on a later attempt; other statuses and bad bodies will not.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(_) | Self::Timeout => true,
            Self::Status(code) => *code == 429 || *code >= 500,
            Self::Malformed(_) => false,
        }
    }
}
