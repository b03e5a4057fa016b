//! Error type for the boundary of the engine.
//!
//! Generators never fail: an unsatisfiable slot yields fewer questions and an
//! empty tier yields an empty list. Errors only arise when raw input (numbers,
//! strings, TOML) is turned into typed configuration, or when a catalog check
//! finds a broken entry.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorksheetError {
    #[error("difficulty must be 1, 2 or 3 (got {0})")]
    InvalidDifficulty(u8),

    #[error("unknown language tag: {0:?}")]
    UnknownLanguage(String),

    #[error("invalid worksheet config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("cannot read worksheet config {}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog integrity: {0}")]
    CatalogIntegrity(String),
}

pub type Result<T> = std::result::Result<T, WorksheetError>;
