use serde::Serialize;
use std::path::{Path, PathBuf};

/// Footprint and acquisition time recovered for one preview image
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    /// Footprint corners, reformatted as `"lon, lat; lon, lat; "`
    pub coordinates: String,
    /// Acquisition start, formatted as `YYYY-MM-DD HH:MM:SS`
    pub start_time: String,
}

impl MatchRecord {
    pub fn new(coordinates: impl Into<String>, start_time: impl Into<String>) -> Self {
        Self {
            coordinates: coordinates.into(),
            start_time: start_time.into(),
        }
    }
}

/// Error types for gallery generation
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("XML parsing error: {0}")]
    XmlParsing(String),

    #[error("Element <{element}> not found or empty in {path}")]
    MissingElement { element: String, path: PathBuf },

    #[error("Invalid start time '{value}': {source}")]
    TimeFormat {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl ViewError {
    /// Wrap an I/O error with the path it happened on
    pub fn io<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        ViewError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Result type for gallery operations
pub type ViewResult<T> = Result<T, ViewError>;
