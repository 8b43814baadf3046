// src/tables/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading a recognizer document into a table.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Failed to read recognizer output {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Recognizer output is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Row {row} has {found} cells but the widest row has {expected}.")]
    RaggedRows {
        row: usize,
        found: usize,
        expected: usize,
    },
}

/// Failures while delivering exported text to a file.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Table '{0}' not found.")]
    TableNotFound(String),
    #[error("Failed to write export to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
