//! Error types for the criteria conversion.
//!
//! - [`SheetError`] - reading and decoding the tabular input
//! - [`CriteriaError`] - top-level failures that end the process
//!
//! Only two things can go wrong: the command line is unusable, or the input
//! file cannot be read. Everything below that (missing columns, null cells,
//! rows without a project) is absorbed by the row transformer.

use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// Sheet Errors
// =============================================================================

/// Errors while loading a spreadsheet or CSV file.
#[derive(Debug, Error)]
pub enum SheetError {
    /// Failed to read file.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The workbook could not be opened or a worksheet could not be read.
    #[error("{0}")]
    Workbook(#[from] calamine::Error),

    /// The workbook has no worksheet at all.
    #[error("No worksheet found in workbook")]
    NoWorksheet,

    /// The requested worksheet does not exist.
    #[error("Worksheet not found: {name} (available: {available})")]
    SheetNotFound { name: String, available: String },

    /// Invalid CSV content.
    #[error("Invalid CSV format: {0}")]
    Csv(#[from] csv::Error),

    /// Bytes could not be decoded with the detected encoding.
    #[error("Failed to decode content as {0}")]
    Encoding(String),
}

// =============================================================================
// Top-level Errors
// =============================================================================

/// Fatal errors of a `parse-criteria` run.
#[derive(Debug, Error)]
pub enum CriteriaError {
    /// The command line could not be used: no input path (`None`) or a
    /// rejected option with clap's reason.
    #[error("{}", .0.as_deref().unwrap_or("missing input file"))]
    Usage(Option<String>),

    /// The input file could not be opened or parsed.
    #[error("Failed to read Excel file: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: SheetError,
    },

    /// Criteria could not be written to the output destination.
    #[error("Failed to write criteria: {0}")]
    Write(#[from] std::io::Error),
}

impl CriteriaError {
    /// Wrap a [`SheetError`] with the path that failed.
    pub fn read(path: impl Into<PathBuf>, source: SheetError) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this error.
    ///
    /// Usage errors exit with 1, every I/O failure exits with 2.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => 1,
            Self::Read { .. } | Self::Write(_) => 2,
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for sheet loading.
pub type SheetResult<T> = Result<T, SheetError>;

/// Result type for a whole run.
pub type CriteriaResult<T> = Result<T, CriteriaError>;
