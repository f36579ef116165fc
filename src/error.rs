//! Error types for the hair asset converter.
//!
//! Every failure is fatal for the current run; nothing here is retried.

use thiserror::Error;

/// Result type alias using [`ConvertError`].
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that can occur while converting or reading a hair asset.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Open, read, or write failure on one of the files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input ended before all strand records were read.
    #[error("input ended early: expected {lines_expected} lines, read {lines_read}")]
    TruncatedInput {
        /// Lines the strand layout requires.
        lines_expected: usize,
        /// Lines actually present.
        lines_read: usize,
    },

    /// A vertex line did not yield three numeric fields.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number in the input file.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// The root points cannot be triangulated.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// The conversion parameters are inconsistent.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A binary asset could not be decoded.
    #[error("malformed hair asset: {0}")]
    Format(String),
}

impl ConvertError {
    pub(crate) fn parse<M: Into<String>>(line: usize, message: M) -> Self {
        ConvertError::Parse {
            line,
            message: message.into(),
        }
    }
}
