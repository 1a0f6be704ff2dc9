//! Error types for SVG import and export.

use std::io;
use thiserror::Error;

/// Errors raised while reading or writing SVG documents.
#[derive(Error, Debug)]
pub enum SvgError {
    /// The document has no `<svg>` root element.
    #[error("Invalid SVG: missing <svg> element")]
    MissingRoot,

    /// A scanning pattern failed to compile.
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// I/O error while reading or writing a file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for SVG operations.
pub type Result<T> = std::result::Result<T, SvgError>;
