//! Error types for the rendering edge of the designer crate.
//!
//! Geometry operations are total and never fail; only producing an output
//! document can.

use std::io;
use thiserror::Error;

/// Errors that can occur while rendering or writing a document.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The canvas size is not a positive finite number.
    #[error("Invalid canvas size {width} x {height}")]
    InvalidCanvas { width: f64, height: f64 },

    /// A style value cannot be written into the document stylesheet.
    #[error("Invalid style {field}: {value:?}")]
    InvalidStyle { field: &'static str, value: String },

    /// I/O error while writing the output file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;
