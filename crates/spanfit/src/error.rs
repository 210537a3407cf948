//! Error types for spanfit operations.
//!
//! This module provides the main error type [`SpanfitError`] which wraps
//! the error conditions that can occur while reading, planning and
//! rendering a layout.

use std::{io, ops::Range};

use thiserror::Error;

use spanfit_core::error::PlacementError;

/// The main error type for spanfit operations.
///
/// # Diagnostic Variants
///
/// The `Input` variant keeps the layout source and, when known, the byte
/// range the problem was found at, so that callers can show a labelled
/// snippet.
#[derive(Debug, Error)]
pub enum SpanfitError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{message}")]
    Input {
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },

    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for SpanfitError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl SpanfitError {
    /// Create a new `Input` error with the associated source text.
    pub fn new_input_error(
        message: impl Into<String>,
        span: Option<Range<usize>>,
        src: impl Into<String>,
    ) -> Self {
        Self::Input {
            message: message.into(),
            span,
            src: src.into(),
        }
    }
}
