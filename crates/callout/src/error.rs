//! Error types for Callout operations.
//!
//! This module provides the main error type [`CalloutError`]. Layout itself
//! never fails; errors come from the surfaces around it: reading files,
//! parsing configuration and scenes, and exporting SVG.

use std::{io, ops::Range};

use thiserror::Error;

/// The main error type for Callout operations.
///
/// # Diagnostic Variants
///
/// The `Scene` variant keeps the scene source and the byte span of the
/// offending value, so callers can point at the problem.
#[derive(Debug, Error)]
pub enum CalloutError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{message}")]
    Scene {
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for CalloutError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl CalloutError {
    /// Create a new `Scene` error from a TOML error and the scene source.
    pub fn new_scene_error(err: toml::de::Error, src: impl Into<String>) -> Self {
        Self::Scene {
            message: err.message().trim_end().to_string(),
            span: err.span(),
            src: src.into(),
        }
    }
}
