//! Exporters that turn laid-out scenes into output documents.

pub mod svg;

use std::io;

use thiserror::Error;

/// Errors raised while exporting.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Rendered SVG is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
