use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pxtraits operations
#[derive(Error, Diagnostic, Debug)]
pub enum PxError {
    #[error("IO error: {0}")]
    #[diagnostic(code(pxtraits::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pxtraits::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Serialization error: {0}")]
    #[diagnostic(code(pxtraits::serialize))]
    Json(#[from] serde_json::Error),

    /// Malformed workspace document, layer payload, or layer name.
    #[error("Input error: {message}")]
    #[diagnostic(code(pxtraits::input))]
    Input {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// Palette or coordinate space exceeded.
    #[error("Capacity error: {message}")]
    #[diagnostic(code(pxtraits::capacity))]
    Capacity {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// A pixel colour missing from the palette built over the same data.
    #[error("Consistency error: {message}")]
    #[diagnostic(code(pxtraits::consistency))]
    Consistency { message: String },
}

pub type Result<T> = std::result::Result<T, PxError>;
