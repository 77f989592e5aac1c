use thiserror::Error;

/// Photo booth errors.
#[derive(Debug, Error)]
pub enum BoothError {
    #[error("video source not ready")]
    SourceNotReady,

    #[error("invalid frame buffer: {0}")]
    InvalidFrame(String),

    #[error("image encoding failed: {0}")]
    Encode(String),

    #[error("image decoding failed: {0}")]
    Decode(String),

    #[error("sequencer is not idle")]
    NotIdle,

    #[error("export target missing: {0}")]
    ExportTarget(String),

    #[error("export write failed: {0}")]
    ExportWrite(String),
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, BoothError>;
