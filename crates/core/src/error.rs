//! Error types for iqmod Core

use thiserror::Error;

/// Core error types
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid sample rate: {rate}")]
    InvalidSampleRate { rate: f64 },
    
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },
    
    #[error("FFT error: {msg}")]
    FftError { msg: String },
}

/// Result type for iqmod Core operations
pub type Result<T> = std::result::Result<T, CoreError>;
