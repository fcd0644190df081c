//! Error types for iqmod Modem

use thiserror::Error;

/// Modem error types
#[derive(Error, Debug)]
pub enum ModemError {
    #[error("Invalid input: {msg}")]
    InvalidInput { msg: String },
    
    #[error("Unknown modulation scheme '{name}' (known: {known})", known = crate::scheme::Scheme::known_names())]
    UnknownScheme { name: String },
    
    #[error("Invalid group length for {scheme}: expected {expected} bits, got {actual}")]
    InvalidGroupLength { scheme: String, expected: usize, actual: usize },
    
    #[error("Invalid modulation parameters: {msg}")]
    InvalidParameters { msg: String },
    
    #[error("Core error: {0}")]
    Core(#[from] iqmod_core::CoreError),
}

/// Result type for iqmod Modem operations
pub type Result<T> = std::result::Result<T, ModemError>;
