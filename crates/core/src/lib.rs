//! iqmod Core - I/Q sample types and DSP helpers
//!
//! This crate provides the complex sample type, sample buffers and the
//! FFT wrapper shared by the iqmod modem and tools crates.

pub mod buffer;
pub mod fft;
pub mod error;

pub use error::{CoreError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        buffer::{SampleBuffer, RealBuffer, Complex},
        fft::{FftProcessor, FftConfig},
        error::{CoreError, Result},
    };
}
