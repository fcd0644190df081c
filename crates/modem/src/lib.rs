//! iqmod Modem - bit-to-symbol modulation primitives
//!
//! This crate turns short bit strings into constellation symbols and
//! zero-order-hold baseband waveforms for on-off keying, PSK and QAM
//! schemes. Rendering and file output live in `iqmod-tools`.

pub mod bits;
pub mod symbol;
pub mod scheme;
pub mod registry;
pub mod common;
pub mod synth;
pub mod signal;
pub mod modulator;
pub mod error;

pub use error::{ModemError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        bits::{BitSequence, SymbolGroup},
        symbol::Symbol,
        scheme::Scheme,
        registry::{SchemeRegistry, SchemeInfo},
        common::ModulationConfig,
        synth::{WaveformSynthesizer, Waveform},
        signal::{Signal, Sample},
        modulator::Modulator,
        error::{ModemError, Result},
    };
}
