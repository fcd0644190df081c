//! Immutable container for one synthesized transmission

use crate::bits::SymbolGroup;
use crate::scheme::Scheme;
use crate::symbol::Symbol;
use crate::synth::{self, Waveform};
use crate::{ModemError, Result};
use iqmod_core::buffer::RealBuffer;
use serde::Serialize;

/// One time-domain sample of a signal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub index: usize,
    /// Seconds since the start of the transmission
    pub time: f64,
    pub symbol_index: usize,
    pub in_phase: f64,
    pub quadrature: Option<f64>,
}

/// Symbols and baseband samples of a complete transmission.
///
/// Built once by [`crate::modulator::Modulator`] and read-only afterwards;
/// renderers only ever borrow it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Signal {
    scheme: Scheme,
    groups: Vec<SymbolGroup>,
    symbols: Vec<Symbol>,
    samples_per_symbol: usize,
    in_phase: RealBuffer,
    quadrature: Option<RealBuffer>,
}

impl Signal {
    pub(crate) fn new(
        scheme: Scheme,
        groups: Vec<SymbolGroup>,
        symbols: Vec<Symbol>,
        waveform: Waveform,
    ) -> Result<Self> {
        let expected = symbols.len() * waveform.samples_per_symbol;
        let quadrature_len = waveform.quadrature.as_ref().map_or(expected, |q| q.len());
        
        if groups.len() != symbols.len()
            || waveform.in_phase.len() != expected
            || quadrature_len != expected
            || waveform.quadrature.is_some() != scheme.is_complex()
        {
            return Err(ModemError::InvalidParameters {
                msg: format!(
                    "inconsistent signal: {} groups, {} symbols, {} samples at {} per symbol",
                    groups.len(),
                    symbols.len(),
                    waveform.in_phase.len(),
                    waveform.samples_per_symbol
                ),
            });
        }
        
        Ok(Self {
            scheme,
            groups,
            symbols,
            samples_per_symbol: waveform.samples_per_symbol,
            in_phase: waveform.in_phase,
            quadrature: waveform.quadrature,
        })
    }
    
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }
    
    /// Bit groups in transmission order, parallel to [`Signal::symbols`]
    pub fn groups(&self) -> &[SymbolGroup] {
        &self.groups
    }
    
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
    
    pub fn samples_per_symbol(&self) -> usize {
        self.samples_per_symbol
    }
    
    pub fn sample_rate(&self) -> f64 {
        self.in_phase.sample_rate()
    }
    
    /// Number of samples
    pub fn len(&self) -> usize {
        self.in_phase.len()
    }
    
    pub fn is_empty(&self) -> bool {
        self.in_phase.is_empty()
    }
    
    pub fn duration(&self) -> f64 {
        self.in_phase.duration()
    }
    
    pub fn in_phase(&self) -> &[f64] {
        self.in_phase.data()
    }
    
    pub fn quadrature(&self) -> Option<&[f64]> {
        self.quadrature.as_ref().map(|q| q.data())
    }
    
    /// (I, Q) coordinates of each transmitted symbol
    pub fn symbol_points(&self) -> Vec<(f64, f64)> {
        self.symbols
            .iter()
            .map(|s| {
                let p = s.point();
                (p.real, p.imag)
            })
            .collect()
    }
    
    /// Sample times in seconds
    pub fn time_axis(&self) -> Vec<f64> {
        (0..self.len()).map(|n| self.in_phase.time_of(n)).collect()
    }
    
    /// Samples in time order
    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        (0..self.len()).map(move |n| Sample {
            index: n,
            time: self.in_phase.time_of(n),
            symbol_index: n / self.samples_per_symbol,
            in_phase: self.in_phase[n],
            quadrature: self.quadrature.as_ref().map(|q| q[n]),
        })
    }
    
    /// Real waveform on a carrier of `carrier_frequency` Hz
    pub fn passband(&self, carrier_frequency: f64) -> Result<RealBuffer> {
        synth::upconvert(&self.in_phase, self.quadrature.as_ref(), carrier_frequency)
    }
}
