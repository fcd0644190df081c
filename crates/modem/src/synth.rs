//! Zero-order-hold waveform synthesis and carrier up-conversion

use crate::common::ModulationConfig;
use crate::symbol::Symbol;
use crate::{ModemError, Result};
use iqmod_core::buffer::RealBuffer;
use std::f64::consts::PI;
use tracing::trace;

/// Baseband samples produced from one symbol list
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    pub samples_per_symbol: usize,
    pub in_phase: RealBuffer,
    /// Present only for complex-valued symbols
    pub quadrature: Option<RealBuffer>,
}

/// Expands symbols into rectangular pulses of a fixed sample count
#[derive(Debug, Clone)]
pub struct WaveformSynthesizer {
    samples_per_symbol: usize,
    sample_rate: f64,
}

impl WaveformSynthesizer {
    /// Create a new synthesizer
    pub fn new(config: &ModulationConfig) -> Result<Self> {
        config.validate()?;
        
        Ok(Self {
            samples_per_symbol: config.samples_per_symbol(),
            sample_rate: config.sample_rate,
        })
    }
    
    pub fn samples_per_symbol(&self) -> usize {
        self.samples_per_symbol
    }
    
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }
    
    /// Hold each symbol's value for `samples_per_symbol` samples.
    ///
    /// Sample `n` belongs to symbol `n / samples_per_symbol`. Symbols must
    /// all be real or all be complex.
    pub fn synthesize(&self, symbols: &[Symbol]) -> Result<Waveform> {
        let Some(first) = symbols.first() else {
            return Err(ModemError::InvalidInput {
                msg: "cannot synthesize an empty symbol sequence".to_string(),
            });
        };
        
        let complex = first.is_complex();
        if symbols.iter().any(|s| s.is_complex() != complex) {
            return Err(ModemError::InvalidInput {
                msg: "symbol sequence mixes real amplitudes and I/Q points".to_string(),
            });
        }
        
        let total = symbols.len() * self.samples_per_symbol;
        let mut in_phase = Vec::with_capacity(total);
        let mut quadrature = Vec::with_capacity(if complex { total } else { 0 });
        
        for symbol in symbols {
            let i = symbol.in_phase();
            in_phase.extend(std::iter::repeat(i).take(self.samples_per_symbol));
            if let Some(q) = symbol.quadrature() {
                quadrature.extend(std::iter::repeat(q).take(self.samples_per_symbol));
            }
        }
        
        trace!(symbols = symbols.len(), samples = total, complex, "synthesized waveform");
        
        Ok(Waveform {
            samples_per_symbol: self.samples_per_symbol,
            in_phase: RealBuffer::from_data(in_phase, self.sample_rate)?,
            quadrature: if complex {
                Some(RealBuffer::from_data(quadrature, self.sample_rate)?)
            } else {
                None
            },
        })
    }
}

/// Mix baseband I/Q onto a real carrier.
///
/// `s[n] = I[n]·cos(2π f t) − Q[n]·sin(2π f t)` with `t = n / sample_rate`,
/// which equals `A·cos(2π f t + φ)` for a symbol of radius `A` and phase `φ`.
pub fn upconvert(
    in_phase: &RealBuffer,
    quadrature: Option<&RealBuffer>,
    carrier_frequency: f64,
) -> Result<RealBuffer> {
    let sample_rate = in_phase.sample_rate();
    if !(carrier_frequency >= 0.0) || carrier_frequency >= sample_rate / 2.0 {
        return Err(ModemError::InvalidParameters {
            msg: format!(
                "Carrier frequency {} Hz must be in [0, {}) for sample rate {} Hz",
                carrier_frequency,
                sample_rate / 2.0,
                sample_rate
            ),
        });
    }
    
    if let Some(q) = quadrature {
        if q.len() != in_phase.len() {
            return Err(iqmod_core::CoreError::BufferSizeMismatch {
                expected: in_phase.len(),
                actual: q.len(),
            }
            .into());
        }
    }
    
    let omega = 2.0 * PI * carrier_frequency / sample_rate;
    let samples = in_phase
        .iter()
        .enumerate()
        .map(|(n, &i)| {
            let phase = omega * n as f64;
            let q = quadrature.map_or(0.0, |q| q[n]);
            i * phase.cos() - q * phase.sin()
        })
        .collect();
    
    Ok(RealBuffer::from_data(samples, sample_rate)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use iqmod_core::buffer::Complex;

    fn synth(n: usize) -> WaveformSynthesizer {
        WaveformSynthesizer::new(&ModulationConfig::with_samples_per_symbol(n).unwrap()).unwrap()
    }

    #[test]
    fn test_zero_order_hold_real() {
        let waveform = synth(3)
            .synthesize(&[Symbol::Amplitude(1.0), Symbol::Amplitude(0.0)])
            .unwrap();
        assert_eq!(waveform.in_phase.data(), &[1.0, 1.0, 1.0, 0.0, 0.0, 0.0]);
        assert!(waveform.quadrature.is_none());
        assert_eq!(waveform.samples_per_symbol, 3);
    }

    #[test]
    fn test_zero_order_hold_complex() {
        let symbols = [
            Symbol::Iq(Complex::new(1.0, -1.0)),
            Symbol::Iq(Complex::new(-3.0, 3.0)),
        ];
        let waveform = synth(2).synthesize(&symbols).unwrap();
        assert_eq!(waveform.in_phase.data(), &[1.0, 1.0, -3.0, -3.0]);
        assert_eq!(waveform.quadrature.unwrap().data(), &[-1.0, -1.0, 3.0, 3.0]);
    }

    #[test]
    fn test_sample_count() {
        let symbols = vec![Symbol::Amplitude(1.0); 7];
        let waveform = synth(100).synthesize(&symbols).unwrap();
        assert_eq!(waveform.in_phase.len(), 700);
    }

    #[test]
    fn test_empty_symbols_rejected() {
        assert!(matches!(
            synth(4).synthesize(&[]).unwrap_err(),
            ModemError::InvalidInput { .. }
        ));
    }

    #[test]
    fn test_mixed_symbols_rejected() {
        let symbols = [Symbol::Amplitude(1.0), Symbol::Iq(Complex::new(1.0, 0.0))];
        assert!(synth(4).synthesize(&symbols).is_err());
    }

    #[test]
    fn test_upconvert_matches_polar_form() {
        let config = ModulationConfig::default();
        let synthesizer = WaveformSynthesizer::new(&config).unwrap();
        let symbol = Symbol::polar(2.0, 135.0);
        let waveform = synthesizer.synthesize(&[symbol]).unwrap();
        
        let passband = upconvert(
            &waveform.in_phase,
            waveform.quadrature.as_ref(),
            config.carrier_frequency,
        )
        .unwrap();
        
        assert_eq!(passband.len(), 100);
        for (n, &s) in passband.iter().enumerate() {
            let t = n as f64 / config.sample_rate;
            let expected = 2.0 * (2.0 * PI * config.carrier_frequency * t + 135f64.to_radians()).cos();
            assert!((s - expected).abs() < 1e-9, "sample {}: {} != {}", n, s, expected);
        }
    }

    #[test]
    fn test_upconvert_rejects_bad_carrier() {
        let waveform = synth(4).synthesize(&[Symbol::Amplitude(1.0)]).unwrap();
        // sample rate is 4 Hz here, so Nyquist is 2 Hz
        assert!(upconvert(&waveform.in_phase, None, 2.0).is_err());
        assert!(upconvert(&waveform.in_phase, None, -1.0).is_err());
        assert!(upconvert(&waveform.in_phase, None, 1.0).is_ok());
    }
}
