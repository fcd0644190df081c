//! Shared modulation configuration

use crate::{ModemError, Result};
use serde::{Deserialize, Serialize};

/// Timing and amplitude parameters for one modulation run.
///
/// Defaults reproduce the demonstration setup: 10 baud, a 50 Hz carrier
/// and 1 kHz sampling, i.e. 100 samples per symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModulationConfig {
    pub sample_rate: f64,
    pub symbol_rate: f64,
    pub carrier_frequency: f64,
    /// Reference amplitude for a keyed-on OOK symbol
    pub amplitude: f64,
}

impl Default for ModulationConfig {
    fn default() -> Self {
        Self {
            sample_rate: 1000.0,
            symbol_rate: 10.0,
            carrier_frequency: 50.0,
            amplitude: 1.0,
        }
    }
}

impl ModulationConfig {
    /// Create a new modulation configuration
    pub fn new(
        sample_rate: f64,
        symbol_rate: f64,
        carrier_frequency: f64,
    ) -> Result<Self> {
        let config = Self {
            sample_rate,
            symbol_rate,
            carrier_frequency,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }
    
    /// Configuration with exactly `n` samples per symbol at one symbol per second
    pub fn with_samples_per_symbol(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(ModemError::InvalidParameters {
                msg: "samples per symbol must be at least 1".to_string(),
            });
        }
        
        Ok(Self {
            sample_rate: n as f64,
            symbol_rate: 1.0,
            carrier_frequency: 0.0,
            amplitude: 1.0,
        })
    }
    
    /// Set the OOK reference amplitude
    pub fn with_amplitude(mut self, amplitude: f64) -> Result<Self> {
        self.amplitude = amplitude;
        self.validate()?;
        Ok(self)
    }
    
    /// Check every field; also used after deserializing a config file
    pub fn validate(&self) -> Result<()> {
        if !(self.sample_rate > 0.0) || !self.sample_rate.is_finite() {
            return Err(ModemError::InvalidParameters {
                msg: format!("Invalid sample rate: {}", self.sample_rate),
            });
        }
        
        if !(self.symbol_rate > 0.0) || self.symbol_rate > self.sample_rate {
            return Err(ModemError::InvalidParameters {
                msg: format!(
                    "Invalid symbol rate: {} (must be > 0 and <= sample rate {})",
                    self.symbol_rate, self.sample_rate
                ),
            });
        }
        
        let ratio = self.sample_rate / self.symbol_rate;
        if (ratio - ratio.round()).abs() > 1e-9 {
            return Err(ModemError::InvalidParameters {
                msg: format!(
                    "Sample rate {} is not an integer multiple of symbol rate {}",
                    self.sample_rate, self.symbol_rate
                ),
            });
        }
        
        if !(self.carrier_frequency >= 0.0) || self.carrier_frequency >= self.sample_rate / 2.0 {
            return Err(ModemError::InvalidParameters {
                msg: format!(
                    "Invalid carrier frequency: {} (must be in [0, {}))",
                    self.carrier_frequency,
                    self.sample_rate / 2.0
                ),
            });
        }
        
        if !(self.amplitude > 0.0) || !self.amplitude.is_finite() {
            return Err(ModemError::InvalidParameters {
                msg: format!("Invalid amplitude: {}", self.amplitude),
            });
        }
        
        Ok(())
    }
    
    /// Get samples per symbol
    pub fn samples_per_symbol(&self) -> usize {
        (self.sample_rate / self.symbol_rate).round() as usize
    }
    
    /// Duration of one symbol in seconds
    pub fn symbol_duration(&self) -> f64 {
        1.0 / self.symbol_rate
    }
}
