//! Transmission options and the bit-string-to-signal driver

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use iqmod_modem::prelude::*;

/// Options for one modulation run
#[derive(Debug, Clone, Default, Args)]
pub struct TxConfig {
    /// Bit strings to modulate; each is a separate transmission unless --concat
    #[arg(value_name = "BITS", required = true)]
    pub bits: Vec<String>,
    
    /// Join all bit strings into one transmission
    #[arg(long)]
    pub concat: bool,
    
    /// Sample rate in Hz
    #[arg(long)]
    pub sample_rate: Option<f64>,
    
    /// Symbol (baud) rate in Hz
    #[arg(long)]
    pub symbol_rate: Option<f64>,
    
    /// Samples per symbol; sets the sample rate from the symbol rate
    #[arg(short = 'n', long, conflicts_with = "sample_rate")]
    pub samples_per_symbol: Option<usize>,
    
    /// Carrier frequency in Hz for spectrum and WAV output
    #[arg(long)]
    pub carrier: Option<f64>,
    
    /// OOK reference amplitude
    #[arg(long)]
    pub amplitude: Option<f64>,
    
    /// Write symbols and samples as JSON
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,
    
    /// Write the carrier-modulated waveform as WAV
    #[arg(long, value_name = "PATH")]
    pub wav: Option<PathBuf>,
    
    /// Print power and spectrum summary
    #[arg(long)]
    pub spectrum: bool,
}

impl TxConfig {
    /// Apply command-line overrides on top of a base configuration
    pub fn modulation_config(&self, base: &ModulationConfig) -> Result<ModulationConfig> {
        let mut config = base.clone();
        
        if let Some(rate) = self.symbol_rate {
            config.symbol_rate = rate;
        }
        if let Some(rate) = self.sample_rate {
            config.sample_rate = rate;
        }
        if let Some(n) = self.samples_per_symbol {
            if n == 0 {
                anyhow::bail!("--samples-per-symbol must be at least 1");
            }
            config.sample_rate = config.symbol_rate * n as f64;
        }
        match self.carrier {
            Some(carrier) => config.carrier_frequency = carrier,
            None => {
                // An inherited carrier follows a lowered sample rate down
                let nyquist = config.sample_rate / 2.0;
                if config.sample_rate > 0.0 && config.carrier_frequency >= nyquist {
                    let carrier = config.sample_rate / 4.0;
                    info!(
                        "Carrier {} Hz is above Nyquist for {} Hz sampling, using {} Hz",
                        config.carrier_frequency, config.sample_rate, carrier
                    );
                    config.carrier_frequency = carrier;
                }
            }
        }
        if let Some(amplitude) = self.amplitude {
            config.amplitude = amplitude;
        }
        
        config.validate().context("Invalid modulation settings")?;
        Ok(config)
    }
}

/// Turns the configured bit strings into signals
pub struct Transmitter {
    config: TxConfig,
    modulator: Modulator,
}

impl Transmitter {
    /// Create a new transmitter with the given configuration
    pub fn new(scheme: Scheme, config: TxConfig, base: &ModulationConfig) -> Result<Self> {
        if config.bits.is_empty() {
            anyhow::bail!("At least one bit string must be given");
        }
        
        let mod_config = config.modulation_config(base)?;
        let modulator = Modulator::new(scheme, mod_config)?;
        
        Ok(Self { config, modulator })
    }
    
    pub fn modulator(&self) -> &Modulator {
        &self.modulator
    }
    
    /// Modulate every bit string.
    ///
    /// All inputs are validated before any signal is returned.
    pub fn transmit(&self) -> Result<Vec<Signal>> {
        let sequences = self
            .config
            .bits
            .iter()
            .map(|s| BitSequence::parse(s).with_context(|| format!("Rejected bit string \"{}\"", s)))
            .collect::<Result<Vec<_>>>()?;
        
        let sequences = if self.config.concat {
            vec![BitSequence::concat(&sequences)?]
        } else {
            sequences
        };
        
        let scheme = self.modulator.scheme();
        let signals = sequences
            .iter()
            .map(|bits| {
                self.modulator.modulate(bits).with_context(|| {
                    format!("Cannot modulate \"{}\" with {}", bits, scheme)
                })
            })
            .collect::<Result<Vec<_>>>()?;
        
        info!(
            "Modulated {} transmission(s) with {} ({} samples per symbol)",
            signals.len(),
            scheme,
            self.modulator.samples_per_symbol()
        );
        
        Ok(signals)
    }
}
