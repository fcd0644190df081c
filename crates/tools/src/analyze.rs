//! Signal statistics and spectrum of the carrier-modulated waveform

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use iqmod_core::prelude::*;
use iqmod_modem::signal::Signal;

/// Analysis configuration
#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    /// Carrier used to up-convert before taking the spectrum
    pub carrier_frequency: f64,
    /// Compute the power spectrum
    pub spectral: bool,
}

/// Signal analyzer
pub struct SignalAnalyzer {
    config: AnalyzeConfig,
}

impl SignalAnalyzer {
    pub fn new(config: AnalyzeConfig) -> Self {
        Self { config }
    }
    
    /// Analyze one signal
    pub fn analyze(&self, signal: &Signal) -> Result<AnalysisResult> {
        let mut result = AnalysisResult {
            sample_count: signal.len(),
            power: calculate_power(signal),
            peak_amplitude: calculate_peak_amplitude(signal),
            ..AnalysisResult::default()
        };
        
        if self.config.spectral {
            let passband = signal.passband(self.config.carrier_frequency)?;
            let fft_config = FftConfig::covering(passband.len(), passband.sample_rate())?;
            let processor = FftProcessor::new(fft_config);
            let spectrum = processor.power_spectrum(passband.data())?;
            
            result.dominant_frequency = spectrum
                .iter()
                .enumerate()
                .max_by(|a, b| a.1.total_cmp(b.1))
                .filter(|&(_, &p)| p > 0.0)
                .map(|(bin, _)| processor.config().bin_to_frequency(bin));
            result.frequency_resolution = Some(processor.config().frequency_resolution());
            result.spectrum = Some(spectrum);
        }
        
        debug!(
            samples = result.sample_count,
            power = result.power,
            peak = result.peak_amplitude,
            "analysis complete"
        );
        
        Ok(result)
    }
}

/// Mean of I² + Q² over all samples
fn calculate_power(signal: &Signal) -> f64 {
    if signal.is_empty() {
        return 0.0;
    }
    
    let sum: f64 = signal
        .samples()
        .map(|s| Complex::new(s.in_phase, s.quadrature.unwrap_or(0.0)).norm_sqr())
        .sum();
    
    sum / signal.len() as f64
}

fn calculate_peak_amplitude(signal: &Signal) -> f64 {
    signal
        .symbols()
        .iter()
        .map(|s| s.magnitude())
        .fold(0.0, f64::max)
}

/// Analysis results
#[derive(Debug, Default, Serialize)]
pub struct AnalysisResult {
    pub sample_count: usize,
    pub power: f64,
    pub peak_amplitude: f64,
    pub dominant_frequency: Option<f64>,
    pub frequency_resolution: Option<f64>,
    pub spectrum: Option<Vec<f64>>,
}
