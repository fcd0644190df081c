//! FFT wrapper used for spectrum inspection of synthesized waveforms

use crate::{buffer::Complex, CoreError, Result};
use rustfft::{FftPlanner, num_complex::Complex64};
use std::sync::Arc;
use tracing::{debug, trace};

/// FFT configuration
#[derive(Debug, Clone)]
pub struct FftConfig {
    pub size: usize,
    pub sample_rate: f64,
}

impl FftConfig {
    pub fn new(size: usize, sample_rate: f64) -> Result<Self> {
        if size < 2 || !size.is_power_of_two() {
            return Err(CoreError::FftError {
                msg: format!("FFT size must be a power of 2 (>= 2), got {}", size),
            });
        }
        
        if !(sample_rate > 0.0) {
            return Err(CoreError::InvalidSampleRate { rate: sample_rate });
        }
        
        Ok(Self { size, sample_rate })
    }

    /// Smallest power-of-two configuration that holds `len` samples
    pub fn covering(len: usize, sample_rate: f64) -> Result<Self> {
        Self::new(len.max(2).next_power_of_two(), sample_rate)
    }
    
    /// Get frequency resolution (Hz per bin)
    pub fn frequency_resolution(&self) -> f64 {
        self.sample_rate / self.size as f64
    }
    
    /// Convert bin index to frequency in Hz
    pub fn bin_to_frequency(&self, bin: usize) -> f64 {
        bin as f64 * self.frequency_resolution()
    }
}

/// Forward FFT processor
pub struct FftProcessor {
    config: FftConfig,
    fft: Arc<dyn rustfft::Fft<f64>>,
}

impl FftProcessor {
    pub fn new(config: FftConfig) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(config.size);
        debug!(size = config.size, sample_rate = config.sample_rate, "planned forward FFT");
        
        Self { config, fft }
    }
    
    pub fn config(&self) -> &FftConfig {
        &self.config
    }
    
    /// Perform forward FFT
    pub fn fft(&self, input: &[Complex], output: &mut [Complex]) -> Result<()> {
        if input.len() != self.config.size || output.len() != self.config.size {
            return Err(CoreError::BufferSizeMismatch {
                expected: self.config.size,
                actual: if input.len() != self.config.size { input.len() } else { output.len() },
            });
        }
        
        let mut buffer: Vec<Complex64> = input.iter()
            .map(|c| Complex64::new(c.real, c.imag))
            .collect();
        
        self.fft.process(&mut buffer);
        
        for (out, c) in output.iter_mut().zip(buffer.iter()) {
            *out = Complex::new(c.re, c.im);
        }
        
        Ok(())
    }
    
    /// Single-sided power spectrum of a real signal.
    ///
    /// The input is Hann-windowed and zero-padded to the FFT size; longer
    /// inputs are rejected. Returns `size / 2 + 1` bins from DC to Nyquist.
    pub fn power_spectrum(&self, input: &[f64]) -> Result<Vec<f64>> {
        let size = self.config.size;
        if input.len() > size {
            return Err(CoreError::BufferSizeMismatch {
                expected: size,
                actual: input.len(),
            });
        }

        let mut windowed = input.to_vec();
        window::hann(&mut windowed);

        let mut fft_input = vec![Complex::default(); size];
        for (slot, &x) in fft_input.iter_mut().zip(windowed.iter()) {
            *slot = Complex::new(x, 0.0);
        }

        let mut fft_output = vec![Complex::default(); size];
        self.fft(&fft_input, &mut fft_output)?;

        let scale = 1.0 / (size as f64 * size as f64);
        let spectrum = fft_output[..=size / 2]
            .iter()
            .enumerate()
            .map(|(i, c)| {
                // Fold negative frequencies onto the positive half
                let p = c.norm_sqr() * scale;
                if i > 0 && i < size / 2 { p * 2.0 } else { p }
            })
            .collect();

        trace!(samples = input.len(), bins = size / 2 + 1, "power spectrum computed");
        Ok(spectrum)
    }
}

/// Windowing functions for FFT processing
pub mod window {
    /// Apply Hann window to signal
    pub fn hann(signal: &mut [f64]) {
        let n = signal.len();
        if n < 2 {
            return;
        }
        for (i, sample) in signal.iter_mut().enumerate() {
            let window_val = 0.5 * (1.0 - (2.0 * std::f64::consts::PI * i as f64 / (n - 1) as f64).cos());
            *sample *= window_val;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fft_config_creation() {
        let config = FftConfig::new(1024, 48000.0).unwrap();
        assert_eq!(config.size, 1024);
        assert!((config.frequency_resolution() - 46.875).abs() < 1e-10);
        assert!((config.bin_to_frequency(2) - 93.75).abs() < 1e-10);
    }

    #[test]
    fn test_fft_config_invalid_size() {
        assert!(FftConfig::new(1000, 48000.0).is_err());
        assert!(FftConfig::new(0, 48000.0).is_err());
        assert!(FftConfig::new(64, 0.0).is_err());
    }

    #[test]
    fn test_covering_rounds_up() {
        assert_eq!(FftConfig::covering(1000, 1000.0).unwrap().size, 1024);
        assert_eq!(FftConfig::covering(0, 1000.0).unwrap().size, 2);
    }

    #[test]
    fn test_impulse_is_flat() {
        let processor = FftProcessor::new(FftConfig::new(8, 1000.0).unwrap());
        let mut input = vec![Complex::default(); 8];
        input[0] = Complex::new(1.0, 0.0);
        let mut output = vec![Complex::default(); 8];
        processor.fft(&input, &mut output).unwrap();
        for bin in &output {
            assert!(bin.approx_eq(&Complex::new(1.0, 0.0), 1e-12));
        }
    }

    #[test]
    fn test_power_spectrum_peak_at_tone() {
        let sample_rate = 1024.0;
        let processor = FftProcessor::new(FftConfig::new(1024, sample_rate).unwrap());
        let tone: Vec<f64> = (0..1024)
            .map(|n| (2.0 * std::f64::consts::PI * 64.0 * n as f64 / sample_rate).cos())
            .collect();

        let spectrum = processor.power_spectrum(&tone).unwrap();
        assert_eq!(spectrum.len(), 513);

        let peak = spectrum
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(peak, 64);
    }

    #[test]
    fn test_power_spectrum_rejects_long_input() {
        let processor = FftProcessor::new(FftConfig::new(8, 1000.0).unwrap());
        assert!(processor.power_spectrum(&[0.0; 9]).is_err());
    }
}
