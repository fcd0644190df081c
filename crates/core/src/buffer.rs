//! Sample buffers and the I/Q value type

use crate::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Index, Mul};

/// Sample buffer tagged with the rate it was sampled at.
///
/// Buffers are built once from finished data and only read afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleBuffer<T> {
    data: Vec<T>,
    sample_rate: f64,
}

impl<T> SampleBuffer<T> {
    /// Create a buffer from existing data
    pub fn from_data(data: Vec<T>, sample_rate: f64) -> Result<Self> {
        if !(sample_rate > 0.0) || !sample_rate.is_finite() {
            return Err(CoreError::InvalidSampleRate { rate: sample_rate });
        }
        
        Ok(Self { data, sample_rate })
    }
    
    /// Get the sample rate
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }
    
    /// Get the number of samples
    pub fn len(&self) -> usize {
        self.data.len()
    }
    
    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    
    /// Get a reference to the underlying data
    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Time in seconds of the sample at `index`
    pub fn time_of(&self, index: usize) -> f64 {
        index as f64 / self.sample_rate
    }

    /// Total duration covered by the buffer in seconds
    pub fn duration(&self) -> f64 {
        self.time_of(self.data.len())
    }
}

impl<T> Index<usize> for SampleBuffer<T> {
    type Output = T;
    
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

/// Complex number representation for IQ data
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// Build a point from a radius and an angle in degrees
    pub fn from_polar_degrees(magnitude: f64, degrees: f64) -> Self {
        let theta = degrees.to_radians();
        Self::new(magnitude * theta.cos(), magnitude * theta.sin())
    }
    
    pub fn magnitude(&self) -> f64 {
        (self.real * self.real + self.imag * self.imag).sqrt()
    }
    
    pub fn norm_sqr(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }
    
    /// Phase in radians, in (-π, π]
    pub fn phase(&self) -> f64 {
        self.imag.atan2(self.real)
    }

    /// Phase in degrees, normalized to [0, 360)
    pub fn phase_degrees(&self) -> f64 {
        let deg = self.phase().to_degrees();
        if deg < 0.0 { deg + 360.0 } else { deg }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Complex) -> f64 {
        Complex::new(self.real - other.real, self.imag - other.imag).magnitude()
    }

    /// True when both components are within `tol` of `other`
    pub fn approx_eq(&self, other: &Complex, tol: f64) -> bool {
        (self.real - other.real).abs() <= tol && (self.imag - other.imag).abs() <= tol
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Self::Output {
        Complex::new(self.real + rhs.real, self.imag + rhs.imag)
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;
    
    fn mul(self, rhs: f64) -> Self::Output {
        Complex::new(self.real * rhs, self.imag * rhs)
    }
}

/// Type alias for real sample buffers
pub type RealBuffer = SampleBuffer<f64>;

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_sample_buffer_creation() {
        let buffer = SampleBuffer::from_data(vec![0.0f64; 1000], 1000.0).unwrap();
        assert_eq!(buffer.len(), 1000);
        assert_eq!(buffer.sample_rate(), 1000.0);
        assert!((buffer.duration() - 1.0).abs() < 1e-12);
        assert!((buffer.time_of(250) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_sample_rate() {
        assert!(SampleBuffer::<f64>::from_data(vec![], -1.0).is_err());
        assert!(SampleBuffer::<f64>::from_data(vec![], 0.0).is_err());
        assert!(SampleBuffer::<f64>::from_data(vec![], f64::NAN).is_err());
    }

    #[test]
    fn test_complex_operations() {
        let c = Complex::new(3.0, 4.0);
        assert_eq!(c.magnitude(), 5.0);
        assert!((c.phase() - 0.9272952180016122).abs() < 1e-10);
        assert_eq!(c + Complex::new(1.0, -4.0), Complex::new(4.0, 0.0));
        assert_eq!(c * 2.0, Complex::new(6.0, 8.0));
    }

    #[test]
    fn test_polar_degrees() {
        let c = Complex::from_polar_degrees(1.0, 180.0);
        assert!(c.approx_eq(&Complex::new(-1.0, 0.0), 1e-12));
        assert!((c.phase_degrees() - 180.0).abs() < 1e-9);

        let d = Complex::from_polar_degrees(2.0, 315.0);
        assert!((d.magnitude() - 2.0).abs() < 1e-12);
        assert!((d.phase_degrees() - 315.0).abs() < 1e-9);
    }

    #[quickcheck]
    fn prop_polar_keeps_radius_and_phase(radius: u8, degrees: u16) -> bool {
        let radius = radius as f64 / 16.0 + 0.5;
        let degrees = (degrees % 360) as f64;
        let c = Complex::from_polar_degrees(radius, degrees);
        let phase_err = (c.phase_degrees() - degrees).abs();
        (c.magnitude() - radius).abs() < 1e-9 && (phase_err < 1e-6 || (phase_err - 360.0).abs() < 1e-6)
    }
}
