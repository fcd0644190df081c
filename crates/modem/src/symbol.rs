//! Constellation symbols

use iqmod_core::buffer::Complex;
use serde::Serialize;

/// One mapped symbol.
///
/// On-off keying produces a bare real amplitude; every other scheme
/// produces an in-phase/quadrature point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbol {
    Amplitude(f64),
    Iq(Complex),
}

impl Symbol {
    /// Point on the unit-scaled circle at `degrees`, times `radius`
    pub fn polar(radius: f64, degrees: f64) -> Self {
        Symbol::Iq(Complex::from_polar_degrees(radius, degrees))
    }
    
    pub fn is_complex(&self) -> bool {
        matches!(self, Symbol::Iq(_))
    }
    
    pub fn in_phase(&self) -> f64 {
        match self {
            Symbol::Amplitude(a) => *a,
            Symbol::Iq(c) => c.real,
        }
    }
    
    /// Quadrature component; `None` for real-only symbols
    pub fn quadrature(&self) -> Option<f64> {
        match self {
            Symbol::Amplitude(_) => None,
            Symbol::Iq(c) => Some(c.imag),
        }
    }
    
    /// Position in the complex plane (real symbols sit on the I axis)
    pub fn point(&self) -> Complex {
        match self {
            Symbol::Amplitude(a) => Complex::new(*a, 0.0),
            Symbol::Iq(c) => *c,
        }
    }
    
    pub fn magnitude(&self) -> f64 {
        self.point().magnitude()
    }
    
    /// Phase in degrees in [0, 360)
    pub fn phase_degrees(&self) -> f64 {
        self.point().phase_degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amplitude_symbol() {
        let s = Symbol::Amplitude(2.5);
        assert!(!s.is_complex());
        assert_eq!(s.in_phase(), 2.5);
        assert_eq!(s.quadrature(), None);
        assert_eq!(s.point(), Complex::new(2.5, 0.0));
    }

    #[test]
    fn test_polar_symbol() {
        let s = Symbol::polar(1.0, 135.0);
        assert!(s.is_complex());
        assert!((s.magnitude() - 1.0).abs() < 1e-12);
        assert!((s.phase_degrees() - 135.0).abs() < 1e-9);
        assert!(s.in_phase() < 0.0);
        assert!(s.quadrature().unwrap() > 0.0);
    }
}
