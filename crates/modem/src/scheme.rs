//! Modulation schemes and their fixed symbol tables
//!
//! Every scheme is a variant of [`Scheme`] carrying its bits-per-symbol
//! and mapping table as constant data. Layouts:
//!
//! | scheme | k | layout |
//! |--------|---|--------|
//! | `ook`  | 1 | `0` → 0, `1` → A |
//! | `2psk` | 1 | `0` → 0°, `1` → 180°, unit radius |
//! | `4psk` | 2 | Gray: `00` 45°, `01` 135°, `11` 225°, `10` 315° |
//! | `8qam` | 3 | first two bits pick the 4psk phase, last bit the ring (1 or 1+√2) |
//! | `16qam`| 4 | Gray levels {-3,-1,1,3} on I (bits 0-1) and Q (bits 2-3), scaled by 1/√10 |

use crate::bits::SymbolGroup;
use crate::symbol::Symbol;
use crate::{ModemError, Result};
use iqmod_core::buffer::Complex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Phase in degrees per Gray-coded bit pair, indexed by pair value
const GRAY_QUADRANT_DEGREES: [f64; 4] = [
    45.0,  // 00
    135.0, // 01
    315.0, // 10
    225.0, // 11
];

/// Amplitude level per Gray-coded bit pair, indexed by pair value
const GRAY_LEVELS: [f64; 4] = [
    -3.0, // 00
    -1.0, // 01
    3.0,  // 10
    1.0,  // 11
];

const QAM8_INNER_RADIUS: f64 = 1.0;
const QAM8_OUTER_RADIUS: f64 = 1.0 + std::f64::consts::SQRT_2;

/// 1/sqrt(10): unit average energy over the 16-QAM grid
const QAM16_SCALE: f64 = 0.316_227_766_016_837_94;

/// Supported modulation schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Scheme {
    Ook,
    Psk2,
    Psk4,
    Qam8,
    Qam16,
}

impl Scheme {
    pub const ALL: [Scheme; 5] = [
        Scheme::Ook,
        Scheme::Psk2,
        Scheme::Psk4,
        Scheme::Qam8,
        Scheme::Qam16,
    ];
    
    /// Registry identifier
    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Ook => "ook",
            Scheme::Psk2 => "2psk",
            Scheme::Psk4 => "4psk",
            Scheme::Qam8 => "8qam",
            Scheme::Qam16 => "16qam",
        }
    }
    
    pub fn description(&self) -> &'static str {
        match self {
            Scheme::Ook => "On-off keying",
            Scheme::Psk2 => "Binary phase-shift keying",
            Scheme::Psk4 => "Quadrature phase-shift keying (Gray coded)",
            Scheme::Qam8 => "8-QAM, two rings of four phases",
            Scheme::Qam16 => "16-QAM, Gray coded square grid",
        }
    }
    
    pub fn bits_per_symbol(&self) -> usize {
        match self {
            Scheme::Ook | Scheme::Psk2 => 1,
            Scheme::Psk4 => 2,
            Scheme::Qam8 => 3,
            Scheme::Qam16 => 4,
        }
    }
    
    pub fn constellation_size(&self) -> usize {
        1 << self.bits_per_symbol()
    }
    
    /// Whether symbols carry a quadrature component
    pub fn is_complex(&self) -> bool {
        !matches!(self, Scheme::Ook)
    }
    
    /// Look up a scheme by registry name (case-insensitive).
    ///
    /// `bpsk` and `qpsk` are accepted as aliases of `2psk` and `4psk`.
    pub fn lookup(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "ook" => Ok(Scheme::Ook),
            "2psk" | "bpsk" => Ok(Scheme::Psk2),
            "4psk" | "qpsk" => Ok(Scheme::Psk4),
            "8qam" => Ok(Scheme::Qam8),
            "16qam" => Ok(Scheme::Qam16),
            _ => Err(ModemError::UnknownScheme { name: name.to_string() }),
        }
    }
    
    /// Comma-separated list of registry names
    pub fn known_names() -> String {
        Self::ALL
            .iter()
            .map(|s| s.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
    
    /// Map one group to its symbol.
    ///
    /// `amplitude` is the on-off keying reference amplitude; the other
    /// schemes use their fixed tables.
    pub fn map_group(&self, group: &SymbolGroup, amplitude: f64) -> Result<Symbol> {
        if group.len() != self.bits_per_symbol() {
            return Err(ModemError::InvalidGroupLength {
                scheme: self.name().to_string(),
                expected: self.bits_per_symbol(),
                actual: group.len(),
            });
        }
        
        Ok(self.map_value(group.value(), amplitude))
    }
    
    /// Total over `0..constellation_size()`; callers validate the width
    fn map_value(&self, value: u8, amplitude: f64) -> Symbol {
        match self {
            Scheme::Ook => {
                if value == 0 { Symbol::Amplitude(0.0) } else { Symbol::Amplitude(amplitude) }
            }
            Scheme::Psk2 => {
                // 0° and 180° sit exactly on the I axis
                if value == 0 { Symbol::Iq(Complex::new(1.0, 0.0)) } else { Symbol::Iq(Complex::new(-1.0, 0.0)) }
            }
            Scheme::Psk4 => Symbol::polar(1.0, GRAY_QUADRANT_DEGREES[(value & 0b11) as usize]),
            Scheme::Qam8 => {
                let phase = GRAY_QUADRANT_DEGREES[((value >> 1) & 0b11) as usize];
                let radius = if value & 1 == 0 { QAM8_INNER_RADIUS } else { QAM8_OUTER_RADIUS };
                Symbol::polar(radius, phase)
            }
            Scheme::Qam16 => {
                let i = GRAY_LEVELS[((value >> 2) & 0b11) as usize] * QAM16_SCALE;
                let q = GRAY_LEVELS[(value & 0b11) as usize] * QAM16_SCALE;
                Symbol::Iq(Complex::new(i, q))
            }
        }
    }
    
    /// Every group of the scheme with its symbol, in ascending group order
    pub fn constellation(&self, amplitude: f64) -> Vec<(SymbolGroup, Symbol)> {
        let k = self.bits_per_symbol();
        (0..self.constellation_size())
            .map(|v| {
                let value = v as u8;
                (SymbolGroup::from_value(value, k), self.map_value(value, amplitude))
            })
            .collect()
    }
}

/// Map a group using the scheme registered under `name`
pub fn map_by_name(name: &str, group: &SymbolGroup, amplitude: f64) -> Result<Symbol> {
    Scheme::lookup(name)?.map_group(group, amplitude)
}

impl FromStr for Scheme {
    type Err = ModemError;
    
    fn from_str(s: &str) -> Result<Self> {
        Self::lookup(s)
    }
}

impl TryFrom<String> for Scheme {
    type Error = ModemError;
    
    fn try_from(s: String) -> Result<Self> {
        Self::lookup(&s)
    }
}

impl From<Scheme> for String {
    fn from(s: Scheme) -> Self {
        s.name().to_string()
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
