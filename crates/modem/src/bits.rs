//! Bit sequences and fixed-size symbol groups

use crate::{ModemError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Ordered, validated sequence of binary digits in transmission order.
///
/// A `BitSequence` is never empty and holds only `0` and `1` values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BitSequence {
    bits: Vec<u8>,
}

impl BitSequence {
    /// Parse a textual bit string.
    ///
    /// ASCII whitespace and `_` are treated as visual separators and
    /// skipped, so `"1010 0101"` is eight bits. Anything else that is not
    /// `0` or `1` is rejected.
    pub fn parse(input: &str) -> Result<Self> {
        let mut bits = Vec::with_capacity(input.len());
        
        for (pos, ch) in input.chars().enumerate() {
            match ch {
                '0' => bits.push(0),
                '1' => bits.push(1),
                c if c.is_ascii_whitespace() || c == '_' => {}
                c => {
                    return Err(ModemError::InvalidInput {
                        msg: format!(
                            "'{}' at position {} of \"{}\" is not a binary digit (expected '0' or '1')",
                            c, pos, input
                        ),
                    });
                }
            }
        }
        
        Self::from_bits(bits)
    }
    
    /// Build a sequence from raw bit values
    pub fn from_bits(bits: Vec<u8>) -> Result<Self> {
        if bits.is_empty() {
            return Err(ModemError::InvalidInput {
                msg: "bit string is empty (expected at least one '0' or '1')".to_string(),
            });
        }
        
        if let Some(pos) = bits.iter().position(|&b| b > 1) {
            return Err(ModemError::InvalidInput {
                msg: format!("bit value {} at position {} is not 0 or 1", bits[pos], pos),
            });
        }
        
        Ok(Self { bits })
    }

    /// Join several sequences into one transmission, in order
    pub fn concat<'a, I>(parts: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a BitSequence>,
    {
        let bits: Vec<u8> = parts
            .into_iter()
            .flat_map(|seq| seq.bits.iter().copied())
            .collect();
        Self::from_bits(bits)
    }
    
    pub fn len(&self) -> usize {
        self.bits.len()
    }
    
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }
    
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }
    
    /// Split into consecutive groups of `bits_per_symbol` bits.
    ///
    /// The length must be an exact multiple of `bits_per_symbol`; trailing
    /// bits are never padded or dropped.
    pub fn group(&self, bits_per_symbol: usize) -> Result<Vec<SymbolGroup>> {
        if bits_per_symbol == 0 || bits_per_symbol > 8 {
            return Err(ModemError::InvalidParameters {
                msg: format!("bits per symbol must be in 1..=8, got {}", bits_per_symbol),
            });
        }
        
        if self.bits.len() % bits_per_symbol != 0 {
            return Err(ModemError::InvalidInput {
                msg: format!(
                    "{} bits cannot be split into {}-bit symbols ({} bit(s) left over); length must be a multiple of {}",
                    self.bits.len(),
                    bits_per_symbol,
                    self.bits.len() % bits_per_symbol,
                    bits_per_symbol
                ),
            });
        }
        
        Ok(self
            .bits
            .chunks_exact(bits_per_symbol)
            .map(|chunk| SymbolGroup { bits: chunk.to_vec() })
            .collect())
    }
}

impl FromStr for BitSequence {
    type Err = ModemError;
    
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

/// Fixed-length run of bits that becomes one symbol (first bit is the MSB)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SymbolGroup {
    bits: Vec<u8>,
}

impl SymbolGroup {
    /// Group holding the `width` low bits of `value`, MSB first.
    ///
    /// Positions above bit 7 are zero.
    pub fn from_value(value: u8, width: usize) -> Self {
        let bits = (0..width)
            .rev()
            .map(|shift| u32::try_from(shift).ok().and_then(|s| value.checked_shr(s)).unwrap_or(0) & 1)
            .collect();
        Self { bits }
    }
    
    pub fn len(&self) -> usize {
        self.bits.len()
    }
    
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }
    
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }
    
    /// Integer value of the group, reading the first bit as MSB
    pub fn value(&self) -> u8 {
        self.bits.iter().fold(0u8, |acc, &b| (acc << 1) | b)
    }

    /// Number of bit positions where two groups differ
    pub fn hamming_distance(&self, other: &SymbolGroup) -> usize {
        self.bits
            .iter()
            .zip(other.bits.iter())
            .filter(|(a, b)| a != b)
            .count()
            + self.bits.len().abs_diff(other.bits.len())
    }
}

impl fmt::Display for SymbolGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}
