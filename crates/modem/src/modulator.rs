//! End-to-end pipeline: bits → groups → symbols → samples

use crate::bits::{BitSequence, SymbolGroup};
use crate::common::ModulationConfig;
use crate::scheme::Scheme;
use crate::signal::Signal;
use crate::symbol::Symbol;
use crate::synth::WaveformSynthesizer;
use crate::Result;
use tracing::debug;

/// Modulator bound to one scheme and configuration
#[derive(Debug, Clone)]
pub struct Modulator {
    scheme: Scheme,
    config: ModulationConfig,
    synthesizer: WaveformSynthesizer,
}

impl Modulator {
    /// Create a new modulator
    pub fn new(scheme: Scheme, config: ModulationConfig) -> Result<Self> {
        let synthesizer = WaveformSynthesizer::new(&config)?;
        
        Ok(Self {
            scheme,
            config,
            synthesizer,
        })
    }
    
    /// Create a modulator for the scheme registered under `name`
    pub fn from_name(name: &str, config: ModulationConfig) -> Result<Self> {
        Self::new(Scheme::lookup(name)?, config)
    }
    
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }
    
    pub fn config(&self) -> &ModulationConfig {
        &self.config
    }
    
    pub fn samples_per_symbol(&self) -> usize {
        self.synthesizer.samples_per_symbol()
    }
    
    /// Map groups to symbols; fails on the first bad group
    pub fn map_symbols(&self, groups: &[SymbolGroup]) -> Result<Vec<Symbol>> {
        groups
            .iter()
            .map(|g| self.scheme.map_group(g, self.config.amplitude))
            .collect()
    }
    
    /// Modulate a textual bit string
    pub fn modulate_str(&self, input: &str) -> Result<Signal> {
        let bits = BitSequence::parse(input)?;
        self.modulate(&bits)
    }
    
    /// Modulate a bit sequence into a complete signal.
    ///
    /// Either the whole signal is produced or an error is returned.
    pub fn modulate(&self, bits: &BitSequence) -> Result<Signal> {
        let groups = bits.group(self.scheme.bits_per_symbol())?;
        let symbols = self.map_symbols(&groups)?;
        let waveform = self.synthesizer.synthesize(&symbols)?;
        
        debug!(
            scheme = %self.scheme,
            bits = bits.len(),
            symbols = symbols.len(),
            samples = waveform.in_phase.len(),
            "modulated bit sequence"
        );
        
        Signal::new(self.scheme, groups, symbols, waveform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ModemError;
    use quickcheck_macros::quickcheck;

    fn modulator(scheme: Scheme, n: usize) -> Modulator {
        Modulator::new(scheme, ModulationConfig::with_samples_per_symbol(n).unwrap()).unwrap()
    }

    #[test]
    fn test_ook_pipeline() {
        let signal = modulator(Scheme::Ook, 2).modulate_str("10").unwrap();
        assert_eq!(signal.symbols(), &[Symbol::Amplitude(1.0), Symbol::Amplitude(0.0)]);
        assert_eq!(signal.in_phase(), &[1.0, 1.0, 0.0, 0.0]);
        assert!(signal.quadrature().is_none());
    }

    #[test]
    fn test_ook_uses_configured_amplitude() {
        let config = ModulationConfig::with_samples_per_symbol(1)
            .unwrap()
            .with_amplitude(5.0)
            .unwrap();
        let signal = Modulator::new(Scheme::Ook, config).unwrap().modulate_str("01").unwrap();
        assert_eq!(signal.in_phase(), &[0.0, 5.0]);
    }

    #[test]
    fn test_2psk_pipeline() {
        let signal = modulator(Scheme::Psk2, 3).modulate_str("10").unwrap();
        assert!((signal.symbols()[0].phase_degrees() - 180.0).abs() < 1e-9);
        assert!(signal.symbols()[1].phase_degrees().abs() < 1e-9);
        assert_eq!(signal.in_phase(), &[-1.0, -1.0, -1.0, 1.0, 1.0, 1.0]);
        assert_eq!(signal.quadrature().unwrap(), &[0.0; 6]);
    }

    #[test]
    fn test_16qam_pipeline() {
        let signal = modulator(Scheme::Qam16, 10).modulate_str("1010 0101").unwrap();
        assert_eq!(signal.symbols().len(), 2);
        assert_eq!(signal.len(), 20);
        let groups: Vec<String> = signal.groups().iter().map(|g| g.to_string()).collect();
        assert_eq!(groups, vec!["1010", "0101"]);
    }

    #[test]
    fn test_4psk_rejects_odd_length() {
        let err = modulator(Scheme::Psk4, 4).modulate_str("101").unwrap_err();
        assert!(matches!(err, ModemError::InvalidInput { .. }));
    }

    #[test]
    fn test_invalid_characters() {
        let err = modulator(Scheme::Psk2, 4).modulate_str("1x0").unwrap_err();
        assert!(matches!(err, ModemError::InvalidInput { .. }));
    }

    #[test]
    fn test_from_name() {
        let config = ModulationConfig::default();
        assert_eq!(Modulator::from_name("8qam", config.clone()).unwrap().scheme(), Scheme::Qam8);
        assert!(matches!(
            Modulator::from_name("gmsk", config).unwrap_err(),
            ModemError::UnknownScheme { .. }
        ));
    }

    #[test]
    fn test_map_symbols_checks_width() {
        let m = modulator(Scheme::Qam8, 1);
        let groups = vec![SymbolGroup::from_value(0, 3), SymbolGroup::from_value(0, 2)];
        assert!(matches!(
            m.map_symbols(&groups).unwrap_err(),
            ModemError::InvalidGroupLength { .. }
        ));
    }

    fn bits_for(raw: &[bool], k: usize) -> Option<String> {
        let usable = raw.len() - raw.len() % k;
        if usable == 0 {
            return None;
        }
        Some(raw[..usable].iter().map(|&b| if b { '1' } else { '0' }).collect())
    }

    #[quickcheck]
    fn prop_symbol_and_sample_counts(raw: Vec<bool>, n: u8) -> bool {
        let n = (n % 16) as usize + 1;
        Scheme::ALL.iter().all(|&scheme| {
            let k = scheme.bits_per_symbol();
            let Some(bits) = bits_for(&raw, k) else { return true };
            let signal = modulator(scheme, n).modulate_str(&bits).unwrap();
            signal.symbols().len() == bits.len() / k
                && signal.len() == signal.symbols().len() * n
                && signal.quadrature().map_or(true, |q| q.len() == signal.len())
        })
    }

    #[quickcheck]
    fn prop_modulation_is_deterministic(raw: Vec<bool>) -> bool {
        Scheme::ALL.iter().all(|&scheme| {
            let Some(bits) = bits_for(&raw, scheme.bits_per_symbol()) else { return true };
            let m = modulator(scheme, 4);
            m.modulate_str(&bits).unwrap() == m.modulate_str(&bits).unwrap()
        })
    }
}
