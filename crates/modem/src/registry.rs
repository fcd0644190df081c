//! Process-wide, read-only registry of modulation schemes

use crate::scheme::Scheme;
use crate::{ModemError, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Descriptor of a registered scheme
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemeInfo {
    pub id: String,
    pub description: String,
    pub scheme: Scheme,
    pub bits_per_symbol: usize,
    pub constellation_size: usize,
    pub complex: bool,
}

impl From<Scheme> for SchemeInfo {
    fn from(scheme: Scheme) -> Self {
        Self {
            id: scheme.name().to_string(),
            description: scheme.description().to_string(),
            scheme,
            bits_per_symbol: scheme.bits_per_symbol(),
            constellation_size: scheme.constellation_size(),
            complex: scheme.is_complex(),
        }
    }
}

/// Registry of the built-in schemes, keyed by registry name.
///
/// Built once on first use and never modified afterwards.
#[derive(Debug)]
pub struct SchemeRegistry {
    schemes: BTreeMap<&'static str, SchemeInfo>,
}

static REGISTRY: OnceLock<SchemeRegistry> = OnceLock::new();

impl SchemeRegistry {
    /// The shared registry instance
    pub fn global() -> &'static SchemeRegistry {
        REGISTRY.get_or_init(|| {
            let schemes = Scheme::ALL
                .iter()
                .map(|&s| (s.name(), SchemeInfo::from(s)))
                .collect();
            SchemeRegistry { schemes }
        })
    }
    
    /// Get information about a scheme by name.
    ///
    /// Names resolve like [`Scheme::lookup`]: case-insensitive, with the
    /// `bpsk`/`qpsk` aliases.
    pub fn get(&self, name: &str) -> Result<&SchemeInfo> {
        let scheme = Scheme::lookup(name)?;
        self.schemes
            .get(scheme.name())
            .ok_or_else(|| ModemError::UnknownScheme { name: name.to_string() })
    }
    
    /// All registered schemes in ascending bits-per-symbol order
    pub fn list(&self) -> Vec<&SchemeInfo> {
        let mut infos: Vec<&SchemeInfo> = self.schemes.values().collect();
        infos.sort_by_key(|info| info.scheme);
        infos
    }
    
    pub fn is_available(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }
    
    /// Export registry to JSON
    pub fn export_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.list())
            .map_err(|e| ModemError::InvalidParameters {
                msg: format!("Failed to serialize registry: {}", e),
            })
    }
}
