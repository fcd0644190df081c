//! Configuration file handling for iqmod tools

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use iqmod_modem::common::ModulationConfig;

use crate::common::{load_config, save_config};
use crate::render::RenderConfig;

/// Settings read from `--config`; every section is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub modulation: ModulationConfig,
    pub render: RenderConfig,
}

impl ToolConfig {
    /// Load configuration from a TOML or JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let config: Self = load_config(path)?;
        config
            .modulation
            .validate()
            .with_context(|| format!("Invalid [modulation] section in {:?}", path))?;
        Ok(config)
    }
    
    /// Save configuration to a TOML (or `.json`) file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        save_config(self, path)
    }
}
