//! Common utilities and configuration for tools

use anyhow::{Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::ToolConfig;

/// Global options shared by every entry point
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalConfig {
    /// Configuration file (TOML or JSON)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
    
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,
}

impl GlobalConfig {
    /// Tool configuration from `--config`, or defaults when none is given
    pub fn load_tool_config(&self) -> Result<ToolConfig> {
        match &self.config {
            Some(path) => ToolConfig::from_file(path),
            None => Ok(ToolConfig::default()),
        }
    }
}

/// Initialize logging based on configuration
pub fn init_logging(config: &GlobalConfig) {
    let log_level = if config.debug {
        tracing::Level::DEBUG
    } else if config.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    
    // A second init (e.g. in tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load configuration from file
pub fn load_config<T: for<'a> Deserialize<'a>>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    
    if path.extension().and_then(|s| s.to_str()) == Some("json") {
        return serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON config: {:?}", path));
    }
    
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML config: {:?}", path))
}

/// Save configuration to file
pub fn save_config<T: Serialize>(config: &T, path: &Path) -> Result<()> {
    let content = if path.extension().and_then(|s| s.to_str()) == Some("json") {
        serde_json::to_string_pretty(config)?
    } else {
        toml::to_string_pretty(config)?
    };
    
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;
    Ok(())
}

/// `out.wav` → `out-2.wav` when several files come from one run
pub fn indexed_path(path: &Path, index: usize, count: usize) -> PathBuf {
    if count <= 1 {
        return path.to_path_buf();
    }
    
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("signal");
    let name = match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => format!("{}-{}.{}", stem, index + 1, ext),
        None => format!("{}-{}", stem, index + 1),
    };
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_path() {
        let path = PathBuf::from("out/signal.wav");
        assert_eq!(indexed_path(&path, 0, 1), path);
        assert_eq!(indexed_path(&path, 0, 3), PathBuf::from("out/signal-1.wav"));
        assert_eq!(indexed_path(&PathBuf::from("raw"), 1, 2), PathBuf::from("raw-2"));
    }

    #[test]
    fn test_default_global_config_uses_default_tool_config() {
        let global = GlobalConfig::default();
        let config = global.load_tool_config().unwrap();
        assert_eq!(config, ToolConfig::default());
    }

    #[test]
    fn test_missing_config_file() {
        let global = GlobalConfig {
            config: Some(PathBuf::from("/nonexistent/iqmod.toml")),
            ..GlobalConfig::default()
        };
        assert!(global.load_tool_config().is_err());
    }
}
