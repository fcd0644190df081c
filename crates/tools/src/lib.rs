//! iqmod Tools library

pub mod app;
pub mod tx;
pub mod analyze;
pub mod render;
pub mod export;
pub mod config;
pub mod common;

pub use app::SchemeArgs;
pub use tx::{TxConfig, Transmitter};
pub use analyze::{AnalyzeConfig, SignalAnalyzer, AnalysisResult};
pub use render::{RenderConfig, TextRenderer};
pub use config::ToolConfig;
pub use common::GlobalConfig;
