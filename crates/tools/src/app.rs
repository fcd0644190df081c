//! Command implementations shared by the `iqmod` binaries

use anyhow::Result;
use clap::Args;
use std::io::Write;
use tracing::info;

use iqmod_modem::prelude::*;

use crate::analyze::{AnalyzeConfig, SignalAnalyzer};
use crate::common::{indexed_path, init_logging, GlobalConfig};
use crate::export;
use crate::render::TextRenderer;
use crate::tx::{Transmitter, TxConfig};

/// Arguments of a single-scheme entry point
#[derive(Debug, Clone, Args)]
pub struct SchemeArgs {
    #[command(flatten)]
    pub global: GlobalConfig,
    
    #[command(flatten)]
    pub tx: TxConfig,
}

/// Entry for the per-scheme binaries
pub fn run_scheme(scheme: Scheme, args: SchemeArgs) -> Result<()> {
    init_logging(&args.global);
    info!("iqmod {} starting", scheme);
    
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    modulate(&mut out, scheme, &args.global, args.tx)
}

/// Modulate, render and optionally export every requested transmission
pub fn modulate<W: Write>(
    out: &mut W,
    scheme: Scheme,
    global: &GlobalConfig,
    tx: TxConfig,
) -> Result<()> {
    let tool_config = global.load_tool_config()?;
    let transmitter = Transmitter::new(scheme, tx.clone(), &tool_config.modulation)?;
    let signals = transmitter.transmit()?;
    let mod_config = transmitter.modulator().config();
    
    let renderer = TextRenderer::new(tool_config.render.clone());
    let analyzer = SignalAnalyzer::new(AnalyzeConfig {
        carrier_frequency: mod_config.carrier_frequency,
        spectral: tx.spectrum,
    });
    
    for (i, signal) in signals.iter().enumerate() {
        if signals.len() > 1 {
            writeln!(out, "transmission {} of {}", i + 1, signals.len())?;
        }
        renderer.render_signal(out, signal, mod_config.amplitude)?;
        
        if tx.spectrum {
            let result = analyzer.analyze(signal)?;
            writeln!(
                out,
                "  power {:.4}, peak amplitude {:.4}",
                result.power, result.peak_amplitude
            )?;
            if let Some(freq) = result.dominant_frequency {
                writeln!(
                    out,
                    "  dominant frequency {:.2} Hz on a {} Hz carrier",
                    freq, mod_config.carrier_frequency
                )?;
            }
        }
    }
    
    if let Some(path) = &tx.json {
        export::write_json(&signals, path)?;
        writeln!(out, "JSON written to {:?}", path)?;
    }
    
    if let Some(path) = &tx.wav {
        for (i, signal) in signals.iter().enumerate() {
            let target = indexed_path(path, i, signals.len());
            let passband = signal.passband(mod_config.carrier_frequency)?;
            export::write_wav(&passband, &target)?;
            writeln!(out, "WAV written to {:?}", target)?;
        }
    }
    
    Ok(())
}

/// Print a scheme's full constellation
pub fn constellation<W: Write>(out: &mut W, name: &str, global: &GlobalConfig, amplitude: Option<f64>) -> Result<()> {
    let scheme = Scheme::lookup(name)?;
    let tool_config = global.load_tool_config()?;
    let amplitude = match amplitude {
        Some(a) => tool_config.modulation.clone().with_amplitude(a)?.amplitude,
        None => tool_config.modulation.amplitude,
    };
    
    TextRenderer::new(tool_config.render).render_constellation(out, scheme, amplitude)?;
    Ok(())
}

/// List registered schemes
pub fn schemes<W: Write>(out: &mut W, json: bool) -> Result<()> {
    let registry = SchemeRegistry::global();
    
    if json {
        writeln!(out, "{}", registry.export_json()?)?;
        return Ok(());
    }
    
    for info in registry.list() {
        writeln!(
            out,
            "{:<6} {} bit(s)/symbol, {:>2} points  {}",
            info.id, info.bits_per_symbol, info.constellation_size, info.description
        )?;
    }
    Ok(())
}
