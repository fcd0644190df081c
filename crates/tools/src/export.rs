//! JSON and WAV output of synthesized signals

use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::info;

use iqmod_core::buffer::RealBuffer;
use iqmod_modem::signal::Signal;

/// Write signals (symbols, groups and samples) as pretty JSON
pub fn write_json(signals: &[Signal], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create JSON file: {:?}", path))?;
    serde_json::to_writer_pretty(BufWriter::new(file), signals)
        .with_context(|| format!("Failed to write JSON file: {:?}", path))?;
    
    info!("Wrote {} signal(s) to {:?}", signals.len(), path);
    Ok(())
}

/// Write a real waveform as 16-bit mono WAV.
///
/// Waveforms peaking above 1.0 are scaled down to full scale.
pub fn write_wav(samples: &RealBuffer, path: &Path) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: samples.sample_rate().round() as u32,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    
    let mut writer = hound::WavWriter::create(path, spec)
        .with_context(|| format!("Failed to create WAV file: {:?}", path))?;
    
    let peak = samples.iter().fold(0.0_f64, |m, s| m.max(s.abs()));
    let scale = if peak > 1.0 { 1.0 / peak } else { 1.0 };
    
    for sample in samples.iter() {
        let amplitude = (sample * scale * 32767.0).clamp(-32767.0, 32767.0) as i16;
        writer.write_sample(amplitude)?;
    }
    
    writer.finalize()?;
    info!("Wrote {} samples to {:?}", samples.len(), path);
    Ok(())
}
