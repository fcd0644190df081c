//! Plain-text rendering of signals and constellations
//!
//! The renderer only borrows a [`Signal`]; it never builds or alters one.

use serde::{Deserialize, Serialize};
use std::io::{self, Write};

use iqmod_core::buffer::Complex;
use iqmod_modem::bits::SymbolGroup;
use iqmod_modem::scheme::Scheme;
use iqmod_modem::signal::Signal;
use iqmod_modem::symbol::Symbol;

/// Layout options for the text renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Constellation grid width in characters
    pub width: usize,
    /// Constellation grid height in lines
    pub height: usize,
    pub show_constellation: bool,
    pub show_waveform: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 41,
            height: 17,
            show_constellation: true,
            show_waveform: true,
        }
    }
}

const AXIS_H: char = '-';
const AXIS_V: char = '|';
const ORIGIN: char = '+';
const POINT: char = '*';
const SENT: char = '#';

/// Character-grid renderer
pub struct TextRenderer {
    config: RenderConfig,
}

impl TextRenderer {
    pub fn new(config: RenderConfig) -> Self {
        // Odd sizes keep the origin on a cell
        let mut config = config;
        config.width = (config.width.max(11)) | 1;
        config.height = (config.height.max(5)) | 1;
        Self { config }
    }
    
    /// Constellation grid with the full alphabet as `*` and `highlight` as `#`
    pub fn constellation_grid(&self, alphabet: &[Complex], highlight: &[Complex]) -> Vec<String> {
        let (w, h) = (self.config.width, self.config.height);
        let extent = alphabet
            .iter()
            .chain(highlight.iter())
            .map(|p| p.real.abs().max(p.imag.abs()))
            .fold(1.0_f64, f64::max)
            * 1.25;
        
        let mut grid = vec![vec![' '; w]; h];
        let (cx, cy) = (w / 2, h / 2);
        for row in grid.iter_mut() {
            row[cx] = AXIS_V;
        }
        for cell in grid[cy].iter_mut() {
            *cell = AXIS_H;
        }
        grid[cy][cx] = ORIGIN;
        
        let cell_of = |p: &Complex| -> (usize, usize) {
            let col = ((p.real + extent) / (2.0 * extent) * (w - 1) as f64).round() as usize;
            let row = ((extent - p.imag) / (2.0 * extent) * (h - 1) as f64).round() as usize;
            (row.min(h - 1), col.min(w - 1))
        };
        
        for p in alphabet {
            let (r, c) = cell_of(p);
            grid[r][c] = POINT;
        }
        for p in highlight {
            let (r, c) = cell_of(p);
            grid[r][c] = SENT;
        }
        
        grid.into_iter()
            .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
            .collect()
    }
    
    /// Full constellation of a scheme with one label line per point
    pub fn render_constellation<W: Write>(
        &self,
        out: &mut W,
        scheme: Scheme,
        amplitude: f64,
    ) -> io::Result<()> {
        let table = scheme.constellation(amplitude);
        let alphabet: Vec<Complex> = table.iter().map(|(_, s)| s.point()).collect();
        
        writeln!(out, "{} ({}, {} bit(s)/symbol)", scheme, scheme.description(), scheme.bits_per_symbol())?;
        for line in self.constellation_grid(&alphabet, &[]) {
            writeln!(out, "  {}", line)?;
        }
        for (group, symbol) in &table {
            writeln!(out, "  {}", symbol_row(group, symbol))?;
        }
        Ok(())
    }
    
    /// Symbols, constellation and waveform summary of one transmission
    pub fn render_signal<W: Write>(&self, out: &mut W, signal: &Signal, amplitude: f64) -> io::Result<()> {
        let scheme = signal.scheme();
        writeln!(
            out,
            "{}: {} symbol(s), {} sample(s) at {} Hz ({} per symbol)",
            scheme,
            signal.symbols().len(),
            signal.len(),
            signal.sample_rate(),
            signal.samples_per_symbol()
        )?;
        
        for (i, (group, symbol)) in signal.groups().iter().zip(signal.symbols()).enumerate() {
            writeln!(out, "  [{}] {}", i, symbol_row(group, symbol))?;
        }
        
        if self.config.show_constellation {
            let alphabet: Vec<Complex> = scheme
                .constellation(amplitude)
                .iter()
                .map(|(_, s)| s.point())
                .collect();
            let sent: Vec<Complex> = signal.symbols().iter().map(|s| s.point()).collect();
            writeln!(out, "  constellation ({} = transmitted, {} = unused):", SENT, POINT)?;
            for line in self.constellation_grid(&alphabet, &sent) {
                writeln!(out, "  {}", line)?;
            }
        }
        
        if self.config.show_waveform {
            writeln!(out, "  waveform (zero-order hold):")?;
            let n = signal.samples_per_symbol();
            let rate = signal.sample_rate();
            for (i, symbol) in signal.symbols().iter().enumerate() {
                let start = (i * n) as f64 / rate;
                let end = ((i + 1) * n) as f64 / rate;
                match symbol.quadrature() {
                    Some(q) => writeln!(
                        out,
                        "    t={:.4}..{:.4}s  I={:+.4}  Q={:+.4}",
                        start, end, symbol.in_phase(), q
                    )?,
                    None => writeln!(
                        out,
                        "    t={:.4}..{:.4}s  A={:+.4}",
                        start, end, symbol.in_phase()
                    )?,
                }
            }
        }
        
        Ok(())
    }
}

fn symbol_row(group: &SymbolGroup, symbol: &Symbol) -> String {
    match symbol {
        Symbol::Amplitude(a) => format!("{} -> amplitude {:.4}", group, a),
        Symbol::Iq(p) => format!(
            "{} -> I={:+.4} Q={:+.4} (r={:.4}, {:.1} deg)",
            group,
            p.real,
            p.imag,
            p.magnitude(),
            p.phase_degrees()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iqmod_modem::common::ModulationConfig;
    use iqmod_modem::modulator::Modulator;

    fn render_to_string(scheme: Scheme, bits: &str) -> String {
        let config = ModulationConfig::with_samples_per_symbol(4).unwrap();
        let signal = Modulator::new(scheme, config).unwrap().modulate_str(bits).unwrap();
        let mut out = Vec::new();
        TextRenderer::new(RenderConfig::default())
            .render_signal(&mut out, &signal, 1.0)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_grid_marks_points() {
        let renderer = TextRenderer::new(RenderConfig { width: 11, height: 5, ..RenderConfig::default() });
        let alphabet = [Complex::new(1.0, 0.0), Complex::new(-1.0, 0.0)];
        let grid = renderer.constellation_grid(&alphabet, &alphabet[..1]);
        
        assert_eq!(grid.len(), 5);
        let axis = &grid[2];
        assert!(axis.contains(SENT));
        assert!(axis.contains(POINT));
        assert!(axis.contains(ORIGIN));
        assert!(axis.find(POINT).unwrap() < axis.find(SENT).unwrap());
    }

    #[test]
    fn test_grid_sizes_forced_odd() {
        let renderer = TextRenderer::new(RenderConfig { width: 20, height: 8, ..RenderConfig::default() });
        let grid = renderer.constellation_grid(&[], &[]);
        assert_eq!(grid.len(), 9);
        assert!(grid.iter().all(|line| line.chars().count() <= 21));
    }

    #[test]
    fn test_render_qpsk_signal() {
        let text = render_to_string(Scheme::Psk4, "1000");
        assert!(text.starts_with("4psk: 2 symbol(s), 8 sample(s)"));
        assert!(text.contains("[0] 10 -> "));
        assert!(text.contains("315.0 deg"));
        assert!(text.contains("[1] 00 -> "));
        assert!(text.contains("45.0 deg"));
        assert!(text.contains("Q="));
    }

    #[test]
    fn test_render_ook_signal() {
        let text = render_to_string(Scheme::Ook, "10");
        assert!(text.contains("1 -> amplitude 1.0000"));
        assert!(text.contains("A=+0.0000"));
        assert!(!text.contains("Q="));
    }

    #[test]
    fn test_render_constellation_lists_every_point() {
        let mut out = Vec::new();
        TextRenderer::new(RenderConfig::default())
            .render_constellation(&mut out, Scheme::Qam16, 1.0)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches(" -> ").count(), 16);
        assert_eq!(text.matches(POINT).count(), 16);
    }
}
