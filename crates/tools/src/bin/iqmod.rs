//! iqmod - Unified modulation and constellation tool

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use iqmod_modem::scheme::Scheme;
use iqmod_tools::{app, GlobalConfig, TxConfig};

/// Bit-string modulation and constellation tool
#[derive(Parser)]
#[command(name = "iqmod")]
#[command(about = "Modulate bit strings with OOK, PSK and QAM and show their constellations")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    global: GlobalConfig,
    
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Modulate bit strings with a scheme
    Modulate {
        /// Scheme name (ook, 2psk, 4psk, 8qam, 16qam)
        #[arg(short, long)]
        scheme: String,
        
        #[command(flatten)]
        tx: TxConfig,
    },
    /// Show the full constellation of a scheme
    Constellation {
        /// Scheme name
        scheme: String,
        
        /// OOK reference amplitude
        #[arg(long)]
        amplitude: Option<f64>,
    },
    /// List available schemes
    Schemes {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    
    iqmod_tools::common::init_logging(&cli.global);
    info!("iqmod starting");
    
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    
    match cli.command {
        Commands::Modulate { scheme, tx } => {
            let scheme = Scheme::lookup(&scheme)?;
            app::modulate(&mut out, scheme, &cli.global, tx)?;
        },
        
        Commands::Constellation { scheme, amplitude } => {
            app::constellation(&mut out, &scheme, &cli.global, amplitude)?;
        },
        
        Commands::Schemes { json } => {
            app::schemes(&mut out, json)?;
        },
    }
    
    Ok(())
}
