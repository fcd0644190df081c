//! iqmod 4PSK entry point

use anyhow::Result;
use clap::Parser;

use iqmod_modem::scheme::Scheme;
use iqmod_tools::{app, SchemeArgs};

#[derive(Parser)]
#[command(name = "iqmod-4psk")]
#[command(about = "Modulate bit strings with Gray-coded quadrature phase-shift keying")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    args: SchemeArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    app::run_scheme(Scheme::Psk4, cli.args)
}
