//! iqmod 8QAM entry point

use anyhow::Result;
use clap::Parser;

use iqmod_modem::scheme::Scheme;
use iqmod_tools::{app, SchemeArgs};

#[derive(Parser)]
#[command(name = "iqmod-8qam")]
#[command(about = "Modulate bit strings with 8-QAM (two rings of four phases)")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    args: SchemeArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    app::run_scheme(Scheme::Qam8, cli.args)
}
