//! iqmod 16QAM entry point

use anyhow::Result;
use clap::Parser;

use iqmod_modem::scheme::Scheme;
use iqmod_tools::{app, SchemeArgs};

#[derive(Parser)]
#[command(name = "iqmod-16qam")]
#[command(about = "Modulate bit strings with Gray-coded 16-QAM")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    args: SchemeArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    app::run_scheme(Scheme::Qam16, cli.args)
}
