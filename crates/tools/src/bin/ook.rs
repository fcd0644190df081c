//! iqmod OOK entry point

use anyhow::Result;
use clap::Parser;

use iqmod_modem::scheme::Scheme;
use iqmod_tools::{app, SchemeArgs};

#[derive(Parser)]
#[command(name = "iqmod-ook")]
#[command(about = "Modulate bit strings with on-off keying")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    args: SchemeArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    app::run_scheme(Scheme::Ook, cli.args)
}
