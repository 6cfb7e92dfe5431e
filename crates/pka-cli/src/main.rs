mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use std::io::Write;
use tracing::{debug, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!("🚀 pkastore CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let config = config::build_config(&cli)?;
    let store = config.load_store()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Category(args) => commands::lookup::category(&store, args, &mut out)?,
        Commands::Charge(args) => commands::lookup::charge(&store, args, &mut out)?,
        Commands::Pka(args) => commands::lookup::pka(&store, args, &mut out)?,
        Commands::Radius(args) => commands::lookup::radius(&store, args, &mut out)?,
        Commands::Volume(args) => commands::lookup::volume(&store, args, &mut out)?,
        Commands::Coulomb(args) => commands::models::coulomb(&store, args, &mut out)?,
        Commands::Desolvation(args) => commands::models::desolvation(&store, args, &mut out)?,
        Commands::Hbond(args) => commands::hbond::hbond(&store, args, &mut out)?,
        Commands::Interaction(args) => commands::hbond::interaction(&store, args, &mut out)?,
        Commands::Export(args) => commands::export::run(&store, args, &mut out)?,
    }

    out.flush()?;
    debug!("Command completed.");
    Ok(())
}
