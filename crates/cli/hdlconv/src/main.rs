//! HDL conversion CLI
//!
//! Lowers VHDL package syntax trees to the HDL AST

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

mod config;
mod convert;

#[derive(Parser)]
#[command(name = "hdlconv")]
#[command(about = "VHDL package lowering tools", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lower a JSON syntax tree and print the package outline
    Convert {
        /// Path to the serialized design file tree
        input: PathBuf,

        /// Only extract package and component names
        #[arg(long)]
        hierarchy_only: bool,

        /// Configuration file (defaults to ./hdlconv.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Fail when any construct was skipped as unsupported
        #[arg(long)]
        deny_unsupported: bool,

        /// Render every skipped construct
        #[arg(long, short)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            hierarchy_only,
            config: config_path,
            deny_unsupported,
            verbose,
        } => {
            let mut config = config::Config::load(config_path.as_deref(), &std::env::current_dir()?)?;
            config.lower.hierarchy_only |= hierarchy_only;
            config.diagnostics.deny_unsupported |= deny_unsupported;
            config.diagnostics.verbose |= verbose;

            let stdout = io::stdout();
            let mut out = stdout.lock();
            convert::run(&input, &config, &mut out)?;
            out.flush()?;
        }
    }

    Ok(())
}

/// Logs go to stderr, filtered by `RUST_LOG` (default `warn`)
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true).with_level(true))
        .with(filter)
        .init();
}
