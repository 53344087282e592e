//! kafstore - Kafka mTLS keystore and trust-store generator
//!
//! Takes a CA chain, a certificate bundle, and a private key as PEM text and
//! produces a PKCS#12 keystore plus the material needed to build a trust
//! store and configure a Kafka SSL client.

use clap::Parser;
use console::style;
use kafstore::cli::{Cli, Commands};
use kafstore::commands;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    if let Err(e) = run() {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Handle color preference
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    match &cli.command {
        Commands::Analyze(args) => commands::run_analyze(args),
        Commands::Generate(args) => commands::run_generate(args),
    }
}
