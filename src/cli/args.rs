//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kafstore")]
#[command(author = "Russ McKendrick")]
#[command(version)]
#[command(about = "Convert CA material into Kafka mTLS keystore and trust-store inputs", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect the certificates in a PEM file before generating anything
    Analyze(AnalyzeArgs),
    /// Generate the PKCS#12 keystore and trust-store material
    Generate(GenerateArgs),
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// PEM file to analyze (single certificate or full chain)
    pub file: PathBuf,

    /// Output as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// CA chain PEM file (root plus intermediates)
    #[arg(long, value_name = "FILE")]
    pub ca_chain: PathBuf,

    /// Certificate bundle PEM file (leaf plus intermediates, or intermediates
    /// only when --cert is given)
    #[arg(long, value_name = "FILE")]
    pub bundle: PathBuf,

    /// Separate leaf certificate PEM file
    #[arg(long, value_name = "FILE")]
    pub cert: Option<PathBuf>,

    /// Unencrypted private key PEM file
    #[arg(long, value_name = "FILE")]
    pub key: PathBuf,

    /// Friendly name for the keystore entry
    #[arg(long)]
    pub alias: Option<String>,

    /// Password for the generated keystore
    #[arg(long)]
    pub password: Option<String>,

    /// Broker address written into client-ssl.properties
    #[arg(long, value_name = "HOST:PORT")]
    pub bootstrap: Option<String>,

    /// Directory to write the generated files into
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output: PathBuf,

    /// Use AES-256 PKCS#12 encryption instead of the keytool-compatible
    /// legacy 3DES default
    #[arg(long)]
    pub modern_encryption: bool,

    /// Load defaults from a TOML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
