//! The generate command: run the full pipeline and write the bundle to disk

use crate::cli::GenerateArgs;
use crate::config::{Settings, StoreEncryption};
use crate::store_ops::{self, GenerateRequest};
use console::style;
use std::path::Path;

/// Output file names within the chosen directory
const KEYSTORE_FILE: &str = "keystore.p12";
const ROOT_CERT_FILE: &str = "CA_root.pem";
const CHAIN_FILE: &str = "ca_chain.pem";
const SCRIPT_FILE: &str = "create-truststore.sh";
const PROPERTIES_FILE: &str = "client-ssl.properties";

/// Read the input files, run the pipeline, and write the generated artifacts
pub fn run_generate(args: &GenerateArgs) -> anyhow::Result<()> {
    let settings = match &args.config {
        Some(path) => Settings::load_from_file(path)?,
        None => Settings::load_default()?,
    };

    let encryption = if args.modern_encryption {
        StoreEncryption::ModernAes256
    } else {
        settings.encryption
    };

    let request = GenerateRequest {
        ca_chain_pem: std::fs::read_to_string(&args.ca_chain)?,
        bundle_pem: std::fs::read_to_string(&args.bundle)?,
        cert_pem: args
            .cert
            .as_ref()
            .map(std::fs::read_to_string)
            .transpose()?,
        key_pem: std::fs::read_to_string(&args.key)?,
        alias: args
            .alias
            .clone()
            .unwrap_or_else(|| settings.default_alias.clone()),
        password: args
            .password
            .clone()
            .unwrap_or_else(|| settings.default_password.clone()),
        bootstrap: Some(
            args.bootstrap
                .clone()
                .unwrap_or_else(|| settings.default_bootstrap.clone()),
        ),
    };

    let bundle = store_ops::assemble(&request, encryption)?;

    for warning in &bundle.warnings {
        eprintln!("{} {}", style("Warning:").yellow().bold(), warning);
    }

    std::fs::create_dir_all(&args.output)?;
    write_output(&args.output, KEYSTORE_FILE, &bundle.keystore_p12)?;
    write_output(&args.output, ROOT_CERT_FILE, bundle.root_cert_pem.as_bytes())?;
    write_output(&args.output, CHAIN_FILE, bundle.ca_chain_pem.as_bytes())?;
    write_output(&args.output, SCRIPT_FILE, bundle.truststore_script.as_bytes())?;
    write_output(
        &args.output,
        PROPERTIES_FILE,
        bundle.client_properties.as_bytes(),
    )?;

    println!(
        "{} keystore and trust-store material written to {}",
        style("Done:").green().bold(),
        args.output.display()
    );
    println!("  {} ({} bytes)", KEYSTORE_FILE, bundle.keystore_p12.len());
    println!("  {}", ROOT_CERT_FILE);
    println!("  {}", CHAIN_FILE);
    println!("  {}", SCRIPT_FILE);
    println!("  {}", PROPERTIES_FILE);

    Ok(())
}

fn write_output(dir: &Path, name: &str, data: &[u8]) -> std::io::Result<()> {
    let path = dir.join(name);
    std::fs::write(&path, data)?;
    tracing::debug!("wrote {} ({} bytes)", path.display(), data.len());
    Ok(())
}
