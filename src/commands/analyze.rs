//! The analyze command: inspect certificates before generating anything

use crate::cli::AnalyzeArgs;
use crate::store_ops;
use console::style;

/// Decode the given PEM file and print a summary of every certificate found
pub fn run_analyze(args: &AnalyzeArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.file)?;
    let chain = store_ops::decode_certificates(&text);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&chain.records())?);
        return Ok(());
    }

    for warning in &chain.warnings {
        eprintln!("{} {}", style("Warning:").yellow().bold(), warning);
    }

    if chain.is_empty() {
        println!(
            "{} no certificates found in {}",
            style("Note:").yellow().bold(),
            args.file.display()
        );
        return Ok(());
    }

    println!(
        "{} {} certificate(s) in {}\n",
        style("Found").green().bold(),
        chain.len(),
        args.file.display()
    );

    for cert in &chain.certificates {
        let record = &cert.record;
        let marker = if record.is_root {
            style(" [root]").cyan().bold().to_string()
        } else {
            String::new()
        };

        println!("{}{}", style(format!("#{}", record.index)).bold(), marker);
        println!("  Subject:    {}", record.subject);
        println!("  Issuer:     {}", record.issuer);
        println!("  Not before: {}", record.not_before.to_rfc3339());
        println!("  Not after:  {}", record.not_after.to_rfc3339());
        println!();
    }

    Ok(())
}
