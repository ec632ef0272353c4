use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use depcruise_options::{CruiseArgs, Defaults, JsonRuleSetCompiler, OptionsNormalizer};
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let args = CruiseArgs::parse();
    debug!("Parsed CLI arguments: {:?}", args);

    let start = Instant::now();

    let defaults = match &args.defaults {
        Some(path) => Defaults::from_file(path)?,
        None => Defaults::default(),
    };

    let raw = args.to_raw_options();
    debug!("Raw options: {:?}", raw);

    let normalizer = OptionsNormalizer::new(JsonRuleSetCompiler::default()).with_defaults(defaults);
    let options = match normalizer.normalize(&raw) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("\n{} {}", "ERROR:".red().bold(), e);
            // Non-zero exit so scripts don't go on to cruise with half-baked options
            std::process::exit(1);
        }
    };

    info!(
        "Normalized options in {}ms (validate: {})",
        start.elapsed().as_millis(),
        options.validate
    );

    serde_json::to_writer_pretty(&mut stdout, &options)?;
    writeln!(stdout)?;
    stdout.flush()?;

    if let Some(rules_file) = &options.rules_file {
        eprintln!("{} Validating against {}", "●".bright_blue(), rules_file.cyan());
    }

    Ok(())
}
