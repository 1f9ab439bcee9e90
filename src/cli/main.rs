mod commands;
mod files;

use std::path::{Path, PathBuf};

use aba_to_wise::{BatchConverter, TrailingRecord};
use anyhow::{Context, Result};
use clap::Parser;
use commands::Args;

fn main() -> Result<()> {
    // Parse the CLI arguments
    let args = Args::parse();

    // Initialize logger with default level of warn (can be overridden with RUST_LOG)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // 1. Resolve the input file, before anything is written
    let input_file = resolve_input(args.input_file.as_deref())?;
    let output_file = args
        .output
        .clone()
        .unwrap_or_else(|| files::output_path(&input_file));

    println!("\nProcessing: {}", input_file.display());
    println!("Output will be saved to: {}", output_file.display());

    // 2. Decode the whole input; the file is closed when it goes out of scope
    let trailing_record = if args.include_last {
        TrailingRecord::Keep
    } else {
        TrailingRecord::Drop
    };
    let mut converter = BatchConverter::new()
        .with_trailing_record(trailing_record)
        .with_strict_line_length(args.strict);
    {
        let file = std::fs::File::open(&input_file)
            .with_context(|| format!("Failed to open input file: {}", input_file.display()))?;
        converter
            .decode_records(file)
            .with_context(|| format!("Failed to decode {}", input_file.display()))?;
    }

    if let Some(description) = converter.batch_description() {
        log::info!("Batch description: {description}");
    }
    if converter.row_count() == 0 {
        log::warn!(
            "No rows to export from {} transactions (file may only contain the offsetting transaction)",
            converter.transaction_count()
        );
    }

    // 3. Export the Wise batch
    let output = std::fs::File::create(&output_file)
        .with_context(|| format!("Failed to create output file: {}", output_file.display()))?;
    converter
        .export_batch(output)
        .with_context(|| format!("Failed to write {}", output_file.display()))?;

    println!("Converted {} transactions", converter.row_count());
    println!(
        "Wise batch file '{}' created successfully.",
        output_file.display()
    );

    Ok(())
}

fn resolve_input(input_file: Option<&Path>) -> Result<PathBuf> {
    match input_file {
        Some(path) => {
            files::validate_input(path)?;
            Ok(path.to_path_buf())
        }
        None => {
            let stdin = std::io::stdin();
            let selected = files::prompt_for_file(Path::new("."), stdin.lock(), std::io::stdout())
                .context("Failed to select an input file")?;
            Ok(selected)
        }
    }
}
