use std::path::PathBuf;

use clap::Parser;
use jsonveil::{read_document, transform, write_document, RedactionPolicy};
use tracing::info;

/// The CLI for the jsonveil JSON obfuscation tool.
///
/// Replaces JSON values (and optionally key names) with deterministic MD5
/// hashes while leaving the listed keys untouched, preserving the document
/// shape so the output can still be compared structurally against the input.
///
/// # Examples
///
/// Hash everything except `name` and `password`:
/// ```bash
/// jsonveil input.json output.json name password
/// ```
///
/// Additionally hash key names, keeping `id` readable:
/// ```bash
/// jsonveil input.json output.json name --obfuscate_keys --exclude_object_names id
/// ```
#[derive(Parser)]
#[command(name = "jsonveil")]
#[command(about = "MD5-hash all JSON values except for specific keys")]
pub struct Cli {
    /// Path to the input JSON file
    pub input_file: PathBuf,

    /// Path to the output JSON file
    pub output_file: PathBuf,

    /// Keys whose values are excluded from hashing (at least one)
    #[arg(required = true, num_args = 1.., value_name = "KEY")]
    pub exclude_keys: Vec<String>,

    /// Also replace object key names with their hash
    #[arg(long = "obfuscate_keys")]
    pub obfuscate_keys: bool,

    /// Key names exempt from key-name hashing (only with --obfuscate_keys)
    #[arg(long = "exclude_object_names", num_args = 1.., value_name = "KEY")]
    pub exclude_object_names: Vec<String>,

    /// Output logs in JSON format
    #[arg(long)]
    pub json: bool,

    /// Increase verbosity (can be used multiple times: -v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Execute one obfuscation run.
///
/// Reads the input document, applies the redaction policy, and writes the
/// transformed document. On success a confirmation naming the output path is
/// printed to stdout.
///
/// # Arguments
/// * `cli` - The parsed CLI arguments.
///
/// # Returns
/// Returns `Ok(())` on success, or a `JsonveilError` on failure.
pub fn run_command(cli: Cli) -> jsonveil::Result<()> {
    info!(
        "Obfuscating '{}' into '{}' ({} excluded key(s))",
        cli.input_file.display(),
        cli.output_file.display(),
        cli.exclude_keys.len()
    );

    let policy = RedactionPolicy::new(
        cli.exclude_keys,
        cli.obfuscate_keys,
        cli.exclude_object_names,
    );

    let document = read_document(&cli.input_file)?;
    let obfuscated = transform(&document, &policy);
    write_document(&cli.output_file, &obfuscated)?;

    info!("Obfuscated document written to '{}'", cli.output_file.display());
    println!("Processed JSON saved to {}", cli.output_file.display());

    Ok(())
}
