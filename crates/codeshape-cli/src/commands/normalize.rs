//! Normalize command

use clap::Args;
use codeshape_engine::normalize;
use codeshape_store::Config;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Snapshot to read
    #[arg(long)]
    pub input: PathBuf,

    /// Where to write the re-encoded snapshot
    #[arg(long)]
    pub out: PathBuf,
}

pub fn execute(args: NormalizeArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let outcome = normalize(&args.input, &args.out, config.output.indent)?;

    println!("Round trip: ok");
    println!(
        "Unchanged:  {}",
        if outcome.byte_identical { "yes" } else { "no" }
    );
    println!("Digest:     {}", outcome.output_digest);
    Ok(())
}
