//! Compare command

use clap::Args;
use codeshape_core::diff::render_overview;
use codeshape_engine::{compare, CompareOptions};
use codeshape_store::Config;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Baseline snapshot
    #[arg(long)]
    pub old: PathBuf,

    /// Snapshot to compare against the baseline
    #[arg(long)]
    pub new: PathBuf,

    /// Where to write the change-set
    #[arg(long, default_value = "changes.json")]
    pub out: PathBuf,
}

pub fn execute(args: CompareArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let options = CompareOptions {
        indent: config.output.indent,
    };
    let outcome = compare(&args.old, &args.new, &args.out, options)?;

    if outcome.is_unchanged() {
        println!("No changes");
    } else {
        print!("{}", render_overview(&outcome.changes));
    }
    println!("Digest:     {}", outcome.digest);
    println!("Written:    {}", outcome.out_path.display());
    Ok(())
}
