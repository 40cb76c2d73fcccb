//! Overview command

use clap::Args;
use codeshape_core::diff::render_overview;
use codeshape_engine::overview;
use codeshape_store::Config;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct OverviewArgs {
    /// Snapshot to summarize
    #[arg(long)]
    pub input: PathBuf,
}

pub fn execute(args: OverviewArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let report = overview(&args.input, &config.scope)?;

    print!("{}", render_overview(&report.overview));
    println!("Framework:  {}", report.scopes.framework);
    println!("Leaf:       {}", report.scopes.leaf);
    println!("External:   {}", report.scopes.out_of_scope);
    println!("Digest:     {}", report.digest);
    Ok(())
}
