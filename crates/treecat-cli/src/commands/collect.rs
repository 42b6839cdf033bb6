use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use treecat_core::{collect, CollectorConfig};

use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct CollectArgs {
    /// Root directory to walk
    pub root: PathBuf,

    /// Path of the generated snapshot file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Included extension, with or without the leading dot (repeatable)
    #[arg(short = 'e', long = "ext", required = true, value_delimiter = ',')]
    pub extensions: Vec<String>,
}

pub fn run(args: &CollectArgs, fmt: OutputFormat) -> Result<()> {
    let config = CollectorConfig::new(
        args.root.clone(),
        args.output.clone(),
        args.extensions.iter().map(String::as_str),
    );
    tracing::info!(
        "Snapshotting {} into {}",
        config.root.display(),
        config.output_path.display()
    );

    let report = collect(&config)
        .with_context(|| format!("Failed to snapshot {}", args.root.display()))?;

    println!("{}", output::format_report(&report, &args.output, fmt));
    Ok(())
}
