//! Logo metadata summary command.

use crate::cli::common::{print_json, read_json_file, CliResult};
use crate::models::LogoAsset;
use clap::Args;
use std::path::PathBuf;
use tracing::debug;

/// Summarize a logo asset's metadata
#[derive(Debug, Clone, Args)]
pub struct LogoArgs {
    /// Path to a JSON file with the logo metadata
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl LogoArgs {
    /// Execute the logo command
    pub fn execute(&self) -> CliResult<()> {
        let asset: LogoAsset = read_json_file(&self.file)?;
        debug!(file = %self.file.display(), size_kb = ?asset.file_size_kb, "loaded logo metadata");

        let summary = asset.summary()?;

        if self.json {
            print_json(&summary)?;
            return Ok(());
        }

        let unknown = "(unknown)";
        println!(
            "File:       {}",
            summary.filename.as_deref().unwrap_or(unknown)
        );
        println!(
            "Size:       {}",
            summary.size_label.as_deref().unwrap_or(unknown)
        );
        println!(
            "Dimensions: {}",
            summary.dimensions.as_deref().unwrap_or(unknown)
        );
        println!(
            "Format:     {}",
            summary.format.as_deref().unwrap_or(unknown)
        );
        if summary.optimized {
            println!("Status:     ✓ Optimized");
        } else {
            println!("Status:     ✗ Not optimized");
        }
        if let Some(advice) = &summary.advice {
            println!();
            println!("{advice}");
        }

        Ok(())
    }
}
