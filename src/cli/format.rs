//! Ratio and file size formatting commands.

use crate::cli::common::{print_json, CliResult};
use crate::format::{format_file_size, format_ratio, is_logo_optimized};
use clap::Args;
use serde::Serialize;

/// Format a color ratio as a percentage
#[derive(Debug, Clone, Args)]
pub struct RatioArgs {
    /// Ratio between 0 and 1. Prints an empty line when omitted or zero.
    #[arg(value_name = "RATIO", allow_negative_numbers = true)]
    pub ratio: Option<f64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct RatioResult {
    ratio: Option<f64>,
    formatted: String,
}

impl RatioArgs {
    /// Execute the ratio command
    pub fn execute(&self) -> CliResult<()> {
        let formatted = format_ratio(self.ratio);

        if self.json {
            print_json(&RatioResult {
                ratio: self.ratio,
                formatted,
            })?;
        } else {
            println!("{formatted}");
        }

        Ok(())
    }
}

/// Format a file size and classify it as a logo
#[derive(Debug, Clone, Args)]
pub struct SizeArgs {
    /// Size in kilobytes
    #[arg(value_name = "KB", allow_negative_numbers = true)]
    pub size_kb: f64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SizeResult {
    size_kb: f64,
    formatted: String,
    optimized: bool,
}

impl SizeArgs {
    /// Execute the size command
    pub fn execute(&self) -> CliResult<()> {
        let result = SizeResult {
            size_kb: self.size_kb,
            formatted: format_file_size(self.size_kb)?,
            optimized: is_logo_optimized(Some(self.size_kb)),
        };

        if self.json {
            print_json(&result)?;
        } else {
            println!("Size:      {}", result.formatted);
            println!(
                "Optimized: {}",
                if result.optimized { "✓ yes" } else { "✗ no" }
            );
        }

        Ok(())
    }
}
