//! Contrast color resolution command.

use crate::cli::common::{print_json, CliResult};
use crate::models::{ContrastColor, RgbColor};
use clap::Args;
use serde::Serialize;
use tracing::debug;

/// Pick black or white text for a background color
#[derive(Debug, Clone, Args)]
pub struct ContrastArgs {
    /// Background color as #RRGGBB
    #[arg(value_name = "HEX")]
    pub hex: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ContrastResult {
    background: String,
    luma: f64,
    foreground: ContrastColor,
    foreground_name: &'static str,
}

impl ContrastArgs {
    /// Execute the contrast command
    pub fn execute(&self) -> CliResult<()> {
        let color = RgbColor::from_hex(&self.hex)?;
        let foreground = color.contrast_color();
        debug!(background = %color, luma = color.luma(), %foreground, "resolved contrast color");

        let result = ContrastResult {
            background: color.to_hex(),
            luma: color.luma(),
            foreground,
            foreground_name: foreground.name(),
        };

        if self.json {
            print_json(&result)?;
        } else {
            println!("Background: {}", result.background);
            println!("Luma:       {:.1}", result.luma);
            println!("Text color: {} ({})", result.foreground, result.foreground_name);
        }

        Ok(())
    }
}
