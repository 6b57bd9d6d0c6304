//! Brand palette display command.

use crate::cli::common::{print_json, read_json_file, CliError, CliResult};
use crate::config::Config;
use crate::models::{truncate_for_display, BrandColor, ColorRole, ContrastColor, PaletteReport};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Show brand colors in display order
#[derive(Debug, Clone, Args)]
pub struct PaletteArgs {
    /// Path to a JSON array of brand colors
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    /// Maximum number of colors to show (defaults to the configured limit)
    #[arg(long, value_name = "N")]
    pub max: Option<usize>,

    /// Append a consistency report
    #[arg(long)]
    pub check: bool,

    /// Exit with an error when the report has findings (implies --check)
    #[arg(long)]
    pub strict: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SwatchOutput {
    hex: String,
    role: ColorRole,
    label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    text_color: Option<ContrastColor>,
    ratio: String,
    is_auto: bool,
}

#[derive(Debug, Serialize)]
struct PaletteOutput {
    colors: Vec<SwatchOutput>,
    hidden: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<PaletteReport>,
}

impl PaletteArgs {
    /// Execute the palette command
    pub fn execute(&self) -> CliResult<()> {
        let colors: Vec<BrandColor> = read_json_file(&self.file)?;
        debug!(file = %self.file.display(), count = colors.len(), "loaded brand colors");

        let config = Config::load().unwrap_or_else(|e| {
            warn!("Failed to load config, using defaults: {e}");
            Config::default()
        });

        let max_visible = self.max.unwrap_or(config.display.max_visible_colors);
        if max_visible == 0 {
            return Err(CliError::validation("--max must be at least 1"));
        }

        let slice = truncate_for_display(&colors, max_visible);
        let swatches: Vec<SwatchOutput> = slice
            .visible
            .iter()
            .map(|color| SwatchOutput {
                hex: color.hex.clone(),
                role: color.role,
                label: color.role.metadata().label,
                text_color: color.contrast_color().ok(),
                ratio: if config.display.show_ratios {
                    color.ratio_label()
                } else {
                    String::new()
                },
                is_auto: color.is_auto.unwrap_or(false),
            })
            .collect();

        let report = (self.check || self.strict).then(|| PaletteReport::analyze(&colors));

        let output = PaletteOutput {
            colors: swatches,
            hidden: slice.hidden,
            report,
        };

        if self.json {
            print_json(&output)?;
        } else {
            output_human_readable(&output);
        }

        if self.strict {
            if let Some(report) = &output.report {
                if !report.is_clean() {
                    return Err(CliError::validation(format!(
                        "Palette has {} issue(s)",
                        report.issues.len()
                    )));
                }
            }
        }

        Ok(())
    }
}

fn output_human_readable(output: &PaletteOutput) {
    if output.colors.is_empty() {
        println!("No colors.");
    }

    for swatch in &output.colors {
        let text = swatch
            .text_color
            .map_or_else(|| "invalid".to_string(), |c| c.to_string());
        let mut line = format!("{:<8} {:<14} text {}", swatch.hex, swatch.label, text);
        if !swatch.ratio.is_empty() {
            line.push_str(&format!("  {}", swatch.ratio));
        }
        if swatch.is_auto {
            line.push_str("  (auto)");
        }
        println!("{line}");
    }

    if output.hidden > 0 {
        println!("+{} more", output.hidden);
    }

    if let Some(report) = &output.report {
        println!();
        if report.is_clean() {
            println!("✓ No issues found");
        } else {
            println!("Issues:");
            for issue in &report.issues {
                println!("  ✗ {issue}");
            }
        }
    }
}
