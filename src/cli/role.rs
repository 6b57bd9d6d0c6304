//! Color role metadata command.

use crate::cli::common::{print_json, CliResult};
use crate::format::format_ratio;
use crate::models::{get_role_metadata, ColorRole, RoleMetadata};
use clap::Args;

/// Show color role metadata
#[derive(Debug, Clone, Args)]
pub struct RoleArgs {
    /// Role key (primary, secondary, accent, neutral_light, neutral_dark).
    /// Lists every role when omitted.
    #[arg(value_name = "ROLE")]
    pub role: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl RoleArgs {
    /// Execute the role command
    pub fn execute(&self) -> CliResult<()> {
        if let Some(key) = &self.role {
            let meta = get_role_metadata(key)?;
            if self.json {
                print_json(meta)?;
            } else {
                print_role(meta);
            }
            return Ok(());
        }

        let all: Vec<&RoleMetadata> = ColorRole::all().map(ColorRole::metadata).collect();
        if self.json {
            print_json(&all)?;
        } else {
            for (i, meta) in all.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print_role(meta);
            }
        }

        Ok(())
    }
}

fn print_role(meta: &RoleMetadata) {
    let ratio = format_ratio(Some(meta.base_ratio));
    println!("{} ({})", meta.label, meta.role);
    println!("  Description: {}", meta.description);
    println!("  Tooltip:     {}", meta.tooltip);
    println!(
        "  Base ratio:  {}",
        if ratio.is_empty() { "-" } else { ratio.as_str() }
    );
    println!("  Priority:    {}", meta.priority);
    println!("  Max colors:  {}", meta.max_count);
}
