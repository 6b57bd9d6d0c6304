//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use tracing::info;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Maximum number of swatches shown by `palette`
    #[arg(long, value_name = "N")]
    max_visible: Option<usize>,

    /// Show ratio percentages next to swatches
    #[arg(long, value_name = "BOOL")]
    show_ratios: Option<bool>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e}")))?;

        if self.json {
            print_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.max_visible.is_none() && self.show_ratios.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --max-visible or --show-ratios",
            ));
        }

        // A missing file loads as defaults; an unreadable one must not be overwritten
        let mut config = Config::load()
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e}")))?;

        if let Some(max_visible) = self.max_visible {
            if max_visible == 0 {
                return Err(CliError::validation("--max-visible must be at least 1"));
            }
            config.display.max_visible_colors = max_visible;
        }

        if let Some(show_ratios) = self.show_ratios {
            config.display.show_ratios = show_ratios;
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e}")))?;

        info!("configuration updated");
        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("BrandKit Configuration");
    println!("======================");
    println!();
    println!("Display:");
    println!("  Max Visible Colors: {}", config.display.max_visible_colors);
    println!("  Show Ratios:        {}", config.display.show_ratios);
}
