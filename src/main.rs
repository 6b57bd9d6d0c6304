//! BrandKit - color-role model and asset formatting from the command line
//!
//! Exposes contrast resolution, role metadata, palette ordering and logo
//! summaries as scriptable subcommands with optional JSON output.

use brandkit::cli::{
    ConfigArgs, ContrastArgs, LogoArgs, PaletteArgs, RatioArgs, RoleArgs, SizeArgs,
};
use brandkit::constants::APP_BINARY_NAME;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// BrandKit - brand color roles, contrast and asset formatting
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pick black or white text for a background color
    Contrast(ContrastArgs),
    /// Show color role metadata
    Role(RoleArgs),
    /// Format a color ratio as a percentage
    Ratio(RatioArgs),
    /// Format a file size and classify it as a logo
    Size(SizeArgs),
    /// Summarize a logo asset's metadata
    Logo(LogoArgs),
    /// Show brand colors in display order
    Palette(PaletteArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output on stdout stays parseable
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match &cli.command {
        Command::Contrast(args) => args.execute(),
        Command::Role(args) => args.execute(),
        Command::Ratio(args) => args.execute(),
        Command::Size(args) => args.execute(),
        Command::Logo(args) => args.execute(),
        Command::Palette(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code.code());
    }
}
