//! CLI command handlers for BrandKit.
//!
//! This module provides headless, scriptable access to the color-role model,
//! contrast resolution and asset formatters for automation and CI use.

pub mod common;
pub mod config;
pub mod contrast;
pub mod format;
pub mod logo;
pub mod palette;
pub mod role;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use contrast::ContrastArgs;
pub use format::{RatioArgs, SizeArgs};
pub use logo::LogoArgs;
pub use palette::PaletteArgs;
pub use role::RoleArgs;
