//! BrandKit Library
//!
//! This library provides the presentation-independent logic behind brand
//! palette and logo views: the color-role table, contrast color resolution,
//! display ordering of brand colors, and ratio and file size formatting.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod models;

pub use error::{BrandError, Result};
pub use format::{format_file_size, format_ratio, is_logo_optimized};
pub use models::{get_role_metadata, resolve_contrast_color};
