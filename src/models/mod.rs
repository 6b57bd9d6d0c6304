//! Data models for brand colors, color roles and logo assets.
//!
//! Models are independent of any rendering layer: they only parse, classify
//! and order the data handed to them.

pub mod brand_color;
pub mod color_role;
pub mod logo;
pub mod rgb;

// Re-export all model types
pub use brand_color::{
    group_by_role, order_for_display, truncate_for_display, BrandColor, DisplaySlice,
    PaletteIssue, PaletteReport,
};
pub use color_role::{get_role_metadata, ColorRole, RoleMetadata};
pub use logo::{LogoAsset, LogoSummary};
pub use rgb::{resolve_contrast_color, ContrastColor, RgbColor};
