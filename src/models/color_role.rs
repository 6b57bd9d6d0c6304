//! Brand color roles and their fixed metadata table.
//!
//! Every brand color is assigned one of five roles. A role carries display
//! text, a target share of the visual area and a display priority. The table
//! is static: nothing in the crate mutates it.

use crate::error::{BrandError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named usage category of a brand color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRole {
    /// Dominant brand color.
    Primary,
    /// Supporting color.
    Secondary,
    /// Highlight color for calls to action.
    Accent,
    /// Light background and surface color.
    NeutralLight,
    /// Dark text and outline color.
    NeutralDark,
}

/// Static description of a [`ColorRole`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoleMetadata {
    /// Role this record describes.
    pub role: ColorRole,
    /// Human-readable name.
    pub label: &'static str,
    /// One-line usage description.
    pub description: &'static str,
    /// Longer hint shown on hover.
    pub tooltip: &'static str,
    /// Target fraction of the visual area. Guidance only, never enforced.
    pub base_ratio: f64,
    /// Display order, 1 is shown first.
    pub priority: u8,
    /// Maximum number of colors the role should hold.
    pub max_count: usize,
}

static PRIMARY: RoleMetadata = RoleMetadata {
    role: ColorRole::Primary,
    label: "Primary",
    description: "Main brand color used for the most prominent elements",
    tooltip: "Dominant color of the design, covering about 60% of the visual area",
    base_ratio: 0.6,
    priority: 1,
    max_count: 2,
};

static SECONDARY: RoleMetadata = RoleMetadata {
    role: ColorRole::Secondary,
    label: "Secondary",
    description: "Supporting color that complements the primary color",
    tooltip: "Used for secondary surfaces and elements, about 30% of the visual area",
    base_ratio: 0.3,
    priority: 2,
    max_count: 3,
};

static ACCENT: RoleMetadata = RoleMetadata {
    role: ColorRole::Accent,
    label: "Accent",
    description: "Highlight color for calls to action and emphasis",
    tooltip: "Used sparingly to draw attention, about 10% of the visual area",
    base_ratio: 0.1,
    priority: 3,
    max_count: 2,
};

static NEUTRAL_LIGHT: RoleMetadata = RoleMetadata {
    role: ColorRole::NeutralLight,
    label: "Neutral Light",
    description: "Light neutral for backgrounds and surfaces",
    tooltip: "Functional color for backgrounds, not counted in the visual ratio",
    base_ratio: 0.0,
    priority: 4,
    max_count: 1,
};

static NEUTRAL_DARK: RoleMetadata = RoleMetadata {
    role: ColorRole::NeutralDark,
    label: "Neutral Dark",
    description: "Dark neutral for text and outlines",
    tooltip: "Functional color for text, not counted in the visual ratio",
    base_ratio: 0.0,
    priority: 5,
    max_count: 1,
};

impl ColorRole {
    /// All roles in priority order.
    pub const ALL: [Self; 5] = [
        Self::Primary,
        Self::Secondary,
        Self::Accent,
        Self::NeutralLight,
        Self::NeutralDark,
    ];

    /// Iterates over all roles in priority order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }

    /// Returns the static metadata record for this role.
    ///
    /// # Examples
    ///
    /// ```
    /// use brandkit::models::ColorRole;
    ///
    /// assert_eq!(ColorRole::Primary.metadata().max_count, 2);
    /// assert_eq!(ColorRole::Accent.metadata().label, "Accent");
    /// ```
    #[must_use]
    pub fn metadata(self) -> &'static RoleMetadata {
        match self {
            Self::Primary => &PRIMARY,
            Self::Secondary => &SECONDARY,
            Self::Accent => &ACCENT,
            Self::NeutralLight => &NEUTRAL_LIGHT,
            Self::NeutralDark => &NEUTRAL_DARK,
        }
    }

    /// Key used in serialized data ("primary", "neutral_light", ...).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::NeutralLight => "neutral_light",
            Self::NeutralDark => "neutral_dark",
        }
    }

    /// Shortcut for `self.metadata().priority`.
    #[must_use]
    pub fn priority(self) -> u8 {
        self.metadata().priority
    }

    /// Whether the role takes part in the 60/30/10 visual area split.
    #[must_use]
    pub const fn is_visual(self) -> bool {
        matches!(self, Self::Primary | Self::Secondary | Self::Accent)
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ColorRole {
    type Err = BrandError;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .find(|role| role.key() == s)
            .ok_or_else(|| BrandError::UnknownRole(s.to_string()))
    }
}

/// Looks up the metadata record for a role key.
///
/// # Examples
///
/// ```
/// use brandkit::models::get_role_metadata;
///
/// assert_eq!(get_role_metadata("primary").unwrap().max_count, 2);
/// assert!(get_role_metadata("tertiary").is_err());
/// ```
///
/// # Errors
///
/// Returns [`BrandError::UnknownRole`] if the key is not one of the five roles.
pub fn get_role_metadata(key: &str) -> Result<&'static RoleMetadata> {
    Ok(key.parse::<ColorRole>()?.metadata())
}
