//! Brand colors as supplied by the color editor, with display ordering.
//!
//! Colors arrive as a read-only sequence. The helpers here only derive views
//! of that sequence (sorted, grouped, truncated) and describe inconsistencies;
//! they never modify the colors themselves.

use super::{ColorRole, ContrastColor, RgbColor};
use crate::error::Result;
use crate::format::format_ratio;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Tolerance for the custom ratio sum check.
const RATIO_SUM_TOLERANCE: f64 = 0.01;

/// A single brand color with its assigned role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandColor {
    /// Hex color code, expected as `#RRGGBB`.
    pub hex: String,
    /// Usage role of the color.
    pub role: ColorRole,
    /// Whether the color was picked automatically.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_auto: Option<bool>,
    /// Whether `ratio` overrides the role's base ratio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_custom_ratio: Option<bool>,
    /// Fraction of the visual area assigned to this color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratio: Option<f64>,
}

impl BrandColor {
    /// Creates a color with no optional fields set.
    #[must_use]
    pub fn new(hex: impl Into<String>, role: ColorRole) -> Self {
        Self {
            hex: hex.into(),
            role,
            is_auto: None,
            is_custom_ratio: None,
            ratio: None,
        }
    }

    /// Sets a custom ratio.
    #[must_use]
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.is_custom_ratio = Some(true);
        self.ratio = Some(ratio);
        self
    }

    /// Parses the hex code.
    pub fn rgb(&self) -> Result<RgbColor> {
        RgbColor::from_hex(&self.hex)
    }

    /// Legible text color for a swatch of this color.
    pub fn contrast_color(&self) -> Result<ContrastColor> {
        Ok(self.rgb()?.contrast_color())
    }

    /// Whether the color carries its own ratio.
    #[must_use]
    pub fn has_custom_ratio(&self) -> bool {
        self.is_custom_ratio.unwrap_or(false) && self.ratio.is_some()
    }

    /// Ratio label for the swatch, empty when no ratio is set.
    #[must_use]
    pub fn ratio_label(&self) -> String {
        format_ratio(self.ratio)
    }
}

/// Colors sorted for display: role priority first, original position second.
#[must_use]
pub fn order_for_display(colors: &[BrandColor]) -> Vec<&BrandColor> {
    let mut ordered: Vec<&BrandColor> = colors.iter().collect();
    // sort_by_key is stable, so equal priorities keep their input order
    ordered.sort_by_key(|color| color.role.priority());
    ordered
}

/// Colors grouped by role, groups in priority order.
///
/// Roles with no colors are omitted.
#[must_use]
pub fn group_by_role(colors: &[BrandColor]) -> Vec<(ColorRole, Vec<&BrandColor>)> {
    ColorRole::all()
        .filter_map(|role| {
            let members: Vec<&BrandColor> =
                colors.iter().filter(|color| color.role == role).collect();
            (!members.is_empty()).then_some((role, members))
        })
        .collect()
}

/// A display-ordered list cut to a maximum length.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySlice<'a> {
    /// Colors that are shown.
    pub visible: Vec<&'a BrandColor>,
    /// Number of colors left out.
    pub hidden: usize,
}

/// Orders the colors for display and keeps at most `max_visible` of them.
#[must_use]
pub fn truncate_for_display(colors: &[BrandColor], max_visible: usize) -> DisplaySlice<'_> {
    let mut visible = order_for_display(colors);
    let hidden = visible.len().saturating_sub(max_visible);
    visible.truncate(max_visible);
    DisplaySlice { visible, hidden }
}

/// A single palette consistency finding.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaletteIssue {
    /// The hex code does not parse.
    InvalidColor {
        /// Position in the input sequence.
        index: usize,
        /// The offending hex string.
        hex: String,
    },
    /// More colors than the role allows.
    TooManyForRole {
        /// The overfull role.
        role: ColorRole,
        /// Colors assigned to it.
        count: usize,
        /// The role's `max_count`.
        max: usize,
    },
    /// A custom ratio outside `0.0..=1.0`.
    RatioOutOfRange {
        /// Position in the input sequence.
        index: usize,
        /// The offending ratio.
        ratio: f64,
    },
    /// Every visual color has a custom ratio but they do not add up to 100%.
    CustomRatioSum {
        /// Sum of the custom ratios.
        total: f64,
    },
}

impl fmt::Display for PaletteIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor { index, hex } => {
                write!(f, "color #{} has invalid hex code '{}'", index + 1, hex)
            }
            Self::TooManyForRole { role, count, max } => write!(
                f,
                "{} has {} colors, at most {} allowed",
                role.metadata().label,
                count,
                max
            ),
            Self::RatioOutOfRange { index, ratio } => {
                write!(f, "color #{} has ratio {} outside 0-1", index + 1, ratio)
            }
            Self::CustomRatioSum { total } => write!(
                f,
                "custom ratios of visual colors add up to {}%, expected 100%",
                (total * 100.0).round()
            ),
        }
    }
}

/// Non-failing consistency report over a set of brand colors.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PaletteReport {
    /// Findings in input order, then by role priority.
    pub issues: Vec<PaletteIssue>,
}

impl PaletteReport {
    /// Checks hex codes, role counts and custom ratios.
    #[must_use]
    pub fn analyze(colors: &[BrandColor]) -> Self {
        let mut issues = Vec::new();

        for (index, color) in colors.iter().enumerate() {
            if color.rgb().is_err() {
                issues.push(PaletteIssue::InvalidColor {
                    index,
                    hex: color.hex.clone(),
                });
            }
            if let Some(ratio) = color.ratio.filter(|_| color.has_custom_ratio()) {
                if !ratio.is_finite() || !(0.0..=1.0).contains(&ratio) {
                    issues.push(PaletteIssue::RatioOutOfRange { index, ratio });
                }
            }
        }

        let mut counts: BTreeMap<ColorRole, usize> = BTreeMap::new();
        for color in colors {
            *counts.entry(color.role).or_default() += 1;
        }
        for (role, count) in counts {
            let max = role.metadata().max_count;
            if count > max {
                issues.push(PaletteIssue::TooManyForRole { role, count, max });
            }
        }

        let visual: Vec<&BrandColor> = colors.iter().filter(|c| c.role.is_visual()).collect();
        if !visual.is_empty() && visual.iter().all(|c| c.has_custom_ratio()) {
            let total: f64 = visual.iter().filter_map(|c| c.ratio).sum();
            if total.is_finite() && (total - 1.0).abs() > RATIO_SUM_TOLERANCE {
                issues.push(PaletteIssue::CustomRatioSum { total });
            }
        }

        Self { issues }
    }

    /// True when there are no findings.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}
