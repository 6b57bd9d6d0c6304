//! Logo asset metadata and its display summary.

use crate::error::Result;
use crate::format::{format_file_size, is_logo_optimized, OPTIMIZED_LOGO_MAX_KB};
use serde::{Deserialize, Serialize};

/// Logo file metadata as reported by the upload service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogoAsset {
    /// Original file name.
    #[serde(default)]
    pub filename: Option<String>,
    /// File size in kilobytes.
    #[serde(default)]
    pub file_size_kb: Option<f64>,
    /// Pixel dimensions, e.g. "512x512".
    #[serde(default)]
    pub dimensions: Option<String>,
    /// Image format, e.g. "png" or "svg".
    #[serde(default)]
    pub format: Option<String>,
    /// URL of a preview rendition.
    #[serde(default)]
    pub preview_url: Option<String>,
}

/// Values shown on a logo metadata card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoSummary {
    /// File name, if known.
    pub filename: Option<String>,
    /// Formatted size ("150 KB", "1.2 MB"), if known.
    pub size_label: Option<String>,
    /// Pixel dimensions, if known.
    pub dimensions: Option<String>,
    /// Upper-cased format, if known.
    pub format: Option<String>,
    /// Whether the file is within the optimized size range.
    pub optimized: bool,
    /// Size-reduction hint for oversized logos.
    pub advice: Option<String>,
}

impl LogoAsset {
    /// Whether the logo is within the optimized size range.
    #[must_use]
    pub fn is_optimized(&self) -> bool {
        is_logo_optimized(self.file_size_kb)
    }

    /// Builds the display summary.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::BrandError::InvalidSize`] if the stored size is
    /// negative or not a number.
    pub fn summary(&self) -> Result<LogoSummary> {
        let size_label = self.file_size_kb.map(format_file_size).transpose()?;
        let optimized = self.is_optimized();

        // Zero-byte files are not optimized but there is nothing to shrink
        let advice = match self.file_size_kb {
            Some(size) if !optimized && size > 0.0 => Some(format!(
                "Consider reducing the file size to {OPTIMIZED_LOGO_MAX_KB:.0} KB or less for faster loading"
            )),
            _ => None,
        };

        Ok(LogoSummary {
            filename: self.filename.clone(),
            size_label,
            dimensions: self.dimensions.clone(),
            format: self.format.as_ref().map(|f| f.to_uppercase()),
            optimized,
            advice,
        })
    }
}
