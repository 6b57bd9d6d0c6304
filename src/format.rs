//! Display formatters for color ratios and asset sizes.

// Sizes below 1024 KB are rounded before the cast
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use crate::error::{BrandError, Result};

/// Largest logo file size, in kilobytes, still considered optimized.
pub const OPTIMIZED_LOGO_MAX_KB: f64 = 200.0;

/// Kilobytes per megabyte.
const KB_PER_MB: f64 = 1024.0;

/// Formats a ratio in `0.0..=1.0` as a whole percentage.
///
/// Absent, zero and non-finite ratios format as an empty string. Rounding is
/// half away from zero. Large ratios print every digit rather than clamping.
///
/// # Examples
///
/// ```
/// use brandkit::format::format_ratio;
///
/// assert_eq!(format_ratio(Some(0.6)), "60%");
/// assert_eq!(format_ratio(Some(0.333)), "33%");
/// assert_eq!(format_ratio(Some(0.0)), "");
/// assert_eq!(format_ratio(None), "");
/// ```
#[must_use]
pub fn format_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(ratio) if ratio != 0.0 && ratio.is_finite() => {
            // Adding 0.0 turns a rounded -0.0 into 0.0
            format!("{:.0}%", (ratio * 100.0).round() + 0.0)
        }
        _ => String::new(),
    }
}

/// Formats a size given in kilobytes.
///
/// Below 1024 KB the size is rounded to whole kilobytes, otherwise it is
/// shown in megabytes with one decimal.
///
/// # Examples
///
/// ```
/// use brandkit::format::format_file_size;
///
/// assert_eq!(format_file_size(150.0).unwrap(), "150 KB");
/// assert_eq!(format_file_size(1024.0).unwrap(), "1.0 MB");
/// assert!(format_file_size(-1.0).is_err());
/// ```
///
/// # Errors
///
/// Returns [`BrandError::InvalidSize`] for negative, NaN or infinite sizes.
pub fn format_file_size(size_kb: f64) -> Result<String> {
    if !size_kb.is_finite() || size_kb < 0.0 {
        return Err(BrandError::InvalidSize(size_kb));
    }

    if size_kb < KB_PER_MB {
        Ok(format!("{} KB", size_kb.round() as u64))
    } else {
        Ok(format!("{:.1} MB", size_kb / KB_PER_MB))
    }
}

/// Whether a logo of the given size needs no size-reduction advice.
///
/// True only for `0 < size <= 200` KB. An absent size is not optimized.
#[must_use]
pub fn is_logo_optimized(size_kb: Option<f64>) -> bool {
    size_kb.is_some_and(|size| size > 0.0 && size <= OPTIMIZED_LOGO_MAX_KB)
}
