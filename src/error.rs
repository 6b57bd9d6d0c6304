//! Error types for color, role and size validation.

use thiserror::Error;

/// Errors raised by the color-role model and the asset formatters.
///
/// All variants are local validation failures. None of them is retryable:
/// the caller has to fix the input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BrandError {
    /// The string is not a `#RRGGBB` hex color.
    #[error("Invalid hex color format '{0}'. Expected '#' followed by 6 hex digits (#RRGGBB)")]
    InvalidColorFormat(String),

    /// The role key is not one of the five defined color roles.
    #[error("Unknown color role '{0}'. Expected one of: primary, secondary, accent, neutral_light, neutral_dark")]
    UnknownRole(String),

    /// The size is negative or not a number.
    #[error("Invalid size {0} KB. Size must be a non-negative number")]
    InvalidSize(f64),
}

/// Result alias for [`BrandError`].
pub type Result<T> = std::result::Result<T, BrandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_input() {
        let err = BrandError::InvalidColorFormat("#12345".to_string());
        assert!(err.to_string().contains("'#12345'"));

        let err = BrandError::UnknownRole("tertiary".to_string());
        assert!(err.to_string().contains("'tertiary'"));
        assert!(err.to_string().contains("neutral_light"));

        let err = BrandError::InvalidSize(-3.0);
        assert!(err.to_string().contains("-3"));
    }
}
