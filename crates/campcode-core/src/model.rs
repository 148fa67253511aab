use serde::{Deserialize, Serialize};

use crate::errors::GenerateError;

/// Smallest length window boundary a caller may request.
pub const LEN_FLOOR: usize = 6;
/// Largest length window boundary a caller may request.
pub const LEN_CEIL: usize = 12;

/// Options for a single generation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Minimum output code length.
    pub min_len: usize,
    /// Maximum output code length.
    pub max_len: usize,
    /// Use a trailing 4-digit token from the input as a year suffix.
    pub include_year: bool,
    /// Maximum number of codes returned.
    pub count: usize,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            min_len: LEN_FLOOR,
            max_len: LEN_CEIL,
            include_year: true,
            count: 8,
        }
    }
}

impl GenerateOptions {
    /// Rejects malformed length windows before any generation work runs.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.min_len < LEN_FLOOR || self.max_len > LEN_CEIL || self.min_len > self.max_len {
            return Err(GenerateError::InvalidBounds {
                min_len: self.min_len,
                max_len: self.max_len,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_are_valid() {
        assert!(GenerateOptions::default().validate().is_ok());
    }

    #[test]
    fn rejects_min_below_floor() {
        let options = GenerateOptions {
            min_len: 5,
            ..GenerateOptions::default()
        };
        assert!(matches!(
            options.validate(),
            Err(GenerateError::InvalidBounds { min_len: 5, .. })
        ));
    }

    #[test]
    fn rejects_max_above_ceil() {
        let options = GenerateOptions {
            max_len: 13,
            ..GenerateOptions::default()
        };
        assert!(matches!(
            options.validate(),
            Err(GenerateError::InvalidBounds { max_len: 13, .. })
        ));
    }

    #[test]
    fn rejects_inverted_window() {
        let options = GenerateOptions {
            min_len: 10,
            max_len: 8,
            ..GenerateOptions::default()
        };
        assert!(options.validate().is_err());
    }
}
