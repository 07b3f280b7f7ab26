use thiserror::Error;

use crate::transform::Radix;

/// Error type for identifier classification and conversion
#[derive(Debug, Error)]
pub enum DeviceIdError {
    /// The input matches no identifier pattern, or is an 18-digit decimal
    /// MEID whose fields are out of range.
    #[error("Invalid device identifier format: {input:?}")]
    InvalidFormat { input: String },

    #[error("Malformed base-{radix} numeral: {part:?}")]
    MalformedNumeral { part: String, radix: Radix },

    #[error("Pseudo-ESN needs a 14 character hex MEID, got {len} characters")]
    InvalidMeidLength { len: usize },

    #[error("Invalid identifier pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl DeviceIdError {
    pub(crate) fn malformed(part: &str, radix: Radix) -> Self {
        DeviceIdError::MalformedNumeral {
            part: part.to_string(),
            radix,
        }
    }
}

/// Result type for identifier operations.
pub type Result<T> = std::result::Result<T, DeviceIdError>;
