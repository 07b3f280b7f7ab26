//! Identifier classification
//!
//! Patterns are tried from most to least specific and the first match wins:
//! ICCID, IMEI, hex MEID, decimal MEID, hex ESN, decimal ESN.

use std::fmt;

use serde::Serialize;

use crate::patterns::Patterns;
use crate::transform::{transform, FieldLayout, Radix};

/// Longest valid hex MEID.
const MEID_HEX_MAX_LEN: usize = 14;

/// Kind of device identifier detected in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierType {
    Iccid,
    Imei,
    Meid,
    Esn,
    Invalid,
}

impl fmt::Display for IdentifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IdentifierType::Iccid => "ICCID",
            IdentifierType::Imei => "IMEI",
            IdentifierType::Meid => "MEID",
            IdentifierType::Esn => "ESN",
            IdentifierType::Invalid => "invalid",
        };
        f.write_str(name)
    }
}

/// How the identifier digits are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    Decimal,
    Hexadecimal,
    None,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Encoding::Decimal => "decimal",
            Encoding::Hexadecimal => "hexadecimal",
            Encoding::None => "none",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Classification {
    pub kind: IdentifierType,
    pub encoding: Encoding,
}

impl Classification {
    pub const INVALID: Classification =
        Classification::new(IdentifierType::Invalid, Encoding::None);

    pub const fn new(kind: IdentifierType, encoding: Encoding) -> Self {
        Classification { kind, encoding }
    }

    pub fn is_valid(&self) -> bool {
        self.kind != IdentifierType::Invalid
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            IdentifierType::Invalid => write!(f, "{}", self.kind),
            _ => write!(f, "{} ({})", self.kind, self.encoding),
        }
    }
}

/// Classify `input` against `patterns`.
///
/// An 18-digit decimal string only counts as an MEID when both of its fields
/// fit the hex MEID widths; otherwise it is invalid.
pub fn classify_with(patterns: &Patterns, input: &str) -> Classification {
    use Encoding::{Decimal, Hexadecimal};
    use IdentifierType::{Esn, Iccid, Imei, Meid};

    if patterns.is_iccid(input) {
        Classification::new(Iccid, Decimal)
    } else if patterns.is_imei(input) {
        Classification::new(Imei, Decimal)
    } else if patterns.is_meid_hex(input) {
        Classification::new(Meid, Hexadecimal)
    } else if patterns.is_meid_decimal(input) {
        if decimal_meid_in_range(input) {
            Classification::new(Meid, Decimal)
        } else {
            Classification::INVALID
        }
    } else if patterns.is_esn_hex(input) {
        Classification::new(Esn, Hexadecimal)
    } else if patterns.is_esn_decimal(input) {
        Classification::new(Esn, Decimal)
    } else {
        Classification::INVALID
    }
}

/// Classify `input` with the standard pattern table.
pub fn classify(input: &str) -> Classification {
    classify_with(Patterns::standard(), input)
}

pub fn is_valid_with(patterns: &Patterns, input: &str) -> bool {
    classify_with(patterns, input).is_valid()
}

/// True when `input` is a recognised identifier. Does not check a supplied check digit.
pub fn is_valid(input: &str) -> bool {
    is_valid_with(Patterns::standard(), input)
}

fn decimal_meid_in_range(input: &str) -> bool {
    transform(
        input,
        Radix::Decimal,
        Radix::Hexadecimal,
        FieldLayout::MEID_DECIMAL_TO_HEX,
    )
    .map(|hex| hex.len() <= MEID_HEX_MAX_LEN)
    .unwrap_or(false)
}
