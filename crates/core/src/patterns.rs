//! Identifier pattern table
//!
//! The six length/charset rules used to recognise device identifiers, compiled
//! once and shared by reference. The table is never mutated after construction.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::Result;

const ICCID: &str = r"^[0-9]{19,20}$";
const IMEI: &str = r"^[0-9]{14,15}$";
const MEID_HEX: &str = r"^[a-fA-F0-9]{14,15}$";
const MEID_DECIMAL: &str = r"^[0-9]{18}$";
const ESN_HEX: &str = r"^[a-fA-F0-9]{8}$";
const ESN_DECIMAL: &str = r"^[0-9]{11}$";

/// Compiled identifier patterns.
///
/// Build one with [`Patterns::new`] or borrow the process-wide instance from
/// [`Patterns::standard`].
#[derive(Debug, Clone)]
pub struct Patterns {
    iccid: Regex,
    imei: Regex,
    meid_hex: Regex,
    meid_decimal: Regex,
    esn_hex: Regex,
    esn_decimal: Regex,
}

impl Patterns {
    pub fn new() -> Result<Self> {
        Ok(Patterns {
            iccid: Regex::new(ICCID)?,
            imei: Regex::new(IMEI)?,
            meid_hex: Regex::new(MEID_HEX)?,
            meid_decimal: Regex::new(MEID_DECIMAL)?,
            esn_hex: Regex::new(ESN_HEX)?,
            esn_decimal: Regex::new(ESN_DECIMAL)?,
        })
    }

    /// Shared instance, compiled on first use.
    pub fn standard() -> &'static Patterns {
        static STANDARD: OnceLock<Patterns> = OnceLock::new();
        STANDARD.get_or_init(|| Patterns::new().expect("built-in identifier patterns compile"))
    }

    /// 19 or 20 decimal digits.
    pub fn is_iccid(&self, input: &str) -> bool {
        self.iccid.is_match(input)
    }

    /// 14 or 15 decimal digits.
    pub fn is_imei(&self, input: &str) -> bool {
        self.imei.is_match(input)
    }

    /// 14 or 15 hex digits, either case.
    pub fn is_meid_hex(&self, input: &str) -> bool {
        self.meid_hex.is_match(input)
    }

    /// Exactly 18 decimal digits. Says nothing about the numeric range of the fields.
    pub fn is_meid_decimal(&self, input: &str) -> bool {
        self.meid_decimal.is_match(input)
    }

    pub fn is_esn_hex(&self, input: &str) -> bool {
        self.esn_hex.is_match(input)
    }

    pub fn is_esn_decimal(&self, input: &str) -> bool {
        self.esn_decimal.is_match(input)
    }
}
