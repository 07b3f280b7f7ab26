//! Conversion orchestration
//!
//! Classifies the input once, then runs the transformer, check-digit
//! calculator and pseudo-ESN deriver as the identifier type requires.
//! Fields that do not apply to the detected type stay `None`.

use serde::Serialize;

use crate::check_digit::check_digit;
use crate::classify::{classify_with, Classification, Encoding, IdentifierType};
use crate::error::{DeviceIdError, Result};
use crate::patterns::Patterns;
use crate::pseudo_esn::pseudo_esn;
use crate::transform::{transform, FieldLayout, Radix};

/// ICCID digits kept before the check digit.
const ICCID_BODY_LEN: usize = 19;
/// IMEI and hex MEID digits kept before the check digit.
const MEID_BODY_LEN: usize = 14;

/// Every representation derived from one identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub input: String,
    pub classification: Classification,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iccid_decimal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iccid_check_digit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imei_decimal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imei_check_digit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meid_hex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meid_hex_check_digit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meid_decimal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meid_decimal_check_digit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub esn_hex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub esn_decimal: Option<String>,
}

impl ConversionResult {
    fn new(input: &str, classification: Classification) -> Self {
        ConversionResult {
            input: input.to_string(),
            classification,
            iccid_decimal: None,
            iccid_check_digit: None,
            imei_decimal: None,
            imei_check_digit: None,
            meid_hex: None,
            meid_hex_check_digit: None,
            meid_decimal: None,
            meid_decimal_check_digit: None,
            esn_hex: None,
            esn_decimal: None,
        }
    }

    /// Populated result fields as `(name, value)` pairs, in a fixed order.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("iccidDecimal", &self.iccid_decimal),
            ("iccidCheckDigit", &self.iccid_check_digit),
            ("imeiDecimal", &self.imei_decimal),
            ("imeiCheckDigit", &self.imei_check_digit),
            ("meidHex", &self.meid_hex),
            ("meidHexCheckDigit", &self.meid_hex_check_digit),
            ("meidDecimal", &self.meid_decimal),
            ("meidDecimalCheckDigit", &self.meid_decimal_check_digit),
            ("esnHex", &self.esn_hex),
            ("esnDecimal", &self.esn_decimal),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
        .collect()
    }

    /// Human-readable composite of the main fields for the detected type.
    ///
    /// - ICCID: `<iccidDecimal><iccidCheckDigit>`
    /// - IMEI: `<meidHex><imeiCheckDigit> / <meidDecimal>`
    /// - MEID: `<meidHex> / <meidDecimal>`
    /// - ESN: `<esnHex> / <esnDecimal>`
    pub fn summary(&self) -> Result<String> {
        let field = |value: &Option<String>| value.clone().unwrap_or_default();

        match self.classification.kind {
            IdentifierType::Iccid => Ok(format!(
                "{}{}",
                field(&self.iccid_decimal),
                field(&self.iccid_check_digit)
            )),
            IdentifierType::Imei => Ok(format!(
                "{}{} / {}",
                field(&self.meid_hex),
                field(&self.imei_check_digit),
                field(&self.meid_decimal)
            )),
            IdentifierType::Meid => Ok(format!(
                "{} / {}",
                field(&self.meid_hex),
                field(&self.meid_decimal)
            )),
            IdentifierType::Esn => Ok(format!(
                "{} / {}",
                field(&self.esn_hex),
                field(&self.esn_decimal)
            )),
            IdentifierType::Invalid => Err(DeviceIdError::InvalidFormat {
                input: self.input.clone(),
            }),
        }
    }

    /// Fill the MEID family of fields from both MEID forms.
    ///
    /// A hex MEID made only of decimal digits is an IMEI: its check digit uses
    /// the decimal variant and is reported as the IMEI check digit too.
    fn populate_meid(
        &mut self,
        patterns: &Patterns,
        meid_hex: String,
        meid_decimal: String,
        with_pseudo_esn: bool,
    ) -> Result<()> {
        let imei_form = patterns.is_imei(&meid_hex);
        let radix = if imei_form {
            Radix::Decimal
        } else {
            Radix::Hexadecimal
        };

        let hex_check = check_digit(&meid_hex, radix)?.to_string();
        if imei_form {
            self.imei_check_digit = Some(hex_check.clone());
        }
        self.meid_hex_check_digit = Some(hex_check);
        self.meid_decimal_check_digit =
            Some(check_digit(&meid_decimal, Radix::Decimal)?.to_string());

        if with_pseudo_esn {
            let esn_hex = pseudo_esn(&meid_hex)?;
            self.esn_decimal = Some(esn_hex_to_decimal(&esn_hex)?);
            self.esn_hex = Some(esn_hex);
        }

        self.meid_hex = Some(meid_hex);
        self.meid_decimal = Some(meid_decimal);
        Ok(())
    }
}

/// Classify `input` and derive every representation of it.
///
/// Supplied check digits are discarded and recomputed.
///
/// # Errors
/// - [`DeviceIdError::InvalidFormat`] when the input is not a recognised identifier
/// - Any transformer or pseudo-ESN failure, unchanged
pub fn convert_with(patterns: &Patterns, input: &str) -> Result<ConversionResult> {
    let classification = classify_with(patterns, input);
    let mut result = ConversionResult::new(input, classification);

    match (classification.kind, classification.encoding) {
        (IdentifierType::Iccid, _) => {
            let body = leading(input, ICCID_BODY_LEN);
            result.iccid_check_digit = Some(check_digit(body, Radix::Decimal)?.to_string());
            result.iccid_decimal = Some(body.to_string());
        }
        (IdentifierType::Imei, _) => {
            let body = leading(input, MEID_BODY_LEN).to_string();
            let decimal = meid_hex_to_decimal(&body)?;
            result.imei_decimal = Some(decimal.clone());
            result.populate_meid(patterns, body, decimal, true)?;
        }
        (IdentifierType::Meid, Encoding::Hexadecimal) => {
            let body = leading(input, MEID_BODY_LEN).to_ascii_uppercase();
            let decimal = meid_hex_to_decimal(&body)?;
            result.populate_meid(patterns, body, decimal, true)?;
        }
        (IdentifierType::Meid, Encoding::Decimal) => {
            let hex = transform(
                input,
                Radix::Decimal,
                Radix::Hexadecimal,
                FieldLayout::MEID_DECIMAL_TO_HEX,
            )?;
            // an IMEI written in decimal MEID display form has no pseudo-ESN
            let with_pseudo_esn = !patterns.is_imei(&hex);
            result.populate_meid(patterns, hex, input.to_string(), with_pseudo_esn)?;
        }
        (IdentifierType::Esn, Encoding::Hexadecimal) => {
            let esn_hex = input.to_ascii_uppercase();
            result.esn_decimal = Some(esn_hex_to_decimal(&esn_hex)?);
            result.esn_hex = Some(esn_hex);
        }
        (IdentifierType::Esn, Encoding::Decimal) => {
            result.esn_hex = Some(transform(
                input,
                Radix::Decimal,
                Radix::Hexadecimal,
                FieldLayout::ESN_DECIMAL_TO_HEX,
            )?);
            result.esn_decimal = Some(input.to_string());
        }
        _ => {
            return Err(DeviceIdError::InvalidFormat {
                input: input.to_string(),
            })
        }
    }

    Ok(result)
}

/// Convert `input` with the standard pattern table.
pub fn convert(input: &str) -> Result<ConversionResult> {
    convert_with(Patterns::standard(), input)
}

pub fn format_summary_with(patterns: &Patterns, input: &str) -> Result<String> {
    convert_with(patterns, input)?.summary()
}

/// Composite summary string for `input`, see [`ConversionResult::summary`].
pub fn format_summary(input: &str) -> Result<String> {
    format_summary_with(Patterns::standard(), input)
}

/// First `len` characters. Classified inputs are ASCII.
fn leading(input: &str, len: usize) -> &str {
    input.get(..len).unwrap_or(input)
}

fn meid_hex_to_decimal(meid_hex: &str) -> Result<String> {
    transform(
        meid_hex,
        Radix::Hexadecimal,
        Radix::Decimal,
        FieldLayout::MEID_HEX_TO_DECIMAL,
    )
}

fn esn_hex_to_decimal(esn_hex: &str) -> Result<String> {
    transform(
        esn_hex,
        Radix::Hexadecimal,
        Radix::Decimal,
        FieldLayout::ESN_HEX_TO_DECIMAL,
    )
}
