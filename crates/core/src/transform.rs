//! Two-field base conversion
//!
//! MEIDs and ESNs are displayed either as one hex string or as two decimal
//! fields glued together (manufacturer code + serial number). Converting between
//! the two forms splits the serial at a fixed width, converts each field on its
//! own, and zero-pads each field to its own width.

use std::fmt;

use crate::error::{DeviceIdError, Result};

/// Numeral base of an identifier field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    Decimal,
    Hexadecimal,
}

impl Radix {
    pub fn as_u32(self) -> u32 {
        match self {
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    /// Numeric value of `c` in this base, if it is a digit of the base.
    pub fn digit_value(self, c: char) -> Option<u32> {
        c.to_digit(self.as_u32())
    }

    fn render(self, value: u128) -> String {
        match self {
            Radix::Decimal => value.to_string(),
            Radix::Hexadecimal => format!("{value:X}"),
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

/// Split point and pad widths for a two-field conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    /// Characters taken from the front of the serial for the first field.
    pub part1_width: usize,
    /// Minimum rendered width of the first field.
    pub part1_pad: usize,
    /// Minimum rendered width of the second field.
    pub part2_pad: usize,
}

impl FieldLayout {
    /// 18-digit decimal MEID to 14-digit hex MEID.
    pub const MEID_DECIMAL_TO_HEX: FieldLayout = FieldLayout::new(10, 8, 6);
    /// 14-digit hex MEID to 18-digit decimal MEID.
    pub const MEID_HEX_TO_DECIMAL: FieldLayout = FieldLayout::new(8, 10, 8);
    /// 8-digit hex ESN to 11-digit decimal ESN.
    pub const ESN_HEX_TO_DECIMAL: FieldLayout = FieldLayout::new(2, 3, 8);
    /// 11-digit decimal ESN to 8-digit hex ESN.
    pub const ESN_DECIMAL_TO_HEX: FieldLayout = FieldLayout::new(3, 2, 6);

    pub const fn new(part1_width: usize, part1_pad: usize, part2_pad: usize) -> Self {
        FieldLayout {
            part1_width,
            part1_pad,
            part2_pad,
        }
    }
}

/// Re-encode `serial` from `src` to `dst` using `layout`.
///
/// Padding never truncates: a field whose converted value is wider than its pad
/// width is emitted at full length, so an out-of-range input shows up as an
/// over-long result. Hex output is uppercase.
///
/// # Errors
/// [`DeviceIdError::MalformedNumeral`] when a field is empty, contains a
/// character outside the source alphabet, or does not fit in 128 bits.
pub fn transform(serial: &str, src: Radix, dst: Radix, layout: FieldLayout) -> Result<String> {
    let split = serial
        .char_indices()
        .nth(layout.part1_width)
        .map(|(idx, _)| idx)
        .unwrap_or(serial.len());
    let (part1, part2) = serial.split_at(split);

    let part1 = dst.render(parse_field(part1, src)?);
    let part2 = dst.render(parse_field(part2, src)?);

    Ok(format!(
        "{part1:0>width1$}{part2:0>width2$}",
        width1 = layout.part1_pad,
        width2 = layout.part2_pad
    ))
}

fn parse_field(field: &str, radix: Radix) -> Result<u128> {
    // from_str_radix would accept a leading '+'
    if field.is_empty() || !field.chars().all(|c| radix.digit_value(c).is_some()) {
        return Err(DeviceIdError::malformed(field, radix));
    }

    u128::from_str_radix(field, radix.as_u32())
        .map_err(|_| DeviceIdError::malformed(field, radix))
}
