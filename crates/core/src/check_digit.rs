//! Luhn-family check digits
//!
//! Both variants walk the payload from the rightmost digit, double every
//! second digit starting with the rightmost one, and reduce the total mod 10.
//! The hexadecimal variant reads each digit as its value 0-15 and folds every
//! term back to the sum of its decimal digits, so its result is always 0-9.

use crate::error::{DeviceIdError, Result};
use crate::transform::Radix;

/// Change in a decimal digit's contribution when it is doubled and its
/// digits are summed: `digit_sum(2 * d) - d`.
const DOUBLING_DELTA: [i32; 10] = [0, 1, 2, 3, 4, -4, -3, -2, -1, 0];

/// Compute the check digit for `digits` (payload only, no check digit).
///
/// The result is a single digit of `radix`, uppercase for hex. An empty payload
/// yields `'0'`.
///
/// # Errors
/// [`DeviceIdError::MalformedNumeral`] when `digits` contains a character that
/// is not a digit of `radix`.
pub fn check_digit(digits: &str, radix: Radix) -> Result<char> {
    let values = digits
        .chars()
        .map(|c| radix.digit_value(c))
        .collect::<Option<Vec<u32>>>()
        .ok_or_else(|| DeviceIdError::malformed(digits, radix))?;

    let sum = match radix {
        Radix::Decimal => decimal_sum(&values),
        Radix::Hexadecimal => hexadecimal_sum(&values),
    };

    let check = (10 - sum.rem_euclid(10)) % 10;

    // check is 0..=9, a digit in either base
    Ok(char::from_digit(check as u32, radix.as_u32())
        .unwrap_or('0')
        .to_ascii_uppercase())
}

fn decimal_sum(values: &[u32]) -> i32 {
    let plain: i32 = values.iter().map(|&v| v as i32).sum();
    let delta: i32 = values
        .iter()
        .rev()
        .step_by(2)
        .map(|&v| DOUBLING_DELTA[v as usize])
        .sum();
    plain + delta
}

fn hexadecimal_sum(values: &[u32]) -> i32 {
    values
        .iter()
        .rev()
        .enumerate()
        .map(|(idx, &v)| if idx % 2 == 0 { digit_sum(v * 2) } else { digit_sum(v) })
        .sum::<u32>() as i32
}

fn digit_sum(mut value: u32) -> u32 {
    let mut sum = 0;
    while value > 0 {
        sum += value % 10;
        value /= 10;
    }
    sum
}
