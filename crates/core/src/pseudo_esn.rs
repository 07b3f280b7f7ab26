//! Pseudo-ESN derivation
//!
//! A pseudo-ESN is `80` followed by the low 24 bits of the SHA-1 digest of the
//! 7 raw MEID bytes.

use sha1::{Digest, Sha1};

use crate::error::{DeviceIdError, Result};
use crate::transform::Radix;

/// Reserved manufacturer code carried by every pseudo-ESN.
pub const PSEUDO_ESN_PREFIX: &str = "80";

const MEID_HEX_LEN: usize = 14;

/// Derive the 8 hex digit pseudo-ESN of a 14 hex digit MEID.
///
/// # Errors
/// - [`DeviceIdError::InvalidMeidLength`] when `meid_hex` is not 14 characters
/// - [`DeviceIdError::MalformedNumeral`] when it contains a non-hex character
pub fn pseudo_esn(meid_hex: &str) -> Result<String> {
    let len = meid_hex.chars().count();
    if len != MEID_HEX_LEN {
        return Err(DeviceIdError::InvalidMeidLength { len });
    }

    let bytes =
        hex::decode(meid_hex).map_err(|_| DeviceIdError::malformed(meid_hex, Radix::Hexadecimal))?;
    let digest = Sha1::digest(&bytes);

    // last 3 bytes = last 6 hex characters of the digest
    Ok(format!(
        "{PSEUDO_ESN_PREFIX}{}",
        hex::encode_upper(&digest[digest.len() - 3..])
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_meids() {
        assert_eq!(pseudo_esn("A0000000000000").unwrap(), "800E99EF");
        assert_eq!(pseudo_esn("A10000009296F2").unwrap(), "8075B7ED");
    }

    #[test]
    fn test_imei_digits_hash_as_hex() {
        assert_eq!(pseudo_esn("49015420323751").unwrap(), "80F2BC1E");
    }

    #[test]
    fn test_lowercase_input() {
        assert_eq!(
            pseudo_esn("a10000009296f2").unwrap(),
            pseudo_esn("A10000009296F2").unwrap()
        );
    }

    #[test]
    fn test_shape() {
        let esn = pseudo_esn("A1000000000000").unwrap();
        assert_eq!(esn.len(), 8);
        assert!(esn.starts_with(PSEUDO_ESN_PREFIX));
        assert!(esn.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_wrong_length() {
        let err = pseudo_esn("A10000009296F").unwrap_err();
        assert!(matches!(err, DeviceIdError::InvalidMeidLength { len: 13 }));

        let err = pseudo_esn("A10000009296F20").unwrap_err();
        assert!(matches!(err, DeviceIdError::InvalidMeidLength { len: 15 }));

        let err = pseudo_esn("").unwrap_err();
        assert!(matches!(err, DeviceIdError::InvalidMeidLength { len: 0 }));
    }

    #[test]
    fn test_non_hex_characters() {
        let err = pseudo_esn("A10000009296FZ").unwrap_err();
        assert!(matches!(
            err,
            DeviceIdError::MalformedNumeral {
                radix: Radix::Hexadecimal,
                ..
            }
        ));
    }
}
