use devid_core::{
    check_digit, classify, convert, is_valid, transform, ConversionResult, Encoding, FieldLayout,
    IdentifierType, Radix,
};
use proptest::prelude::*;

fn fields(result: &ConversionResult) -> Vec<(&'static str, String)> {
    result
        .fields()
        .into_iter()
        .map(|(name, value)| (name, value.to_string()))
        .collect()
}

/// Textbook Luhn verification over a number that ends in its check digit.
fn luhn_valid(number: &str) -> bool {
    let sum: u32 = number
        .chars()
        .rev()
        .enumerate()
        .map(|(idx, c)| {
            let d = c.to_digit(10).unwrap();
            if idx % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

/// Hex MEIDs that cannot be mistaken for an IMEI.
fn meid_hex() -> impl Strategy<Value = String> {
    "[0-9A-F]{14}".prop_filter("all-digit MEIDs classify as IMEI", |m| {
        !m.chars().all(|c| c.is_ascii_digit())
    })
}

proptest! {
    #[test]
    fn iccid_lengths_always_classify_as_iccid(s in "[0-9]{19,20}") {
        prop_assert_eq!(classify(&s).kind, IdentifierType::Iccid);
    }

    #[test]
    fn meid_pseudo_esn_shape(m in meid_hex()) {
        let result = convert(&m).unwrap();
        let esn = result.esn_hex.unwrap();
        prop_assert_eq!(esn.len(), 8);
        prop_assert!(esn.starts_with("80"));
        prop_assert_eq!(result.esn_decimal.map(|d| d.len()), Some(11));
    }

    #[test]
    fn meid_base_round_trip(m in "[0-9A-F]{14}") {
        let decimal = transform(&m, Radix::Hexadecimal, Radix::Decimal, FieldLayout::MEID_HEX_TO_DECIMAL)
            .unwrap();
        prop_assert_eq!(decimal.len(), 18);
        let hex = transform(&decimal, Radix::Decimal, Radix::Hexadecimal, FieldLayout::MEID_DECIMAL_TO_HEX)
            .unwrap();
        prop_assert_eq!(hex, m);
    }

    #[test]
    fn esn_base_round_trip(e in "[0-9A-F]{8}") {
        let decimal = transform(&e, Radix::Hexadecimal, Radix::Decimal, FieldLayout::ESN_HEX_TO_DECIMAL)
            .unwrap();
        let hex = transform(&decimal, Radix::Decimal, Radix::Hexadecimal, FieldLayout::ESN_DECIMAL_TO_HEX)
            .unwrap();
        prop_assert_eq!(hex, e);
    }

    #[test]
    fn meid_with_leading_digit_is_hex_meid(
        m in "[0-9]{1,13}[A-F]".prop_map(|s| format!("{s:0<14}"))
    ) {
        let result = convert(&m).unwrap();
        prop_assert_eq!(result.classification.kind, IdentifierType::Meid);
        prop_assert_eq!(result.classification.encoding, Encoding::Hexadecimal);
        prop_assert_eq!(result.meid_hex.as_deref(), Some(m.as_str()));
    }

    #[test]
    fn converting_the_decimal_meid_gives_the_same_result(m in meid_hex()) {
        let from_hex = convert(&m).unwrap();
        let decimal = from_hex.meid_decimal.clone().unwrap();
        let from_decimal = convert(&decimal).unwrap();
        prop_assert_eq!(from_decimal.classification.encoding, Encoding::Decimal);
        prop_assert_eq!(fields(&from_decimal), fields(&from_hex));
    }

    #[test]
    fn hex_case_does_not_change_the_result(m in meid_hex()) {
        let upper = convert(&m).unwrap();
        let lower = convert(&m.to_lowercase()).unwrap();
        prop_assert_eq!(fields(&lower), fields(&upper));
    }

    #[test]
    fn converting_the_decimal_esn_gives_the_same_result(e in "[0-9A-Fa-f]{8}") {
        let from_hex = convert(&e).unwrap();
        let from_decimal = convert(from_hex.esn_decimal.as_deref().unwrap()).unwrap();
        prop_assert_eq!(fields(&from_decimal), fields(&from_hex));
    }

    #[test]
    fn supplied_imei_check_digit_is_never_trusted(body in "[0-9]{14}", supplied in 0u8..10) {
        let with_digit = convert(&format!("{body}{supplied}")).unwrap();
        let without = convert(&body).unwrap();
        prop_assert_eq!(fields(&with_digit), fields(&without));
    }

    #[test]
    fn decimal_check_digit_is_a_single_digit(d in "[0-9]{0,30}") {
        let first = check_digit(&d, Radix::Decimal).unwrap();
        prop_assert!(first.is_ascii_digit());
        prop_assert_eq!(check_digit(&d, Radix::Decimal).unwrap(), first);
    }

    #[test]
    fn hex_check_digit_is_a_single_digit(d in "[0-9A-Fa-f]{0,30}") {
        let first = check_digit(&d, Radix::Hexadecimal).unwrap();
        prop_assert!(first.is_ascii_hexdigit());
        prop_assert_eq!(check_digit(&d, Radix::Hexadecimal).unwrap(), first);
    }

    #[test]
    fn appended_check_digit_passes_luhn_verification(d in "[0-9]{1,20}") {
        let check = check_digit(&d, Radix::Decimal).unwrap();
        let full = format!("{d}{check}");
        prop_assert!(luhn_valid(&full), "{} fails Luhn verification", full);
    }

    #[test]
    fn eighteen_digit_strings_convert_iff_valid(s in "[0-9]{18}") {
        prop_assert_eq!(is_valid(&s), convert(&s).is_ok());
    }

    #[test]
    fn arbitrary_input_never_panics(s in ".{0,24}") {
        let classification = classify(&s);
        prop_assert_eq!(classification.is_valid(), is_valid(&s));
        if classification.is_valid() {
            prop_assert!(convert(&s).is_ok());
        } else {
            prop_assert!(convert(&s).is_err());
        }
    }
}
