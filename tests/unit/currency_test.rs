// Currency lookup and minor-unit conversion

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tinkoff_pay::core::{to_minor_units, AppError, Currency};

#[test]
fn test_common_numeric_codes() {
    assert_eq!(Currency::from_alpha3("RUB").unwrap().numeric(), 643);
    assert_eq!(Currency::from_alpha3("USD").unwrap().numeric(), 840);
    assert_eq!(Currency::from_alpha3("EUR").unwrap().numeric(), 978);
    assert_eq!(Currency::from_alpha3("KZT").unwrap().numeric(), 398);
}

#[test]
fn test_codes_outside_the_common_set_resolve() {
    for (code, numeric) in [
        ("KWD", 414),
        ("BHD", 48),
        ("QAR", 634),
        ("OMR", 512),
        ("XAF", 950),
        ("XOF", 952),
        ("NGN", 566),
        ("PKR", 586),
        ("AFN", 971),
        ("ZWG", 924),
    ] {
        assert_eq!(Currency::from_alpha3(code).unwrap().numeric(), numeric, "{}", code);
    }
}

#[test]
fn test_unknown_code_is_error() {
    for code in ["", "RU", "RUBL", "XXX", "XTS", "RUR"] {
        assert!(
            matches!(Currency::from_alpha3(code), Err(AppError::UnknownCurrency(_))),
            "{} should be unknown",
            code
        );
    }
}

#[test]
fn test_amount_rounds_to_nearest_minor_unit() {
    assert_eq!(to_minor_units(dec!(123.456)).unwrap(), 12346);
    assert_eq!(to_minor_units(dec!(123.454)).unwrap(), 12345);
    assert_eq!(to_minor_units(dec!(0.125)).unwrap(), 13);
    assert_eq!(to_minor_units(dec!(99.99)).unwrap(), 9999);
}

proptest! {
    #[test]
    fn test_whole_kopecks_are_exact(kopecks in 1i64..10_000_000_000i64) {
        let amount = Decimal::new(kopecks, 2);
        prop_assert_eq!(to_minor_units(amount).unwrap(), kopecks);
    }

    #[test]
    fn test_rounding_error_is_at_most_half_unit(milli in 1i64..10_000_000_000i64) {
        let amount = Decimal::new(milli, 3);
        let minor = to_minor_units(amount).unwrap();
        let diff = (Decimal::from(minor) - amount * Decimal::ONE_HUNDRED).abs();
        prop_assert!(diff <= dec!(0.5));
    }
}
