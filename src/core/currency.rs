use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};
use std::fmt;

use super::error::{AppError, Result};

/// ISO-4217 currency resolved from its alpha-3 code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    alpha3: &'static str,
    numeric: u16,
}

/// (alpha-3, numeric) pairs of ISO-4217 codes, sorted by alpha-3
///
/// Excludes XTS (testing) and XXX (no currency).
const ISO_4217: &[(&str, u16)] = &[
    ("AED", 784),
    ("AFN", 971),
    ("ALL", 8),
    ("AMD", 51),
    ("ANG", 532),
    ("AOA", 973),
    ("ARS", 32),
    ("AUD", 36),
    ("AWG", 533),
    ("AZN", 944),
    ("BAM", 977),
    ("BBD", 52),
    ("BDT", 50),
    ("BGN", 975),
    ("BHD", 48),
    ("BIF", 108),
    ("BMD", 60),
    ("BND", 96),
    ("BOB", 68),
    ("BOV", 984),
    ("BRL", 986),
    ("BSD", 44),
    ("BTN", 64),
    ("BWP", 72),
    ("BYN", 933),
    ("BZD", 84),
    ("CAD", 124),
    ("CDF", 976),
    ("CHE", 947),
    ("CHF", 756),
    ("CHW", 948),
    ("CLF", 990),
    ("CLP", 152),
    ("CNY", 156),
    ("COP", 170),
    ("COU", 970),
    ("CRC", 188),
    ("CUC", 931),
    ("CUP", 192),
    ("CVE", 132),
    ("CZK", 203),
    ("DJF", 262),
    ("DKK", 208),
    ("DOP", 214),
    ("DZD", 12),
    ("EGP", 818),
    ("ERN", 232),
    ("ETB", 230),
    ("EUR", 978),
    ("FJD", 242),
    ("FKP", 238),
    ("GBP", 826),
    ("GEL", 981),
    ("GHS", 936),
    ("GIP", 292),
    ("GMD", 270),
    ("GNF", 324),
    ("GTQ", 320),
    ("GYD", 328),
    ("HKD", 344),
    ("HNL", 340),
    ("HTG", 332),
    ("HUF", 348),
    ("IDR", 360),
    ("ILS", 376),
    ("INR", 356),
    ("IQD", 368),
    ("IRR", 364),
    ("ISK", 352),
    ("JMD", 388),
    ("JOD", 400),
    ("JPY", 392),
    ("KES", 404),
    ("KGS", 417),
    ("KHR", 116),
    ("KMF", 174),
    ("KPW", 408),
    ("KRW", 410),
    ("KWD", 414),
    ("KYD", 136),
    ("KZT", 398),
    ("LAK", 418),
    ("LBP", 422),
    ("LKR", 144),
    ("LRD", 430),
    ("LSL", 426),
    ("LYD", 434),
    ("MAD", 504),
    ("MDL", 498),
    ("MGA", 969),
    ("MKD", 807),
    ("MMK", 104),
    ("MNT", 496),
    ("MOP", 446),
    ("MRU", 929),
    ("MUR", 480),
    ("MVR", 462),
    ("MWK", 454),
    ("MXN", 484),
    ("MXV", 979),
    ("MYR", 458),
    ("MZN", 943),
    ("NAD", 516),
    ("NGN", 566),
    ("NIO", 558),
    ("NOK", 578),
    ("NPR", 524),
    ("NZD", 554),
    ("OMR", 512),
    ("PAB", 590),
    ("PEN", 604),
    ("PGK", 598),
    ("PHP", 608),
    ("PKR", 586),
    ("PLN", 985),
    ("PYG", 600),
    ("QAR", 634),
    ("RON", 946),
    ("RSD", 941),
    ("RUB", 643),
    ("RWF", 646),
    ("SAR", 682),
    ("SBD", 90),
    ("SCR", 690),
    ("SDG", 938),
    ("SEK", 752),
    ("SGD", 702),
    ("SHP", 654),
    ("SLE", 925),
    ("SLL", 694),
    ("SOS", 706),
    ("SRD", 968),
    ("SSP", 728),
    ("STN", 930),
    ("SVC", 222),
    ("SYP", 760),
    ("SZL", 748),
    ("THB", 764),
    ("TJS", 972),
    ("TMT", 934),
    ("TND", 788),
    ("TOP", 776),
    ("TRY", 949),
    ("TTD", 780),
    ("TWD", 901),
    ("TZS", 834),
    ("UAH", 980),
    ("UGX", 800),
    ("USD", 840),
    ("USN", 997),
    ("UYI", 940),
    ("UYU", 858),
    ("UYW", 927),
    ("UZS", 860),
    ("VED", 926),
    ("VES", 928),
    ("VND", 704),
    ("VUV", 548),
    ("WST", 882),
    ("XAF", 950),
    ("XAG", 961),
    ("XAU", 959),
    ("XBA", 955),
    ("XBB", 956),
    ("XBC", 957),
    ("XBD", 958),
    ("XCD", 951),
    ("XCG", 532),
    ("XDR", 960),
    ("XOF", 952),
    ("XPD", 964),
    ("XPF", 953),
    ("XPT", 962),
    ("XSU", 994),
    ("XUA", 965),
    ("YER", 886),
    ("ZAR", 710),
    ("ZMW", 967),
    ("ZWG", 924),
    ("ZWL", 932),
];

impl Currency {
    /// Looks up a currency by alpha-3 code, ignoring case
    pub fn from_alpha3(code: &str) -> Result<Self> {
        let upper = code.trim().to_ascii_uppercase();
        ISO_4217
            .binary_search_by(|(alpha3, _)| (*alpha3).cmp(upper.as_str()))
            .ok()
            .map(|index| {
                let (alpha3, numeric) = ISO_4217[index];
                Currency { alpha3, numeric }
            })
            .ok_or_else(|| AppError::UnknownCurrency(code.to_string()))
    }

    pub fn alpha3(&self) -> &'static str {
        self.alpha3
    }

    /// ISO-4217 numeric code sent as `Currency` on the wire
    pub fn numeric(&self) -> u16 {
        self.numeric
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.alpha3)
    }
}

impl std::str::FromStr for Currency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        Currency::from_alpha3(s)
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.numeric)
    }
}

/// Converts a major-unit amount to gateway minor units.
///
/// The gateway always expects ×100 regardless of the currency exponent.
/// Halves round away from zero.
pub fn to_minor_units(amount: Decimal) -> Result<i64> {
    let scaled = (amount * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    scaled
        .to_i64()
        .ok_or_else(|| AppError::validation(format!("Amount {} is out of range", amount)))
}
