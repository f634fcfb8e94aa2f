//! Validated ISO 4217 currency codes.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Currency codes the bot accepts, sorted for binary search.
pub const KNOWN_CURRENCIES: &[&str] = &[
    "AED", "AFN", "ALL", "AMD", "ANG", "AOA", "ARS", "AUD", "AWG", "AZN", "BAM", "BBD",
    "BDT", "BGN", "BHD", "BIF", "BMD", "BND", "BOB", "BRL", "BSD", "BTN", "BWP", "BYN",
    "BZD", "CAD", "CDF", "CHF", "CLP", "CNY", "COP", "CRC", "CUP", "CVE", "CZK", "DJF",
    "DKK", "DOP", "DZD", "EGP", "ERN", "ETB", "EUR", "FJD", "FKP", "GBP", "GEL", "GHS",
    "GIP", "GMD", "GNF", "GTQ", "GYD", "HKD", "HNL", "HTG", "HUF", "IDR", "ILS", "INR",
    "IQD", "IRR", "ISK", "JMD", "JOD", "JPY", "KES", "KGS", "KHR", "KMF", "KPW", "KRW",
    "KWD", "KYD", "KZT", "LAK", "LBP", "LKR", "LRD", "LSL", "LYD", "MAD", "MDL", "MGA",
    "MKD", "MMK", "MNT", "MOP", "MRU", "MUR", "MVR", "MWK", "MXN", "MYR", "MZN", "NAD",
    "NGN", "NIO", "NOK", "NPR", "NZD", "OMR", "PAB", "PEN", "PGK", "PHP", "PKR", "PLN",
    "PYG", "QAR", "RON", "RSD", "RUB", "RWF", "SAR", "SBD", "SCR", "SDG", "SEK", "SGD",
    "SHP", "SLE", "SOS", "SRD", "SSP", "STN", "SVC", "SYP", "SZL", "THB", "TJS", "TMT",
    "TND", "TOP", "TRY", "TTD", "TWD", "TZS", "UAH", "UGX", "USD", "UYU", "UZS", "VES",
    "VND", "VUV", "WST", "XAF", "XAG", "XAU", "XCD", "XDR", "XOF", "XPD", "XPF", "XPT",
    "YER", "ZAR", "ZMW", "ZWL",
];

/// Why a string is not a usable currency code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    #[error("'{0}' is not a 3-letter currency code")]
    Malformed(String),

    #[error("unknown currency code {0}")]
    Unknown(String),
}

/// An uppercase 3-letter code from [`KNOWN_CURRENCIES`]. Parsing is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurrencyCode(&'static str);

impl CurrencyCode {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl FromStr for CurrencyCode {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 3 || !s.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CurrencyError::Malformed(s.to_string()));
        }
        let upper = s.to_ascii_uppercase();
        KNOWN_CURRENCIES
            .binary_search(&upper.as_str())
            .map(|i| CurrencyCode(KNOWN_CURRENCIES[i]))
            .map_err(|_| CurrencyError::Unknown(upper))
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for CurrencyCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_currencies_sorted_and_unique() {
        assert!(KNOWN_CURRENCIES.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_parse_case_insensitive() {
        let usd: CurrencyCode = "usd".parse().unwrap();
        assert_eq!(usd.as_str(), "USD");
        assert_eq!(" Eur ".parse::<CurrencyCode>().unwrap().to_string(), "EUR");
    }

    #[test]
    fn test_parse_malformed() {
        for bad in ["", "US", "USDT", "U$D", "123", "€"] {
            assert!(
                matches!(bad.parse::<CurrencyCode>(), Err(CurrencyError::Malformed(_))),
                "{bad:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "xyz".parse::<CurrencyCode>(),
            Err(CurrencyError::Unknown("XYZ".to_string()))
        );
    }
}
