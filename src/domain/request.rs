use crate::error::{PromptPayError, Result};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

pub const DEFAULT_COUNTRY_CODE: &str = "TH";
pub const DEFAULT_CURRENCY_CODE: &str = "764";

/// Input to the payload encoder.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    pub identifier: String,
    pub amount: Option<Decimal>,
    pub one_time: bool,
    /// ISO 4217 numeric code, or an alpha code known to the encoder's currency table.
    pub currency: String,
    pub country: String,
}

impl PaymentRequest {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            amount: None,
            one_time: false,
            currency: DEFAULT_CURRENCY_CODE.to_string(),
            country: DEFAULT_COUNTRY_CODE.to_string(),
        }
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn one_time(mut self, one_time: bool) -> Self {
        self.one_time = one_time;
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }
}

/// Immutable lookup from ISO 4217 alpha codes to numeric codes.
///
/// Built once when the encoder is constructed and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyTable {
    codes: BTreeMap<String, String>,
}

impl CurrencyTable {
    /// Table with the built-in presets plus `extra` entries (which win on conflict).
    pub fn with_presets<I, K, V>(extra: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut codes: BTreeMap<String, String> = [("THB", "764"), ("EUR", "978")]
            .into_iter()
            .map(|(alpha, numeric)| (alpha.to_string(), numeric.to_string()))
            .collect();
        for (alpha, numeric) in extra {
            codes.insert(alpha.as_ref().to_ascii_uppercase(), numeric.into());
        }
        Self { codes }
    }

    /// Resolves `code` to a 3-digit numeric code.
    ///
    /// Numeric codes pass through unchanged; alpha codes are looked up
    /// case-insensitively.
    pub fn resolve(&self, code: &str) -> Result<String> {
        let code = code.trim();
        if is_numeric_code(code) {
            return Ok(code.to_string());
        }
        self.codes
            .get(&code.to_ascii_uppercase())
            .filter(|numeric| is_numeric_code(numeric))
            .cloned()
            .ok_or_else(|| PromptPayError::UnknownCurrency(code.to_string()))
    }
}

impl Default for CurrencyTable {
    fn default() -> Self {
        Self::with_presets(std::iter::empty::<(&str, String)>())
    }
}

fn is_numeric_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_digit())
}

/// Validates and upper-cases an ISO 3166-1 alpha-2 country code.
pub fn normalize_country(code: &str) -> Result<String> {
    let code = code.trim();
    if code.len() == 2 && code.bytes().all(|b| b.is_ascii_alphabetic()) {
        Ok(code.to_ascii_uppercase())
    } else {
        Err(PromptPayError::InvalidCountryCode(code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_request_defaults() {
        let req = PaymentRequest::new("0811111111");
        assert_eq!(req.amount, None);
        assert!(!req.one_time);
        assert_eq!(req.currency, "764");
        assert_eq!(req.country, "TH");
    }

    #[test]
    fn test_request_builder() {
        let req = PaymentRequest::new("0811111111")
            .with_amount(dec!(10.5))
            .one_time(true)
            .with_currency("EUR")
            .with_country("de");
        assert_eq!(req.amount, Some(dec!(10.5)));
        assert!(req.one_time);
        assert_eq!(req.currency, "EUR");
        assert_eq!(req.country, "de");
    }

    #[test]
    fn test_currency_presets() {
        let table = CurrencyTable::default();
        assert_eq!(table.resolve("THB").unwrap(), "764");
        assert_eq!(table.resolve("eur").unwrap(), "978");
        assert_eq!(table.resolve("764").unwrap(), "764");
        assert_eq!(table.resolve("840").unwrap(), "840");
        assert!(matches!(
            table.resolve("USD"),
            Err(PromptPayError::UnknownCurrency(code)) if code == "USD"
        ));
        assert!(table.resolve("76").is_err());
    }

    #[test]
    fn test_currency_extra_presets() {
        let table = CurrencyTable::with_presets([("usd", "840"), ("BAD", "x")]);
        assert_eq!(table.resolve("USD").unwrap(), "840");
        assert_eq!(table.resolve("THB").unwrap(), "764");
        assert!(table.resolve("BAD").is_err());
    }

    #[test]
    fn test_normalize_country() {
        assert_eq!(normalize_country("TH").unwrap(), "TH");
        assert_eq!(normalize_country("th").unwrap(), "TH");
        assert!(matches!(
            normalize_country("THA"),
            Err(PromptPayError::InvalidCountryCode(_))
        ));
        assert!(normalize_country("").is_err());
        assert!(normalize_country("1A").is_err());
    }
}
