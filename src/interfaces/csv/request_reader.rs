use crate::config::EncoderConfig;
use crate::domain::request::PaymentRequest;
use crate::error::{PromptPayError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One row of a batch input file. Only `identifier` is required.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct RequestRecord {
    pub identifier: String,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub one_time: Option<bool>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl RequestRecord {
    /// Turns the row into a request, filling blanks from `config`.
    pub fn into_request(self, config: &EncoderConfig) -> PaymentRequest {
        PaymentRequest {
            identifier: self.identifier,
            amount: self.amount,
            one_time: self.one_time.unwrap_or(false),
            currency: self.currency.unwrap_or_else(|| config.currency.clone()),
            country: self.country.unwrap_or_else(|| config.country.clone()),
        }
    }
}

/// Reads payment requests from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<RequestRecord>`.
/// It handles whitespace trimming and flexible record lengths automatically.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    /// Creates a new `RequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes requests.
    pub fn records(self) -> impl Iterator<Item = Result<RequestRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PromptPayError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_valid_stream() {
        let data = "identifier, amount, one_time, currency, country\n\
                    0811111111, 100.25, , , \n\
                    0105540087061, , true, EUR, TH";
        let reader = RequestReader::new(data.as_bytes());
        let results: Vec<Result<RequestRecord>> = reader.records().collect();

        assert_eq!(results.len(), 2);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.identifier, "0811111111");
        assert_eq!(first.amount, Some(dec!(100.25)));
        assert_eq!(first.one_time, None);
        assert_eq!(first.currency, None);

        let second = results[1].as_ref().unwrap();
        assert_eq!(second.amount, None);
        assert_eq!(second.one_time, Some(true));
        assert_eq!(second.currency.as_deref(), Some("EUR"));
    }

    #[test]
    fn test_reader_identifier_only() {
        let data = "identifier\n0811111111";
        let reader = RequestReader::new(data.as_bytes());
        let record = reader.records().next().unwrap().unwrap();

        let req = record.into_request(&EncoderConfig::default());
        assert_eq!(req, PaymentRequest::new("0811111111"));
    }

    #[test]
    fn test_config_fills_blanks() {
        let record = RequestRecord {
            identifier: "0811111111".to_string(),
            amount: None,
            one_time: None,
            currency: None,
            country: Some("TH".to_string()),
        };
        let config = EncoderConfig {
            currency: "EUR".to_string(),
            ..EncoderConfig::default()
        };
        let req = record.into_request(&config);
        assert_eq!(req.currency, "EUR");
        assert_eq!(req.country, "TH");
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "identifier, amount\n0811111111, not_a_number";
        let reader = RequestReader::new(data.as_bytes());
        let results: Vec<Result<RequestRecord>> = reader.records().collect();

        assert!(matches!(results[0], Err(PromptPayError::CsvError(_))));
    }
}
