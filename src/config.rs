use crate::application::encoder::PayloadBuilder;
use crate::domain::request::{CurrencyTable, DEFAULT_COUNTRY_CODE, DEFAULT_CURRENCY_CODE};
use crate::error::Result;
use log::debug;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Encoder settings, usually read from a JSON file.
///
/// ```json
/// { "country": "TH", "currency": "THB", "currencies": { "USD": "840" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EncoderConfig {
    /// Country code used when a request doesn't name one.
    pub country: String,
    /// Currency used when a request doesn't name one.
    pub currency: String,
    /// Extra alpha-to-numeric currency presets.
    pub currencies: BTreeMap<String, String>,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            country: DEFAULT_COUNTRY_CODE.to_string(),
            currency: DEFAULT_CURRENCY_CODE.to_string(),
            currencies: BTreeMap::new(),
        }
    }
}

impl EncoderConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading encoder config from {}", path.display());
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    pub fn currency_table(&self) -> CurrencyTable {
        CurrencyTable::with_presets(self.currencies.clone())
    }

    pub fn payload_builder(&self) -> PayloadBuilder {
        PayloadBuilder::new(self.currency_table())
    }
}
