use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptPayError {
    #[error("identifier is empty")]
    EmptyIdentifier,
    #[error("amount can't be negative")]
    NegativeAmount,
    #[error("identifier '{raw}' is not a national ID, mobile number or e-wallet ID")]
    InvalidIdentifier { raw: String },
    #[error("invalid merchant information: '{raw}'")]
    InvalidMerchantInfo { raw: String },
    #[error("unknown currency: {0}")]
    UnknownCurrency(String),
    #[error("invalid country code: {0}")]
    InvalidCountryCode(String),
    #[error("amount {0} does not fit in 13 characters")]
    AmountTooLarge(String),
    #[error("field {tag} value is {length} characters long, max is 99")]
    FieldTooLong { tag: &'static str, length: usize },
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Config error: {0}")]
    ConfigError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PromptPayError>;
