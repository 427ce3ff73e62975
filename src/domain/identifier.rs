use crate::error::{PromptPayError, Result};
use log::debug;
use serde::Serialize;

/// Digit count of a Thai national ID or tax ID.
pub const NATIONAL_ID_LEN: usize = 13;

/// Minimum digit count treated as an e-wallet ID.
///
/// Provisional: the scheme publishes no e-wallet length rule.
pub const EWALLET_MIN_LEN: usize = 15;

const MOBILE_COUNTRY_PREFIX: &str = "66";
const SUBSCRIBER_LEN: usize = 9;

/// The kind of account a PromptPay identifier points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    NationalId,
    MobileNumber,
    EWalletId,
    Invalid,
}

impl IdentifierKind {
    /// Classifies an already digit-only string.
    pub fn detect(digits: &str) -> Self {
        if digits.len() == NATIONAL_ID_LEN {
            Self::NationalId
        } else if subscriber_number(digits).is_some() {
            Self::MobileNumber
        } else if digits.len() >= EWALLET_MIN_LEN {
            Self::EWalletId
        } else {
            Self::Invalid
        }
    }

    /// Sub-field tag inside the merchant account information template.
    pub fn sub_field_tag(&self) -> Option<&'static str> {
        match self {
            Self::MobileNumber => Some("01"),
            Self::NationalId => Some("02"),
            Self::EWalletId => Some("03"),
            Self::Invalid => None,
        }
    }
}

/// A classified, normalized payment identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    raw: String,
    digits: String,
    kind: IdentifierKind,
    sub_field_tag: &'static str,
    normalized: String,
}

impl Identifier {
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn kind(&self) -> IdentifierKind {
        self.kind
    }

    /// Digits in canonical form: unchanged for IDs, `66` + subscriber number for mobiles.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn sub_field_tag(&self) -> &'static str {
        self.sub_field_tag
    }

    /// Value carried on the wire. Mobile numbers are zero-padded to 13 digits.
    pub fn wire_value(&self) -> String {
        match self.kind {
            IdentifierKind::MobileNumber => {
                format!("{:0>width$}", self.normalized, width = NATIONAL_ID_LEN)
            }
            _ => self.normalized.clone(),
        }
    }
}

/// Strips non-digits from `raw`, classifies the result and normalizes it.
pub fn classify(raw: &str) -> Result<Identifier> {
    let invalid = || PromptPayError::InvalidIdentifier {
        raw: raw.to_string(),
    };

    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let kind = IdentifierKind::detect(&digits);
    let sub_field_tag = kind.sub_field_tag().ok_or_else(invalid)?;

    let normalized = match kind {
        IdentifierKind::MobileNumber => subscriber_number(&digits)
            .map(|subscriber| format!("{MOBILE_COUNTRY_PREFIX}{subscriber}"))
            .ok_or_else(invalid)?,
        _ => digits.clone(),
    };

    debug!("classified identifier as {:?} ({} digits)", kind, digits.len());

    Ok(Identifier {
        raw: raw.to_string(),
        digits,
        kind,
        sub_field_tag,
        normalized,
    })
}

/// Returns the 9-digit subscriber number if `digits` has one of the accepted
/// local mobile shapes: `XXXXXXXXX`, `0XXXXXXXXX` or `66XXXXXXXXX`, where the
/// subscriber number does not start with `0`.
fn subscriber_number(digits: &str) -> Option<&str> {
    let subscriber = match digits.len() {
        9 => digits,
        10 => digits.strip_prefix('0')?,
        11 => digits.strip_prefix(MOBILE_COUNTRY_PREFIX)?,
        _ => return None,
    };
    if subscriber.len() == SUBSCRIBER_LEN && !subscriber.starts_with('0') {
        Some(subscriber)
    } else {
        None
    }
}
