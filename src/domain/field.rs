//! Tag-length-value fields of an EMVCo merchant-presented payload.
//!
//! A field is encoded as `tag` (2 digits) + `length` (2 digits, zero padded)
//! + `value`. The length is always derived from the value.

use crate::error::{PromptPayError, Result};

pub const PAYLOAD_FORMAT_INDICATOR: &str = "00";
pub const POINT_OF_INITIATION_METHOD: &str = "01";
pub const MERCHANT_ACCOUNT_INFORMATION: &str = "29";
pub const TRANSACTION_CURRENCY: &str = "53";
pub const TRANSACTION_AMOUNT: &str = "54";
pub const COUNTRY_CODE: &str = "58";
pub const CRC: &str = "63";

/// Sub-field of the merchant account information template holding the GUID.
pub const TEMPLATE_GUID: &str = "00";

pub const MAX_VALUE_LEN: usize = 99;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    tag: &'static str,
    value: String,
}

impl Field {
    pub fn new(tag: &'static str, value: impl Into<String>) -> Result<Self> {
        debug_assert!(tag.len() == 2 && tag.bytes().all(|b| b.is_ascii_digit()));
        let value = value.into();
        if value.len() > MAX_VALUE_LEN {
            return Err(PromptPayError::FieldTooLong {
                tag,
                length: value.len(),
            });
        }
        Ok(Self { tag, value })
    }

    /// Builds a template whose value is the concatenation of `children`.
    pub fn template(tag: &'static str, children: &[Field]) -> Result<Self> {
        let mut value = String::new();
        for child in children {
            child.write_to(&mut value);
        }
        Self::new(tag, value)
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Appends `tag + length + value` to `buf`.
    pub fn write_to(&self, buf: &mut String) {
        buf.push_str(self.tag);
        buf.push_str(&format!("{:02}", self.len()));
        buf.push_str(&self.value);
    }

    pub fn encode(&self) -> String {
        let mut buf = String::with_capacity(4 + self.len());
        self.write_to(&mut buf);
        buf
    }
}
