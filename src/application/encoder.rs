use crate::checksum::{Crc16, to_hex};
use crate::domain::amount::Amount;
use crate::domain::field::{
    COUNTRY_CODE, CRC, Field, MERCHANT_ACCOUNT_INFORMATION, PAYLOAD_FORMAT_INDICATOR,
    POINT_OF_INITIATION_METHOD, TEMPLATE_GUID, TRANSACTION_AMOUNT, TRANSACTION_CURRENCY,
};
use crate::domain::identifier::{Identifier, classify};
use crate::domain::request::{CurrencyTable, PaymentRequest, normalize_country};
use crate::error::{PromptPayError, Result};
use log::debug;
use std::fmt;

/// EMV QRCPS merchant-presented mode.
pub const PAYLOAD_FORMAT_EMV_MPM: &str = "01";
/// Reusable QR code.
pub const POI_METHOD_STATIC: &str = "11";
/// Single-use QR code.
pub const POI_METHOD_DYNAMIC: &str = "12";
/// Application identifier of PromptPay inside the merchant account template.
pub const GUID_PROMPTPAY: &str = "A000000677010111";

/// Tag and length of the checksum field, which are covered by the checksum.
const CRC_PREFIX: &str = "6304";

/// A fully assembled payload: ordered fields, ending with the checksum field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    identifier: Identifier,
    fields: Vec<Field>,
    checksum: u16,
}

impl Payload {
    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, tag: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.tag() == tag)
    }

    pub fn checksum(&self) -> u16 {
        self.checksum
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in &self.fields {
            f.write_str(&field.encode())?;
        }
        Ok(())
    }
}

/// Builds PromptPay payloads from payment requests.
///
/// `PayloadBuilder` owns the currency table and the CRC engine; both are built
/// once at construction and only read afterwards, so one builder can be shared
/// between threads.
#[derive(Debug, Clone)]
pub struct PayloadBuilder {
    currencies: CurrencyTable,
    crc: Crc16,
}

impl Default for PayloadBuilder {
    fn default() -> Self {
        Self::new(CurrencyTable::default())
    }
}

impl PayloadBuilder {
    /// Creates a new `PayloadBuilder`.
    ///
    /// # Arguments
    ///
    /// * `currencies` - Alpha-to-numeric currency presets used to resolve request currencies.
    pub fn new(currencies: CurrencyTable) -> Self {
        Self {
            currencies,
            crc: Crc16::ccitt_false(),
        }
    }

    /// Encodes `req` into the payload string.
    pub fn encode(&self, req: &PaymentRequest) -> Result<String> {
        self.build(req).map(|payload| payload.to_string())
    }

    /// Validates `req` and assembles its payload.
    ///
    /// Nothing is returned on failure; every check runs before the body is
    /// concatenated.
    pub fn build(&self, req: &PaymentRequest) -> Result<Payload> {
        if req.identifier.trim().is_empty() {
            return Err(PromptPayError::EmptyIdentifier);
        }
        let amount = req.amount.map(Amount::new).transpose()?;
        let identifier = classify(&req.identifier).map_err(|_| {
            PromptPayError::InvalidMerchantInfo {
                raw: req.identifier.clone(),
            }
        })?;
        let country = normalize_country(&req.country)?;
        let currency = self.currencies.resolve(&req.currency)?;

        // Presence follows the requested amount, not its rounded rendering.
        let amount = amount.filter(Amount::is_positive);
        let method = if amount.is_some() || req.one_time {
            POI_METHOD_DYNAMIC
        } else {
            POI_METHOD_STATIC
        };

        let merchant = Field::template(
            MERCHANT_ACCOUNT_INFORMATION,
            &[
                Field::new(TEMPLATE_GUID, GUID_PROMPTPAY)?,
                Field::new(identifier.sub_field_tag(), identifier.wire_value())?,
            ],
        )?;

        let mut fields = vec![
            Field::new(PAYLOAD_FORMAT_INDICATOR, PAYLOAD_FORMAT_EMV_MPM)?,
            Field::new(POINT_OF_INITIATION_METHOD, method)?,
            merchant,
            Field::new(COUNTRY_CODE, country)?,
            Field::new(TRANSACTION_CURRENCY, currency)?,
        ];
        if let Some(amount) = amount {
            fields.push(Field::new(TRANSACTION_AMOUNT, amount.to_field_value()?)?);
        }

        let mut body = String::new();
        for field in &fields {
            field.write_to(&mut body);
        }
        body.push_str(CRC_PREFIX);
        let checksum = self.crc.checksum(body.as_bytes());
        fields.push(Field::new(CRC, to_hex(checksum))?);

        debug!(
            "encoded {:?} payload, method {}, checksum {:04X}",
            identifier.kind(),
            method,
            checksum
        );

        Ok(Payload {
            identifier,
            fields,
            checksum,
        })
    }
}
