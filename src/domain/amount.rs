use crate::error::{PromptPayError, Result};
use rust_decimal::{Decimal, RoundingStrategy};

/// Maximum length of the transaction amount value (tag 54).
pub const MAX_AMOUNT_LEN: usize = 13;

const FRACTION_DIGITS: u32 = 2;

/// A non-negative transaction amount.
///
/// This is a wrapper around `rust_decimal::Decimal` holding the amount as
/// requested. Only the rendered field value is rounded: half away from zero and
/// always with two fractional digits (`100.00`, never `100` or `100.0`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        if value < Decimal::ZERO {
            return Err(PromptPayError::NegativeAmount);
        }
        Ok(Self(value))
    }

    /// Whether the amount is carried in the payload at all.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Renders the amount for the transaction amount field.
    pub fn to_field_value(&self) -> Result<String> {
        let mut rounded = self
            .0
            .round_dp_with_strategy(FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(FRACTION_DIGITS);
        let rendered = rounded.to_string();
        if rendered.len() > MAX_AMOUNT_LEN {
            return Err(PromptPayError::AmountTooLarge(rendered));
        }
        Ok(rendered)
    }
}
