//! Domain types of a PromptPay payload: identifiers, amounts, TLV fields and
//! the request that ties them together.

pub mod amount;
pub mod field;
pub mod identifier;
pub mod request;
