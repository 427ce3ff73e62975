pub mod application;
pub mod checksum;
pub mod config;
pub mod domain;
pub mod error;
pub mod interfaces;

pub use application::encoder::{Payload, PayloadBuilder};
pub use domain::identifier::{Identifier, IdentifierKind, classify};
pub use domain::request::{CurrencyTable, PaymentRequest};
pub use error::{PromptPayError, Result};
