//! Application layer assembling domain fields into a finished payload.
//!
//! This module defines the `PayloadBuilder`, the entry point for turning a
//! `PaymentRequest` into an EMVCo merchant-presented QR payload string.

pub mod encoder;
