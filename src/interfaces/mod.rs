//! Batch input and output formats around the encoder.

pub mod csv;
