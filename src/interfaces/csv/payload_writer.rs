use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct PayloadRecord<'a> {
    pub identifier: &'a str,
    pub payload: &'a str,
}

/// Writes encoded payloads as `identifier,payload` CSV rows.
pub struct PayloadWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> PayloadWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write(&mut self, identifier: &str, payload: &str) -> Result<()> {
        self.writer.serialize(PayloadRecord {
            identifier,
            payload,
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
