use super::encoder::Encoder;
use super::writer::Writer;
use crate::benchmark::BenchmarkReport;
use crate::error::{ErrorKind, Result};

pub struct Output {
    writer: Box<dyn Writer>,
    encoder: Box<dyn Encoder>,
}

impl Output {
    pub fn new(writer: Box<dyn Writer>, encoder: Box<dyn Encoder>) -> Self {
        Self { writer, encoder }
    }

    pub fn write(&mut self, report: &BenchmarkReport) -> Result<()> {
        let buf = self.encoder.encode(report)?;

        self.writer
            .write(&buf)
            .map_err(|e| (ErrorKind::Io, "writer failed", e))?;

        Ok(())
    }
}
