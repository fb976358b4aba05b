use std::io::Read;

use tracing::debug;

use super::decoder::Decoder;
use super::line::LineReader;
use crate::error::{Error, Result};
use crate::model::MetricMapping;
use crate::parser::parse_dict;

/// Anything that can produce the label to metric mapping for one run.
pub trait MetricSource {
    fn read_mapping(&mut self) -> Result<MetricMapping>;
}

/// One metric per line, decoded by a `Decoder`.
pub struct LineSource {
    reader: Box<dyn LineReader>,
    decoder: Box<dyn Decoder>,
}

impl LineSource {
    pub fn new(reader: Box<dyn LineReader>, decoder: Box<dyn Decoder>) -> Self {
        Self { reader, decoder }
    }
}

impl MetricSource for LineSource {
    fn read_mapping(&mut self) -> Result<MetricMapping> {
        let mut mapping = MetricMapping::new();
        let mut line_no = 0;

        loop {
            let mut buf = Vec::new();
            match self.reader.read(&mut buf) {
                Ok(0) => break, // EOF
                Ok(_) => (),
                Err(e) => return Err(e.into()),
            };

            line_no += 1;

            let metric = match self.decoder.decode(&buf) {
                Ok(Some(metric)) => metric,
                Ok(None) => continue,
                Err(err) => {
                    return Err(Error::with_kind(
                        err.kind(),
                        format!(
                            "line {}: {} ({:?})",
                            line_no,
                            err,
                            String::from_utf8_lossy(&buf).trim_end(),
                        ),
                    ))
                }
            };

            mapping
                .push(metric)
                .map_err(|e| Error::with_kind(e.kind(), format!("line {}: {}", line_no, e)))?;
        }

        debug!(lines = line_no, metrics = mapping.len(), "line input consumed");
        Ok(mapping)
    }
}

/// A single dictionary literal, e.g. `{'img1.jpg': 12, 'img2.jpg': 7}`.
pub struct DictSource {
    reader: Box<dyn Read>,
}

impl DictSource {
    pub fn new(reader: Box<dyn Read>) -> Self {
        Self { reader }
    }
}

impl MetricSource for DictSource {
    fn read_mapping(&mut self) -> Result<MetricMapping> {
        let mut input = String::new();
        self.reader.read_to_string(&mut input)?;

        let mapping = MetricMapping::from_pairs(parse_dict(&input)?)?;

        debug!(metrics = mapping.len(), "dictionary input consumed");
        Ok(mapping)
    }
}
