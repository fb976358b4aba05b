use crate::error::Result;
use crate::model::LabeledMetric;

pub trait Decoder {
    /// Turns one raw input line into a metric. `Ok(None)` means the line
    /// carries no metric (blank line, comment).
    fn decode(&self, line: &[u8]) -> Result<Option<LabeledMetric>>;
}
