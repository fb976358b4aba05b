use lazy_static::lazy_static;

use super::decoder::Decoder;
use crate::error::{Error, ErrorKind, Result};
use crate::model::{LabeledMetric, MetricValue};

/// Accepts `label value`, `label=value` and `label: value`.
pub const DEFAULT_PATTERN: &str =
    r"^\s*(?P<label>[^\s:=]+)\s*[:=\s]\s*(?P<value>[+-]?[0-9]+)\s*$";

const LABEL_CAPTURE: &str = "label";
const VALUE_CAPTURE: &str = "value";

pub struct RegexDecoder {
    re: regex::bytes::Regex,
}

impl RegexDecoder {
    pub fn new(re_pattern: &str) -> Result<Self> {
        let re = regex::bytes::Regex::new(re_pattern)
            .map_err(|e| (ErrorKind::MalformedInput, "bad regex pattern", e))?;

        Self::validate_captures(&re)?;

        Ok(Self { re })
    }

    fn validate_captures(re: &regex::bytes::Regex) -> Result<()> {
        for name in &[LABEL_CAPTURE, VALUE_CAPTURE] {
            if !re.capture_names().any(|n| n == Some(*name)) {
                return Err(Error::malformed(format!(
                    "regex pattern must have a named capture '{}'",
                    name
                )));
            }
        }
        Ok(())
    }
}

impl Default for RegexDecoder {
    fn default() -> Self {
        lazy_static! {
            static ref RE: regex::bytes::Regex = regex::bytes::Regex::new(DEFAULT_PATTERN).unwrap();
        }

        Self { re: RE.clone() }
    }
}

impl Decoder for RegexDecoder {
    fn decode(&self, line: &[u8]) -> Result<Option<LabeledMetric>> {
        let trimmed = trim_ascii(line);
        if trimmed.is_empty() || trimmed[0] == b'#' {
            return Ok(None);
        }

        // Patterns see the line without its terminator, so `$` works as expected.
        let line = line.strip_suffix(b"\n").unwrap_or(line);
        let line = line.strip_suffix(b"\r").unwrap_or(line);

        let caps = self
            .re
            .captures(line)
            .ok_or_else(|| Error::malformed("no match found"))?;

        let label = caps
            .name(LABEL_CAPTURE)
            .ok_or_else(|| Error::malformed("label didn't participate in the match"))?;
        let label = String::from_utf8(label.as_bytes().to_owned())
            .map_err(|e| (ErrorKind::MalformedInput, "label is not valid UTF-8", e))?;
        if label.is_empty() {
            return Err(Error::malformed("empty label"));
        }

        let value = caps
            .name(VALUE_CAPTURE)
            .ok_or_else(|| Error::malformed("value didn't participate in the match"))?;
        let value = std::str::from_utf8(value.as_bytes())
            .map_err(|e| (ErrorKind::MalformedInput, "value is not valid UTF-8", e))?;
        let value = value
            .trim()
            .parse::<MetricValue>()
            .map_err(|e| (ErrorKind::MalformedInput, "value is not an integer", e))?;

        Ok(Some(LabeledMetric::new(label, value)))
    }
}

fn trim_ascii(line: &[u8]) -> &[u8] {
    let start = line
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(line.len());
    let end = line
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    &line[start..end]
}
