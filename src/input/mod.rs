mod decoder;
mod line;
mod source;

pub use decoder::{Decoder, RegexDecoder, DEFAULT_PATTERN};
pub use line::{DelimReader, LineReader};
pub use source::{DictSource, LineSource, MetricSource};
