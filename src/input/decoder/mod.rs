mod decoder;
mod regex;

pub use self::regex::{RegexDecoder, DEFAULT_PATTERN};
pub use decoder::Decoder;
