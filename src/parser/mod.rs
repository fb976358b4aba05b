mod common;
mod dict;
mod number;
mod result;
mod string;

pub use dict::parse_dict;
pub use result::{ParseError, Span};
