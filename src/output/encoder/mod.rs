mod encoder;
mod human;
mod json;

pub use encoder::Encoder;
pub use human::HumanReadableEncoder;
pub use json::JSONEncoder;
