mod mapping;
mod metric;
mod ranked;

pub use mapping::*;
pub use metric::*;
pub use ranked::*;
