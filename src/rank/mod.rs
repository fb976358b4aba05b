mod counting;
mod merge;
mod ranker;
mod selection;

pub use counting::{CountingRanker, DEFAULT_MAX_COUNTING_VALUE, MAX_COUNTING_LIMIT};
pub use merge::MergeRanker;
pub use ranker::{Algorithm, Ranker};
pub use selection::SelectionRanker;

#[cfg(test)]
pub(crate) mod testing;
