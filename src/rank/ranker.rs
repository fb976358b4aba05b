use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::model::{MetricMapping, RankedResult};

#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum Algorithm {
    #[serde(rename = "Counting Sort")]
    Counting,
    #[serde(rename = "Merge Sort")]
    Merge,
    #[serde(rename = "Selection Sort")]
    Selection,
}

impl Algorithm {
    /// Evaluation order. Also the tie-break order when picking the fastest.
    pub const ALL: [Algorithm; 3] = [Algorithm::Counting, Algorithm::Merge, Algorithm::Selection];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Counting => "Counting Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Selection => "Selection Sort",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Sorts a mapping ascending by value.
///
/// The mapping is taken by value: rankers are free to reorder it in place.
pub trait Ranker {
    fn algorithm(&self) -> Algorithm;

    fn rank(&self, mapping: MetricMapping) -> Result<RankedResult>;
}
