use super::ranker::{Algorithm, Ranker};
use crate::error::Result;
use crate::model::{MetricMapping, RankedResult};

/// In-place selection sort over the working copy. O(n^2).
///
/// Only a strictly smaller value replaces the current minimum candidate, so
/// among equal values the first one found in the remaining suffix wins. The
/// swaps can move an element past its equals, which makes the result
/// unstable with respect to the original input.
pub struct SelectionRanker;

impl Ranker for SelectionRanker {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Selection
    }

    fn rank(&self, mapping: MetricMapping) -> Result<RankedResult> {
        let mut items = mapping.into_entries();
        let n = items.len();

        for i in 0..n {
            let mut min_idx = i;
            for j in i + 1..n {
                if items[j].value() < items[min_idx].value() {
                    min_idx = j;
                }
            }
            items.swap(i, min_idx);
        }

        Ok(RankedResult::new(items))
    }
}
