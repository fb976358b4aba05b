use super::ranker::{Algorithm, Ranker};
use crate::error::Result;
use crate::model::{LabeledMetric, MetricMapping, RankedResult};

/// Top-down merge sort. Stable, no assumptions about the value range.
pub struct MergeRanker;

impl Ranker for MergeRanker {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Merge
    }

    fn rank(&self, mapping: MetricMapping) -> Result<RankedResult> {
        Ok(RankedResult::new(merge_sort(mapping.into_entries())))
    }
}

fn merge_sort(mut entries: Vec<LabeledMetric>) -> Vec<LabeledMetric> {
    if entries.len() <= 1 {
        return entries;
    }

    // Split by position, not by value.
    let mid = entries.len() / 2;
    let right = entries.split_off(mid);

    merge(merge_sort(entries), merge_sort(right))
}

fn merge(left: Vec<LabeledMetric>, right: Vec<LabeledMetric>) -> Vec<LabeledMetric> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            // `<=` keeps equal values in their pre-split order.
            (Some(l), Some(r)) => l.value() <= r.value(),
            _ => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }

    merged.extend(left);
    merged.extend(right);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::testing::{check_ranker, mapping};

    #[test]
    fn test_merge_properties() -> Result<()> {
        check_ranker(&MergeRanker, true)
    }

    #[test]
    fn test_negative_and_large_values() -> Result<()> {
        let ranked = MergeRanker.rank(mapping(&[
            ("huge", i64::MAX),
            ("neg", -40),
            ("zero", 0),
            ("min", i64::MIN),
        ]))?;
        assert_eq!(vec!["min", "neg", "zero", "huge"], ranked.labels());
        Ok(())
    }

    #[test]
    fn test_merge_prefers_left_on_ties() {
        let left = vec![LabeledMetric::new("l1", 1), LabeledMetric::new("l2", 2)];
        let right = vec![LabeledMetric::new("r1", 1), LabeledMetric::new("r2", 2)];
        let merged: Vec<_> = merge(left, right)
            .into_iter()
            .map(LabeledMetric::into_label)
            .collect();
        assert_eq!(vec!["l1", "r1", "l2", "r2"], merged);
    }
}
