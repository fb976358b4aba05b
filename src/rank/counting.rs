use super::ranker::{Algorithm, Ranker};
use crate::error::{Error, Result};
use crate::model::{Label, LabeledMetric, MetricMapping, MetricValue, RankedResult};

pub const DEFAULT_MAX_COUNTING_VALUE: MetricValue = 1_000_000;

/// Largest bucket limit whose bucket table can be sized without overflowing
/// `isize::MAX` bytes.
pub const MAX_COUNTING_LIMIT: MetricValue =
    (isize::MAX as usize / std::mem::size_of::<Vec<Label>>() - 1) as MetricValue;

/// Bucket sort keyed directly by value.
///
/// Only valid for non-negative values with a known upper bound `M`. Costs
/// O(n + M) time and memory, so a single large value makes it the slowest of
/// the three even on tiny inputs. Both preconditions are checked before
/// anything is allocated and reported as `PreconditionViolation`.
///
/// Equal values keep their input order.
pub struct CountingRanker {
    max_value: MetricValue,
}

impl CountingRanker {
    pub fn new() -> Self {
        Self::with_max_value(DEFAULT_MAX_COUNTING_VALUE)
    }

    pub fn with_max_value(max_value: MetricValue) -> Self {
        Self { max_value }
    }

    fn validate(&self, mapping: &MetricMapping) -> Result<MetricValue> {
        if let Some(m) = mapping.iter().find(|m| m.value() < 0) {
            return Err(Error::precondition(format!(
                "counting sort requires non-negative values, got {} for '{}'",
                m.value(),
                m.label()
            )));
        }

        let limit = self.max_value.min(MAX_COUNTING_LIMIT);
        let max = mapping.max_value().unwrap_or(0);
        if max > limit {
            return Err(Error::precondition(format!(
                "counting sort bucket limit exceeded: max value {} is above {}",
                max, limit
            )));
        }
        Ok(max)
    }
}

impl Default for CountingRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ranker for CountingRanker {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Counting
    }

    fn rank(&self, mapping: MetricMapping) -> Result<RankedResult> {
        if mapping.is_empty() {
            return Ok(RankedResult::default());
        }

        let max = self.validate(&mapping)? as usize;
        let len = mapping.len();

        let mut buckets: Vec<Vec<Label>> = Vec::new();
        buckets.try_reserve_exact(max + 1).map_err(|e| {
            Error::precondition(format!(
                "counting sort can't allocate {} buckets: {}",
                max + 1,
                e
            ))
        })?;
        buckets.resize_with(max + 1, Vec::new);
        for metric in mapping.into_entries() {
            let idx = metric.value() as usize;
            buckets[idx].push(metric.into_label());
        }

        let mut sorted = Vec::with_capacity(len);
        for (value, labels) in buckets.into_iter().enumerate() {
            for label in labels {
                sorted.push(LabeledMetric::new(label, value as MetricValue));
            }
        }

        Ok(RankedResult::new(sorted))
    }
}
