use std::convert::TryFrom;

use super::mapping::MetricMapping;
use super::metric::LabeledMetric;
use crate::error::{Error, Result};

/// Entries sorted ascending by value. Tie order depends on the ranker that
/// produced it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RankedResult {
    entries: Vec<LabeledMetric>,
}

impl RankedResult {
    pub fn new(entries: Vec<LabeledMetric>) -> Self {
        Self { entries }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[LabeledMetric] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LabeledMetric> {
        self.entries.iter()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|m| m.label().as_str()).collect()
    }

    pub fn is_sorted(&self) -> bool {
        self.entries.windows(2).all(|w| w[0].value() <= w[1].value())
    }
}

// Fails on a repeated label, same as building any other mapping.
impl TryFrom<RankedResult> for MetricMapping {
    type Error = Error;

    fn try_from(ranked: RankedResult) -> Result<Self> {
        let mut mapping = MetricMapping::new();
        for metric in ranked.entries {
            mapping.push(metric)?;
        }
        Ok(mapping)
    }
}

impl<'a> IntoIterator for &'a RankedResult {
    type Item = &'a LabeledMetric;
    type IntoIter = std::slice::Iter<'a, LabeledMetric>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
