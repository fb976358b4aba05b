use std::collections::HashSet;

use super::metric::{Label, LabeledMetric, MetricValue};
use crate::error::{Error, Result};

/// Labels mapped to metric values, kept in insertion order.
///
/// Insertion order carries no ranking meaning, but the stable rankers use it
/// to order equal values. Every ranker gets its own clone, so nothing a
/// ranker does to its copy is visible to the caller or to other rankers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricMapping {
    entries: Vec<LabeledMetric>,
    labels: HashSet<Label>,
}

impl MetricMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, L>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (L, MetricValue)>,
        L: Into<Label>,
    {
        let mut mapping = Self::new();
        for (label, value) in pairs {
            mapping.insert(label, value)?;
        }
        Ok(mapping)
    }

    pub fn insert<L: Into<Label>>(&mut self, label: L, value: MetricValue) -> Result<()> {
        let label = label.into();
        if !self.labels.insert(label.clone()) {
            return Err(Error::malformed(format!("duplicate label '{}'", label)));
        }
        self.entries.push(LabeledMetric::new(label, value));
        Ok(())
    }

    pub fn push(&mut self, metric: LabeledMetric) -> Result<()> {
        let value = metric.value();
        self.insert(metric.into_label(), value)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_value(&self) -> Option<MetricValue> {
        self.entries.iter().map(LabeledMetric::value).max()
    }

    pub fn entries(&self) -> &[LabeledMetric] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LabeledMetric> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<LabeledMetric> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a MetricMapping {
    type Item = &'a LabeledMetric;
    type IntoIter = std::slice::Iter<'a, LabeledMetric>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
