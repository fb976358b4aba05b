use serde::Serialize;

pub type Label = String;

// Signed on purpose: negative values must survive parsing so that the
// counting ranker can reject them.
pub type MetricValue = i64;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct LabeledMetric {
    label: Label,
    value: MetricValue,
}

impl LabeledMetric {
    pub fn new<L: Into<Label>>(label: L, value: MetricValue) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    #[inline]
    pub fn label(&self) -> &Label {
        &self.label
    }

    #[inline]
    pub fn value(&self) -> MetricValue {
        self.value
    }

    pub fn into_label(self) -> Label {
        self.label
    }
}

impl<L: Into<Label>> From<(L, MetricValue)> for LabeledMetric {
    fn from((label, value): (L, MetricValue)) -> Self {
        Self::new(label, value)
    }
}
