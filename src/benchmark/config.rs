use crate::model::MetricValue;
use crate::rank::DEFAULT_MAX_COUNTING_VALUE;

#[derive(Clone, Copy, Debug)]
pub struct BenchmarkConfig {
    /// Largest value the counting ranker accepts. It allocates one bucket
    /// per value in `0..=max_counting_value`.
    pub max_counting_value: MetricValue,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            max_counting_value: DEFAULT_MAX_COUNTING_VALUE,
        }
    }
}
