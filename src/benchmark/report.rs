use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::model::{MetricMapping, MetricValue, RankedResult};
use crate::rank::Algorithm;

/// Elapsed wall-clock time of one ranker run.
///
/// Measured with `std::time::Instant`, which is monotonic, so the duration is
/// never negative. It can be zero when a run is shorter than the platform
/// clock resolution (empty or tiny inputs on coarse clocks).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimingRecord {
    algorithm: Algorithm,
    elapsed: Duration,
}

impl TimingRecord {
    pub fn new(algorithm: Algorithm, elapsed: Duration) -> Self {
        Self { algorithm, elapsed }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Decimal seconds with 10 fractional digits.
    pub fn seconds(&self) -> String {
        format!("{:.10}", self.elapsed.as_secs_f64())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ranking {
    pub algorithm: Algorithm,
    pub result: RankedResult,
}

#[derive(Clone, Debug)]
pub struct BenchmarkReport {
    started_at: DateTime<Utc>,
    input: MetricMapping,
    rankings: Vec<Ranking>,
    timings: Vec<TimingRecord>,
    fastest: Algorithm,
}

impl BenchmarkReport {
    pub(crate) fn new(
        started_at: DateTime<Utc>,
        input: MetricMapping,
        rankings: Vec<Ranking>,
        timings: Vec<TimingRecord>,
        fastest: Algorithm,
    ) -> Self {
        Self {
            started_at,
            input,
            rankings,
            timings,
            fastest,
        }
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The mapping every ranker got a copy of, in input order.
    pub fn input(&self) -> &MetricMapping {
        &self.input
    }

    /// Number of entries in the ranked input.
    pub fn entries(&self) -> usize {
        self.input.len()
    }

    pub fn max_value(&self) -> Option<MetricValue> {
        self.input.max_value()
    }

    /// Rankings in evaluation order.
    pub fn rankings(&self) -> &[Ranking] {
        &self.rankings
    }

    pub fn ranking(&self, algorithm: Algorithm) -> Option<&RankedResult> {
        self.rankings
            .iter()
            .find(|r| r.algorithm == algorithm)
            .map(|r| &r.result)
    }

    pub fn timings(&self) -> &[TimingRecord] {
        &self.timings
    }

    pub fn fastest(&self) -> Algorithm {
        self.fastest
    }

    /// Buckets the counting ranker had to allocate, if it ran on a
    /// non-empty input.
    pub fn counting_buckets(&self) -> Option<usize> {
        self.max_value()
            .filter(|m| *m >= 0)
            .map(|m| m as usize + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_fixed_precision() {
        let t = TimingRecord::new(Algorithm::Merge, Duration::from_nanos(1_234));
        assert_eq!("0.0000012340", t.seconds());

        let t = TimingRecord::new(Algorithm::Merge, Duration::from_millis(1_500));
        assert_eq!("1.5000000000", t.seconds());

        let t = TimingRecord::new(Algorithm::Merge, Duration::default());
        assert_eq!("0.0000000000", t.seconds());
    }
}
