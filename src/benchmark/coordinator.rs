use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info};

use super::config::BenchmarkConfig;
use super::report::{BenchmarkReport, Ranking, TimingRecord};
use super::timer::ScopedTimer;
use crate::error::Result;
use crate::model::MetricMapping;
use crate::rank::{Algorithm, CountingRanker, MergeRanker, Ranker, SelectionRanker};

/// Runs every ranker on its own copy of the input and times each run.
///
/// Rankers run one after another on the calling thread, in the fixed order
/// counting, merge, selection. The first ranker error aborts the whole run;
/// no partial report is produced.
pub struct BenchmarkCoordinator {
    rankers: Vec<Box<dyn Ranker>>,
}

impl BenchmarkCoordinator {
    pub fn new(config: BenchmarkConfig) -> Self {
        Self {
            rankers: vec![
                Box::new(CountingRanker::with_max_value(config.max_counting_value)),
                Box::new(MergeRanker),
                Box::new(SelectionRanker),
            ],
        }
    }

    pub fn run(&self, mapping: &MetricMapping) -> Result<BenchmarkReport> {
        let started_at = Utc::now();

        // All copies are made up front so that cloning never lands inside a
        // measured section.
        let copies: Vec<MetricMapping> = self.rankers.iter().map(|_| mapping.clone()).collect();

        let mut rankings = Vec::with_capacity(self.rankers.len());
        let mut timings = Vec::with_capacity(self.rankers.len());

        for (ranker, copy) in self.rankers.iter().zip(copies) {
            let algorithm = ranker.algorithm();

            let mut elapsed = Duration::default();
            let result = {
                let _timer = ScopedTimer::start(&mut elapsed);
                ranker.rank(copy)
            };
            let timing = TimingRecord::new(algorithm, elapsed);
            debug!(
                algorithm = algorithm.name(),
                seconds = %timing.seconds(),
                ok = result.is_ok(),
                "ranker finished"
            );

            rankings.push(Ranking {
                algorithm,
                result: result?,
            });
            timings.push(timing);
        }

        let fastest = pick_fastest(&timings).ok_or("no rankers configured")?;
        info!(
            entries = mapping.len(),
            fastest = fastest.name(),
            "benchmark complete"
        );

        Ok(BenchmarkReport::new(
            started_at,
            mapping.clone(),
            rankings,
            timings,
            fastest,
        ))
    }
}

impl Default for BenchmarkCoordinator {
    fn default() -> Self {
        Self::new(BenchmarkConfig::default())
    }
}

/// Minimum elapsed time wins; on a tie the earliest record wins.
fn pick_fastest(timings: &[TimingRecord]) -> Option<Algorithm> {
    timings
        .iter()
        .min_by_key(|t| t.elapsed())
        .map(TimingRecord::algorithm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::rank::testing::{assert_permutation, mapping, random_mapping};

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_report_holds_all_rankings() -> Result<()> {
        let input = mapping(&[("a", 3), ("b", 1), ("c", 1), ("d", 2)]);
        let report = BenchmarkCoordinator::default().run(&input)?;

        let order: Vec<_> = report.rankings().iter().map(|r| r.algorithm).collect();
        assert_eq!(Algorithm::ALL.to_vec(), order);
        let order: Vec<_> = report.timings().iter().map(|t| t.algorithm()).collect();
        assert_eq!(Algorithm::ALL.to_vec(), order);

        for algorithm in &Algorithm::ALL {
            let ranked = report.ranking(*algorithm).expect("every algorithm ran");
            assert_eq!(vec!["b", "c", "d", "a"], ranked.labels());
        }

        assert_eq!(&input, report.input());
        assert_eq!(4, report.entries());
        assert_eq!(Some(3), report.max_value());
        assert_eq!(Some(4), report.counting_buckets());
        assert!(Algorithm::ALL.contains(&report.fastest()));
        Ok(())
    }

    #[test]
    fn test_input_is_left_untouched() -> Result<()> {
        let input = mapping(&[("z", 9), ("y", 5), ("x", 1)]);
        let before = input.clone();
        BenchmarkCoordinator::default().run(&input)?;
        assert_eq!(before, input);
        Ok(())
    }

    #[test]
    fn test_empty_input() -> Result<()> {
        let report = BenchmarkCoordinator::default().run(&MetricMapping::new())?;
        for ranking in report.rankings() {
            assert!(ranking.result.is_empty());
        }
        assert_eq!(3, report.timings().len());
        assert_eq!(None, report.counting_buckets());
        Ok(())
    }

    #[test]
    fn test_rankers_agree_on_contents() -> Result<()> {
        let mut rng = StdRng::seed_from_u64(42);
        let input = random_mapping(&mut rng, 300, 50);
        let report = BenchmarkCoordinator::default().run(&input)?;

        for ranking in report.rankings() {
            assert!(ranking.result.is_sorted());
            assert_permutation(&input, &ranking.result);
        }

        // Both stable rankers must produce the very same order.
        assert_eq!(
            report.ranking(Algorithm::Counting),
            report.ranking(Algorithm::Merge)
        );
        Ok(())
    }

    #[test]
    fn test_precondition_failure_aborts_run() {
        let input = mapping(&[("ok", 2), ("x", -1)]);
        let err = BenchmarkCoordinator::default().run(&input).unwrap_err();
        assert_eq!(ErrorKind::PreconditionViolation, err.kind());
    }

    #[test]
    fn test_configured_bucket_limit() {
        let coordinator = BenchmarkCoordinator::new(BenchmarkConfig {
            max_counting_value: 100,
        });
        let err = coordinator.run(&mapping(&[("big", 101)])).unwrap_err();
        assert_eq!(ErrorKind::PreconditionViolation, err.kind());
    }

    #[test]
    fn test_fastest_ties_resolve_in_order() {
        let same = Duration::from_nanos(10);
        let timings = vec![
            TimingRecord::new(Algorithm::Counting, same),
            TimingRecord::new(Algorithm::Merge, same),
            TimingRecord::new(Algorithm::Selection, same),
        ];
        assert_eq!(Some(Algorithm::Counting), pick_fastest(&timings));

        let timings = vec![
            TimingRecord::new(Algorithm::Counting, Duration::from_nanos(30)),
            TimingRecord::new(Algorithm::Merge, Duration::from_nanos(20)),
            TimingRecord::new(Algorithm::Selection, Duration::from_nanos(20)),
        ];
        assert_eq!(Some(Algorithm::Merge), pick_fastest(&timings));

        assert_eq!(None, pick_fastest(&[]));
    }
}
