use std::collections::HashMap;
use std::convert::TryFrom;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::ranker::Ranker;
use crate::error::Result;
use crate::model::{MetricMapping, MetricValue, RankedResult};

pub fn mapping(pairs: &[(&str, MetricValue)]) -> MetricMapping {
    MetricMapping::from_pairs(pairs.iter().cloned()).expect("labels in test data are unique")
}

pub fn random_mapping(rng: &mut StdRng, len: usize, max_value: MetricValue) -> MetricMapping {
    let mut mapping = MetricMapping::new();
    for i in 0..len {
        mapping
            .insert(format!("img{}.jpg", i + 1), rng.gen_range(0..=max_value))
            .expect("generated labels are unique");
    }
    mapping
}

pub fn assert_permutation(input: &MetricMapping, ranked: &RankedResult) {
    assert_eq!(input.len(), ranked.len());

    let mut expected: Vec<_> = input.iter().cloned().collect();
    let mut actual: Vec<_> = ranked.iter().cloned().collect();
    expected.sort_by(|a, b| a.label().cmp(b.label()));
    actual.sort_by(|a, b| a.label().cmp(b.label()));
    assert_eq!(expected, actual);
}

pub fn assert_stable(input: &MetricMapping, ranked: &RankedResult) {
    let position: HashMap<&str, usize> = input
        .iter()
        .enumerate()
        .map(|(i, m)| (m.label().as_str(), i))
        .collect();

    for w in ranked.entries().windows(2) {
        if w[0].value() == w[1].value() {
            assert!(
                position[w[0].label().as_str()] < position[w[1].label().as_str()],
                "'{}' and '{}' swapped their input order",
                w[0].label(),
                w[1].label(),
            );
        }
    }
}

/// Shared behavior every ranker must have. `stable` additionally checks that
/// equal values keep their input order.
pub fn check_ranker<R: Ranker>(ranker: &R, stable: bool) -> Result<()> {
    // Scenario: mixed values with a tie.
    let input = mapping(&[("a", 3), ("b", 1), ("c", 1), ("d", 2)]);
    let ranked = ranker.rank(input.clone())?;
    let pairs: Vec<_> = ranked
        .iter()
        .map(|m| (m.label().as_str(), m.value()))
        .collect();
    assert_eq!(vec![("b", 1), ("c", 1), ("d", 2), ("a", 3)], pairs);

    // Empty.
    assert!(ranker.rank(MetricMapping::new())?.is_empty());

    // Single entry.
    let ranked = ranker.rank(mapping(&[("only", 5)]))?;
    assert_eq!(vec!["only"], ranked.labels());
    assert_eq!(5, ranked.entries()[0].value());

    // Already sorted and reversed.
    let sorted = mapping(&[("p", 1), ("q", 2), ("r", 3), ("s", 4)]);
    assert_eq!(vec!["p", "q", "r", "s"], ranker.rank(sorted)?.labels());
    let reversed = mapping(&[("s", 4), ("r", 3), ("q", 2), ("p", 1)]);
    assert_eq!(vec!["p", "q", "r", "s"], ranker.rank(reversed)?.labels());

    let mut rng = StdRng::seed_from_u64(0x5eed);
    for &(len, max_value) in &[(2, 1), (10, 3), (100, 20), (500, 1000)] {
        let input = random_mapping(&mut rng, len, max_value);
        let ranked = ranker.rank(input.clone())?;

        assert!(ranked.is_sorted(), "not sorted: {:?}", ranked);
        assert_permutation(&input, &ranked);
        if stable {
            assert_stable(&input, &ranked);
        }

        // Ranking a ranked result again changes nothing.
        let again = ranker.rank(MetricMapping::try_from(ranked.clone())?)?;
        assert_eq!(ranked, again);
    }

    Ok(())
}
