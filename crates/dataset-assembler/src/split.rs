//! Group-Aware Train/Test Splitting

use crate::error::AssembleError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Seeded train/test splitter that keeps whole groups on one side
///
/// Splitting happens at the recording level, before segmentation, so windows
/// cut from one recording can never leak across the train/test boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GroupShuffleSplit {
    test_fraction: f64,
    seed: u64,
}

impl GroupShuffleSplit {
    /// Create a splitter holding out `test_fraction` of the groups
    pub fn new(test_fraction: f64, seed: u64) -> Result<Self, AssembleError> {
        if !test_fraction.is_finite() || test_fraction <= 0.0 || test_fraction >= 1.0 {
            return Err(AssembleError::InvalidTestFraction(test_fraction));
        }
        Ok(Self {
            test_fraction,
            seed,
        })
    }

    /// Partition recording indices into (train, test) by group identifier
    ///
    /// Unique groups are shuffled with the configured seed and
    /// `ceil(unique * test_fraction)` of them (capped so train keeps at least
    /// one group when two or more exist) are held out. The returned index
    /// sets cover the input exactly; their group sets are disjoint.
    pub fn split(&self, groups: &[String]) -> (Vec<usize>, Vec<usize>) {
        let mut unique: Vec<&String> = Vec::new();
        let mut seen: HashSet<&String> = HashSet::new();
        for group in groups {
            if seen.insert(group) {
                unique.push(group);
            }
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        unique.shuffle(&mut rng);

        let n_test = ((unique.len() as f64 * self.test_fraction).ceil() as usize)
            .min(unique.len().saturating_sub(1));
        let held_out: HashSet<&String> = unique[..n_test].iter().copied().collect();
        debug!(
            "Group split: {} of {} groups held out for test",
            n_test,
            unique.len()
        );

        let mut train = Vec::new();
        let mut test = Vec::new();
        for (index, group) in groups.iter().enumerate() {
            if held_out.contains(group) {
                test.push(index);
            } else {
                train.push(index);
            }
        }
        (train, test)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn group_set<'a>(groups: &'a [String], indices: &[usize]) -> HashSet<&'a str> {
        indices.iter().map(|&i| groups[i].as_str()).collect()
    }

    #[test]
    fn test_invalid_fractions() {
        assert!(GroupShuffleSplit::new(0.0, 0).is_err());
        assert!(GroupShuffleSplit::new(1.0, 0).is_err());
        assert!(GroupShuffleSplit::new(-0.3, 0).is_err());
        assert!(GroupShuffleSplit::new(f64::NAN, 0).is_err());
    }

    #[test]
    fn test_group_sets_are_disjoint() {
        let groups: Vec<String> = ["n1", "n2", "n1", "n3", "n2", "n4", "n5"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        for seed in 0..20 {
            let splitter = GroupShuffleSplit::new(0.4, seed).unwrap();
            let (train, test) = splitter.split(&groups);
            assert_eq!(train.len() + test.len(), groups.len());
            let train_groups = group_set(&groups, &train);
            let test_groups = group_set(&groups, &test);
            assert!(train_groups.is_disjoint(&test_groups), "seed {seed}");
            assert!(!test_groups.is_empty());
        }
    }

    #[test]
    fn test_two_groups_fifty_fifty() {
        let groups: Vec<String> = ["a", "a", "b", "b"].iter().map(|s| s.to_string()).collect();
        let splitter = GroupShuffleSplit::new(0.5, 7).unwrap();
        let (train, test) = splitter.split(&groups);
        let train_groups = group_set(&groups, &train);
        let test_groups = group_set(&groups, &test);
        assert_eq!(train_groups.len(), 1);
        assert_eq!(test_groups.len(), 1);
        assert!(train_groups.is_disjoint(&test_groups));
    }

    #[test]
    fn test_split_is_reproducible() {
        let groups: Vec<String> = (0..10).map(|i| format!("g{i}")).collect();
        let splitter = GroupShuffleSplit::new(0.3, 42).unwrap();
        assert_eq!(splitter.split(&groups), splitter.split(&groups));
    }

    #[test]
    fn test_single_group_stays_in_train() {
        // With one group nothing can be held out; the test side is empty and
        // the assembler reports it as insufficient samples.
        let groups: Vec<String> = vec!["only".to_string(); 4];
        let splitter = GroupShuffleSplit::new(0.3, 0).unwrap();
        let (train, test) = splitter.split(&groups);
        assert_eq!(train.len(), 4);
        assert!(test.is_empty());
    }
}
