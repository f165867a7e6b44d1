//! Fast non-dominated sorting.
//!
//! Partitions a population into Pareto fronts: front 0 holds every element
//! no other element dominates, front `k` holds the elements that become
//! non-dominated once fronts `0..k` are removed.
//!
//! # Algorithm (Deb et al., 2002)
//!
//! 1. Compare every pair once, recording for each element how many elements
//!    dominate it and which elements it dominates
//! 2. Elements with a zero count form front 0
//! 3. Walk the current front, decrementing the counts of the elements it
//!    dominates; those reaching zero form the next front
//!
//! # Complexity
//!
//! O(m * n²) where m = number of objectives, n = number of elements
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"
//! - IEEE Transactions on Evolutionary Computation, 6(2), 182-197

use crate::dominance::{Dominance, DominanceRelation};
use crate::error::{ensure_dimension, ensure_finite, MoError, MoResult};
use crate::extract::FitnessExtractor;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of non-dominated sorting.
///
/// Each element of `ranks` corresponds to the Pareto rank of the element
/// at the same index. Rank 0 is the Pareto front (non-dominated elements).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NondominatedSortResult {
    /// Pareto rank for each element (0 = front).
    pub ranks: Vec<usize>,

    /// Indices grouped by front: `fronts[0]` contains rank-0 indices, etc.
    pub fronts: Vec<Vec<usize>>,
}

impl NondominatedSortResult {
    /// Number of fronts found.
    pub fn num_fronts(&self) -> usize {
        self.fronts.len()
    }

    /// Rank of the element at `index`, if in range.
    pub fn rank(&self, index: usize) -> Option<usize> {
        self.ranks.get(index).copied()
    }

    /// Indices in front `k`; empty when `k` is past the last front.
    pub fn front(&self, k: usize) -> &[usize] {
        self.fronts.get(k).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Indices of the non-dominated elements.
    pub fn non_dominated(&self) -> &[usize] {
        self.front(0)
    }

    /// Groups references into `population` by front.
    ///
    /// `population` must be the slice that was sorted.
    pub fn partition<'p, T>(&self, population: &'p [T]) -> Vec<Vec<&'p T>> {
        self.fronts
            .iter()
            .map(|front| front.iter().map(|&i| &population[i]).collect())
            .collect()
    }
}

/// Options for [`non_dominated_sort_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortConfig {
    /// Dominance relation used for every pairwise comparison.
    pub relation: DominanceRelation,

    /// Whether to run the comparison phase in parallel using rayon.
    ///
    /// Has no effect unless the `parallel` feature is enabled.
    pub parallel: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            relation: DominanceRelation::default(),
            parallel: false,
        }
    }
}

impl SortConfig {
    /// Sets the dominance relation.
    pub fn with_relation(mut self, relation: DominanceRelation) -> Self {
        self.relation = relation;
        self
    }

    /// Enables or disables the parallel comparison phase.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        self.relation.validate()
    }
}

/// Fast non-dominated sorting under minimization with exact comparison.
///
/// # Errors
///
/// [`MoError::DimensionMismatch`] if the extracted vectors do not all share
/// one dimension, [`MoError::EmptyVector`] if that dimension is zero,
/// [`MoError::NonFinite`] if any component is NaN or infinite.
///
/// # Example
///
/// ```
/// use u_moeval::extract::Identity;
/// use u_moeval::sort::non_dominated_sort;
///
/// let objectives = vec![
///     vec![1.0, 5.0],  // A
///     vec![3.0, 3.0],  // B
///     vec![5.0, 1.0],  // C
///     vec![4.0, 4.0],  // D, dominated by B
/// ];
///
/// let result = non_dominated_sort(&objectives, &Identity).unwrap();
///
/// assert_eq!(result.ranks, vec![0, 0, 0, 1]);
/// assert_eq!(result.fronts, vec![vec![0, 1, 2], vec![3]]);
/// ```
pub fn non_dominated_sort<T, E>(population: &[T], extractor: &E) -> MoResult<NondominatedSortResult>
where
    E: FitnessExtractor<T>,
{
    non_dominated_sort_with(population, extractor, &SortConfig::default())
}

/// Fast non-dominated sorting with an explicit [`SortConfig`].
///
/// # Errors
///
/// As [`non_dominated_sort`], plus [`MoError::InvalidConfig`] if `config`
/// fails validation and [`MoError::DominanceCycle`] if a non-zero tolerance
/// makes the relation cyclic so that some elements cannot be ranked.
pub fn non_dominated_sort_with<T, E>(
    population: &[T],
    extractor: &E,
    config: &SortConfig,
) -> MoResult<NondominatedSortResult>
where
    E: FitnessExtractor<T>,
{
    config.validate().map_err(MoError::InvalidConfig)?;

    let n = population.len();
    if n == 0 {
        return Ok(NondominatedSortResult::default());
    }

    let objectives: Vec<&[f64]> = population.iter().map(|e| extractor.extract(e)).collect();
    let m = objectives[0].len();
    if m == 0 {
        return Err(MoError::EmptyVector);
    }
    for o in &objectives {
        ensure_dimension(m, o.len())?;
        ensure_finite(o)?;
    }

    if n == 1 {
        return Ok(NondominatedSortResult {
            ranks: vec![0],
            fronts: vec![vec![0]],
        });
    }

    let (mut domination_count, dominated) = count_dominance(&objectives, config);
    let mut ranks = vec![0usize; n];

    let front_0: Vec<usize> = (0..n).filter(|&i| domination_count[i] == 0).collect();

    // Build subsequent fronts
    let mut fronts = vec![front_0];
    loop {
        let rank = fronts.len();
        let mut next_front = Vec::new();

        if let Some(current) = fronts.last() {
            for &p in current {
                for &q in &dominated[p] {
                    domination_count[q] -= 1;
                    if domination_count[q] == 0 {
                        ranks[q] = rank;
                        next_front.push(q);
                    }
                }
            }
        }

        if next_front.is_empty() {
            break;
        }
        fronts.push(next_front);
    }

    // tolerance-based ties are not transitive, so counts may never reach zero
    let assigned: usize = fronts.iter().map(Vec::len).sum();
    if assigned < n {
        return Err(MoError::DominanceCycle {
            unassigned: n - assigned,
        });
    }

    debug!(
        population = n,
        objectives = m,
        fronts = fronts.len(),
        "non-dominated sort finished"
    );

    Ok(NondominatedSortResult { ranks, fronts })
}

/// Domination counts and dominated sets for every element.
///
/// `Equal` and `NonDominated` outcomes leave both untouched.
fn count_dominance(objectives: &[&[f64]], config: &SortConfig) -> (Vec<usize>, Vec<Vec<usize>>) {
    #[cfg(feature = "parallel")]
    let counted = config
        .parallel
        .then(|| count_dominance_parallel(objectives, &config.relation));
    #[cfg(not(feature = "parallel"))]
    let counted = None;
    if let Some(counted) = counted {
        return counted;
    }

    let relation = &config.relation;
    let n = objectives.len();
    let mut domination_count = vec![0usize; n];
    let mut dominated: Vec<Vec<usize>> = vec![Vec::new(); n];

    for i in 0..n {
        for j in (i + 1)..n {
            match relation.compare_unchecked(objectives[i], objectives[j]) {
                Dominance::Left => {
                    dominated[i].push(j);
                    domination_count[j] += 1;
                }
                Dominance::Right => {
                    dominated[j].push(i);
                    domination_count[i] += 1;
                }
                Dominance::NonDominated | Dominance::Equal => {}
            }
        }
    }

    (domination_count, dominated)
}

/// Each element scans the whole population on its own, so counters are
/// partitioned by target index and need no synchronization.
#[cfg(feature = "parallel")]
fn count_dominance_parallel(
    objectives: &[&[f64]],
    relation: &DominanceRelation,
) -> (Vec<usize>, Vec<Vec<usize>>) {
    objectives
        .par_iter()
        .enumerate()
        .map(|(i, &p)| {
            let mut count = 0usize;
            let mut dominated = Vec::new();
            for (j, &q) in objectives.iter().enumerate() {
                if i == j {
                    continue;
                }
                match relation.compare_unchecked(p, q) {
                    Dominance::Left => dominated.push(j),
                    Dominance::Right => count += 1,
                    Dominance::NonDominated | Dominance::Equal => {}
                }
            }
            (count, dominated)
        })
        .unzip()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dominance::Direction;
    use crate::extract::{from_fn, Identity};

    fn sort(objs: &[Vec<f64>]) -> NondominatedSortResult {
        non_dominated_sort(objs, &Identity).unwrap()
    }

    // ---- Degenerate populations ----

    #[test]
    fn test_empty_population() {
        let objs: Vec<Vec<f64>> = Vec::new();
        let result = sort(&objs);
        assert!(result.ranks.is_empty());
        assert!(result.fronts.is_empty());
        assert_eq!(result.num_fronts(), 0);
        assert!(result.non_dominated().is_empty());
    }

    #[test]
    fn test_single_solution() {
        let result = sort(&[vec![1.0, 2.0]]);
        assert_eq!(result.ranks, vec![0]);
        assert_eq!(result.fronts, vec![vec![0]]);
    }

    // ---- Ranking ----

    #[test]
    fn test_two_non_dominated() {
        let result = sort(&[vec![1.0, 2.0], vec![2.0, 1.0]]);
        assert_eq!(result.ranks, vec![0, 0]);
        assert_eq!(result.num_fronts(), 1);
    }

    #[test]
    fn test_chain_of_dominance() {
        let result = sort(&[vec![1.0, 1.0], vec![2.0, 2.0], vec![0.0, 0.0]]);
        assert_eq!(result.ranks, vec![1, 2, 0]);
        assert_eq!(result.fronts, vec![vec![2], vec![0], vec![1]]);
    }

    #[test]
    fn test_mixed_fronts() {
        let objs = vec![
            vec![1.0, 5.0], // front 0
            vec![3.0, 3.0], // front 0
            vec![5.0, 1.0], // front 0
            vec![4.0, 4.0], // dominated by [1] → front 1
            vec![6.0, 6.0], // dominated by [3] → front 2
        ];
        let result = sort(&objs);
        assert_eq!(result.ranks, vec![0, 0, 0, 1, 2]);
        assert_eq!(result.front(1), &[3]);
        assert_eq!(result.front(2), &[4]);
        assert!(result.front(3).is_empty());
    }

    #[test]
    fn test_all_equal() {
        let objs = vec![vec![2.0, 2.0], vec![2.0, 2.0], vec![2.0, 2.0]];
        let result = sort(&objs);
        // identical vectors do not dominate each other
        assert!(result.ranks.iter().all(|&r| r == 0));
        assert_eq!(result.fronts, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_duplicates_share_rank_below_dominator() {
        let objs = vec![vec![3.0, 3.0], vec![1.0, 1.0], vec![3.0, 3.0]];
        let result = sort(&objs);
        assert_eq!(result.ranks, vec![1, 0, 1]);
        assert_eq!(result.fronts, vec![vec![1], vec![0, 2]]);
    }

    #[test]
    fn test_three_objectives() {
        let objs = vec![
            vec![1.0, 5.0, 3.0],
            vec![3.0, 1.0, 5.0],
            vec![5.0, 3.0, 1.0],
            vec![4.0, 4.0, 4.0], // incomparable with each of the above
        ];
        let result = sort(&objs);
        assert_eq!(result.ranks, vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_maximization() {
        let config = SortConfig::default()
            .with_relation(DominanceRelation::default().with_direction(Direction::Maximize));
        let objs = vec![vec![1.0, 1.0], vec![2.0, 2.0], vec![0.0, 0.0]];
        let result = non_dominated_sort_with(&objs, &Identity, &config).unwrap();
        assert_eq!(result.ranks, vec![1, 0, 2]);
    }

    // ---- Extraction ----

    #[derive(Debug)]
    struct Evaluated {
        name: char,
        fitness: Vec<f64>,
    }

    #[test]
    fn test_partition_with_extractor() {
        let pop = vec![
            Evaluated { name: 'a', fitness: vec![2.0, 2.0] },
            Evaluated { name: 'b', fitness: vec![1.0, 3.0] },
            Evaluated { name: 'c', fitness: vec![3.0, 3.0] },
        ];
        let ex = from_fn(|e: &Evaluated| e.fitness.as_slice());
        let result = non_dominated_sort(&pop, &ex).unwrap();
        let names: Vec<Vec<char>> = result
            .partition(&pop)
            .iter()
            .map(|f| f.iter().map(|e| e.name).collect())
            .collect();
        assert_eq!(names, vec![vec!['a', 'b'], vec!['c']]);
        assert_eq!(result.rank(2), Some(1));
        assert_eq!(result.rank(3), None);
    }

    // ---- Errors ----

    #[test]
    fn test_dimension_mismatch_aborts() {
        let objs = vec![vec![1.0, 2.0], vec![0.0, 0.0], vec![1.0, 2.0, 3.0]];
        assert_eq!(
            non_dominated_sort(&objs, &Identity),
            Err(MoError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn test_zero_objectives() {
        let objs = vec![Vec::<f64>::new(), Vec::new()];
        assert_eq!(non_dominated_sort(&objs, &Identity), Err(MoError::EmptyVector));
    }

    // ---- Tolerance ----

    #[test]
    fn test_tolerance_merges_near_ties() {
        let config = SortConfig::default()
            .with_relation(DominanceRelation::default().with_tolerance(0.5));
        let objs = vec![vec![1.0, 1.0], vec![1.2, 1.0], vec![3.0, 3.0]];
        let exact = sort(&objs);
        assert_eq!(exact.ranks, vec![0, 1, 2]);
        let loose = non_dominated_sort_with(&objs, &Identity, &config).unwrap();
        assert_eq!(loose.ranks, vec![0, 0, 1]);
        assert_eq!(loose.fronts.iter().map(Vec::len).sum::<usize>(), objs.len());
    }

    #[test]
    fn test_tolerance_cycle_is_reported() {
        // with tolerance 1: a ≻ b, b ≻ c, c ≻ a, and a ≻ d
        let config = SortConfig::default()
            .with_relation(DominanceRelation::default().with_tolerance(1.0));
        let objs = vec![
            vec![0.0, 0.0, 0.0],
            vec![1.5, -1.0, -1.0],
            vec![0.5, 0.5, -2.0],
            vec![0.0, 0.0, 10.0],
        ];
        let rel = config.relation;
        assert_eq!(rel.compare(&objs[0], &objs[1]), Ok(Dominance::Left));
        assert_eq!(rel.compare(&objs[1], &objs[2]), Ok(Dominance::Left));
        assert_eq!(rel.compare(&objs[2], &objs[0]), Ok(Dominance::Left));
        assert_eq!(
            non_dominated_sort_with(&objs, &Identity, &config),
            Err(MoError::DominanceCycle { unassigned: 4 })
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SortConfig::default().with_relation(DominanceRelation {
            tolerance: f64::NAN,
            ..Default::default()
        });
        assert!(matches!(
            non_dominated_sort_with(&[vec![1.0]], &Identity, &config),
            Err(MoError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_non_finite_objective_rejected() {
        let objs = vec![vec![1.0, 2.0], vec![f64::NAN, 0.0]];
        assert_eq!(
            non_dominated_sort(&objs, &Identity),
            Err(MoError::NonFinite { component: 0 })
        );
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let objs: Vec<Vec<f64>> = (0..40)
            .map(|i| {
                let x = (i * 7 % 13) as f64;
                let y = (i * 5 % 11) as f64;
                vec![x, y, (x - y).abs()]
            })
            .collect();
        let seq = sort(&objs);
        let par =
            non_dominated_sort_with(&objs, &Identity, &SortConfig::default().with_parallel(true))
                .unwrap();
        assert_eq!(seq.ranks, par.ranks);
    }
}
