//! Optional parallel population evaluation
//!
//! Constructions are independent, so scoring a generation is trivially
//! parallel. Everything else (construction, refinement, pheromone update)
//! stays on the calling thread: the update runs strictly after all
//! evaluations of the generation have completed.

use antopt_benchmarks::BenchmarkProblem;
use rayon::prelude::*;

use crate::ant::{Ant, ScoredAnt};

/// Parallel evaluation configuration. Disabled by default; the core is a
/// single-threaded synchronous loop unless a caller opts in.
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    pub enabled: bool,
    /// Global rayon pool size; `None` keeps rayon's default
    pub num_threads: Option<usize>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self { enabled: false, num_threads: None }
    }
}

/// Score a whole generation, preserving population order.
pub fn evaluate_population(
    ants: Vec<Ant>,
    problem: &BenchmarkProblem,
    config: &ParallelConfig,
) -> Vec<ScoredAnt> {
    if config.enabled && ants.len() > 1 {
        if let Some(n) = config.num_threads {
            // Ignore error if global pool already set
            let _ = rayon::ThreadPoolBuilder::new().num_threads(n).build_global();
        }
        ants.into_par_iter().map(|ant| ant.evaluate(problem)).collect()
    } else {
        ants.into_iter().map(|ant| ant.evaluate(problem)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use antopt_benchmarks::{get_problem, ProblemId};

    #[test]
    fn test_parallel_matches_serial_order_and_values() {
        let problem = get_problem(ProblemId::OneMax, 6).unwrap();
        let patterns: Vec<Vec<u8>> = vec![
            vec![0, 0, 0, 0, 0, 0],
            vec![1, 1, 1, 1, 1, 1],
            vec![1, 0, 1, 0, 1, 0],
            vec![0, 1, 1, 0, 0, 1],
        ];
        let serial = evaluate_population(
            patterns.iter().cloned().map(Ant::new).collect(),
            &problem,
            &ParallelConfig::default(),
        );
        let parallel = evaluate_population(
            patterns.iter().cloned().map(Ant::new).collect(),
            &problem,
            &ParallelConfig { enabled: true, num_threads: None },
        );
        assert_eq!(serial.len(), parallel.len());
        for (s, p) in serial.iter().zip(parallel.iter()) {
            assert_eq!(s.bits(), p.bits());
            assert_eq!(s.fitness(), p.fitness());
        }
    }
}
