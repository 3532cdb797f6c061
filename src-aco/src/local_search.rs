//! Bit-flip local search
//!
//! Deterministic refinement of a single evaluated candidate. Both policies
//! only ever accept strict improvements, so fitness is non-decreasing and
//! refining a local optimum changes nothing.

use antopt_benchmarks::BenchmarkProblem;
use rand::Rng;

use crate::ant::ScoredAnt;

/// Refinement policy applied to each ant after evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocalSearchPolicy {
    /// Flip one uniformly chosen bit and keep it only if strictly better.
    /// Applied with the given per-ant probability; one evaluation per probe.
    SingleBitProbe { probability: f64 },
    /// Scan all positions, keeping each strictly improving flip, and repeat
    /// until a full scan yields no improvement. The sweep cap bounds the
    /// cost of one generation on landscapes with long improvement chains.
    FirstImprovementSweep { max_sweeps: usize },
}

/// Apply `policy` to `ant` in place. Returns the number of fitness
/// evaluations spent.
pub fn apply_local_search<R: Rng + ?Sized>(
    ant: &mut ScoredAnt,
    problem: &BenchmarkProblem,
    policy: LocalSearchPolicy,
    rng: &mut R,
) -> usize {
    match policy {
        LocalSearchPolicy::SingleBitProbe { probability } => {
            if probability >= 1.0 || rng.random::<f64>() < probability {
                probe_random_bit(ant, problem, rng);
                1
            } else {
                0
            }
        }
        LocalSearchPolicy::FirstImprovementSweep { max_sweeps } => {
            first_improvement_sweep(ant, problem, max_sweeps)
        }
    }
}

/// Flip one random bit; keep the flip only on strict improvement.
pub fn probe_random_bit<R: Rng + ?Sized>(
    ant: &mut ScoredAnt,
    problem: &BenchmarkProblem,
    rng: &mut R,
) -> bool {
    let i = rng.random_range(0..ant.bits.len());
    let mut neighbour = ant.bits.clone();
    neighbour[i] = 1 - neighbour[i];
    let fitness = problem.evaluate(&neighbour);
    if fitness > ant.fitness {
        ant.bits = neighbour;
        ant.fitness = fitness;
        true
    } else {
        false
    }
}

/// Sweep all positions accepting strictly improving flips until a clean
/// scan or the sweep cap. Returns the number of evaluations spent.
pub fn first_improvement_sweep(
    ant: &mut ScoredAnt,
    problem: &BenchmarkProblem,
    max_sweeps: usize,
) -> usize {
    let n = ant.bits.len();
    let mut evaluations = 0;
    for _ in 0..max_sweeps {
        let mut improved = false;
        for i in 0..n {
            ant.bits[i] ^= 1;
            let fitness = problem.evaluate(&ant.bits);
            evaluations += 1;
            if fitness > ant.fitness {
                ant.fitness = fitness;
                improved = true;
            } else {
                ant.bits[i] ^= 1;
            }
        }
        if !improved {
            break;
        }
    }
    evaluations
}

#[cfg(test)]
mod tests {
    use super::*;
    use antopt_benchmarks::{get_problem, ProblemId};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scored(problem: &antopt_benchmarks::BenchmarkProblem, bits: Vec<u8>) -> ScoredAnt {
        let fitness = problem.evaluate(&bits);
        ScoredAnt { bits, fitness }
    }

    #[test]
    fn test_probe_never_decreases_fitness() {
        let problem = get_problem(ProblemId::OneMax, 16).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let mut ant = scored(&problem, vec![1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0]);
        for _ in 0..200 {
            let before = ant.fitness();
            probe_random_bit(&mut ant, &problem, &mut rng);
            assert!(ant.fitness() >= before);
        }
    }

    #[test]
    fn test_sweep_reaches_local_optimum_on_onemax() {
        let problem = get_problem(ProblemId::OneMax, 12).unwrap();
        let mut ant = scored(&problem, vec![0; 12]);
        first_improvement_sweep(&mut ant, &problem, 10);
        // every flip 0 -> 1 improves, one sweep suffices
        assert_eq!(ant.fitness(), 12.0);
        assert_eq!(ant.bits(), &[1; 12]);
    }

    #[test]
    fn test_sweep_is_idempotent_at_local_optimum() {
        let problem = get_problem(ProblemId::OneMax, 8).unwrap();
        let mut ant = scored(&problem, vec![1; 8]);
        let evals = first_improvement_sweep(&mut ant, &problem, 10);
        // one clean scan, then it stops
        assert_eq!(evals, 8);
        let snapshot = ant.clone();
        first_improvement_sweep(&mut ant, &problem, 10);
        assert_eq!(ant, snapshot);
    }

    #[test]
    fn test_probe_is_noop_at_global_optimum() {
        let problem = get_problem(ProblemId::OneMax, 8).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut ant = scored(&problem, vec![1; 8]);
        for _ in 0..50 {
            assert!(!probe_random_bit(&mut ant, &problem, &mut rng));
        }
        assert_eq!(ant.bits(), &[1; 8]);
        assert_eq!(ant.fitness(), 8.0);
    }

    #[test]
    fn test_sweep_cap_bounds_evaluations() {
        let problem = get_problem(ProblemId::LeadingOnes, 10).unwrap();
        let mut ant = scored(&problem, vec![0; 10]);
        let evals = first_improvement_sweep(&mut ant, &problem, 1);
        assert_eq!(evals, 10);
    }

    #[test]
    fn test_apply_probe_probability_zero_is_noop() {
        let problem = get_problem(ProblemId::OneMax, 6).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let mut ant = scored(&problem, vec![0; 6]);
        let evals = apply_local_search(
            &mut ant,
            &problem,
            LocalSearchPolicy::SingleBitProbe { probability: 0.0 },
            &mut rng,
        );
        assert_eq!(evals, 0);
        assert_eq!(ant.fitness(), 0.0);
    }
}
