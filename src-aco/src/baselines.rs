//! Baseline optimizers
//!
//! The comparison points every pheromone run is judged against: a (1+1)
//! evolutionary algorithm and plain random search, both on the 50 * n^2
//! evaluation-budget convention.

use antopt_benchmarks::BenchmarkProblem;
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::RunReport;

fn seeded_rng(seed: Option<u64>) -> StdRng {
	match seed {
		Some(s) => StdRng::seed_from_u64(s),
		None => {
			let mut thread_rng = rand::rng();
			StdRng::from_rng(&mut thread_rng)
		}
	}
}

fn random_bits<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<u8> {
	(0..n).map(|_| if rng.random::<bool>() { 1 } else { 0 }).collect()
}

fn finish(best_bits: Vec<u8>, best_fitness: f64, success: bool, nit: usize, nfev: usize, budget: usize) -> RunReport {
	let message = if success {
		format!("Optimum reached after {} evaluations", nfev)
	} else {
		format!("Evaluation budget exhausted: {}", budget)
	};
	RunReport {
		population_fitness: Array1::from(vec![best_fitness]),
		solution: best_bits,
		fitness: best_fitness,
		success,
		message,
		generations: nit,
		evaluations: nfev,
	}
}

/// (1+1) EA: keep one parent, flip each bit independently with probability
/// 1/n, accept strict improvements only.
pub fn one_plus_one_ea(
	problem: &BenchmarkProblem,
	evaluation_budget: Option<usize>,
	seed: Option<u64>,
) -> RunReport {
	let n = problem.dimensionality();
	let optimum = problem.known_optimum();
	let budget = evaluation_budget.unwrap_or(50 * n * n);
	let mut rng = seeded_rng(seed);

	let mut best_bits = random_bits(n, &mut rng);
	let mut best_fitness = problem.evaluate(&best_bits);
	let mut nfev = 1usize;
	let mut nit = 0usize;
	let mut success = best_fitness >= optimum;

	while !success && nfev < budget {
		nit += 1;
		let mut offspring = best_bits.clone();
		for bit in offspring.iter_mut() {
			if rng.random_range(0..n) == 0 {
				*bit = 1 - *bit;
			}
		}
		let fitness = problem.evaluate(&offspring);
		nfev += 1;
		if fitness > best_fitness {
			best_fitness = fitness;
			best_bits = offspring;
		}
		success = best_fitness >= optimum;
	}

	finish(best_bits, best_fitness, success, nit, nfev, budget)
}

/// Random search: a fresh uniform bitstring per evaluation.
pub fn random_search(
	problem: &BenchmarkProblem,
	evaluation_budget: Option<usize>,
	seed: Option<u64>,
) -> RunReport {
	let n = problem.dimensionality();
	let optimum = problem.known_optimum();
	let budget = evaluation_budget.unwrap_or(50 * n * n);
	let mut rng = seeded_rng(seed);

	let mut best_bits: Vec<u8> = Vec::new();
	let mut best_fitness = f64::NEG_INFINITY;
	let mut nfev = 0usize;
	let mut success = false;

	while !success && nfev < budget {
		let bits = random_bits(n, &mut rng);
		let fitness = problem.evaluate(&bits);
		nfev += 1;
		if fitness > best_fitness {
			best_fitness = fitness;
			best_bits = bits;
		}
		success = best_fitness >= optimum;
	}

	finish(best_bits, best_fitness, success, nfev, nfev, budget)
}
