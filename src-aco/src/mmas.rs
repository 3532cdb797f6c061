//! Max-Min Ant System variants
//!
//! Single-ant colonies with one incumbent and tight pheromone bounds
//! `[1/n, 1 - 1/n]`. Each iteration constructs one candidate from the
//! trails (pure pheromone-following), updates the incumbent and reinforces
//! the incumbent's bits with strength `rho`. The two variants differ only
//! in how ties are handled: MMAS lets an equal-fitness candidate replace
//! the incumbent and drift across plateaus, MMAS* keeps the incumbent
//! unless strictly beaten.

use antopt_benchmarks::BenchmarkProblem;
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use std::str::FromStr;

use crate::construct::construct_solution;
use crate::pheromone::{PheromoneBounds, PheromoneField};
use crate::{ConfigError, RunReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MmasVariant {
	/// Replace the incumbent on ties (plateau drift)
	Mmas,
	/// Replace the incumbent only on strict improvement
	MmasStar,
}

impl FromStr for MmasVariant {
	type Err = String;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let t = s.to_lowercase();
		match t.as_str() {
			"mmas" => Ok(MmasVariant::Mmas),
			"mmas*" | "mmas-star" | "mmas_star" | "mmasstar" => Ok(MmasVariant::MmasStar),
			_ => Err(format!("unknown mmas variant: {}", s)),
		}
	}
}

impl fmt::Display for MmasVariant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			MmasVariant::Mmas => write!(f, "mmas"),
			MmasVariant::MmasStar => write!(f, "mmas*"),
		}
	}
}

/// Configuration for one max-min run
#[derive(Debug, Clone)]
pub struct MmasConfig {
	/// Reinforcement strength in (0, 1]; 1 snaps trails straight to the
	/// bounds, small values freeze slowly
	pub rho: f64,
	/// Fitness-evaluation budget; `None` uses the 50 * n^2 convention
	pub evaluation_budget: Option<usize>,
	pub variant: MmasVariant,
	pub seed: Option<u64>,
	/// Print objective best on improvement
	pub disp: bool,
}

impl Default for MmasConfig {
	fn default() -> Self {
		Self {
			rho: 0.1,
			evaluation_budget: None,
			variant: MmasVariant::Mmas,
			seed: None,
			disp: false,
		}
	}
}

/// Run a max-min ant system on `problem` and return a report.
pub fn max_min_ant_system(
	problem: &BenchmarkProblem,
	config: MmasConfig,
) -> Result<RunReport, ConfigError> {
	if !config.rho.is_finite() || config.rho <= 0.0 || config.rho > 1.0 {
		return Err(ConfigError::MmasRho(config.rho));
	}

	let n = problem.dimensionality();
	let optimum = problem.known_optimum();
	let budget = config.evaluation_budget.unwrap_or(50 * n * n);

	let mut rng: StdRng = match config.seed {
		Some(s) => StdRng::seed_from_u64(s),
		None => {
			let mut thread_rng = rand::rng();
			StdRng::from_rng(&mut thread_rng)
		}
	};

	let bounds = PheromoneBounds { min: 1.0 / n as f64, max: 1.0 - 1.0 / n as f64 };
	let mut trails = PheromoneField::new(n, 0.5, bounds);

	// alpha = 1, beta = 0: construction follows the trails alone
	let construct = |trails: &PheromoneField, rng: &mut StdRng| {
		construct_solution(trails, 1.0, 0.0, [1.0, 1.0], rng)
	};

	let mut incumbent = construct(&trails, &mut rng).evaluate(problem);
	let mut nfev = 1usize;
	let mut nit = 0usize;

	let mut success = incumbent.fitness() >= optimum;
	let mut message = if success {
		"Optimum reached by the initial candidate".to_string()
	} else {
		String::new()
	};

	while !success && nfev < budget {
		nit += 1;
		let candidate = construct(&trails, &mut rng).evaluate(problem);
		nfev += 1;

		let accept = match config.variant {
			MmasVariant::Mmas => candidate.fitness() >= incumbent.fitness(),
			MmasVariant::MmasStar => candidate.fitness() > incumbent.fitness(),
		};
		if accept {
			if config.disp && candidate.fitness() > incumbent.fitness() {
				eprintln!(
					"{} iter {:7}  best_f={:.6e}",
					config.variant,
					nit,
					candidate.fitness()
				);
			}
			incumbent = candidate;
		}

		// reinforce the incumbent: evaporate, deposit rho, clamp
		trails.evaporate(config.rho);
		for (i, &bit) in incumbent.bits().iter().enumerate() {
			trails.deposit(i, bit, config.rho);
		}
		trails.clamp();

		if incumbent.fitness() >= optimum {
			success = true;
			message = format!("Optimum reached after {} evaluations", nfev);
		}
	}

	if !success {
		message = format!("Evaluation budget exhausted: {}", budget);
	}

	Ok(RunReport {
		fitness: incumbent.fitness(),
		population_fitness: Array1::from(vec![incumbent.fitness()]),
		solution: incumbent.bits().to_vec(),
		success,
		message,
		generations: nit,
		evaluations: nfev,
	})
}
