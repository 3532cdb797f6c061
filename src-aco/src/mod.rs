//! Ant Colony Optimization for pseudo-boolean (bitstring) problems
//!
//! A pragmatic, dependency-light implementation of pheromone-guided
//! stochastic search over fixed-length binary vectors.
//!
//! Supported features:
//! - Per-bit pheromone pairs with evaporation, deposition and clamping bounds
//! - Deposition policies: single-best, elitist-rank, fitness-weighted
//! - Heuristic bias weights (eta) combined with pheromone trails via alpha/beta
//! - Local search: single-bit probe or capped first-improvement sweep
//! - Periodic pheromone reset to escape stagnation
//! - Max-Min Ant System variants (MMAS, MMAS*) on the same pheromone store
//! - (1+1) EA and random-search baselines for comparison runs
//! - Optional parallel population evaluation behind a full-generation barrier
//! - Deterministic runs from a `u64` seed

#![allow(missing_docs)]
use std::fmt;
use std::str::FromStr;

use ndarray::Array1;
use thiserror::Error;

pub mod ant;
pub mod baselines;
pub mod colony;
pub mod construct;
pub mod deposit_elitist_rank;
pub mod deposit_fitness_weighted;
pub mod deposit_single_best;
pub mod local_search;
pub mod mmas;
pub mod parallel_eval;
pub mod pheromone;
pub mod recorder;
pub mod run_recorded;

pub use ant::{Ant, ScoredAnt};
pub use colony::{ant_colony_optimization, AntColony};
pub use local_search::LocalSearchPolicy;
pub use mmas::{max_min_ant_system, MmasConfig, MmasVariant};
pub use parallel_eval::ParallelConfig;
pub use pheromone::{PheromoneBounds, PheromoneField};
pub use recorder::{EvaluationRecord, EvaluationRecorder};
pub use run_recorded::run_recorded_colony;

/// Ratio used in place of `fitness / reference` whenever the reference (or
/// the fitness itself) is non-positive or non-finite. Shared by every
/// ratio-based deposition policy so degenerate fitness scales behave the
/// same everywhere.
pub const FALLBACK_DEPOSIT_RATIO: f64 = 0.1;

pub(crate) fn argmax(v: &Array1<f64>) -> (usize, f64) {
	let mut best_i = 0usize;
	let mut best_v = v[0];
	for (i, &val) in v.iter().enumerate() {
		if val > best_v {
			best_v = val;
			best_i = i;
		}
	}
	(best_i, best_v)
}

/// Pheromone deposition policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepositionPolicy {
	/// Only the generation's best ant deposits, scaled by fitness / optimum
	SingleBest,
	/// The elite deposit amounts proportional to their rank, independent of
	/// the fitness scale
	ElitistRank,
	/// The elite deposit amounts proportional to fitness relative to the
	/// incumbent best
	FitnessWeighted,
}

impl FromStr for DepositionPolicy {
	type Err = String;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let t = s.to_lowercase();
		match t.as_str() {
			"singlebest" | "single-best" | "single_best" | "best" => {
				Ok(DepositionPolicy::SingleBest)
			}
			"elitistrank" | "elitist-rank" | "elitist_rank" | "rank" => {
				Ok(DepositionPolicy::ElitistRank)
			}
			"fitnessweighted" | "fitness-weighted" | "fitness_weighted" | "weighted" => {
				Ok(DepositionPolicy::FitnessWeighted)
			}
			_ => Err(format!("unknown deposition policy: {}", s)),
		}
	}
}

impl fmt::Display for DepositionPolicy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			DepositionPolicy::SingleBest => "single-best",
			DepositionPolicy::ElitistRank => "elitist-rank",
			DepositionPolicy::FitnessWeighted => "fitness-weighted",
		};
		write!(f, "{}", name)
	}
}

/// Errors raised by configuration validation, before any search starts
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
	#[error("population size must be at least 1")]
	EmptyPopulation,
	#[error("alpha and beta must be finite and non-negative, got alpha={alpha}, beta={beta}")]
	NegativeExponent { alpha: f64, beta: f64 },
	#[error("evaporation rate must lie in [0, 1), got {0}")]
	EvaporationRate(f64),
	#[error("heuristic weights must be positive and finite, got eta0={0}, eta1={1}")]
	HeuristicWeights(f64, f64),
	#[error("elite fraction must lie in (0, 1], got {0}")]
	EliteFraction(f64),
	#[error("deposit scale must be finite and non-negative, got {0}")]
	DepositScale(f64),
	#[error("pheromone bounds must satisfy 0 < min <= max, got [{min}, {max}]")]
	PheromoneBounds { min: f64, max: f64 },
	#[error("initial pheromone {init} lies outside the bounds [{min}, {max}]")]
	InitialPheromone { init: f64, min: f64, max: f64 },
	#[error("local search probability must lie in [0, 1], got {0}")]
	LocalSearchProbability(f64),
	#[error("local search sweep cap must be at least 1")]
	ZeroSweeps,
	#[error("pheromone reset interval must be at least 1 generation")]
	ZeroResetInterval,
	#[error("mmas evaporation rate must lie in (0, 1], got {0}")]
	MmasRho(f64),
}

/// Configuration for one ant colony run
pub struct AcoConfig {
	pub population_size: usize,
	pub generation_count: usize,
	/// Pheromone trail influence; 0 ignores the trails entirely
	pub alpha: f64,
	/// Heuristic influence; 0 ignores the heuristic entirely
	pub beta: f64,
	/// Static per-bit-value heuristic weights `[eta0, eta1]`; `[1, 1]`
	/// makes construction pure pheromone-following
	pub eta: [f64; 2],
	/// Fraction of every trail removed before deposition, in [0, 1);
	/// 0 disables evaporation
	pub evaporation_rate: f64,
	pub deposition: DepositionPolicy,
	/// Share of the population allowed to deposit, in (0, 1]; the elite
	/// count is the ceiling of `elite_fraction * population_size`
	pub elite_fraction: f64,
	/// Base deposit amount before rank/ratio weighting
	pub deposit_scale: f64,
	/// Uniform trail value at initialization and after a reset
	pub tau_init: f64,
	pub tau_bounds: PheromoneBounds,
	/// Refinement applied to every ant after evaluation; `None` disables it
	pub local_search: Option<LocalSearchPolicy>,
	/// Reinitialize the pheromone field every this many generations,
	/// keeping the incumbent best
	pub reset_interval: Option<usize>,
	pub seed: Option<u64>,
	/// Print objective best at each generation
	pub disp: bool,
	/// Optional per-generation callback (may stop early)
	pub callback: Option<Box<dyn FnMut(&ColonyIntermediate) -> CallbackAction>>,
	/// Parallel evaluation configuration
	pub parallel: ParallelConfig,
}

impl Default for AcoConfig {
	fn default() -> Self {
		Self {
			population_size: 10,
			generation_count: 10_000,
			alpha: 1.0,
			beta: 1.0,
			eta: [1.0, 2.0],
			evaporation_rate: 0.1,
			deposition: DepositionPolicy::ElitistRank,
			elite_fraction: 0.2,
			deposit_scale: 0.3,
			tau_init: 0.5,
			tau_bounds: PheromoneBounds::default(),
			local_search: Some(LocalSearchPolicy::SingleBitProbe { probability: 1.0 }),
			reset_interval: None,
			seed: None,
			disp: false,
			callback: None,
			parallel: ParallelConfig::default(),
		}
	}
}

impl AcoConfig {
	/// Reject every malformed parameter with a descriptive error before a
	/// single trail is built.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.population_size == 0 {
			return Err(ConfigError::EmptyPopulation);
		}
		if !(self.alpha.is_finite() && self.beta.is_finite())
			|| self.alpha < 0.0
			|| self.beta < 0.0
		{
			return Err(ConfigError::NegativeExponent { alpha: self.alpha, beta: self.beta });
		}
		if !self.evaporation_rate.is_finite()
			|| !(0.0..1.0).contains(&self.evaporation_rate)
		{
			return Err(ConfigError::EvaporationRate(self.evaporation_rate));
		}
		if !(self.eta[0].is_finite() && self.eta[1].is_finite())
			|| self.eta[0] <= 0.0
			|| self.eta[1] <= 0.0
		{
			return Err(ConfigError::HeuristicWeights(self.eta[0], self.eta[1]));
		}
		if !self.elite_fraction.is_finite()
			|| self.elite_fraction <= 0.0
			|| self.elite_fraction > 1.0
		{
			return Err(ConfigError::EliteFraction(self.elite_fraction));
		}
		if !self.deposit_scale.is_finite() || self.deposit_scale < 0.0 {
			return Err(ConfigError::DepositScale(self.deposit_scale));
		}
		let PheromoneBounds { min, max } = self.tau_bounds;
		// a zero lower bound would let a trail pair collapse and divide
		// construction by zero
		if !(min.is_finite() && max.is_finite()) || min <= 0.0 || min > max {
			return Err(ConfigError::PheromoneBounds { min, max });
		}
		if !(min..=max).contains(&self.tau_init) {
			return Err(ConfigError::InitialPheromone { init: self.tau_init, min, max });
		}
		match self.local_search {
			Some(LocalSearchPolicy::SingleBitProbe { probability }) => {
				if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
					return Err(ConfigError::LocalSearchProbability(probability));
				}
			}
			Some(LocalSearchPolicy::FirstImprovementSweep { max_sweeps }) => {
				if max_sweeps == 0 {
					return Err(ConfigError::ZeroSweeps);
				}
			}
			None => {}
		}
		if self.reset_interval == Some(0) {
			return Err(ConfigError::ZeroResetInterval);
		}
		Ok(())
	}
}

/// Fluent builder for `AcoConfig` for ergonomic configuration.
pub struct AcoConfigBuilder {
	cfg: AcoConfig,
}

impl Default for AcoConfigBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl AcoConfigBuilder {
	pub fn new() -> Self {
		Self { cfg: AcoConfig::default() }
	}
	pub fn population_size(mut self, v: usize) -> Self {
		self.cfg.population_size = v;
		self
	}
	pub fn generation_count(mut self, v: usize) -> Self {
		self.cfg.generation_count = v;
		self
	}
	pub fn alpha(mut self, v: f64) -> Self {
		self.cfg.alpha = v;
		self
	}
	pub fn beta(mut self, v: f64) -> Self {
		self.cfg.beta = v;
		self
	}
	pub fn eta(mut self, eta0: f64, eta1: f64) -> Self {
		self.cfg.eta = [eta0, eta1];
		self
	}
	pub fn evaporation_rate(mut self, v: f64) -> Self {
		self.cfg.evaporation_rate = v;
		self
	}
	pub fn deposition(mut self, v: DepositionPolicy) -> Self {
		self.cfg.deposition = v;
		self
	}
	pub fn elite_fraction(mut self, v: f64) -> Self {
		self.cfg.elite_fraction = v;
		self
	}
	pub fn deposit_scale(mut self, v: f64) -> Self {
		self.cfg.deposit_scale = v;
		self
	}
	pub fn tau_init(mut self, v: f64) -> Self {
		self.cfg.tau_init = v;
		self
	}
	pub fn tau_bounds(mut self, min: f64, max: f64) -> Self {
		self.cfg.tau_bounds = PheromoneBounds { min, max };
		self
	}
	pub fn local_search(mut self, v: Option<LocalSearchPolicy>) -> Self {
		self.cfg.local_search = v;
		self
	}
	pub fn reset_interval(mut self, v: usize) -> Self {
		self.cfg.reset_interval = Some(v);
		self
	}
	pub fn seed(mut self, v: u64) -> Self {
		self.cfg.seed = Some(v);
		self
	}
	pub fn disp(mut self, v: bool) -> Self {
		self.cfg.disp = v;
		self
	}
	pub fn callback(mut self, cb: Box<dyn FnMut(&ColonyIntermediate) -> CallbackAction>) -> Self {
		self.cfg.callback = Some(cb);
		self
	}
	pub fn parallel(mut self, v: ParallelConfig) -> Self {
		self.cfg.parallel = v;
		self
	}
	pub fn enable_parallel(mut self, enable: bool) -> Self {
		self.cfg.parallel.enabled = enable;
		self
	}
	pub fn build(self) -> AcoConfig {
		self.cfg
	}
}

/// Result/Report of one optimization run
#[derive(Clone)]
pub struct RunReport {
	/// Best solution found across all generations
	pub solution: Vec<u8>,
	/// Fitness of the best solution
	pub fitness: f64,
	/// Whether the known optimum was reached
	pub success: bool,
	/// Which generation (or budget exhaustion) triggered termination
	pub message: String,
	/// Completed generations (iterations for the single-ant variants)
	pub generations: usize,
	/// Fitness evaluations consumed, including local search
	pub evaluations: usize,
	/// Final generation's population fitness values
	pub population_fitness: Array1<f64>,
}

impl fmt::Debug for RunReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RunReport")
			.field("solution", &format!("len={}", self.solution.len()))
			.field("fitness", &self.fitness)
			.field("success", &self.success)
			.field("message", &self.message)
			.field("generations", &self.generations)
			.field("evaluations", &self.evaluations)
			.field(
				"population_fitness",
				&format!("len={}", self.population_fitness.len()),
			)
			.finish()
	}
}

/// Information passed to the callback after each generation
pub struct ColonyIntermediate {
	/// Incumbent best solution
	pub solution: Vec<u8>,
	/// Incumbent best fitness
	pub fitness: f64,
	/// Standard deviation of the generation's population fitness
	pub population_std: f64,
	pub generation: usize,
}

/// Action returned by callback
pub enum CallbackAction {
	Continue,
	Stop,
}

#[cfg(test)]
mod policy_tests {
	use super::*;

	#[test]
	fn test_parse_deposition_policy_variants() {
		assert!(matches!("rank".parse::<DepositionPolicy>().unwrap(), DepositionPolicy::ElitistRank));
		assert!(matches!(
			"single-best".parse::<DepositionPolicy>().unwrap(),
			DepositionPolicy::SingleBest
		));
		assert!(matches!(
			"fitness_weighted".parse::<DepositionPolicy>().unwrap(),
			DepositionPolicy::FitnessWeighted
		));
		assert!("roulette".parse::<DepositionPolicy>().is_err());
	}

	#[test]
	fn test_validate_rejects_bad_configs() {
		let ok = AcoConfig::default();
		assert_eq!(ok.validate(), Ok(()));

		let mut cfg = AcoConfig::default();
		cfg.population_size = 0;
		assert_eq!(cfg.validate(), Err(ConfigError::EmptyPopulation));

		let mut cfg = AcoConfig::default();
		cfg.alpha = -0.5;
		assert!(matches!(cfg.validate(), Err(ConfigError::NegativeExponent { .. })));

		let mut cfg = AcoConfig::default();
		cfg.evaporation_rate = 1.0;
		assert_eq!(cfg.validate(), Err(ConfigError::EvaporationRate(1.0)));

		let mut cfg = AcoConfig::default();
		cfg.elite_fraction = 0.0;
		assert_eq!(cfg.validate(), Err(ConfigError::EliteFraction(0.0)));

		// a zero lower bound is the degenerate case that would divide
		// construction by zero
		let mut cfg = AcoConfig::default();
		cfg.tau_bounds = PheromoneBounds { min: 0.0, max: 10.0 };
		assert!(matches!(cfg.validate(), Err(ConfigError::PheromoneBounds { .. })));

		let mut cfg = AcoConfig::default();
		cfg.tau_init = 50.0;
		assert!(matches!(cfg.validate(), Err(ConfigError::InitialPheromone { .. })));

		let mut cfg = AcoConfig::default();
		cfg.local_search = Some(LocalSearchPolicy::SingleBitProbe { probability: 1.5 });
		assert_eq!(cfg.validate(), Err(ConfigError::LocalSearchProbability(1.5)));

		let mut cfg = AcoConfig::default();
		cfg.reset_interval = Some(0);
		assert_eq!(cfg.validate(), Err(ConfigError::ZeroResetInterval));
	}

	#[test]
	fn test_evaporation_rate_zero_is_accepted() {
		// rate 0 is a documented no-op, not an error
		let mut cfg = AcoConfig::default();
		cfg.evaporation_rate = 0.0;
		assert_eq!(cfg.validate(), Ok(()));
	}
}
