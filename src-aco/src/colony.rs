//! Colony controller
//!
//! Drives generations of construct / evaluate / refine over a population,
//! updates the pheromone field from each generation's outcome and tracks
//! the incumbent best until the optimum is reached or the budget runs out.

use antopt_benchmarks::BenchmarkProblem;
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::ant::ScoredAnt;
use crate::argmax;
use crate::construct::construct_solution;
use crate::deposit_elitist_rank::deposit_elitist_rank;
use crate::deposit_fitness_weighted::deposit_fitness_weighted;
use crate::deposit_single_best::deposit_single_best;
use crate::local_search::apply_local_search;
use crate::parallel_eval::evaluate_population;
use crate::pheromone::PheromoneField;
use crate::{
	AcoConfig, CallbackAction, ColonyIntermediate, ConfigError, DepositionPolicy, RunReport,
};

/// Ant colony optimizer over one benchmark problem
pub struct AntColony<'a> {
	problem: &'a BenchmarkProblem,
	config: AcoConfig,
}

impl<'a> AntColony<'a> {
	/// Create a colony for `problem`; rejects malformed configuration.
	pub fn new(problem: &'a BenchmarkProblem, config: AcoConfig) -> Result<Self, ConfigError> {
		config.validate()?;
		Ok(Self { problem, config })
	}

	/// Mutable access to configuration
	pub fn config_mut(&mut self) -> &mut AcoConfig {
		&mut self.config
	}

	/// Run the optimization and return a report
	pub fn solve(&mut self) -> RunReport {
		let n = self.problem.dimensionality();
		let optimum = self.problem.known_optimum();
		let popsize = self.config.population_size;

		if self.config.disp {
			eprintln!(
				"ACO Init: {} bits, population={}, generations={}, optimum={}",
				n, popsize, self.config.generation_count, optimum
			);
			eprintln!(
				"  Deposition: {}, alpha={:.2}, beta={:.2}, rho={:.3}, eta={:?}",
				self.config.deposition,
				self.config.alpha,
				self.config.beta,
				self.config.evaporation_rate,
				self.config.eta
			);
		}

		// RNG
		let mut rng: StdRng = match self.config.seed {
			Some(s) => StdRng::seed_from_u64(s),
			None => {
				let mut thread_rng = rand::rng();
				StdRng::from_rng(&mut thread_rng)
			}
		};

		let mut trails =
			PheromoneField::new(n, self.config.tau_init, self.config.tau_bounds);

		// Initial population seeds the incumbent; no refinement and no
		// pheromone update happen before the first full generation.
		let mut nfev = 0usize;
		let ants: Vec<_> = (0..popsize)
			.map(|_| {
				construct_solution(
					&trails,
					self.config.alpha,
					self.config.beta,
					self.config.eta,
					&mut rng,
				)
			})
			.collect();
		let mut population = evaluate_population(ants, self.problem, &self.config.parallel);
		nfev += popsize;

		let mut best_fitness = f64::NEG_INFINITY;
		let mut best_bits: Vec<u8> = Vec::new();
		for ant in &population {
			if ant.fitness() > best_fitness {
				best_fitness = ant.fitness();
				best_bits = ant.bits().to_vec();
			}
		}

		if self.config.disp {
			eprintln!("ACO gen {:5}  best_f={:.6e}", 0, best_fitness);
		}

		let mut success = best_fitness >= optimum;
		let mut message = if success {
			"Optimum reached by the initial population".to_string()
		} else {
			String::new()
		};
		let mut nit = 0usize;

		if !success {
			for generation in 1..=self.config.generation_count {
				nit = generation;

				// CONSTRUCT: every member is rebuilt from the current
				// trails; the previous generation is discarded wholesale
				let ants: Vec<_> = (0..popsize)
					.map(|_| {
						construct_solution(
							&trails,
							self.config.alpha,
							self.config.beta,
							self.config.eta,
							&mut rng,
						)
					})
					.collect();

				// EVALUATE (parallel only crosses this barrier)
				population =
					evaluate_population(ants, self.problem, &self.config.parallel);
				nfev += popsize;

				// REFINE
				if let Some(policy) = self.config.local_search {
					for ant in &mut population {
						nfev += apply_local_search(ant, self.problem, policy, &mut rng);
					}
				}

				// incumbent: strictly-greater fitness replaces, as a copy
				for ant in &population {
					if ant.fitness() > best_fitness {
						best_fitness = ant.fitness();
						best_bits = ant.bits().to_vec();
					}
				}

				// UPDATE_PHEROMONE: evaporate, deposit, clamp, in that order
				trails.evaporate(self.config.evaporation_rate);
				match self.config.deposition {
					DepositionPolicy::SingleBest => deposit_single_best(
						&mut trails,
						&population,
						optimum,
						self.config.deposit_scale,
					),
					DepositionPolicy::ElitistRank => deposit_elitist_rank(
						&mut trails,
						&population,
						self.config.elite_fraction,
						self.config.deposit_scale,
					),
					DepositionPolicy::FitnessWeighted => deposit_fitness_weighted(
						&mut trails,
						&population,
						best_fitness,
						self.config.elite_fraction,
						self.config.deposit_scale,
					),
				}
				trails.clamp();

				// stagnation restart: the trails forget, the incumbent stays
				if let Some(interval) = self.config.reset_interval {
					if generation % interval == 0 {
						trails.reset();
						if self.config.disp {
							eprintln!("ACO gen {:5}  pheromone reset", generation);
						}
					}
				}

				let energies = population_energies(&population);
				let pop_std = energies.std(0.0);

				if self.config.disp {
					let (_, gen_best) = argmax(&energies);
					eprintln!(
						"ACO gen {:5}  best_f={:.6e}  gen_best={:.6e}  std={:.3e}",
						generation, best_fitness, gen_best, pop_std
					);
				}

				// CHECK_STOP
				if best_fitness >= optimum {
					success = true;
					message = format!("Optimum reached at generation {}", generation);
					break;
				}

				if let Some(ref mut cb) = self.config.callback {
					let intermediate = ColonyIntermediate {
						solution: best_bits.clone(),
						fitness: best_fitness,
						population_std: pop_std,
						generation,
					};
					match cb(&intermediate) {
						CallbackAction::Stop => {
							message =
								format!("Stopped by callback at generation {}", generation);
							break;
						}
						CallbackAction::Continue => {}
					}
				}
			}
		}

		if !success && message.is_empty() {
			message =
				format!("Generation budget exhausted: {}", self.config.generation_count);
		}

		if self.config.disp {
			eprintln!("ACO finished: {}", message);
		}

		RunReport {
			solution: best_bits,
			fitness: best_fitness,
			success,
			message,
			generations: nit,
			evaluations: nfev,
			population_fitness: population_energies(&population),
		}
	}
}

fn population_energies(population: &[ScoredAnt]) -> Array1<f64> {
	Array1::from(population.iter().map(|a| a.fitness()).collect::<Vec<_>>())
}

/// Convenience function mirroring the builder-less call shape:
/// - `problem`: benchmark problem instance
/// - `config`: colony configuration
pub fn ant_colony_optimization(
	problem: &BenchmarkProblem,
	config: AcoConfig,
) -> Result<RunReport, ConfigError> {
	let mut colony = AntColony::new(problem, config)?;
	Ok(colony.solve())
}
