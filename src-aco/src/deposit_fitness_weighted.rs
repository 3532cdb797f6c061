//! Fitness-weighted elitist deposition

use crate::ant::ScoredAnt;
use crate::deposit_elitist_rank::{elite_count, rank_descending};
use crate::pheromone::PheromoneField;
use crate::FALLBACK_DEPOSIT_RATIO;

/// The elite deposit `scale * (fitness / best_so_far) / elite`: relative
/// quality sets the amount, so a near-best ant reinforces almost as hard as
/// the incumbent while stragglers in the elite contribute little. Unlike
/// rank deposition this is sensitive to the fitness scale. Degenerate
/// ratios (non-positive fitness or incumbent) fall back to the shared
/// constant.
pub(crate) fn deposit_fitness_weighted(
	trails: &mut PheromoneField,
	population: &[ScoredAnt],
	best_so_far: f64,
	elite_fraction: f64,
	scale: f64,
) {
	let elite = elite_count(elite_fraction, population.len());
	let order = rank_descending(population);
	for &idx in order.iter().take(elite) {
		let ant = &population[idx];
		let ratio = if ant.fitness() > 0.0 && best_so_far > 0.0 && best_so_far.is_finite() {
			ant.fitness() / best_so_far
		} else {
			FALLBACK_DEPOSIT_RATIO
		};
		let amount = scale * ratio / elite as f64;
		for (i, &bit) in ant.bits().iter().enumerate() {
			trails.deposit(i, bit, amount);
		}
	}
}
