//! Single-best deposition

use crate::ant::ScoredAnt;
use crate::pheromone::PheromoneField;
use crate::FALLBACK_DEPOSIT_RATIO;

/// Only the generation's best ant deposits, with an amount scaled by its
/// fitness relative to the known optimum. When the ratio is degenerate
/// (non-positive fitness, or an unknown/non-positive optimum) the shared
/// fallback ratio applies instead.
pub(crate) fn deposit_single_best(
	trails: &mut PheromoneField,
	population: &[ScoredAnt],
	optimum: f64,
	scale: f64,
) {
	let Some(best) = population
		.iter()
		.max_by(|a, b| a.fitness().total_cmp(&b.fitness()))
	else {
		return;
	};
	let ratio = if best.fitness() > 0.0 && optimum > 0.0 && optimum.is_finite() {
		best.fitness() / optimum
	} else {
		FALLBACK_DEPOSIT_RATIO
	};
	let amount = scale * ratio;
	for (i, &bit) in best.bits().iter().enumerate() {
		trails.deposit(i, bit, amount);
	}
}
