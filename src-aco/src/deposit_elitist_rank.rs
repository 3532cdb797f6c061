//! Elitist rank-based deposition

use crate::ant::ScoredAnt;
use crate::pheromone::PheromoneField;

/// Number of ants allowed to deposit: the ceiling of the elite fraction,
/// never zero and never more than the population.
pub(crate) fn elite_count(elite_fraction: f64, population_size: usize) -> usize {
	((elite_fraction * population_size as f64).ceil() as usize)
		.max(1)
		.min(population_size)
}

/// Population indices sorted by descending fitness. The sort is stable, so
/// ties keep their construction order and rank assignment is reproducible.
pub(crate) fn rank_descending(population: &[ScoredAnt]) -> Vec<usize> {
	let mut order: Vec<usize> = (0..population.len()).collect();
	order.sort_by(|&a, &b| population[b].fitness().total_cmp(&population[a].fitness()));
	order
}

/// The top-ranked ants deposit `scale * (elite - rank) / elite`: the best
/// ant the full scale, the last elite a 1/elite share. Rank, not raw
/// fitness, sets the amount, so deposits look identical on problems whose
/// fitness ranges differ by orders of magnitude.
pub(crate) fn deposit_elitist_rank(
	trails: &mut PheromoneField,
	population: &[ScoredAnt],
	elite_fraction: f64,
	scale: f64,
) {
	let elite = elite_count(elite_fraction, population.len());
	let order = rank_descending(population);
	for (rank, &idx) in order.iter().take(elite).enumerate() {
		let rank_weight = (elite - rank) as f64 / elite as f64;
		let amount = scale * rank_weight;
		for (i, &bit) in population[idx].bits().iter().enumerate() {
			trails.deposit(i, bit, amount);
		}
	}
}
