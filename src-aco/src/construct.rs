//! Stochastic solution construction from pheromone trails

use rand::Rng;

use crate::ant::Ant;
use crate::pheromone::PheromoneField;

/// Draw one candidate from the trails.
///
/// Each position is sampled independently: the unnormalized weight for bit
/// value `b` is `tau_b^alpha * eta_b^beta`, and the bit is 1 with the
/// normalized probability of the one-side. With `alpha = beta = 0` both
/// weights are exactly 1 and every bit is a fair coin.
pub(crate) fn construct_solution<R: Rng + ?Sized>(
	trails: &PheromoneField,
	alpha: f64,
	beta: f64,
	eta: [f64; 2],
	rng: &mut R,
) -> Ant {
	let mut bits = Vec::with_capacity(trails.len());
	for i in 0..trails.len() {
		let [tau0, tau1] = trails.pair(i);
		let w0 = tau0.powf(alpha) * eta[0].powf(beta);
		let w1 = tau1.powf(alpha) * eta[1].powf(beta);
		let total = w0 + w1;
		assert!(
			total > 0.0,
			"pheromone pair at position {i} sums to zero; the trail floor must stay positive"
		);
		let p1 = w1 / total;
		bits.push(if rng.random::<f64>() < p1 { 1 } else { 0 });
	}
	Ant::new(bits)
}
