//! Weighted wheel shared by the rank and roulette strategies.

use tracing::trace;

use crate::error::Result;
use crate::operators::Operators;
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;

/// Cumulative weights over population indices.
///
/// An index is picked with probability `weight / total`. Zero-weight entries
/// are never picked. If every weight is zero (or none is finite and
/// positive) the wheel degrades to uniform selection.
#[derive(Debug, Clone)]
pub(crate) struct Wheel {
    cumulative: Vec<f64>,
    total: f64,
    last_positive: usize,
}

impl Wheel {
    /// Builds the wheel. `weights` must not be empty.
    pub(crate) fn new(weights: &[f64]) -> Self {
        let positive = |w: f64| w.is_finite() && w > 0.0;
        let uniform = !weights.iter().any(|&w| positive(w));

        if uniform {
            trace!(size = weights.len(), "no positive weight, spinning uniformly");
        }

        let mut cumulative = Vec::with_capacity(weights.len());
        let mut total = 0.0;
        let mut last_positive = 0;

        for (i, &weight) in weights.iter().enumerate() {
            let weight = if uniform { 1.0 } else { weight };
            if positive(weight) {
                total += weight;
                last_positive = i;
            }
            cumulative.push(total);
        }

        Self {
            cumulative,
            total,
            last_positive,
        }
    }

    /// Picks an index.
    pub(crate) fn spin(&self, rng: &mut RandomNumberGenerator) -> usize {
        let r = rng.gen_range(0.0..self.total);

        self.cumulative
            .iter()
            .position(|&c| r < c)
            .unwrap_or(self.last_positive)
    }
}

/// Index of the first individual with the highest fitness.
pub(crate) fn fittest(fitness: &[i64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &score) in fitness.iter().enumerate() {
        match best {
            Some(b) if fitness[b] >= score => {}
            _ => best = Some(i),
        }
    }
    best
}

/// Fills a generation of `population.len()` offspring from the wheel.
///
/// With `elitism` the fittest individual is copied into slot 0. Every other
/// slot gets `crossover(a, b)` of two independently spun parents, mutated
/// with probability `mutation_rate`.
pub(crate) fn breed<P: Phenotype>(
    population: &[P],
    fitness: &[i64],
    wheel: &Wheel,
    elitism: bool,
    operators: &Operators<P>,
    mutation_rate: f32,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<P>> {
    let crossover = operators.crossover_fn()?;
    let mutate = operators.mutate_fn()?;

    let mut next_generation = Vec::with_capacity(population.len());

    if elitism {
        if let Some(elite) = fittest(fitness) {
            next_generation.push(population[elite].clone());
        }
    }

    while next_generation.len() < population.len() {
        let a = &population[wheel.spin(rng)];
        let b = &population[wheel.spin(rng)];

        let mut offspring = crossover(a, b);
        if rng.uniform() < mutation_rate {
            offspring = mutate(&offspring);
        }

        next_generation.push(offspring);
    }

    Ok(next_generation)
}
