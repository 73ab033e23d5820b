use genevolve::{
    evolution::{EvolutionOptions, Evolver, EvolverBuilder, GeneticType},
    rng::ThreadLocalRng,
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct XCoordinate {
    x: i64,
}

impl XCoordinate {
    fn new(x: i64) -> Self {
        Self { x }
    }

    fn get_x(&self) -> i64 {
        self.x
    }
}

fn score(target: i64) -> impl Fn(&XCoordinate) -> i64 {
    move |p: &XCoordinate| -(p.get_x() - target).abs()
}

fn launcher(genetic_type: GeneticType, elitism: bool, seed: u64) -> Evolver<XCoordinate> {
    EvolverBuilder::new()
        .population((0..16).map(|i| XCoordinate::new(i * 25)).collect())
        .options(
            EvolutionOptions::builder()
                .genetic_type(genetic_type)
                .mutation_rate(0.3)
                .selection_pressure(1.8)
                .elitism(elitism)
                .build(),
        )
        .mutate(|p: &XCoordinate| XCoordinate::new(p.get_x() + ThreadLocalRng::gen_range(-5i64..=5)))
        .crossover(|a: &XCoordinate, b: &XCoordinate| XCoordinate::new((a.get_x() + b.get_x()) / 2))
        .fitness(score(123))
        .seed(seed)
        .build()
        .unwrap()
}

fn best(evolver: &Evolver<XCoordinate>) -> i64 {
    let fitness = score(123);
    evolver.population().iter().map(fitness).max().unwrap()
}

#[test]
fn test_rank_elitism_never_loses_the_best() {
    let mut evolver = launcher(GeneticType::Rank, true, 4);

    let mut previous = best(&evolver);
    for _ in 0..40 {
        evolver.evolve().unwrap();
        let current = best(&evolver);
        assert!(current >= previous);
        previous = current;
    }
    assert_eq!(evolver.pop_size(), 16);
}

#[test]
fn test_roulette_elitism_never_loses_the_best() {
    let mut evolver = launcher(GeneticType::Roulette, true, 8);

    let mut previous = best(&evolver);
    for _ in 0..40 {
        evolver.evolve().unwrap();
        let current = best(&evolver);
        assert!(current >= previous);
        previous = current;
    }
    assert_eq!(evolver.pop_size(), 16);
}

#[test]
fn test_rank_and_roulette_approach_target() {
    for genetic_type in [GeneticType::Rank, GeneticType::Roulette] {
        let mut evolver = launcher(genetic_type, true, 15);
        for _ in 0..100 {
            evolver.evolve().unwrap();
        }
        // The starting grid already contains 125; elitism keeps it or better.
        assert!(best(&evolver) >= -2, "{:?} drifted away", genetic_type);
    }
}

#[test]
fn test_without_elitism_size_is_kept() {
    for genetic_type in [GeneticType::Rank, GeneticType::Roulette] {
        let mut evolver = launcher(genetic_type, false, 99);
        for generation in 1..=25 {
            assert_eq!(evolver.evolve().unwrap(), generation);
            assert_eq!(evolver.pop_size(), 16);
        }
    }
}
