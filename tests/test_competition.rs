use genevolve::{
    evolution::{Evolver, GeneticType},
    operators::{BeatsFn, Operators},
    rng::RandomNumberGenerator,
    selection::{CompetitionSelection, SelectionStrategy},
};

fn letter_fitness(x: &String) -> i64 {
    match x.as_str() {
        "A" | "a" => 10,
        "B" | "b" => 5,
        "C" | "c" => 1,
        "D" | "d" => 9,
        _ => 0,
    }
}

fn join(a: &String, b: &String) -> String {
    format!("{}-{}", a, b)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_competition_fixed_inputs() {
    let ops = Operators::new()
        .with_mutate(|x: &String| x.to_lowercase())
        .with_crossover(join)
        .with_fitness(letter_fitness);
    let mut rng = RandomNumberGenerator::from_seed(0);

    let next = CompetitionSelection::new()
        .next_generation(&strings(&["A", "B", "C", "D"]), &ops, 0.0, &mut rng)
        .unwrap();

    assert_eq!(next, strings(&["A", "A-B", "C", "D"]));
}

#[test]
fn test_competition_full_mutation_applies_after_resolution() {
    let ops = Operators::new()
        .with_mutate(|x: &String| x.to_uppercase())
        .with_crossover(join)
        .with_fitness(letter_fitness);
    let mut rng = RandomNumberGenerator::from_seed(0);

    let next = CompetitionSelection::new()
        .next_generation(&strings(&["a", "b", "c", "d"]), &ops, 1.0, &mut rng)
        .unwrap();

    // Even slots are untouched elites; odd slots are mutated offspring.
    assert_eq!(next, strings(&["a", "A-B", "c", "D"]));
}

#[test]
fn test_two_individuals_evolve_deterministically() {
    // With two individuals every shuffle swap exchanges them, and the
    // shuffle makes exactly two swaps, so the pairing order is preserved.
    let mut evolver = Evolver::new(
        strings(&["a", "b"]),
        0.0,
        GeneticType::Competition,
        |x: &String| x.to_uppercase(),
        join,
        letter_fitness,
        None,
    )
    .unwrap();

    assert_eq!(evolver.evolve().unwrap(), 1);
    assert_eq!(evolver.population(), strings(&["a", "a-b"]).as_slice());
}

#[test]
fn test_comparator_overrides_fitness() {
    // Fitness favours b in both evolvers; only the second has a comparator,
    // and it always lets a win.
    let favour_b = |x: &String| -> i64 { if x == "b" { 100 } else { 0 } };

    let mut by_fitness = Evolver::new(
        strings(&["a", "b"]),
        0.0,
        GeneticType::Competition,
        |x: &String| x.clone(),
        join,
        favour_b,
        None,
    )
    .unwrap();

    let a_always_wins: BeatsFn<String> = Box::new(|_: &String, _: &String| true);
    let mut by_comparator = Evolver::new(
        strings(&["a", "b"]),
        0.0,
        GeneticType::Competition,
        |x: &String| x.clone(),
        join,
        favour_b,
        Some(a_always_wins),
    )
    .unwrap();

    by_fitness.evolve().unwrap();
    by_comparator.evolve().unwrap();

    assert_eq!(by_fitness.population()[1], "b");
    assert_eq!(by_comparator.population()[1], "a-b");
}

#[test]
fn test_odd_population_keeps_unpaired_individual() {
    let ops = Operators::new()
        .with_mutate(|x: &String| x.to_uppercase())
        .with_crossover(join)
        .with_fitness(letter_fitness);
    let mut rng = RandomNumberGenerator::from_seed(3);

    let next = CompetitionSelection::new()
        .next_generation(&strings(&["a", "b", "c", "d", "e"]), &ops, 1.0, &mut rng)
        .unwrap();

    assert_eq!(next.len(), 5);
    assert_eq!(next[4], "e");
}

#[test]
fn test_best_fitness_never_drops_without_mutation() {
    let fitness = |x: &i64| -(x - 100).abs();
    let mut evolver = Evolver::new(
        vec![0_i64, 40, 80, 120, 160, 200, 240, 280],
        0.0,
        GeneticType::Competition,
        |x: &i64| x - 1,
        |a: &i64, b: &i64| (3 * a + b) / 4,
        fitness,
        None,
    )
    .unwrap();
    evolver.set_rng(RandomNumberGenerator::from_seed(12));

    let best = |evolver: &Evolver<i64>| evolver.population().iter().map(fitness).max().unwrap();

    let mut previous = best(&evolver);
    for _ in 0..50 {
        evolver.evolve().unwrap();
        let current = best(&evolver);
        assert!(current >= previous);
        previous = current;
    }

    assert_eq!(evolver.pop_size(), 8);
}
