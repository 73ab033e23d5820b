use std::cell::Cell;
use std::rc::Rc;

use genevolve::{
    evolution::{EvolverBuilder, GeneticType},
    EvolutionOptions, Evolver,
};

fn custom_evolver(
    population: Vec<String>,
    select: impl Fn(&Evolver<String>) -> Option<Vec<String>> + 'static,
) -> Evolver<String> {
    EvolverBuilder::new()
        .population(population)
        .options(EvolutionOptions::new(0.0, GeneticType::Custom))
        .custom_selection(select)
        .seed(1)
        .build()
        .unwrap()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_custom_shorter_result_is_padded_with_defaults() {
    let mut evolver = custom_evolver(strings(&["a", "b", "c"]), |_| Some(strings(&["z"])));

    assert_eq!(evolver.evolve(), Ok(1));
    assert_eq!(evolver.pop_size(), 3);
    assert_eq!(evolver.population(), strings(&["z", "", ""]).as_slice());
}

#[test]
fn test_custom_longer_result_is_truncated() {
    let mut evolver = custom_evolver(strings(&["a", "b"]), |_| {
        Some(strings(&["x", "y", "z", "w"]))
    });

    evolver.evolve().unwrap();
    assert_eq!(evolver.population(), strings(&["x", "y"]).as_slice());
}

#[test]
fn test_custom_none_keeps_population() {
    let mut evolver = custom_evolver(strings(&["a"]), |_| None);

    assert_eq!(evolver.evolve(), Ok(1));
    assert_eq!(evolver.population(), strings(&["a"]).as_slice());
}

#[test]
fn test_custom_selection_sees_live_evolver() {
    let calls = Rc::new(Cell::new(0));
    let seen = Rc::clone(&calls);

    let mut evolver = custom_evolver(strings(&["b", "a", "c", "d"]), move |evolver| {
        seen.set(seen.get() + 1);

        // Sort whatever the shuffle produced and append the generation.
        let mut next: Vec<String> = evolver.population().to_vec();
        next.sort();
        let generation = evolver.generation();
        Some(
            next.into_iter()
                .map(|s| format!("{}{}", s.chars().next().unwrap_or('?'), generation))
                .collect(),
        )
    });

    evolver.evolve().unwrap();
    assert_eq!(evolver.population(), strings(&["a0", "b0", "c0", "d0"]).as_slice());

    evolver.evolve().unwrap();
    assert_eq!(evolver.population(), strings(&["a1", "b1", "c1", "d1"]).as_slice());

    assert_eq!(calls.get(), 2);
}

#[test]
fn test_custom_can_use_operators() {
    let mut evolver = custom_evolver(strings(&["ab", "cd"]), |evolver| {
        let ops = evolver.operators();
        evolver
            .population()
            .iter()
            .map(|p| ops.mutate(p).ok())
            .collect()
    });
    evolver.set_mutate(|x: &String| x.chars().rev().collect());

    evolver.evolve().unwrap();

    let mut population = evolver.population().to_vec();
    population.sort();
    assert_eq!(population, strings(&["ba", "dc"]));
}
