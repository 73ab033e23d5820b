pub mod error;
pub mod evolution;
pub mod operators;
pub mod phenotype;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{EvolutionOptions, Evolver, EvolverBuilder, GeneticType};
pub use operators::Operators;
pub use phenotype::Phenotype;
pub use selection::SelectionStrategy;
