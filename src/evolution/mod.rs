pub mod builder;
pub mod evolver;
pub mod options;

pub use builder::EvolverBuilder;
pub use evolver::{CustomSelectionFn, Evolver};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, GeneticType};
