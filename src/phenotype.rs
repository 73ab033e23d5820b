//! # Phenotype Trait
//!
//! A phenotype is one candidate solution. The evolver never looks inside it:
//! it clones values, swaps them around, and hands them to the caller's
//! behavior functions (see [`crate::operators`]).
//!
//! Any `Clone + Debug + Default` type is a phenotype:
//!
//! ```rust
//! use genevolve::phenotype::Phenotype;
//!
//! #[derive(Clone, Debug, Default)]
//! struct Route {
//!     stops: Vec<u32>,
//! }
//!
//! fn assert_phenotype<P: Phenotype>() {}
//!
//! assert_phenotype::<Route>();
//! assert_phenotype::<String>();
//! assert_phenotype::<i64>();
//! ```

use std::fmt::Debug;

/// Trait for types that represent individuals in the population.
///
/// `Default` provides the value of slots the evolver has to create without a
/// parent: the tail of a grown population and the missing tail of a short
/// custom generation. Callers should treat such values as unset until they
/// overwrite them.
pub trait Phenotype: Clone + Debug + Default {}

impl<T> Phenotype for T where T: Clone + Debug + Default {}
