//! # Error Types
//!
//! This module defines the error type returned by the evolver and its
//! selection strategies. Every failure is a local precondition violation;
//! an operation that returns an error leaves the evolver untouched.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use genevolve::error::{GeneticError, Result};
//!
//! fn checked_size(size: usize) -> Result<usize> {
//!     if size < 1 {
//!         return Err(GeneticError::InvalidSize(size));
//!     }
//!     Ok(size)
//! }
//!
//! assert!(checked_size(0).is_err());
//! ```
//!
//! Using the `OptionExt` trait to turn an unset behavior into an error:
//!
//! ```rust
//! use genevolve::error::{GeneticError, OptionExt};
//!
//! fn lookup(slot: Option<u32>) -> genevolve::error::Result<u32> {
//!     slot.ok_or_else_genetic(|| GeneticError::MissingBehavior("fitness"))
//! }
//!
//! assert!(lookup(None).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while evolving a population.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneticError {
    /// The initial population handed to a constructor was empty.
    #[error("Invalid population: the initial population must contain at least one phenotype")]
    InvalidPopulation,

    /// A population resize was requested below the minimum size of 1.
    #[error("Invalid size: population size must be at least 1, got {0}")]
    InvalidSize(usize),

    /// A behavior function required by the configured strategy is not set.
    #[error("Missing behavior: no {0} function is configured")]
    MissingBehavior(&'static str),

    /// A selection strategy was invoked on an empty population.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// A specialized Result type for evolver operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the error type
/// fixed to `GeneticError`.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
///
/// ## Examples
///
/// ```rust
/// use genevolve::error::{GeneticError, OptionExt};
///
/// fn best(scores: &[i64]) -> genevolve::error::Result<i64> {
///     scores.iter().max().copied().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
/// }
///
/// assert_eq!(best(&[3, 9, 4]).unwrap(), 9);
/// ```
pub trait OptionExt<T> {
    /// Converts an Option to a Result using a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GeneticError::InvalidSize(0).to_string(),
            "Invalid size: population size must be at least 1, got 0"
        );
        assert_eq!(
            GeneticError::MissingBehavior("crossover").to_string(),
            "Missing behavior: no crossover function is configured"
        );
    }

    #[test]
    fn test_ok_or_else_genetic() {
        let present: Option<i32> = Some(3);
        assert_eq!(
            present.ok_or_else_genetic(|| GeneticError::EmptyPopulation),
            Ok(3)
        );

        let absent: Option<i32> = None;
        assert_eq!(
            absent.ok_or_else_genetic(|| GeneticError::MissingBehavior("mutate")),
            Err(GeneticError::MissingBehavior("mutate"))
        );
    }
}
