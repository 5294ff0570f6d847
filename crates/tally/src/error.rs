use crate::{config::ConfigError, sum::SumError};
use thiserror::Error as ThisError;

///
/// Error
///
/// Top-level error funnel for the benchmark binary. Both arms cover seams
/// that are fallible in the type system only; the shipped configuration
/// cannot hit either at runtime.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Sum(#[from] SumError),
}

///
/// TESTS
///
