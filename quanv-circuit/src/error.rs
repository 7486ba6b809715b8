//! Erros da construção de circuitos

use thiserror::Error;

pub type CircuitResult<T> = Result<T, CircuitError>;

#[derive(Debug, Error, Clone)]
pub enum CircuitError {
    #[error("expected {expected} rotation angles, got {actual}")]
    ArityMismatch { expected: usize, actual: usize },

    #[error("qubit {qubit} out of range for {count}-qubit circuit")]
    QubitOutOfRange { qubit: usize, count: usize },

    #[error("invalid lattice topology: {0}")]
    InvalidTopology(String),

    #[error("circuit executor failure: {0}")]
    ExecutorFailure(String),
}
