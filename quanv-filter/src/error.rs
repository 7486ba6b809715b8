//! Erros do filtro quanvolucional

use thiserror::Error;

use quanv_circuit::CircuitError;
use quanv_image::ImageError;

pub type FilterResult<T> = Result<T, FilterError>;
pub type KernelResult<T> = Result<T, KernelError>;

/// Falha de uma invocação de kernel
///
/// Propagada sem modificação até o chamador do avaliador: um patch que
/// falha aborta o passe inteiro, sem mapa parcial.
#[derive(Debug, Error, Clone)]
pub enum KernelError {
    #[error("circuit construction or execution failed: {0}")]
    Circuit(#[from] CircuitError),

    #[error("sampler returned no observations")]
    EmptySample,

    #[error("kernel evaluation failed: {0}")]
    Failed(String),
}

#[derive(Debug, Error, Clone)]
pub enum FilterError {
    #[error("image preprocessing failed: {0}")]
    Image(#[from] ImageError),

    #[error("kernel invocation failed: {0}")]
    Kernel(#[from] KernelError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("feature map index ({row}, {col}) out of bounds")]
    OutOfBounds { row: usize, col: usize },
}
