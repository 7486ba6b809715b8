//! Erros do pré-processamento de imagens

use thiserror::Error;

pub type ImageResult<T> = Result<T, ImageError>;

#[derive(Debug, Error, Clone)]
pub enum ImageError {
    #[error("image has a single unique value; normalization range is degenerate")]
    DegenerateRange,

    #[error("kernel size {kernel} exceeds image dimensions {width}x{height}")]
    KernelTooLarge {
        kernel: usize,
        width: usize,
        height: usize,
    },

    #[error("stride must be between 1 and kernel size {kernel}, got {stride}")]
    InvalidStride { stride: usize, kernel: usize },

    #[error("kernel size must be >= 1")]
    ZeroKernel,

    #[error("sample buffer has {actual} values, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("image dimensions must be > 0")]
    EmptyImage,
}
