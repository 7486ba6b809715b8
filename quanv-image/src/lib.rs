//! # 🖼️ quanv-image — Pré-processamento de Imagens
//!
//! Modelo de imagem e pré-processamento para o filtro quanvolucional.
//! Converte imagens RGB em escala de cinza, normaliza amostras para o
//! intervalo angular [-π/2, π/2] e extrai janelas (patches) sobrepostas
//! em ordem row-major.
//!
//! ## Pipeline
//!
//! ```text
//! RgbImage ──to_greyscale──▶ Image ──normalize──▶ Image ──patches──▶ Patch…
//! ```
//!
//! As amostras normalizadas servem como ângulos de rotação para os kernels
//! de circuito; por isso a normalização termina em `asin`, limitando cada
//! valor a [-π/2, π/2].
//!
//! ## Exemplo
//!
//! ```ignore
//! use quanv_image::{Image, PatchGrid, normalize, DegeneratePolicy};
//!
//! let img = Image::from_vec(4, 4, samples)?;
//! let norm = normalize(&img, DegeneratePolicy::Zero)?;
//! let grid = PatchGrid::new(2, 1)?;
//! for patch in grid.patches(&norm)? {
//!     // patch.values em ordem row-major
//! }
//! ```

pub mod error;
pub mod types;
pub mod greyscale;
pub mod normalize;
pub mod patch;

pub use error::{ImageError, ImageResult};
pub use types::{Image, Patch, PatchGrid, RgbImage};
pub use greyscale::{quantize, to_greyscale, LUMA_WEIGHTS};
pub use normalize::{normalize, DegeneratePolicy};
pub use patch::Patches;
