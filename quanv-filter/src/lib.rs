//! # 🔬 quanv-filter — Filtro Quanvolucional
//!
//! Avaliador de janela deslizante: percorre os patches de uma imagem em
//! ordem row-major, invoca um kernel opaco por patch e escreve o escalar
//! resultante na célula correspondente do mapa de características.
//!
//! O kernel é uma capacidade externa ([`PatchKernel`]): o avaliador não
//! assume nada sobre seu algoritmo interno, apenas que devolve um escalar
//! por chamada. No domínio de origem o kernel amostra um circuito de rede
//! de spins ([`SamplingKernel`]); em testes, um fecho determinístico serve.
//!
//! ## Pipeline
//!
//! ```text
//! RgbImage ──▶ greyscale ──▶ normalize ──▶ patches ──▶ kernel ──▶ FeatureMap
//! ```
//!
//! Um passe é único e sequencial: a primeira falha de kernel aborta a
//! avaliação sem mapa parcial. Cada célula é escrita exatamente uma vez.
//!
//! ## Exemplo
//!
//! ```ignore
//! use quanv_filter::{QuanvFilter, CouplingParams};
//!
//! let filter = QuanvFilter::new();
//! let params = CouplingParams::new(0.5, 0.25, 0.1);
//! let soma = kernel_fn(|vals, _| vals.iter().sum());
//! let map = filter.apply(&image, &soma, &params)?;
//! ```

pub mod error;
pub mod kernel;
pub mod feature_map;
pub mod filter;
pub mod render;
pub mod sweep;

pub use error::{FilterError, FilterResult, KernelError, KernelResult};
pub use kernel::{kernel_fn, FnKernel, PatchKernel, SamplingKernel};
pub use feature_map::FeatureMap;
pub use filter::{FilterConfig, QuanvFilter};
pub use render::{render, Colormap, RgbBuffer};
pub use sweep::{linspace, PhaseDiagram, PhasePoint, PhaseSweep, SweepConfig};

// Re-exporta os tipos que aparecem nas assinaturas públicas
pub use quanv_circuit::CouplingParams;
pub use quanv_image::DegeneratePolicy;

#[cfg(test)]
mod tests;
