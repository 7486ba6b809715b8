//! Avaliador de janela deslizante

use serde::{Deserialize, Serialize};

use crate::error::FilterResult;
use crate::feature_map::FeatureMap;
use crate::kernel::PatchKernel;

use quanv_circuit::CouplingParams;
use quanv_image::{normalize, to_greyscale, DegeneratePolicy, Image, PatchGrid, RgbImage};

/// Configuração do filtro
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Lado da janela (K)
    pub kernel_size: usize,
    /// Passo entre origens de janelas (S)
    pub stride: usize,
    /// Política de normalização para imagens de valor constante
    pub degenerate_policy: DegeneratePolicy,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            kernel_size: 2,
            stride: 1,
            degenerate_policy: DegeneratePolicy::Zero,
        }
    }
}

/// Filtro quanvolucional: aplica um kernel opaco a cada janela da imagem
///
/// O passe é sequencial e sem estado entre patches além dos parâmetros
/// globais e da grade de saída. Cada célula do mapa é escrita exatamente
/// uma vez; a primeira falha de kernel aborta o passe.
#[derive(Debug, Clone)]
pub struct QuanvFilter {
    config: FilterConfig,
    grid: PatchGrid,
}

impl QuanvFilter {
    /// Cria filtro com a configuração padrão (K=2, S=1)
    pub fn new() -> Self {
        // a configuração padrão é sempre válida
        Self::with_config(FilterConfig::default()).expect("default FilterConfig must be valid")
    }

    /// Cria filtro com configuração específica
    pub fn with_config(config: FilterConfig) -> FilterResult<Self> {
        let grid = PatchGrid::new(config.kernel_size, config.stride)?;
        Ok(Self { config, grid })
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Dimensões (h_out, w_out) do mapa para uma imagem
    pub fn output_dims(&self, image: &Image) -> FilterResult<(usize, usize)> {
        Ok(self.grid.output_dims(image)?)
    }

    /// Aplica o filtro a uma imagem em escala de cinza
    ///
    /// Normaliza a imagem para ângulos, percorre as janelas em ordem
    /// row-major e escreve o escalar do kernel na célula
    /// `(idx / w_out, idx % w_out)` do mapa.
    pub fn apply<K: PatchKernel>(
        &self,
        image: &Image,
        kernel: &K,
        params: &CouplingParams,
    ) -> FilterResult<FeatureMap> {
        let normalized = normalize(image, self.config.degenerate_policy)?;
        let (h_out, w_out) = self.grid.output_dims(&normalized)?;

        let mut map = FeatureMap::new(h_out, w_out);
        for patch in self.grid.patches(&normalized)? {
            let value = kernel.evaluate(&patch.values, params)?;
            map.set(patch.row, patch.col, value)?;
        }

        Ok(map)
    }

    /// Aplica o filtro a uma imagem RGB, convertendo antes para escala de
    /// cinza pelos pesos de luminância
    pub fn apply_rgb<K: PatchKernel>(
        &self,
        image: &RgbImage,
        kernel: &K,
        params: &CouplingParams,
    ) -> FilterResult<FeatureMap> {
        let grey = to_greyscale(image);
        self.apply(&grey, kernel, params)
    }
}

impl Default for QuanvFilter {
    fn default() -> Self {
        Self::new()
    }
}
