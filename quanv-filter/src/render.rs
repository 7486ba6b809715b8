//! Renderização de mapas para buffers RGB
//!
//! Funções puras de dados para dados: o mapa é reescalado pela própria
//! faixa e cada valor vira uma cor do colormap. Exibição, janelas e
//! arquivos ficam numa camada de apresentação separada.

use serde::{Deserialize, Serialize};

use crate::feature_map::FeatureMap;

/// Pontos de controle do colormap viridis (amostrados uniformemente)
const VIRIDIS_STOPS: [[u8; 3]; 10] = [
    [68, 1, 84],
    [72, 40, 120],
    [62, 73, 137],
    [49, 104, 142],
    [38, 130, 142],
    [31, 158, 137],
    [53, 183, 121],
    [110, 206, 88],
    [181, 222, 43],
    [253, 231, 37],
];

/// Colormap por interpolação linear entre pontos de controle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Colormap {
    stops: Vec<[u8; 3]>,
}

impl Colormap {
    /// Colormap viridis
    pub fn viridis() -> Self {
        Self {
            stops: VIRIDIS_STOPS.to_vec(),
        }
    }

    /// Rampa de cinza linear
    pub fn greyscale() -> Self {
        Self {
            stops: vec![[0, 0, 0], [255, 255, 255]],
        }
    }

    /// Cor para `t` em [0, 1] (valores fora da faixa são saturados)
    pub fn sample(&self, t: f64) -> [u8; 3] {
        let t = t.clamp(0.0, 1.0);
        let segments = self.stops.len() - 1;
        let position = t * segments as f64;
        let idx = (position.floor() as usize).min(segments - 1);
        let frac = position - idx as f64;

        let lo = self.stops[idx];
        let hi = self.stops[idx + 1];
        let mut rgb = [0u8; 3];
        for c in 0..3 {
            let v = lo[c] as f64 + (hi[c] as f64 - lo[c] as f64) * frac;
            rgb[c] = v.round().clamp(0.0, 255.0) as u8;
        }
        rgb
    }
}

/// Buffer RGB denso: 3 bytes por pixel, em ordem row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RgbBuffer {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

impl RgbBuffer {
    /// Pixel (r, g, b) na posição (x, y)
    pub fn get(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = 3 * (y * self.width + x);
        Some([self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]])
    }
}

/// Renderiza um mapa de características para um buffer RGB
///
/// Os valores são reescalados pela faixa [min, max] do próprio mapa antes
/// da consulta ao colormap. Um mapa constante (min == max) rende o início
/// da rampa em todas as células.
pub fn render(map: &FeatureMap, colormap: &Colormap) -> RgbBuffer {
    let (min, max) = map.min_max().unwrap_or((0.0, 0.0));
    let range = max - min;

    let mut pixels = Vec::with_capacity(3 * map.len());
    for &v in map.as_slice() {
        let t = if range == 0.0 { 0.0 } else { (v - min) / range };
        pixels.extend_from_slice(&colormap.sample(t));
    }

    RgbBuffer {
        width: map.width,
        height: map.height,
        pixels,
    }
}
