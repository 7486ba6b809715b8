//! Tipos de imagem e geometria de patches

use serde::{Deserialize, Serialize};

use crate::error::{ImageError, ImageResult};
use crate::patch::Patches;

/// Imagem em escala de cinza: amostras `f64` em ordem row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub width: usize,
    pub height: usize,
    pub data: Vec<f64>,
}

impl Image {
    /// Cria imagem preenchida com zeros
    pub fn new(width: usize, height: usize) -> ImageResult<Self> {
        if width == 0 || height == 0 {
            return Err(ImageError::EmptyImage);
        }
        Ok(Self {
            width,
            height,
            data: vec![0.0; width * height],
        })
    }

    /// Cria imagem a partir de um buffer row-major
    pub fn from_vec(width: usize, height: usize, data: Vec<f64>) -> ImageResult<Self> {
        if width == 0 || height == 0 {
            return Err(ImageError::EmptyImage);
        }
        if data.len() != width * height {
            return Err(ImageError::LengthMismatch {
                expected: width * height,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Retorna a amostra na posição (x, y)
    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x).copied()
    }

    /// Escreve a amostra na posição (x, y)
    pub fn set(&mut self, x: usize, y: usize, value: f64) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.data[y * self.width + x] = value;
        true
    }

    /// Mínimo e máximo globais das amostras
    pub fn min_max(&self) -> (f64, f64) {
        // construtores garantem data não-vazio
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in &self.data {
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
        }
        (min, max)
    }

    /// Número total de amostras
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Imagem RGB com três canais planares (R, G, B), cada um row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RgbImage {
    pub width: usize,
    pub height: usize,
    pub channels: [Vec<f64>; 3],
}

impl RgbImage {
    /// Cria imagem RGB a partir dos três canais planares
    pub fn from_channels(
        width: usize,
        height: usize,
        channels: [Vec<f64>; 3],
    ) -> ImageResult<Self> {
        if width == 0 || height == 0 {
            return Err(ImageError::EmptyImage);
        }
        let expected = width * height;
        for channel in &channels {
            if channel.len() != expected {
                return Err(ImageError::LengthMismatch {
                    expected,
                    actual: channel.len(),
                });
            }
        }
        Ok(Self {
            width,
            height,
            channels,
        })
    }

    /// Retorna o pixel (r, g, b) na posição (x, y)
    pub fn get(&self, x: usize, y: usize) -> Option<[f64; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y * self.width + x;
        Some([
            self.channels[0][idx],
            self.channels[1][idx],
            self.channels[2][idx],
        ])
    }
}

/// Janela quadrada extraída de uma imagem
///
/// `row`/`col` são a posição da janela na grade de saída e `index` o índice
/// plano correspondente (`index = row * w_out + col`). `values` contém as
/// amostras da janela em ordem row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patch {
    pub row: usize,
    pub col: usize,
    pub index: usize,
    pub values: Vec<f64>,
}

/// Geometria da grade de patches: lado da janela e passo entre origens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchGrid {
    kernel_size: usize,
    stride: usize,
}

impl PatchGrid {
    /// Cria a grade validando `kernel_size >= 1` e `1 <= stride <= kernel_size`
    pub fn new(kernel_size: usize, stride: usize) -> ImageResult<Self> {
        if kernel_size == 0 {
            return Err(ImageError::ZeroKernel);
        }
        if stride == 0 || stride > kernel_size {
            return Err(ImageError::InvalidStride {
                stride,
                kernel: kernel_size,
            });
        }
        Ok(Self {
            kernel_size,
            stride,
        })
    }

    pub fn kernel_size(&self) -> usize {
        self.kernel_size
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Dimensões (h_out, w_out) da grade de saída para a imagem dada
    ///
    /// `h_out = (H - K) / S + 1`, `w_out = (W - K) / S + 1` (divisão inteira).
    pub fn output_dims(&self, image: &Image) -> ImageResult<(usize, usize)> {
        if self.kernel_size > image.width || self.kernel_size > image.height {
            return Err(ImageError::KernelTooLarge {
                kernel: self.kernel_size,
                width: image.width,
                height: image.height,
            });
        }
        let h_out = (image.height - self.kernel_size) / self.stride + 1;
        let w_out = (image.width - self.kernel_size) / self.stride + 1;
        Ok((h_out, w_out))
    }

    /// Itera as janelas da imagem em ordem row-major
    ///
    /// O iterador é função pura da imagem e da grade: pode ser recriado
    /// quantas vezes for preciso e sempre produz a mesma sequência, com
    /// exatamente `h_out * w_out` elementos.
    pub fn patches<'a>(&self, image: &'a Image) -> ImageResult<Patches<'a>> {
        let (h_out, w_out) = self.output_dims(image)?;
        Ok(Patches::new(
            image,
            self.kernel_size,
            self.stride,
            h_out,
            w_out,
        ))
    }
}
