//! Normalização angular de imagens em escala de cinza

use serde::{Deserialize, Serialize};

use crate::error::{ImageError, ImageResult};
use crate::types::Image;

/// Política para imagens com faixa degenerada (max == min)
///
/// A reescala afim divide por `max - min`; quando todas as amostras são
/// iguais a divisão é indefinida e a política decide o resultado.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DegeneratePolicy {
    /// Produz imagem toda em zero (ângulo do ponto médio, `asin(0)`)
    #[default]
    Zero,
    /// Falha com [`ImageError::DegenerateRange`]
    Fail,
}

/// Normaliza amostras para ângulos em [-π/2, π/2]
///
/// Reescala afim da faixa observada [min, max] para [-1, 1] seguida de
/// `asin` elemento a elemento. O resultado serve diretamente como ângulo
/// de rotação para os kernels de circuito.
pub fn normalize(img: &Image, policy: DegeneratePolicy) -> ImageResult<Image> {
    let (min, max) = img.min_max();
    let range = max - min;

    if range == 0.0 {
        return match policy {
            DegeneratePolicy::Zero => Ok(Image {
                width: img.width,
                height: img.height,
                data: vec![0.0; img.data.len()],
            }),
            DegeneratePolicy::Fail => Err(ImageError::DegenerateRange),
        };
    }

    let data = img
        .data
        .iter()
        .map(|&v| (2.0 * (v - min) / range - 1.0).asin())
        .collect();

    Ok(Image {
        width: img.width,
        height: img.height,
        data,
    })
}
