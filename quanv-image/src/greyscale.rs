//! Conversão para escala de cinza e quantização para bytes

use crate::types::{Image, RgbImage};

/// Pesos de luminância (ITU-R BT.601): Y = 0.299 R + 0.587 G + 0.114 B
pub const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// Converte uma imagem RGB para escala de cinza pelos pesos de luminância
///
/// Combinação afim fixa e determinística, sem efeitos colaterais. O tipo
/// [`RgbImage`] garante exatamente três canais.
pub fn to_greyscale(img: &RgbImage) -> Image {
    let [r, g, b] = &img.channels;
    let data = r
        .iter()
        .zip(g.iter())
        .zip(b.iter())
        .map(|((&r, &g), &b)| LUMA_WEIGHTS[0] * r + LUMA_WEIGHTS[1] * g + LUMA_WEIGHTS[2] * b)
        .collect();

    // canais já validados na construção do RgbImage
    Image {
        width: img.width,
        height: img.height,
        data,
    }
}

/// Quantiza as amostras de uma imagem para bytes
///
/// Com `rescale = true`, amostras em [0, 1] são reescaladas para [0, 255];
/// caso contrário assume-se que as amostras já estão na faixa de bytes.
/// Valores fora da faixa são saturados.
pub fn quantize(img: &Image, rescale: bool) -> Vec<u8> {
    let scale = if rescale { 255.0 } else { 1.0 };
    img.data
        .iter()
        .map(|&v| (v * scale).round().clamp(0.0, 255.0) as u8)
        .collect()
}
