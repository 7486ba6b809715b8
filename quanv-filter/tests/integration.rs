//! Testes de integração para quanv-filter

use quanv_filter::*;

use quanv_circuit::{Circuit, CircuitKernel, CircuitResult, Gate, SampleCounts, Sampler};
use quanv_image::{Image, RgbImage};

/// Executor de mentira: deriva um estado determinístico do programa
///
/// Quantiza a soma dos ângulos Rz do circuito para um estado de 4 bits:
/// o bastante para o mapa variar com o conteúdo de cada patch sem
/// depender de um simulador de verdade.
struct StubBackend;

impl Sampler for StubBackend {
    fn sample(&self, circuit: &Circuit, shots: u32) -> CircuitResult<SampleCounts> {
        let angle_sum: f64 = circuit
            .ops()
            .iter()
            .filter_map(|op| match *op {
                Gate::Rz { theta, .. } => Some(theta),
                _ => None,
            })
            .sum();
        let state = (angle_sum.abs() * 10.0) as u64 % 16;

        let mut counts = SampleCounts::new();
        counts.record(state, shots as u64);
        Ok(counts)
    }
}

fn gradient_image(width: usize, height: usize) -> Image {
    let data = (0..width * height).map(|i| i as f64).collect();
    Image::from_vec(width, height, data).unwrap()
}

#[test]
fn test_full_pipeline_greyscale() {
    let img = gradient_image(6, 6);
    let filter = QuanvFilter::new();
    let params = CouplingParams::new(0.5, 0.25, 0.1);

    let kernel = SamplingKernel::new(CircuitKernel::bond_encoded_2x2(), StubBackend, 100).unwrap();
    let map = filter.apply(&img, &kernel, &params).unwrap();

    assert_eq!((map.height, map.width), (5, 5));
    // todos os escalares vêm de estados de 4 bits
    assert!(map.as_slice().iter().all(|&v| (0.0..16.0).contains(&v)));
}

#[test]
fn test_full_pipeline_rgb() {
    let n = 5 * 5;
    let rgb = RgbImage::from_channels(
        5,
        5,
        [
            (0..n).map(|i| i as f64).collect(),
            (0..n).map(|i| (n - i) as f64).collect(),
            vec![128.0; n],
        ],
    )
    .unwrap();

    let filter = QuanvFilter::new();
    let params = CouplingParams::new(0.5, 0.25, 0.1);
    let kernel = SamplingKernel::new(CircuitKernel::site_encoded_2x2(), StubBackend, 100).unwrap();

    let map = filter.apply_rgb(&rgb, &kernel, &params).unwrap();
    assert_eq!((map.height, map.width), (4, 4));
}

#[test]
fn test_pipeline_3x3_kernel() {
    let img = gradient_image(7, 7);
    let config = FilterConfig {
        kernel_size: 3,
        stride: 2,
        degenerate_policy: DegeneratePolicy::Zero,
    };
    let filter = QuanvFilter::with_config(config).unwrap();
    let params = CouplingParams::new(0.5, 0.25, 0.1);

    let kernel = SamplingKernel::new(CircuitKernel::bond_encoded_3x3(), StubBackend, 100).unwrap();
    let map = filter.apply(&img, &kernel, &params).unwrap();

    // (7 - 3) / 2 + 1 = 3
    assert_eq!((map.height, map.width), (3, 3));
}

#[test]
fn test_pipeline_deterministic() {
    let img = gradient_image(6, 6);
    let filter = QuanvFilter::new();
    let params = CouplingParams::new(0.5, 0.25, 0.1);
    let kernel = SamplingKernel::new(CircuitKernel::bond_encoded_2x2(), StubBackend, 100).unwrap();

    let a = filter.apply(&img, &kernel, &params).unwrap();
    let b = filter.apply(&img, &kernel, &params).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_pipeline_render() {
    let img = gradient_image(6, 6);
    let filter = QuanvFilter::new();
    let params = CouplingParams::new(0.5, 0.25, 0.1);
    let kernel = SamplingKernel::new(CircuitKernel::bond_encoded_2x2(), StubBackend, 100).unwrap();

    let map = filter.apply(&img, &kernel, &params).unwrap();
    let buffer = render(&map, &Colormap::viridis());

    assert_eq!(buffer.pixels.len(), 3 * map.len());
}

#[test]
fn test_pipeline_sweep_with_calibrate() {
    let kernel = SamplingKernel::new(CircuitKernel::bond_encoded_2x2(), StubBackend, 100).unwrap();
    let config = SweepConfig {
        primary_range: (0.0, 1.0),
        secondary_range: (0.0, 1.0),
        bias_values: vec![0.0, 0.3],
        steps: 3,
    };
    let sweep = PhaseSweep::with_config(config).unwrap();

    let diagrams = sweep.run(|params| kernel.calibrate(params)).unwrap();
    assert_eq!(diagrams.len(), 2);
    assert_eq!(diagrams[0].points.len(), 9);
}
