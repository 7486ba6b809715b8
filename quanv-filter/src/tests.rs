//! Testes do módulo quanv-filter

use super::*;
use crate::error::{KernelError, KernelResult};

use quanv_circuit::{Circuit, CircuitKernel, CircuitResult, SampleCounts, Sampler};
use quanv_image::Image;

/// Executor determinístico: devolve sempre as mesmas contagens
struct FixedSampler {
    state: u64,
}

impl Sampler for FixedSampler {
    fn sample(&self, _circuit: &Circuit, shots: u32) -> CircuitResult<SampleCounts> {
        let mut counts = SampleCounts::new();
        counts.record(self.state, shots as u64);
        Ok(counts)
    }
}

/// Executor que falha em toda chamada
struct FailingSampler;

impl Sampler for FailingSampler {
    fn sample(&self, _circuit: &Circuit, _shots: u32) -> CircuitResult<SampleCounts> {
        Err(quanv_circuit::CircuitError::ExecutorFailure(
            "backend offline".into(),
        ))
    }
}

fn soma() -> FnKernel<impl Fn(&[f64], &CouplingParams) -> f64> {
    kernel_fn(|vals, _params| vals.iter().sum())
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTES DO MAPA DE CARACTERÍSTICAS
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_feature_map_get_set() {
    let mut map = FeatureMap::new(2, 3);
    assert_eq!(map.len(), 6);
    map.set(1, 2, 4.5).unwrap();
    assert_eq!(map.get(1, 2), Some(4.5));
    assert_eq!(map.get(2, 0), None);
    assert!(matches!(
        map.set(0, 3, 1.0),
        Err(FilterError::OutOfBounds { row: 0, col: 3 })
    ));
}

#[test]
fn test_feature_map_min_max() {
    let mut map = FeatureMap::new(1, 3);
    map.set(0, 0, -2.0).unwrap();
    map.set(0, 2, 5.0).unwrap();
    assert_eq!(map.min_max(), Some((-2.0, 5.0)));
}

#[test]
fn test_feature_map_serde_roundtrip() {
    let mut map = FeatureMap::new(2, 2);
    map.set(0, 1, 3.0).unwrap();
    let json = serde_json::to_string(&map).unwrap();
    let back: FeatureMap = serde_json::from_str(&json).unwrap();
    assert_eq!(back, map);
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTES DO AVALIADOR
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_filter_config_validation() {
    let config = FilterConfig {
        kernel_size: 2,
        stride: 3,
        degenerate_policy: DegeneratePolicy::Zero,
    };
    assert!(QuanvFilter::with_config(config).is_err());
}

#[test]
fn test_filter_output_dims() {
    let filter = QuanvFilter::new();
    let img = Image::new(4, 4).unwrap();
    assert_eq!(filter.output_dims(&img).unwrap(), (3, 3));
}

#[test]
fn test_filter_sum_kernel_end_to_end() {
    // cada célula do mapa deve ser a soma dos valores normalizados do
    // patch correspondente
    let img = Image::from_vec(4, 4, (0..16).map(f64::from).collect()).unwrap();
    let filter = QuanvFilter::new();
    let params = CouplingParams::default();

    let map = filter.apply(&img, &soma(), &params).unwrap();
    assert_eq!((map.height, map.width), (3, 3));

    let norm = quanv_image::normalize(&img, DegeneratePolicy::Zero).unwrap();
    let grid = quanv_image::PatchGrid::new(2, 1).unwrap();
    for patch in grid.patches(&norm).unwrap() {
        let expected: f64 = patch.values.iter().sum();
        assert_eq!(map.get(patch.row, patch.col), Some(expected));
    }
}

#[test]
fn test_filter_patch_index_to_cell() {
    // o patch de índice 4 numa grade 3x3 preenche a célula (1, 1)
    let img = Image::from_vec(4, 4, (0..16).map(f64::from).collect()).unwrap();
    let filter = QuanvFilter::new();
    let params = CouplingParams::default();

    // kernel que devolve o índice do patch via contagem de chamadas
    use std::cell::Cell;
    let counter = Cell::new(0.0);
    let indexador = kernel_fn(|_vals, _p| {
        let idx = counter.get();
        counter.set(idx + 1.0);
        idx
    });

    let map = filter.apply(&img, &indexador, &params).unwrap();
    assert_eq!(map.get(1, 1), Some(4.0));
    assert_eq!(map.get(2, 2), Some(8.0));
}

#[test]
fn test_filter_degenerate_image_zero_policy() {
    let img = Image::from_vec(3, 3, vec![5.0; 9]).unwrap();
    let filter = QuanvFilter::new();
    let params = CouplingParams::default();

    let map = filter.apply(&img, &soma(), &params).unwrap();
    assert!(map.as_slice().iter().all(|&v| v == 0.0));
}

#[test]
fn test_filter_degenerate_image_fail_policy() {
    let img = Image::from_vec(3, 3, vec![5.0; 9]).unwrap();
    let config = FilterConfig {
        degenerate_policy: DegeneratePolicy::Fail,
        ..FilterConfig::default()
    };
    let filter = QuanvFilter::with_config(config).unwrap();
    let params = CouplingParams::default();

    let result = filter.apply(&img, &soma(), &params);
    assert!(matches!(result, Err(FilterError::Image(_))));
}

#[test]
fn test_filter_kernel_failure_aborts_pass() {
    let img = Image::from_vec(4, 4, (0..16).map(f64::from).collect()).unwrap();
    let filter = QuanvFilter::new();
    let params = CouplingParams::default();

    let kernel = SamplingKernel::new(
        CircuitKernel::site_encoded_2x2(),
        FailingSampler,
        100,
    )
    .unwrap();

    let result = filter.apply(&img, &kernel, &params);
    assert!(matches!(result, Err(FilterError::Kernel(_))));
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTES DO KERNEL DE AMOSTRAGEM
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_sampling_kernel_most_frequent_state() {
    let kernel = SamplingKernel::new(
        CircuitKernel::bond_encoded_2x2(),
        FixedSampler { state: 0b1010 },
        100,
    )
    .unwrap();
    let params = CouplingParams::new(0.5, 0.25, 0.1);

    let value = kernel.evaluate(&[0.1, 0.2, 0.3, 0.4], &params).unwrap();
    assert_eq!(value, 10.0);
}

#[test]
fn test_sampling_kernel_zero_shots_rejected() {
    let result = SamplingKernel::new(
        CircuitKernel::bond_encoded_2x2(),
        FixedSampler { state: 0 },
        0,
    );
    assert!(matches!(result, Err(FilterError::InvalidConfig(_))));
}

#[test]
fn test_sampling_kernel_arity_propagates() {
    let kernel = SamplingKernel::new(
        CircuitKernel::bond_encoded_3x3(),
        FixedSampler { state: 0 },
        10,
    )
    .unwrap();
    let params = CouplingParams::default();

    // 4 rotações para uma rede de 9 sítios
    let result = kernel.evaluate(&[0.0; 4], &params);
    assert!(matches!(result, Err(KernelError::Circuit(_))));
}

#[test]
fn test_sampling_kernel_calibrate() {
    let kernel = SamplingKernel::new(
        CircuitKernel::site_encoded_2x2(),
        FixedSampler { state: 0b0110 },
        50,
    )
    .unwrap();
    let params = CouplingParams::new(0.3, 0.2, 0.05);

    assert_eq!(kernel.calibrate(&params).unwrap(), 6.0);
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTES DE RENDERIZAÇÃO
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_render_buffer_size() {
    let map = FeatureMap::new(3, 4);
    let buffer = render(&map, &Colormap::viridis());
    assert_eq!((buffer.width, buffer.height), (4, 3));
    assert_eq!(buffer.pixels.len(), 3 * 12);
}

#[test]
fn test_render_constant_map_uniform() {
    let mut map = FeatureMap::new(2, 2);
    for row in 0..2 {
        for col in 0..2 {
            map.set(row, col, 7.0).unwrap();
        }
    }
    let buffer = render(&map, &Colormap::viridis());

    let first = buffer.get(0, 0).unwrap();
    for y in 0..2 {
        for x in 0..2 {
            assert_eq!(buffer.get(x, y).unwrap(), first);
        }
    }
    // mapa constante rende o início da rampa
    assert_eq!(first, [68, 1, 84]);
}

#[test]
fn test_render_extremes_hit_ramp_ends() {
    let mut map = FeatureMap::new(1, 2);
    map.set(0, 0, -1.0).unwrap();
    map.set(0, 1, 3.0).unwrap();
    let buffer = render(&map, &Colormap::greyscale());

    assert_eq!(buffer.get(0, 0).unwrap(), [0, 0, 0]);
    assert_eq!(buffer.get(1, 0).unwrap(), [255, 255, 255]);
}

#[test]
fn test_colormap_sample_clamps() {
    let cmap = Colormap::viridis();
    assert_eq!(cmap.sample(-1.0), cmap.sample(0.0));
    assert_eq!(cmap.sample(2.0), cmap.sample(1.0));
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTES DE VARREDURA
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_linspace() {
    assert_eq!(linspace(0.0, 1.0, 2), vec![0.0, 1.0]);
    assert_eq!(linspace(0.0, 1.0, 1), vec![0.0]);
    assert!(linspace(0.0, 1.0, 0).is_empty());

    let vals = linspace(-1.0, 1.0, 5);
    assert_eq!(vals.len(), 5);
    assert_eq!(vals[0], -1.0);
    assert_eq!(vals[4], 1.0);
    assert!((vals[2]).abs() < 1e-12);
}

#[test]
fn test_sweep_grid_size() {
    let config = SweepConfig {
        primary_range: (0.0, 1.0),
        secondary_range: (0.0, 1.0),
        bias_values: vec![0.0, 0.5],
        steps: 4,
    };
    let sweep = PhaseSweep::with_config(config).unwrap();

    let diagrams = sweep
        .run(|params| Ok(params.primary + params.secondary))
        .unwrap();

    assert_eq!(diagrams.len(), 2);
    for diagram in &diagrams {
        assert_eq!(diagram.points.len(), 16);
    }
    assert_eq!(diagrams[1].bias, 0.5);
}

#[test]
fn test_sweep_probe_values() {
    let config = SweepConfig {
        primary_range: (0.0, 1.0),
        secondary_range: (0.0, 2.0),
        bias_values: vec![0.0],
        steps: 2,
    };
    let sweep = PhaseSweep::with_config(config).unwrap();

    let diagrams = sweep.run(|p| Ok(10.0 * p.primary + p.secondary)).unwrap();
    let values: Vec<f64> = diagrams[0].points.iter().map(|p| p.value).collect();
    // grade em ordem (primary externo, secondary interno)
    assert_eq!(values, vec![0.0, 2.0, 10.0, 12.0]);
}

#[test]
fn test_sweep_validation() {
    let config = SweepConfig {
        steps: 0,
        ..SweepConfig::default()
    };
    assert!(PhaseSweep::with_config(config).is_err());

    let config = SweepConfig {
        bias_values: vec![],
        ..SweepConfig::default()
    };
    assert!(PhaseSweep::with_config(config).is_err());
}

#[test]
fn test_sweep_failure_aborts() {
    let sweep = PhaseSweep::new();
    let result: FilterResult<_> =
        sweep.run(|_| -> KernelResult<f64> { Err(KernelError::EmptySample) });
    assert!(result.is_err());
}
