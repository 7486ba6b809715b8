//! Varredura de parâmetros para diagramas de fase
//!
//! Sonda um kernel numa grade (primary, secondary) para cada valor de
//! viés e coleta os escalares observados. Só produz dados; a plotagem é
//! responsabilidade de uma camada de apresentação externa.

use serde::{Deserialize, Serialize};

use crate::error::{FilterError, FilterResult, KernelResult};

use quanv_circuit::CouplingParams;

/// Configuração da varredura
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Faixa (início, fim) do acoplamento primário (J1)
    pub primary_range: (f64, f64),
    /// Faixa (início, fim) do acoplamento secundário (J2)
    pub secondary_range: (f64, f64),
    /// Valores de campo de viés (B), um diagrama por valor
    pub bias_values: Vec<f64>,
    /// Número de pontos por eixo da grade
    pub steps: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            primary_range: (-std::f64::consts::PI, std::f64::consts::PI),
            secondary_range: (-std::f64::consts::PI, std::f64::consts::PI),
            bias_values: vec![0.0],
            steps: 16,
        }
    }
}

/// Um ponto sondado do diagrama
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhasePoint {
    pub primary: f64,
    pub secondary: f64,
    pub value: f64,
}

/// Diagrama de fase para um valor de viés
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseDiagram {
    pub bias: f64,
    pub points: Vec<PhasePoint>,
}

/// Varredura de diagramas de fase
#[derive(Debug, Clone)]
pub struct PhaseSweep {
    config: SweepConfig,
}

impl PhaseSweep {
    pub fn new() -> Self {
        Self {
            config: SweepConfig::default(),
        }
    }

    /// Cria varredura validando a configuração
    pub fn with_config(config: SweepConfig) -> FilterResult<Self> {
        if config.steps == 0 {
            return Err(FilterError::InvalidConfig(
                "sweep must have at least one step per axis".into(),
            ));
        }
        if config.bias_values.is_empty() {
            return Err(FilterError::InvalidConfig(
                "sweep must have at least one bias value".into(),
            ));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Executa a varredura sondando o kernel em cada ponto da grade
    ///
    /// `probe` recebe os parâmetros de acoplamento do ponto e devolve o
    /// escalar observado, tipicamente `SamplingKernel::calibrate`, que
    /// avalia o circuito com um patch todo em zero. A primeira falha
    /// aborta a varredura.
    pub fn run<F>(&self, probe: F) -> FilterResult<Vec<PhaseDiagram>>
    where
        F: Fn(&CouplingParams) -> KernelResult<f64>,
    {
        let primaries = linspace(
            self.config.primary_range.0,
            self.config.primary_range.1,
            self.config.steps,
        );
        let secondaries = linspace(
            self.config.secondary_range.0,
            self.config.secondary_range.1,
            self.config.steps,
        );

        let mut diagrams = Vec::with_capacity(self.config.bias_values.len());
        for &bias in &self.config.bias_values {
            let mut points = Vec::with_capacity(primaries.len() * secondaries.len());
            for &primary in &primaries {
                for &secondary in &secondaries {
                    let params = CouplingParams::new(primary, secondary, bias);
                    let value = probe(&params)?;
                    points.push(PhasePoint {
                        primary,
                        secondary,
                        value,
                    });
                }
            }
            diagrams.push(PhaseDiagram { bias, points });
        }

        Ok(diagrams)
    }
}

impl Default for PhaseSweep {
    fn default() -> Self {
        Self::new()
    }
}

/// `steps` valores igualmente espaçados de `start` a `end` (inclusivo)
///
/// `steps == 1` devolve apenas `start`.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps == 0 {
        return Vec::new();
    }
    if steps == 1 {
        return vec![start];
    }
    let delta = (end - start) / (steps - 1) as f64;
    (0..steps).map(|i| start + delta * i as f64).collect()
}
