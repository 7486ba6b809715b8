//! Capacidade de kernel e o adaptador de amostragem

use crate::error::{FilterError, FilterResult, KernelError, KernelResult};

use quanv_circuit::{CircuitKernel, CouplingParams, Sampler};

/// Kernel de patch: função escalar opaca avaliada uma vez por janela
///
/// O avaliador só exige que a chamada seja uma função (determinística ou
/// probabilística) de `(rotations, params)` devolvendo um escalar. As
/// invocações são independentes entre si.
pub trait PatchKernel {
    fn evaluate(&self, rotations: &[f64], params: &CouplingParams) -> KernelResult<f64>;
}

/// Kernel construído a partir de um fecho infalível
///
/// Criado por [`kernel_fn`]; útil como substituto determinístico em
/// testes e benchmarks.
#[derive(Debug, Clone)]
pub struct FnKernel<F> {
    f: F,
}

/// Embrulha um fecho `(rotations, params) -> escalar` como [`PatchKernel`]
pub fn kernel_fn<F>(f: F) -> FnKernel<F>
where
    F: Fn(&[f64], &CouplingParams) -> f64,
{
    FnKernel { f }
}

impl<F> PatchKernel for FnKernel<F>
where
    F: Fn(&[f64], &CouplingParams) -> f64,
{
    fn evaluate(&self, rotations: &[f64], params: &CouplingParams) -> KernelResult<f64> {
        Ok((self.f)(rotations, params))
    }
}

/// Kernel que amostra um circuito de rede de spins
///
/// Constrói o programa do [`CircuitKernel`] para as rotações do patch,
/// pede `shots` amostras ao executor externo e devolve o estado da base
/// mais observado como escalar (a bitstring mais frequente convertida
/// para inteiro).
#[derive(Debug, Clone)]
pub struct SamplingKernel<S: Sampler> {
    circuit: CircuitKernel,
    sampler: S,
    shots: u32,
}

impl<S: Sampler> SamplingKernel<S> {
    /// Cria o kernel validando `shots >= 1`
    pub fn new(circuit: CircuitKernel, sampler: S, shots: u32) -> FilterResult<Self> {
        if shots == 0 {
            return Err(FilterError::InvalidConfig(
                "sample count must be >= 1".into(),
            ));
        }
        Ok(Self {
            circuit,
            sampler,
            shots,
        })
    }

    pub fn shots(&self) -> u32 {
        self.shots
    }

    pub fn circuit(&self) -> &CircuitKernel {
        &self.circuit
    }

    /// Avalia o kernel com um patch todo em zero
    ///
    /// Sonda os parâmetros de acoplamento sem entrada de imagem. É a
    /// leitura usada pelos varridos de diagrama de fase.
    pub fn calibrate(&self, params: &CouplingParams) -> KernelResult<f64> {
        let zeros = vec![0.0; self.circuit.site_count()];
        self.evaluate(&zeros, params)
    }
}

impl<S: Sampler> PatchKernel for SamplingKernel<S> {
    fn evaluate(&self, rotations: &[f64], params: &CouplingParams) -> KernelResult<f64> {
        let circuit = self.circuit.build(rotations, params)?;
        let counts = self.sampler.sample(&circuit, self.shots)?;
        let state = counts.most_frequent().ok_or(KernelError::EmptySample)?;
        Ok(state as f64)
    }
}
