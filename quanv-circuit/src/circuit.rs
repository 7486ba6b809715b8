//! Programa de circuito e fronteira com o executor

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{CircuitError, CircuitResult};
use crate::gates::Gate;

/// Programa de circuito: contagem de qubits e lista ordenada de operações
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    qubit_count: usize,
    ops: Vec<Gate>,
}

impl Circuit {
    /// Cria circuito vazio sobre `qubit_count` qubits
    pub fn new(qubit_count: usize) -> Self {
        Self {
            qubit_count,
            ops: Vec::new(),
        }
    }

    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    /// Operações na ordem do programa
    pub fn ops(&self) -> &[Gate] {
        &self.ops
    }

    pub fn op_count(&self) -> usize {
        self.ops.len()
    }

    /// Anexa uma operação validando os índices de qubit
    pub fn push(&mut self, gate: Gate) -> CircuitResult<()> {
        for qubit in gate.qubits() {
            if qubit >= self.qubit_count {
                return Err(CircuitError::QubitOutOfRange {
                    qubit,
                    count: self.qubit_count,
                });
            }
        }
        self.ops.push(gate);
        Ok(())
    }

    pub fn h(&mut self, qubit: usize) -> CircuitResult<()> {
        self.push(Gate::H { qubit })
    }

    pub fn rx(&mut self, qubit: usize, theta: f64) -> CircuitResult<()> {
        self.push(Gate::Rx { qubit, theta })
    }

    pub fn ry(&mut self, qubit: usize, theta: f64) -> CircuitResult<()> {
        self.push(Gate::Ry { qubit, theta })
    }

    pub fn rz(&mut self, qubit: usize, theta: f64) -> CircuitResult<()> {
        self.push(Gate::Rz { qubit, theta })
    }

    pub fn cnot(&mut self, control: usize, target: usize) -> CircuitResult<()> {
        self.push(Gate::Cnot { control, target })
    }

    /// Medição de todos os qubits no eixo z
    pub fn measure_all(&mut self) {
        self.ops.push(Gate::MeasureAll);
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "// {} qubits, {} ops", self.qubit_count, self.ops.len())?;
        for op in &self.ops {
            writeln!(f, "{op}")?;
        }
        Ok(())
    }
}

/// Contagens observadas por estado da base computacional
///
/// Chave: estado medido como máscara de bits (qubit 0 = bit mais
/// significativo, seguindo a ordem de leitura da bitstring).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleCounts {
    counts: BTreeMap<u64, u64>,
}

impl SampleCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra `n` observações do estado
    pub fn record(&mut self, state: u64, n: u64) {
        *self.counts.entry(state).or_insert(0) += n;
    }

    /// Contagem de um estado específico
    pub fn get(&self, state: u64) -> u64 {
        self.counts.get(&state).copied().unwrap_or(0)
    }

    /// Total de observações
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Estado mais observado
    ///
    /// Empates resolvem para o menor estado da base, então o resultado é
    /// determinístico para um executor determinístico.
    pub fn most_frequent(&self) -> Option<u64> {
        let mut best: Option<(u64, u64)> = None;
        for (&state, &count) in &self.counts {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((state, count)),
            }
        }
        best.map(|(state, _)| state)
    }

    /// Itera pares (estado, contagem) em ordem crescente de estado
    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.counts.iter().map(|(&s, &c)| (s, c))
    }
}

/// Fronteira com o executor de circuitos
///
/// O executor (simulador ou hardware) é um colaborador externo: recebe o
/// programa e o número de amostras e devolve as contagens observadas.
/// Implementações de teste podem ser determinísticas.
pub trait Sampler {
    fn sample(&self, circuit: &Circuit, shots: u32) -> CircuitResult<SampleCounts>;
}
