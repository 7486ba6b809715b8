//! Gates do programa e matrizes unitárias associadas
//!
//! O vocabulário cobre o que os kernels de rede usam: Hadamard, rotações
//! Rx/Ry/Rz, CNOT e medição no eixo z. Gates single-qubit expõem sua matriz
//! 2x2 como metadado de construção para executores; a aplicação a estados
//! fica a cargo do colaborador externo.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

/// Operação de um programa de circuito
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    /// Hadamard
    H { qubit: usize },
    /// Rotação em torno do eixo x
    Rx { qubit: usize, theta: f64 },
    /// Rotação em torno do eixo y
    Ry { qubit: usize, theta: f64 },
    /// Rotação em torno do eixo z
    Rz { qubit: usize, theta: f64 },
    /// NOT controlado
    Cnot { control: usize, target: usize },
    /// Medição de todos os qubits no eixo z
    MeasureAll,
}

impl Gate {
    /// Nome curto da operação
    pub fn name(&self) -> &'static str {
        match self {
            Gate::H { .. } => "h",
            Gate::Rx { .. } => "rx",
            Gate::Ry { .. } => "ry",
            Gate::Rz { .. } => "rz",
            Gate::Cnot { .. } => "cnot",
            Gate::MeasureAll => "mz",
        }
    }

    /// Qubits tocados pela operação (vazio para a medição global)
    pub fn qubits(&self) -> Vec<usize> {
        match *self {
            Gate::H { qubit }
            | Gate::Rx { qubit, .. }
            | Gate::Ry { qubit, .. }
            | Gate::Rz { qubit, .. } => vec![qubit],
            Gate::Cnot { control, target } => vec![control, target],
            Gate::MeasureAll => Vec::new(),
        }
    }

    /// Matriz unitária 2x2 para operações single-qubit
    ///
    /// `None` para CNOT e medição.
    pub fn matrix(&self) -> Option<Matrix2x2> {
        match *self {
            Gate::H { .. } => Some(Matrix2x2::hadamard()),
            Gate::Rx { theta, .. } => Some(Matrix2x2::rotation_x(theta)),
            Gate::Ry { theta, .. } => Some(Matrix2x2::rotation_y(theta)),
            Gate::Rz { theta, .. } => Some(Matrix2x2::rotation_z(theta)),
            Gate::Cnot { .. } | Gate::MeasureAll => None,
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Gate::H { qubit } => write!(f, "h q{qubit}"),
            Gate::Rx { qubit, theta } => write!(f, "rx({theta:.6}) q{qubit}"),
            Gate::Ry { qubit, theta } => write!(f, "ry({theta:.6}) q{qubit}"),
            Gate::Rz { qubit, theta } => write!(f, "rz({theta:.6}) q{qubit}"),
            Gate::Cnot { control, target } => write!(f, "cnot q{control} q{target}"),
            Gate::MeasureAll => write!(f, "mz"),
        }
    }
}

/// Matriz 2x2 complexa
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix2x2 {
    /// Elementos: [[a, b], [c, d]]
    pub elements: [[Complex64; 2]; 2],
}

impl Matrix2x2 {
    /// Matriz identidade
    pub fn identity() -> Self {
        Self {
            elements: [
                [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
                [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
            ],
        }
    }

    /// Hadamard: (1/√2) [[1, 1], [1, -1]]
    pub fn hadamard() -> Self {
        let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
        Self {
            elements: [[h, h], [h, -h]],
        }
    }

    /// Rx(θ) = [[cos θ/2, -i sin θ/2], [-i sin θ/2, cos θ/2]]
    pub fn rotation_x(theta: f64) -> Self {
        let c = Complex64::new((theta / 2.0).cos(), 0.0);
        let s = Complex64::new(0.0, -(theta / 2.0).sin());
        Self {
            elements: [[c, s], [s, c]],
        }
    }

    /// Ry(θ) = [[cos θ/2, -sin θ/2], [sin θ/2, cos θ/2]]
    pub fn rotation_y(theta: f64) -> Self {
        let c = Complex64::new((theta / 2.0).cos(), 0.0);
        let s = Complex64::new((theta / 2.0).sin(), 0.0);
        Self {
            elements: [[c, -s], [s, c]],
        }
    }

    /// Rz(θ) = [[e^(-iθ/2), 0], [0, e^(iθ/2)]]
    pub fn rotation_z(theta: f64) -> Self {
        let zero = Complex64::new(0.0, 0.0);
        Self {
            elements: [
                [Complex64::from_polar(1.0, -theta / 2.0), zero],
                [zero, Complex64::from_polar(1.0, theta / 2.0)],
            ],
        }
    }

    /// Multiplicação de matrizes
    pub fn mul(&self, other: &Matrix2x2) -> Matrix2x2 {
        let [[a, b], [c, d]] = self.elements;
        let [[e, f], [g, h]] = other.elements;
        Matrix2x2 {
            elements: [
                [a * e + b * g, a * f + b * h],
                [c * e + d * g, c * f + d * h],
            ],
        }
    }

    /// Transposta conjugada (dagger)
    pub fn dagger(&self) -> Matrix2x2 {
        let [[a, b], [c, d]] = self.elements;
        Matrix2x2 {
            elements: [[a.conj(), c.conj()], [b.conj(), d.conj()]],
        }
    }

    /// Verifica unitariedade: M · M† = I
    pub fn is_unitary(&self, epsilon: f64) -> bool {
        let product = self.mul(&self.dagger());
        let [[a, b], [c, d]] = product.elements;
        (a.re - 1.0).abs() < epsilon
            && a.im.abs() < epsilon
            && b.norm_sqr() < epsilon
            && c.norm_sqr() < epsilon
            && (d.re - 1.0).abs() < epsilon
            && d.im.abs() < epsilon
    }
}
