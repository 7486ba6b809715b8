//! # ⚛️ quanv-circuit — Kernels de Circuito Quântico
//!
//! Constrói programas de gates para os kernels quanvolucionais: redes de
//! spins 2x2 e 3x3 com acoplamentos de primeiros vizinhos (J1), diagonais
//! (J2) e campo de viés (B). A construção é declarativa: a saída é um
//! [`Circuit`] (lista ordenada de [`Gate`]) entregue a um executor externo
//! pelo trait [`Sampler`]. Nenhuma simulação de estado vive aqui.
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          CircuitKernel                          │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  LatticeTopology (ligações declarativas)  │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  InputEncoding (Site | Bond)              │  │
//! │  └───────────────────────────────────────────┘  │
//! │  build(rotations, params) ──▶ Circuit           │
//! └─────────────────────────────────────────────────┘
//!          │
//!          ▼
//! ┌─────────────────────────────────────────────────┐
//! │  Sampler (executor externo)                     │
//! │  sample(circuit, shots) ──▶ SampleCounts        │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```ignore
//! use quanv_circuit::{CircuitKernel, CouplingParams};
//!
//! let kernel = CircuitKernel::bond_encoded_2x2();
//! let params = CouplingParams::new(0.5, 0.25, 0.1);
//! let circuit = kernel.build(&[0.1, 0.2, 0.3, 0.4], &params)?;
//! // circuit.ops() pronto para um Sampler
//! ```

pub mod error;
pub mod gates;
pub mod circuit;
pub mod topology;
pub mod kernel;

pub use error::{CircuitError, CircuitResult};
pub use gates::{Gate, Matrix2x2};
pub use circuit::{Circuit, SampleCounts, Sampler};
pub use topology::{Bond, LatticeBlock, LatticeTopology};
pub use kernel::{CircuitKernel, CouplingParams, InputEncoding};
