//! Construtores dos kernels quanvolucionais
//!
//! Um kernel é a combinação de uma topologia de rede com uma codificação
//! de entrada. `build` emite o programa de gates correspondente para um
//! patch de rotações e os parâmetros de acoplamento globais.

use serde::{Deserialize, Serialize};

use crate::circuit::Circuit;
use crate::error::{CircuitError, CircuitResult};
use crate::topology::LatticeTopology;

/// Parâmetros globais de acoplamento compartilhados por todas as
/// avaliações de patch em um passe
///
/// `primary` (J1) pesa as ligações de primeiros vizinhos, `secondary` (J2)
/// as diagonais e `bias` (B) o campo de viés global.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CouplingParams {
    pub primary: f64,
    pub secondary: f64,
    pub bias: f64,
}

impl CouplingParams {
    pub fn new(primary: f64, secondary: f64, bias: f64) -> Self {
        Self {
            primary,
            secondary,
            bias,
        }
    }
}

/// Onde as rotações de entrada entram no circuito
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEncoding {
    /// Rotação Rz por sítio antes dos emaranhadores (kernel v1)
    Site,
    /// Rotação Rz dentro do emaranhador de cada ligação; diagonais recebem
    /// a média das rotações dos dois extremos (kernel v2 e rede 3x3)
    Bond,
}

/// Kernel quanvolucional: topologia + codificação de entrada
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitKernel {
    topology: LatticeTopology,
    encoding: InputEncoding,
}

impl CircuitKernel {
    pub fn new(topology: LatticeTopology, encoding: InputEncoding) -> Self {
        Self { topology, encoding }
    }

    /// Rede 2x2 com entrada por sítio
    pub fn site_encoded_2x2() -> Self {
        Self::new(LatticeTopology::square_2x2(), InputEncoding::Site)
    }

    /// Rede 2x2 com entrada por ligação
    pub fn bond_encoded_2x2() -> Self {
        Self::new(LatticeTopology::square_2x2(), InputEncoding::Bond)
    }

    /// Rede 3x3 com entrada por ligação (quatro blocos 2x2 sobrepostos)
    pub fn bond_encoded_3x3() -> Self {
        Self::new(LatticeTopology::square_3x3(), InputEncoding::Bond)
    }

    /// Número de sítios da rede (o comprimento exigido de `rotations`)
    pub fn site_count(&self) -> usize {
        self.topology.site_count()
    }

    pub fn topology(&self) -> &LatticeTopology {
        &self.topology
    }

    pub fn encoding(&self) -> InputEncoding {
        self.encoding
    }

    /// Emite o programa de gates para um patch de rotações
    ///
    /// Estrutura comum: camada Hadamard global, campo de viés Ry, camadas
    /// de acoplamento J1/J2 conjugadas por CNOT, campo de viés final e
    /// medição. A codificação decide onde as rotações de entrada entram.
    pub fn build(&self, rotations: &[f64], params: &CouplingParams) -> CircuitResult<Circuit> {
        let n = self.topology.site_count();
        if rotations.len() != n {
            return Err(CircuitError::ArityMismatch {
                expected: n,
                actual: rotations.len(),
            });
        }

        let mut circuit = Circuit::new(n);
        for q in 0..n {
            circuit.h(q)?;
        }

        match self.encoding {
            InputEncoding::Site => self.emit_site_encoded(&mut circuit, rotations, params)?,
            InputEncoding::Bond => self.emit_bond_encoded(&mut circuit, rotations, params)?,
        }

        for q in 0..n {
            circuit.ry(q, params.bias)?;
        }
        circuit.measure_all();

        Ok(circuit)
    }

    /// Entrada por sítio: Rz(entrada) e Ry(viés) por qubit, depois os
    /// acoplamentos puros sobre as ligações
    fn emit_site_encoded(
        &self,
        circuit: &mut Circuit,
        rotations: &[f64],
        params: &CouplingParams,
    ) -> CircuitResult<()> {
        for (q, &theta) in rotations.iter().enumerate() {
            circuit.rz(q, theta)?;
            circuit.ry(q, params.bias)?;
        }

        for bond in self.topology.nearest_bonds() {
            circuit.cnot(bond.control, bond.target)?;
            circuit.rx(bond.target, params.primary)?;
            circuit.cnot(bond.control, bond.target)?;
        }

        for bond in self.topology.diagonal_bonds() {
            circuit.cnot(bond.control, bond.target)?;
            circuit.rx(bond.target, params.secondary)?;
            circuit.cnot(bond.control, bond.target)?;
        }

        Ok(())
    }

    /// Entrada por ligação: viés primeiro, depois Rz(entrada) dentro de
    /// cada emaranhador; diagonais usam a média dos extremos
    fn emit_bond_encoded(
        &self,
        circuit: &mut Circuit,
        rotations: &[f64],
        params: &CouplingParams,
    ) -> CircuitResult<()> {
        for q in 0..circuit.qubit_count() {
            circuit.ry(q, params.bias)?;
        }

        // intercala os blocos por índice de ligação: a ligação i de cada
        // bloco entra antes da ligação i+1 de qualquer bloco
        for i in 0..4 {
            for block in self.topology.blocks() {
                let bond = block.nearest_bonds()[i];
                let theta = rotations[block.sites[i]];
                circuit.cnot(bond.control, bond.target)?;
                circuit.rz(bond.target, theta)?;
                circuit.rx(bond.target, params.primary)?;
                circuit.cnot(bond.control, bond.target)?;
            }
        }

        for block in self.topology.blocks() {
            for bond in block.diagonal_bonds() {
                let theta = (rotations[bond.control] + rotations[bond.target]) / 2.0;
                circuit.cnot(bond.control, bond.target)?;
                circuit.rz(bond.target, theta)?;
                circuit.rx(bond.target, params.secondary)?;
                circuit.cnot(bond.control, bond.target)?;
            }
        }

        Ok(())
    }
}
