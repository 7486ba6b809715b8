//! Topologia declarativa da rede de spins
//!
//! As ligações da rede são dados, não listas de índices embutidas nos
//! construtores de circuito: uma rede é um conjunto de blocos 2x2 e cada
//! bloco deriva suas ligações de primeiros vizinhos e diagonais da posição
//! dos sítios. Redes maiores são geradas programaticamente a partir dos
//! blocos sobrepostos.

use serde::{Deserialize, Serialize};

use crate::error::{CircuitError, CircuitResult};

/// Ligação dirigida entre dois sítios (controle → alvo)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bond {
    pub control: usize,
    pub target: usize,
}

impl Bond {
    pub fn new(control: usize, target: usize) -> Self {
        Self { control, target }
    }
}

/// Bloco 2x2 da rede: sítios em ordem row-major
///
/// ```text
/// sites[0] ── sites[1]
///    │    ╲╱    │
///    │    ╱╲    │
/// sites[2] ── sites[3]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatticeBlock {
    pub sites: [usize; 4],
}

impl LatticeBlock {
    pub fn new(sites: [usize; 4]) -> Self {
        Self { sites }
    }

    /// Ligações de primeiros vizinhos do bloco
    ///
    /// Na ordem local (0→1), (2→3), (0→2), (1→3): a ligação de índice i
    /// é a que os kernels de entrada por ligação associam à rotação do
    /// sítio local i.
    pub fn nearest_bonds(&self) -> [Bond; 4] {
        let [a, b, c, d] = self.sites;
        [
            Bond::new(a, b),
            Bond::new(c, d),
            Bond::new(a, c),
            Bond::new(b, d),
        ]
    }

    /// Ligações diagonais do bloco: (0→3) e (2→1)
    pub fn diagonal_bonds(&self) -> [Bond; 2] {
        let [a, b, c, d] = self.sites;
        [Bond::new(a, d), Bond::new(c, b)]
    }
}

/// Topologia da rede: contagem de sítios e blocos 2x2 (possivelmente
/// sobrepostos) que definem as ligações
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatticeTopology {
    site_count: usize,
    blocks: Vec<LatticeBlock>,
}

impl LatticeTopology {
    /// Cria topologia validando os índices de sítio dos blocos
    pub fn from_blocks(site_count: usize, blocks: Vec<LatticeBlock>) -> CircuitResult<Self> {
        if site_count == 0 {
            return Err(CircuitError::InvalidTopology(
                "lattice must have at least one site".into(),
            ));
        }
        if blocks.is_empty() {
            return Err(CircuitError::InvalidTopology(
                "lattice must have at least one block".into(),
            ));
        }
        for block in &blocks {
            for &site in &block.sites {
                if site >= site_count {
                    return Err(CircuitError::InvalidTopology(format!(
                        "block site {site} out of range for {site_count} sites"
                    )));
                }
            }
        }
        Ok(Self { site_count, blocks })
    }

    /// Rede quadrada 2x2: um bloco único
    pub fn square_2x2() -> Self {
        Self {
            site_count: 4,
            blocks: vec![LatticeBlock::new([0, 1, 2, 3])],
        }
    }

    /// Rede quadrada 3x3: quatro blocos 2x2 sobrepostos
    ///
    /// Blocos ancorados em (0,0), (0,1), (1,0), (1,1) da grade 3x3; o
    /// sítio central (4) participa dos quatro blocos.
    pub fn square_3x3() -> Self {
        Self::square(3)
    }

    /// Rede quadrada n×n gerada por blocos 2x2 ancorados em cada célula
    fn square(n: usize) -> Self {
        let mut blocks = Vec::with_capacity((n - 1) * (n - 1));
        for row in 0..n - 1 {
            for col in 0..n - 1 {
                let anchor = row * n + col;
                blocks.push(LatticeBlock::new([
                    anchor,
                    anchor + 1,
                    anchor + n,
                    anchor + n + 1,
                ]));
            }
        }
        Self {
            site_count: n * n,
            blocks,
        }
    }

    pub fn site_count(&self) -> usize {
        self.site_count
    }

    pub fn blocks(&self) -> &[LatticeBlock] {
        &self.blocks
    }

    /// Todas as ligações de primeiros vizinhos, bloco a bloco
    pub fn nearest_bonds(&self) -> Vec<Bond> {
        self.blocks
            .iter()
            .flat_map(|b| b.nearest_bonds())
            .collect()
    }

    /// Todas as ligações diagonais, bloco a bloco
    pub fn diagonal_bonds(&self) -> Vec<Bond> {
        self.blocks
            .iter()
            .flat_map(|b| b.diagonal_bonds())
            .collect()
    }
}
