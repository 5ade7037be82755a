/*!
 * Tokenstd Types
 *
 * Tipos comuns usados em toda a workspace Tokenstd
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identificador numérico da rede (chain id EVM)
pub type ChainId = u64;

/// Seletor de função: os 4 primeiros bytes do keccak-256 da assinatura
/// canônica. Também usado como interface id ERC165.
pub type Selector = [u8; 4];

/// Padrão de token reconhecido
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenStandard {
    Erc20,
    Erc721,
    Erc1155,
    Unknown,
}

impl fmt::Display for TokenStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenStandard::Erc20 => write!(f, "erc20"),
            TokenStandard::Erc721 => write!(f, "erc721"),
            TokenStandard::Erc1155 => write!(f, "erc1155"),
            TokenStandard::Unknown => write!(f, "unknown"),
        }
    }
}

/// Método que produziu a classificação
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DetectionMethod {
    /// Consulta on-chain via supportsInterface (ERC165)
    InterfaceProbe,
    /// Varredura estática dos seletores do bytecode
    BytecodeScan,
    /// Endereço sem bytecode (EOA ou contrato não implantado)
    NoCode,
}

impl fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectionMethod::InterfaceProbe => write!(f, "interface_probe"),
            DetectionMethod::BytecodeScan => write!(f, "bytecode_scan"),
            DetectionMethod::NoCode => write!(f, "no_code"),
        }
    }
}

/// Resultado de uma detecção: padrão classificado e método utilizado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Verdict {
    pub standard: TokenStandard,
    pub method: DetectionMethod,
}

impl Verdict {
    pub fn new(standard: TokenStandard, method: DetectionMethod) -> Self {
        Self { standard, method }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.standard, self.method)
    }
}
