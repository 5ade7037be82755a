//! Tabela de seletores e interface ids que definem cada padrão de token.
//!
//! Fonte única de verdade para "o que conta como padrão X". Dados puros,
//! sem lógica; revisar quando os padrões evoluírem.

use std::collections::HashSet;
use tokenstd_core::types::Selector;

/// Interface id ERC165, idêntico ao seletor de supportsInterface(bytes4)
pub const ERC165_INTERFACE_ID: Selector = [0x01, 0xff, 0xc9, 0xa7];

/// Interface id ERC721 registrado via ERC165
pub const ERC721_INTERFACE_ID: Selector = [0x80, 0xac, 0x58, 0xcd];

/// Interface id ERC1155 registrado via ERC165
pub const ERC1155_INTERFACE_ID: Selector = [0xd9, 0xb6, 0x7a, 0x26];

/// Seletores obrigatórios de um ERC20. O ERC20 não possui interface id
/// ERC165 em uso na prática, então só é alcançável pela varredura de
/// bytecode.
pub const ERC20_SELECTORS: [Selector; 6] = [
    [0x18, 0x16, 0x0d, 0xdd], // totalSupply()
    [0x70, 0xa0, 0x82, 0x31], // balanceOf(address)
    [0xa9, 0x05, 0x9c, 0xbb], // transfer(address,uint256)
    [0x23, 0xb8, 0x72, 0xdd], // transferFrom(address,address,uint256)
    [0x09, 0x5e, 0xa7, 0xb3], // approve(address,uint256)
    [0xdd, 0x62, 0xed, 0x3e], // allowance(address,address)
];

/// Seletores usados como fallback para ERC721 quando a consulta ERC165 não
/// está disponível
pub const ERC721_SELECTORS: [Selector; 9] = [
    [0x70, 0xa0, 0x82, 0x31], // balanceOf(address)
    [0x63, 0x52, 0x21, 0x1e], // ownerOf(uint256)
    [0x09, 0x5e, 0xa7, 0xb3], // approve(address,uint256)
    [0x08, 0x18, 0x12, 0xfc], // getApproved(uint256)
    [0xa2, 0x2c, 0xb4, 0x65], // setApprovalForAll(address,bool)
    [0xe9, 0x85, 0xe9, 0xc5], // isApprovedForAll(address,address)
    [0x23, 0xb8, 0x72, 0xdd], // transferFrom(address,address,uint256)
    [0x42, 0x84, 0x2e, 0x0e], // safeTransferFrom(address,address,uint256)
    [0xb8, 0x8d, 0x4f, 0xde], // safeTransferFrom(address,address,uint256,bytes)
];

/// Seletores usados como fallback para ERC1155 quando a consulta ERC165 não
/// está disponível
pub const ERC1155_SELECTORS: [Selector; 6] = [
    [0x00, 0xfd, 0xd5, 0x8e], // balanceOf(address,uint256)
    [0x4e, 0x12, 0x73, 0xf4], // balanceOfBatch(address[],uint256[])
    [0xa2, 0x2c, 0xb4, 0x65], // setApprovalForAll(address,bool)
    [0xe9, 0x85, 0xe9, 0xc5], // isApprovedForAll(address,address)
    [0xf2, 0x42, 0x43, 0x2a], // safeTransferFrom(address,address,uint256,uint256,bytes)
    [0x2e, 0xb2, 0xc2, 0xd6], // safeBatchTransferFrom(address,address,uint256[],uint256[],bytes)
];

/// Registro imutável dos conjuntos de seletores por padrão. Construído uma
/// única vez pelo detector e nunca alterado.
#[derive(Debug, Clone)]
pub struct SelectorRegistry {
    erc20: HashSet<Selector>,
    erc721: HashSet<Selector>,
    erc1155: HashSet<Selector>,
}

impl SelectorRegistry {
    pub fn new() -> Self {
        Self {
            erc20: ERC20_SELECTORS.into_iter().collect(),
            erc721: ERC721_SELECTORS.into_iter().collect(),
            erc1155: ERC1155_SELECTORS.into_iter().collect(),
        }
    }

    /// Conjunto obrigatório do ERC20
    pub fn erc20(&self) -> &HashSet<Selector> {
        &self.erc20
    }

    /// Conjunto de fallback do ERC721
    pub fn erc721(&self) -> &HashSet<Selector> {
        &self.erc721
    }

    /// Conjunto de fallback do ERC1155
    pub fn erc1155(&self) -> &HashSet<Selector> {
        &self.erc1155
    }
}

impl Default for SelectorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
