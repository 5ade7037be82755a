/*!
 * Tokenstd Utils
 *
 * Utilitários comuns usados em toda a workspace Tokenstd
 */

use ethereum_types::Address;
use std::str::FromStr;
use tiny_keccak::{Hasher, Keccak};

use crate::types::Selector;

/// Converte uma string hexadecimal para Address
pub fn hex_to_address(hex: &str) -> Option<Address> {
    let hex_str = if hex.starts_with("0x") { &hex[2..] } else { hex };
    Address::from_str(hex_str).ok()
}

/// Formata um Address para exibição
pub fn format_address(address: &Address) -> String {
    format!("0x{:x}", address)
}

/// Calcula o hash Keccak-256 de dados
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    let mut result = [0u8; 32];
    hasher.update(data);
    hasher.finalize(&mut result);
    result
}

/// Deriva o seletor de 4 bytes a partir da assinatura canônica de uma função
/// (ex.: `transfer(address,uint256)`)
pub fn function_selector(signature: &str) -> Selector {
    let hash = keccak256(signature.as_bytes());
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&hash[..4]);
    selector
}

/// Verifica se um endereço possui bytecode implantado
pub async fn is_contract<P: crate::traits::ContractReader>(provider: &P, address: &Address) -> bool {
    match provider.get_code(*address).await {
        Ok(code) => !code.is_empty(),
        Err(_) => false,
    }
}
