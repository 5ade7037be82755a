//! Consulta de interface ERC165 via supportsInterface(bytes4).
//!
//! Revert, erro de transporte ou retorno malformado são tratados como
//! "interface não suportada": muitos tokens legítimos simplesmente não
//! implementam ERC165 e uma falha aqui não pode abortar a classificação.
//! Cancelamento é a única exceção e propaga imediatamente.

use ethabi::{ParamType, Token};
use ethereum_types::Address;
use tokenstd_core::{error::Result, traits::ContractReader, types::Selector, utils::format_address};

use crate::standards::ERC165_INTERFACE_ID;

/// Monta o calldata de supportsInterface(bytes4) para um interface id
pub fn encode_supports_interface(interface_id: &Selector) -> Vec<u8> {
    let mut data = Vec::with_capacity(36);
    data.extend_from_slice(&ERC165_INTERFACE_ID);
    data.extend_from_slice(&ethabi::encode(&[Token::FixedBytes(interface_id.to_vec())]));
    data
}

/// Decodifica o retorno booleano de supportsInterface. Dados vazios ou
/// malformados contam como `false`.
pub fn decode_supports_interface(data: &[u8]) -> bool {
    match ethabi::decode(&[ParamType::Bool], data) {
        Ok(tokens) => tokens
            .into_iter()
            .next()
            .and_then(|token| token.into_bool())
            .unwrap_or(false),
        Err(_) => false,
    }
}

/// Consulta se o contrato declara suporte ao interface id informado.
///
/// Retorna sempre um booleano definitivo, exceto sob cancelamento, que é
/// repassado ao chamador sem fallback.
pub async fn supports_interface<P: ContractReader>(
    provider: &P,
    address: Address,
    interface_id: &Selector,
) -> Result<bool> {
    let data = encode_supports_interface(interface_id);

    match provider.call(address, data).await {
        Ok(output) => Ok(decode_supports_interface(&output)),
        Err(err) if err.is_cancelled() => Err(err),
        Err(err) => {
            tracing::debug!(
                address = %format_address(&address),
                interface_id = %hex::encode(interface_id),
                error = %err,
                "consulta supportsInterface falhou; tratando como não suportada"
            );
            Ok(false)
        }
    }
}
