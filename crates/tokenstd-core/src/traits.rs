/*!
 * Tokenstd Traits
 *
 * Traits comuns usados em toda a workspace Tokenstd
 */

use async_trait::async_trait;
use crate::error::Result;
use ethereum_types::Address;

/// Capacidade mínima de leitura de contratos exigida pelo detector.
///
/// Implementações concretas (cliente RPC, fixture de teste) ficam fora desta
/// workspace; o detector depende apenas desta abstração. Implementações que
/// suportam deadline/cancelamento devem retornar `Error::Cancelled` quando o
/// orçamento do chamador expira.
#[async_trait]
pub trait ContractReader: Send + Sync {
    /// Executa uma chamada somente leitura (eth_call) contra um contrato
    async fn call(&self, address: Address, data: Vec<u8>) -> Result<Vec<u8>>;

    /// Obtém o runtime bytecode de um contrato
    async fn get_code(&self, address: Address) -> Result<Vec<u8>>;
}
