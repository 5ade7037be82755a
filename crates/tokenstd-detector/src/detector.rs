//! Política de classificação do padrão de token.
//!
//! Duas camadas, na ordem: consulta ERC165 (autoritativa quando presente) e
//! varredura estática dos seletores do bytecode. A consulta vem primeiro para
//! evitar falsos positivos da varredura: um proxy cujo bytecode carrega
//! constantes PUSH4 que colidem com seletores ERC20 ainda responde ERC721
//! corretamente via ERC165. O ERC20 não tem interface id, então só é
//! alcançável pela varredura, e por último: um híbrido com contabilidade
//! ERC20 e interface NFT não pode ser rotulado como ERC20.

use std::future::Future;
use std::time::Duration;

use ethereum_types::Address;
use tokenstd_core::{
    error::{Error, Result},
    traits::ContractReader,
    types::{ChainId, DetectionMethod, Selector, TokenStandard, Verdict},
    utils::format_address,
};

use crate::config::DetectorConfig;
use crate::probe::supports_interface;
use crate::scanner::extract_selectors;
use crate::standards::{SelectorRegistry, ERC1155_INTERFACE_ID, ERC721_INTERFACE_ID};

/// Detector de padrão de token para contratos EVM.
///
/// Sem estado mutável compartilhado: seguro para qualquer número de
/// chamadores concorrentes sem lock externo. As únicas suspensões são as
/// chamadas de rede feitas através do `ContractReader` fornecido.
pub struct TokenStandardDetector<P> {
    provider: P,
    registry: SelectorRegistry,
    config: DetectorConfig,
}

impl<P> TokenStandardDetector<P> {
    /// Cria um detector com a configuração padrão
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, DetectorConfig::default())
    }

    /// Cria um detector com configuração explícita
    pub fn with_config(provider: P, config: DetectorConfig) -> Self {
        Self {
            provider,
            registry: SelectorRegistry::new(),
            config,
        }
    }

    /// Configuração em uso
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }
}

impl<P: ContractReader> TokenStandardDetector<P> {
    /// Classifica o contrato em `address` na rede `chain_id`.
    ///
    /// `code` permite fornecer bytecode pré-buscado (análise em lote ou
    /// offline); quando ausente, é buscado uma única vez pelo provider.
    /// Falha de busca de bytecode e cancelamento são os únicos erros
    /// propagados; falhas da consulta ERC165 degradam para a varredura.
    pub async fn detect(
        &self,
        chain_id: ChainId,
        address: Address,
        code: Option<Vec<u8>>,
    ) -> Result<Verdict> {
        let code = match code {
            Some(code) => code,
            None => self.with_deadline(self.provider.get_code(address)).await?,
        };

        // Sem bytecode: EOA ou contrato não implantado. Nenhuma consulta de
        // rede deve ser feita.
        if code.is_empty() {
            return Ok(Verdict::new(TokenStandard::Unknown, DetectionMethod::NoCode));
        }

        if self.probe(address, &ERC721_INTERFACE_ID).await? {
            return self.verdict(chain_id, address, TokenStandard::Erc721, DetectionMethod::InterfaceProbe);
        }

        if self.probe(address, &ERC1155_INTERFACE_ID).await? {
            return self.verdict(chain_id, address, TokenStandard::Erc1155, DetectionMethod::InterfaceProbe);
        }

        let selectors = extract_selectors(&code);

        let standard = if self.registry.erc721().is_subset(&selectors) {
            TokenStandard::Erc721
        } else if self.registry.erc1155().is_subset(&selectors) {
            TokenStandard::Erc1155
        } else if self.registry.erc20().is_subset(&selectors) {
            TokenStandard::Erc20
        } else {
            TokenStandard::Unknown
        };

        self.verdict(chain_id, address, standard, DetectionMethod::BytecodeScan)
    }

    /// Variante que retorna apenas o padrão classificado
    pub async fn detect_standard(
        &self,
        chain_id: ChainId,
        address: Address,
        code: Option<Vec<u8>>,
    ) -> Result<TokenStandard> {
        Ok(self.detect(chain_id, address, code).await?.standard)
    }

    async fn probe(&self, address: Address, interface_id: &Selector) -> Result<bool> {
        self.with_deadline(supports_interface(&self.provider, address, interface_id))
            .await
    }

    fn verdict(
        &self,
        chain_id: ChainId,
        address: Address,
        standard: TokenStandard,
        method: DetectionMethod,
    ) -> Result<Verdict> {
        let verdict = Verdict::new(standard, method);
        tracing::debug!(
            chain_id,
            address = %format_address(&address),
            standard = %verdict.standard,
            method = %verdict.method,
            "contrato classificado"
        );
        Ok(verdict)
    }

    /// Aplica o deadline configurado a uma operação de rede. Expiração conta
    /// como cancelamento e propaga sem fallback, distinta de "padrão
    /// genuinamente desconhecido".
    async fn with_deadline<T>(&self, fut: impl Future<Output = Result<T>>) -> Result<T> {
        if self.config.call_timeout_ms == 0 {
            return fut.await;
        }

        let deadline = Duration::from_millis(self.config.call_timeout_ms);
        match tokio::time::timeout(deadline, fut).await {
            Ok(result) => result,
            Err(_) => Err(Error::Cancelled(format!(
                "deadline de {}ms excedido",
                self.config.call_timeout_ms
            ))),
        }
    }
}
