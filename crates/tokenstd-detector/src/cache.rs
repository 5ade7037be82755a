//! Cache de veredictos com supressão de detecções duplicadas.
//!
//! O bytecode e as interfaces declaradas de um contrato são imutáveis após o
//! deploy, então o veredicto de (chain id, endereço) nunca expira; entradas
//! só saem por evicção LRU quando a capacidade é atingida. Chamadores
//! concorrentes da mesma chave ainda sem entrada colapsam em uma única
//! detecção (single-flight) e recebem o mesmo resultado. Falhas nunca são
//! armazenadas como veredicto: a próxima chamada tenta de novo.

use std::num::NonZeroUsize;
use std::sync::Arc;

use dashmap::DashMap;
use ethereum_types::Address;
use parking_lot::RwLock;
use tokio::sync::OnceCell;

use tokenstd_core::{
    error::Result,
    traits::ContractReader,
    types::{ChainId, TokenStandard, Verdict},
};

use crate::detector::TokenStandardDetector;

/// Chave de cache: rede e endereço do contrato
pub type CacheKey = (ChainId, Address);

/// Estatísticas de cache
#[derive(Debug, Default, Clone)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub inserts: usize,
    pub evictions: usize,
}

/// Camada de memoização sobre o detector
pub struct DetectionCache<P> {
    detector: TokenStandardDetector<P>,
    verdicts: RwLock<lru::LruCache<CacheKey, Verdict>>,
    in_flight: DashMap<CacheKey, Arc<OnceCell<Verdict>>>,
    stats: RwLock<CacheStats>,
}

impl<P> DetectionCache<P> {
    /// Cria o cache com a capacidade da configuração do detector
    pub fn new(detector: TokenStandardDetector<P>) -> Self {
        let capacity = detector.config().cache_capacity;
        Self::with_capacity(detector, capacity)
    }

    /// Cria o cache com capacidade explícita
    pub fn with_capacity(detector: TokenStandardDetector<P>, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or_else(|| NonZeroUsize::new(1).unwrap());

        Self {
            detector,
            verdicts: RwLock::new(lru::LruCache::new(capacity)),
            in_flight: DashMap::new(),
            stats: RwLock::new(CacheStats::default()),
        }
    }

    /// Obtém estatísticas do cache
    pub fn stats(&self) -> CacheStats {
        self.stats.read().clone()
    }

    fn lookup(&self, key: &CacheKey) -> Option<Verdict> {
        let mut verdicts = self.verdicts.write();

        if let Some(verdict) = verdicts.get(key) {
            self.stats.write().hits += 1;
            Some(*verdict)
        } else {
            self.stats.write().misses += 1;
            None
        }
    }

    // Consulta sem atualizar ordem LRU nem estatísticas; usada para fechar a
    // corrida entre a gravação do veredicto e a remoção da entrada in-flight.
    fn peek(&self, key: &CacheKey) -> Option<Verdict> {
        self.verdicts.read().peek(key).copied()
    }

    fn store(&self, key: CacheKey, verdict: Verdict) {
        let mut verdicts = self.verdicts.write();
        let mut stats = self.stats.write();

        if let Some((evicted, _)) = verdicts.push(key, verdict) {
            // push devolve a própria chave quando apenas substitui o valor
            if evicted != key {
                stats.evictions += 1;
            }
        }

        stats.inserts += 1;
    }
}

impl<P: ContractReader> DetectionCache<P> {
    /// Classifica com memoização por (chain id, endereço).
    ///
    /// Na ausência de entrada, chamadores concorrentes da mesma chave
    /// aguardam a detecção em andamento em vez de emitir consultas RPC
    /// redundantes.
    pub async fn detect(
        &self,
        chain_id: ChainId,
        address: Address,
        code: Option<Vec<u8>>,
    ) -> Result<Verdict> {
        let key = (chain_id, address);

        if let Some(verdict) = self.lookup(&key) {
            return Ok(verdict);
        }

        let cell = self
            .in_flight
            .entry(key)
            .or_insert_with(|| Arc::new(OnceCell::new()))
            .clone();

        let result = cell
            .get_or_try_init(|| async {
                // uma célula recém-criada pode suceder uma detecção que
                // acabou de gravar o veredicto; nesse caso não há trabalho
                if let Some(verdict) = self.peek(&key) {
                    return Ok(verdict);
                }

                self.detector.detect(chain_id, address, code).await
            })
            .await
            .map(|verdict| *verdict);

        match result {
            Ok(verdict) => {
                self.store(key, verdict);
                self.in_flight.remove(&key);
                Ok(verdict)
            }
            Err(err) => {
                self.in_flight.remove(&key);
                Err(err)
            }
        }
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
}
