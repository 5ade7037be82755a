use serde::{Deserialize, Serialize};

/// Configuração do detector de padrões de token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Timeout para chamadas de rede em milissegundos (0 desabilita)
    pub call_timeout_ms: u64,
    /// Capacidade do cache de veredictos (entradas)
    pub cache_capacity: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            call_timeout_ms: 5_000, // 5 segundos
            cache_capacity: 8_192,
        }
    }
}
