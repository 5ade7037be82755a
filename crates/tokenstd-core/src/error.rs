use thiserror::Error;

/// Erros comuns da biblioteca Tokenstd
#[derive(Error, Debug)]
pub enum Error {
    /// Erro de comunicação com o node Ethereum
    #[error("Erro de RPC: {0}")]
    RpcError(String),

    /// Erro de decodificação de dados
    #[error("Erro de decodificação: {0}")]
    DecodeError(String),

    /// Erro de codificação de dados
    #[error("Erro de codificação: {0}")]
    EncodeError(String),

    /// Recurso não encontrado
    #[error("Não encontrado: {0}")]
    NotFound(String),

    /// Operação cancelada pelo chamador ou por deadline
    #[error("Cancelado: {0}")]
    Cancelled(String),

    /// Erro genérico
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Indica se o erro representa cancelamento. Cancelamento nunca é
    /// absorvido pelas camadas de detecção.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled(_))
    }
}

/// Tipo de resultado usado em toda a biblioteca
pub type Result<T> = std::result::Result<T, Error>;
