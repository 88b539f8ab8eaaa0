use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProofStoreError {
    #[error("No such file")]
    NotFound,

    #[error("Invalid file name")]
    InvalidName,

    #[error("Storage error: {0}")]
    Io(String),
}

/// Storage for uploaded proof-of-need documents. Requests keep only the
/// stored name returned by `save`.
#[async_trait]
pub trait ProofStore: Send + Sync {
    /// Persist the bytes and return the name they were stored under.
    async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<String, ProofStoreError>;

    async fn load(&self, stored_name: &str) -> Result<Vec<u8>, ProofStoreError>;
}
