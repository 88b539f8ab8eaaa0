use crate::modules::proof::application::ports::outgoing::proof_store::{
    ProofStore, ProofStoreError,
};
use async_trait::async_trait;
use std::path::PathBuf;

/// Local-disk proof storage under a single upload directory.
///
/// Stored names are the sanitized original name behind a UTC second
/// timestamp, e.g. `20260801123000_ration_card.pdf`. Two uploads of the
/// same file within one second can still collide; the window is accepted.
pub struct LocalDiskProofStore {
    root: PathBuf,
}

impl LocalDiskProofStore {
    pub fn new(root: impl Into<PathBuf>) -> std::io::Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }
}

/// Keeps only `[A-Za-z0-9._-]`, never lets a name start with a dot, and
/// falls back to "file" for names that sanitize away entirely.
fn sanitize_filename(original: &str) -> String {
    let cleaned: String = original
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();

    // ".." must not survive, or load() would refuse the stored name.
    let mut cleaned = cleaned;
    while cleaned.contains("..") {
        cleaned = cleaned.replace("..", ".");
    }

    let cleaned = cleaned.trim_start_matches('.').to_string();
    if cleaned.is_empty() {
        "file".to_string()
    } else {
        cleaned
    }
}

fn is_plain_name(name: &str) -> bool {
    !name.is_empty() && !name.contains('/') && !name.contains('\\') && !name.contains("..")
}

#[async_trait]
impl ProofStore for LocalDiskProofStore {
    async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<String, ProofStoreError> {
        let stored_name = format!(
            "{}_{}",
            chrono::Utc::now().format("%Y%m%d%H%M%S"),
            sanitize_filename(original_name)
        );

        tokio::fs::write(self.root.join(&stored_name), bytes)
            .await
            .map_err(|e| ProofStoreError::Io(e.to_string()))?;

        Ok(stored_name)
    }

    async fn load(&self, stored_name: &str) -> Result<Vec<u8>, ProofStoreError> {
        // Stored names are flat; anything path-like never came from save().
        if !is_plain_name(stored_name) {
            return Err(ProofStoreError::InvalidName);
        }

        match tokio::fs::read(self.root.join(stored_name)).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(ProofStoreError::NotFound),
            Err(e) => Err(ProofStoreError::Io(e.to_string())),
        }
    }
}
