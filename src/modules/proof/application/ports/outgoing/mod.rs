pub mod proof_store;

pub use proof_store::{ProofStore, ProofStoreError};
