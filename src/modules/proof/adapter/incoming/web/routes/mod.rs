pub mod serve_proof;

pub use serve_proof::{__path_serve_proof_handler, serve_proof_handler};
