pub mod entities;

pub use entities::{Principal, User};
