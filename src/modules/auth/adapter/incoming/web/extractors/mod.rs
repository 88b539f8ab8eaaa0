pub mod session;

pub use session::{AdminSession, UserSession};
