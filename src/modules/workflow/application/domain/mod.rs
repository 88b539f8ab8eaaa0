pub mod request;

pub use request::{Request, RequestDecision, RequestStatus};
