pub mod deliveries;
pub mod volunteers;
