pub mod entities;

pub use entities::{Delivery, DeliveryStatus, Volunteer};
