pub mod add_volunteer;
pub mod list_deliveries;
pub mod update_delivery;
