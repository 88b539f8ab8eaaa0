pub mod admins;
pub mod users;
