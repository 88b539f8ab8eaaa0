pub mod login;
pub mod logout;
pub mod register_user;
pub mod seed_admin;
