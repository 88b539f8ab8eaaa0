pub mod admin_overview;
pub mod assign_volunteer;
pub mod decide_request;
pub mod submit_request;
