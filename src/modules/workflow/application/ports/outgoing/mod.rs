pub mod assignment;
pub mod dashboard_query;
pub mod request_repository;

pub use assignment::{Assignment, AssignmentError, AssignmentRepository};
pub use dashboard_query::{AdminDashboardQuery, DashboardQueryError};
pub use request_repository::{DecideError, NewRequest, RequestRepository, RequestRepositoryError};
