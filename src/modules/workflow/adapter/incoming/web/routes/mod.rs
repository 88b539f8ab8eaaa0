pub mod admin_dashboard;
pub mod approve_request;
pub mod assign_volunteer;
pub mod new_request;

pub use admin_dashboard::{
    __path_admin_dashboard_handler, admin_dashboard_handler, AdminDashboardResponse, DonorView,
    RequestOverviewView, UserView, VolunteerView,
};
pub use approve_request::{__path_approve_request_handler, approve_request_handler, ApproveForm};
pub use assign_volunteer::{
    __path_assign_volunteer_handler, assign_volunteer_handler, AssignVolunteerForm,
};
pub use new_request::{__path_new_request_handler, new_request_handler};
