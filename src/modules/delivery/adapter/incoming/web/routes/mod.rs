pub mod add_volunteer;
pub mod update_delivery;
pub mod volunteer_dashboard;

pub use add_volunteer::{__path_add_volunteer_handler, add_volunteer_handler, AddVolunteerForm};
pub use update_delivery::{
    __path_update_delivery_handler, update_delivery_handler, UpdateDeliveryForm,
};
pub use volunteer_dashboard::{
    __path_volunteer_dashboard_handler, volunteer_dashboard_handler, DeliveryBoardView,
    VolunteerDashboardResponse,
};
