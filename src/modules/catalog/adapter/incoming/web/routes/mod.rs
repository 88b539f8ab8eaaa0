pub mod user_dashboard;

pub use user_dashboard::{
    __path_user_dashboard_handler, user_dashboard_handler, FoodItemView, UserDashboardResponse,
};
