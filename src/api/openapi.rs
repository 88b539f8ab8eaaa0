use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

// Auth
use crate::modules::auth::adapter::incoming::web::routes::{LoginForm, SignupForm};

// Catalog
use crate::modules::catalog::adapter::incoming::web::routes::{
    FoodItemView, UserDashboardResponse,
};

// Workflow
use crate::modules::workflow::adapter::incoming::web::routes::{
    AdminDashboardResponse, ApproveForm, AssignVolunteerForm, DonorView, RequestOverviewView,
    UserView, VolunteerView,
};

// Delivery
use crate::modules::delivery::adapter::incoming::web::routes::{
    AddVolunteerForm, DeliveryBoardView, UpdateDeliveryForm, VolunteerDashboardResponse,
};

// Feedback
use crate::modules::feedback::adapter::incoming::web::routes::FeedbackForm;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Foodbridge API",
        version = "1.0.0",
        description = "Food donation logistics: donors, requests, approvals, deliveries, feedback"
    ),
    paths(
        // Auth endpoints
        crate::modules::auth::adapter::incoming::web::routes::signup_handler,
        crate::modules::auth::adapter::incoming::web::routes::login_handler,
        crate::modules::auth::adapter::incoming::web::routes::logout_handler,

        // Catalog endpoints
        crate::modules::catalog::adapter::incoming::web::routes::user_dashboard_handler,

        // Workflow endpoints
        crate::modules::workflow::adapter::incoming::web::routes::new_request_handler,
        crate::modules::workflow::adapter::incoming::web::routes::approve_request_handler,
        crate::modules::workflow::adapter::incoming::web::routes::assign_volunteer_handler,
        crate::modules::workflow::adapter::incoming::web::routes::admin_dashboard_handler,

        // Delivery endpoints
        crate::modules::delivery::adapter::incoming::web::routes::add_volunteer_handler,
        crate::modules::delivery::adapter::incoming::web::routes::update_delivery_handler,
        crate::modules::delivery::adapter::incoming::web::routes::volunteer_dashboard_handler,

        // Feedback endpoints
        crate::modules::feedback::adapter::incoming::web::routes::feedback_handler,

        // Proof files
        crate::modules::proof::adapter::incoming::web::routes::serve_proof_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<UserDashboardResponse>,
            SuccessResponse<AdminDashboardResponse>,
            SuccessResponse<VolunteerDashboardResponse>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            SignupForm,
            LoginForm,

            // Catalog DTOs
            FoodItemView,
            UserDashboardResponse,

            // Workflow DTOs
            ApproveForm,
            AssignVolunteerForm,
            RequestOverviewView,
            VolunteerView,
            UserView,
            DonorView,
            AdminDashboardResponse,

            // Delivery DTOs
            AddVolunteerForm,
            UpdateDeliveryForm,
            DeliveryBoardView,
            VolunteerDashboardResponse,

            // Feedback DTOs
            FeedbackForm,
        )
    ),
    tags(
        (name = "auth", description = "Signup, login, logout"),
        (name = "catalog", description = "Available food"),
        (name = "workflow", description = "Request approval and assignment"),
        (name = "delivery", description = "Volunteers and deliveries"),
        (name = "feedback", description = "Donor feedback"),
        (name = "proof", description = "Uploaded proof files"),
    )
)]
pub struct ApiDoc;
