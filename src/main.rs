pub mod modules;
pub use modules::auth;
pub use modules::catalog;
pub use modules::delivery;
pub use modules::feedback;
pub use modules::proof;
pub use modules::workflow;
pub mod api;
pub mod health;
pub mod landing;
pub mod shared;

use crate::auth::adapter::outgoing::admin_store_postgres::AdminStorePostgres;
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::session_store_redis::RedisSessionStore;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::auth::application::services::password::BasicPasswordPolicy;
use crate::auth::application::services::SessionService;
use crate::auth::application::use_cases::{
    login::{ILoginUseCase, LoginUseCase},
    logout::{ILogoutUseCase, LogoutUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
    seed_admin::{ISeedAdminUseCase, SeedAdminUseCase},
};

use crate::catalog::adapter::outgoing::food_query_postgres::FoodQueryPostgres;
use crate::catalog::application::use_cases::list_available_food::{
    IListAvailableFoodUseCase, ListAvailableFoodUseCase,
};

use crate::workflow::adapter::outgoing::assignment_postgres::AssignmentRepositoryPostgres;
use crate::workflow::adapter::outgoing::dashboard_query_postgres::DashboardQueryPostgres;
use crate::workflow::adapter::outgoing::request_repository_postgres::RequestRepositoryPostgres;
use crate::workflow::application::use_cases::{
    admin_overview::{AdminOverviewUseCase, IAdminOverviewUseCase},
    assign_volunteer::{AssignVolunteerUseCase, IAssignVolunteerUseCase},
    decide_request::{DecideRequestUseCase, IDecideRequestUseCase},
    submit_request::{ISubmitRequestUseCase, SubmitRequestUseCase},
};

use crate::delivery::adapter::outgoing::delivery_query_postgres::DeliveryQueryPostgres;
use crate::delivery::adapter::outgoing::delivery_repository_postgres::DeliveryRepositoryPostgres;
use crate::delivery::adapter::outgoing::volunteer_repository_postgres::VolunteerRepositoryPostgres;
use crate::delivery::application::use_cases::{
    add_volunteer::{AddVolunteerUseCase, IAddVolunteerUseCase},
    list_deliveries::{IListDeliveriesUseCase, ListDeliveriesUseCase},
    update_delivery::{IUpdateDeliveryUseCase, UpdateDeliveryUseCase},
};

use crate::feedback::adapter::outgoing::feedback_repository_postgres::FeedbackRepositoryPostgres;
use crate::feedback::application::use_cases::submit_feedback::{
    ISubmitFeedbackUseCase, SubmitFeedbackUseCase,
};

use crate::proof::adapter::outgoing::LocalDiskProofStore;
use crate::proof::application::ports::outgoing::proof_store::ProofStore;

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login_use_case: Arc<dyn ILoginUseCase + Send + Sync>,
    pub logout_use_case: Arc<dyn ILogoutUseCase + Send + Sync>,
    pub list_available_food_use_case: Arc<dyn IListAvailableFoodUseCase + Send + Sync>,
    pub submit_request_use_case: Arc<dyn ISubmitRequestUseCase + Send + Sync>,
    pub decide_request_use_case: Arc<dyn IDecideRequestUseCase + Send + Sync>,
    pub assign_volunteer_use_case: Arc<dyn IAssignVolunteerUseCase + Send + Sync>,
    pub admin_overview_use_case: Arc<dyn IAdminOverviewUseCase + Send + Sync>,
    pub add_volunteer_use_case: Arc<dyn IAddVolunteerUseCase + Send + Sync>,
    pub list_deliveries_use_case: Arc<dyn IListDeliveriesUseCase + Send + Sync>,
    pub update_delivery_use_case: Arc<dyn IUpdateDeliveryUseCase + Send + Sync>,
    pub submit_feedback_use_case: Arc<dyn ISubmitFeedbackUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let redis_url = env::var("REDIS_URL").expect("REDIS_URL is not set in .env file");
    let upload_dir = env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_string());
    let session_ttl_secs: u64 = env::var("SESSION_TTL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(24 * 60 * 60);
    let admin_seed_password =
        env::var("ADMIN_SEED_PASSWORD").unwrap_or_else(|_| "admin123".to_string());

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .expect("Failed to create Redis pool");

    let redis_arc = Arc::new(redis_pool);

    // Sessions, hashing, proof storage
    let session_store = RedisSessionStore::new(Arc::clone(&redis_arc));
    let sessions_arc = Arc::new(SessionService::new(
        Arc::new(session_store),
        session_ttl_secs,
    ));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::from_env());

    let proof_store: Arc<dyn ProofStore> = Arc::new(
        LocalDiskProofStore::new(&upload_dir).expect("Failed to create upload directory"),
    );

    // Repositories
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let admin_store = AdminStorePostgres::new(Arc::clone(&db_arc));
    let food_query = FoodQueryPostgres::new(Arc::clone(&db_arc));
    let request_repo = RequestRepositoryPostgres::new(Arc::clone(&db_arc));
    let assignment_repo = AssignmentRepositoryPostgres::new(Arc::clone(&db_arc));
    let dashboard_query = DashboardQueryPostgres::new(Arc::clone(&db_arc));
    let delivery_repo = DeliveryRepositoryPostgres::new(Arc::clone(&db_arc));
    let delivery_query = DeliveryQueryPostgres::new(Arc::clone(&db_arc));
    let volunteer_repo = VolunteerRepositoryPostgres::new(Arc::clone(&db_arc));
    let feedback_repo = FeedbackRepositoryPostgres::new(Arc::clone(&db_arc));

    // Seed the default superadmin once per empty database
    let seed_admin = SeedAdminUseCase::new(admin_store.clone(), Arc::clone(&password_hasher));
    if let Err(e) = seed_admin.execute(&admin_seed_password).await {
        panic!("Failed to seed default admin: {:?}", e);
    }

    // Use cases
    let register_user_use_case = RegisterUserUseCase::new(
        user_repo,
        Arc::new(BasicPasswordPolicy),
        Arc::clone(&password_hasher),
    );
    let login_use_case = LoginUseCase::new(
        user_query,
        admin_store,
        Arc::clone(&password_hasher),
        Arc::clone(&sessions_arc),
    );
    let logout_use_case = LogoutUseCase::new(Arc::clone(&sessions_arc));

    let list_available_food_use_case = ListAvailableFoodUseCase::new(food_query.clone());
    let submit_request_use_case = SubmitRequestUseCase::new(
        food_query,
        request_repo.clone(),
        Arc::clone(&proof_store),
    );
    let decide_request_use_case = DecideRequestUseCase::new(request_repo);
    let assign_volunteer_use_case = AssignVolunteerUseCase::new(assignment_repo);
    let admin_overview_use_case = AdminOverviewUseCase::new(dashboard_query);

    let add_volunteer_use_case = AddVolunteerUseCase::new(volunteer_repo);
    let list_deliveries_use_case = ListDeliveriesUseCase::new(delivery_query);
    let update_delivery_use_case = UpdateDeliveryUseCase::new(delivery_repo);

    let submit_feedback_use_case = SubmitFeedbackUseCase::new(feedback_repo);

    let state = AppState {
        register_user_use_case: Arc::new(register_user_use_case),
        login_use_case: Arc::new(login_use_case),
        logout_use_case: Arc::new(logout_use_case),
        list_available_food_use_case: Arc::new(list_available_food_use_case),
        submit_request_use_case: Arc::new(submit_request_use_case),
        decide_request_use_case: Arc::new(decide_request_use_case),
        assign_volunteer_use_case: Arc::new(assign_volunteer_use_case),
        admin_overview_use_case: Arc::new(admin_overview_use_case),
        add_volunteer_use_case: Arc::new(add_volunteer_use_case),
        list_deliveries_use_case: Arc::new(list_deliveries_use_case),
        update_delivery_use_case: Arc::new(update_delivery_use_case),
        submit_feedback_use_case: Arc::new(submit_feedback_use_case),
    };

    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&sessions_arc)))
            .app_data(web::Data::new(Arc::clone(&proof_store)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Landing & health
    cfg.service(crate::landing::index);
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::signup_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_handler);
    // Catalog
    cfg.service(crate::catalog::adapter::incoming::web::routes::user_dashboard_handler);
    // Workflow
    cfg.service(crate::workflow::adapter::incoming::web::routes::new_request_handler);
    cfg.service(crate::workflow::adapter::incoming::web::routes::approve_request_handler);
    cfg.service(crate::workflow::adapter::incoming::web::routes::assign_volunteer_handler);
    cfg.service(crate::workflow::adapter::incoming::web::routes::admin_dashboard_handler);
    // Delivery
    cfg.service(crate::delivery::adapter::incoming::web::routes::add_volunteer_handler);
    cfg.service(crate::delivery::adapter::incoming::web::routes::update_delivery_handler);
    cfg.service(crate::delivery::adapter::incoming::web::routes::volunteer_dashboard_handler);
    // Feedback
    cfg.service(crate::feedback::adapter::incoming::web::routes::feedback_handler);
    // Proof files
    cfg.service(crate::proof::adapter::incoming::web::routes::serve_proof_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
