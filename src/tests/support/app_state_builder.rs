use crate::modules::auth::application::use_cases::login::ILoginUseCase;
use crate::modules::auth::application::use_cases::logout::ILogoutUseCase;
use crate::modules::auth::application::use_cases::register_user::IRegisterUserUseCase;
use crate::modules::catalog::application::use_cases::list_available_food::IListAvailableFoodUseCase;
use crate::modules::delivery::application::use_cases::add_volunteer::IAddVolunteerUseCase;
use crate::modules::delivery::application::use_cases::list_deliveries::IListDeliveriesUseCase;
use crate::modules::delivery::application::use_cases::update_delivery::IUpdateDeliveryUseCase;
use crate::modules::feedback::application::use_cases::submit_feedback::ISubmitFeedbackUseCase;
use crate::modules::workflow::application::use_cases::admin_overview::IAdminOverviewUseCase;
use crate::modules::workflow::application::use_cases::assign_volunteer::IAssignVolunteerUseCase;
use crate::modules::workflow::application::use_cases::decide_request::IDecideRequestUseCase;
use crate::modules::workflow::application::use_cases::submit_request::ISubmitRequestUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;
use std::sync::Arc;

/// Builds an `AppState` where every use case is a harmless stub, letting a
/// test swap in exactly the one it exercises.
pub struct TestAppStateBuilder {
    register_user: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    login: Arc<dyn ILoginUseCase + Send + Sync>,
    logout: Arc<dyn ILogoutUseCase + Send + Sync>,
    list_available_food: Arc<dyn IListAvailableFoodUseCase + Send + Sync>,
    submit_request: Arc<dyn ISubmitRequestUseCase + Send + Sync>,
    decide_request: Arc<dyn IDecideRequestUseCase + Send + Sync>,
    assign_volunteer: Arc<dyn IAssignVolunteerUseCase + Send + Sync>,
    admin_overview: Arc<dyn IAdminOverviewUseCase + Send + Sync>,
    add_volunteer: Arc<dyn IAddVolunteerUseCase + Send + Sync>,
    list_deliveries: Arc<dyn IListDeliveriesUseCase + Send + Sync>,
    update_delivery: Arc<dyn IUpdateDeliveryUseCase + Send + Sync>,
    submit_feedback: Arc<dyn ISubmitFeedbackUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Arc::new(StubRegisterUserUseCase),
            login: Arc::new(StubLoginUseCase),
            logout: Arc::new(StubLogoutUseCase),
            list_available_food: Arc::new(StubListAvailableFoodUseCase),
            submit_request: Arc::new(StubSubmitRequestUseCase),
            decide_request: Arc::new(StubDecideRequestUseCase),
            assign_volunteer: Arc::new(StubAssignVolunteerUseCase),
            admin_overview: Arc::new(StubAdminOverviewUseCase),
            add_volunteer: Arc::new(StubAddVolunteerUseCase),
            list_deliveries: Arc::new(StubListDeliveriesUseCase),
            update_delivery: Arc::new(StubUpdateDeliveryUseCase),
            submit_feedback: Arc::new(StubSubmitFeedbackUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(mut self, uc: Arc<dyn IRegisterUserUseCase + Send + Sync>) -> Self {
        self.register_user = uc;
        self
    }

    pub fn with_login(mut self, uc: Arc<dyn ILoginUseCase + Send + Sync>) -> Self {
        self.login = uc;
        self
    }

    pub fn with_submit_request(mut self, uc: Arc<dyn ISubmitRequestUseCase + Send + Sync>) -> Self {
        self.submit_request = uc;
        self
    }

    pub fn with_decide_request(mut self, uc: Arc<dyn IDecideRequestUseCase + Send + Sync>) -> Self {
        self.decide_request = uc;
        self
    }

    pub fn with_assign_volunteer(
        mut self,
        uc: Arc<dyn IAssignVolunteerUseCase + Send + Sync>,
    ) -> Self {
        self.assign_volunteer = uc;
        self
    }

    pub fn with_update_delivery(
        mut self,
        uc: Arc<dyn IUpdateDeliveryUseCase + Send + Sync>,
    ) -> Self {
        self.update_delivery = uc;
        self
    }

    pub fn build(self) -> AppState {
        AppState {
            register_user_use_case: self.register_user,
            login_use_case: self.login,
            logout_use_case: self.logout,
            list_available_food_use_case: self.list_available_food,
            submit_request_use_case: self.submit_request,
            decide_request_use_case: self.decide_request,
            assign_volunteer_use_case: self.assign_volunteer,
            admin_overview_use_case: self.admin_overview,
            add_volunteer_use_case: self.add_volunteer,
            list_deliveries_use_case: self.list_deliveries,
            update_delivery_use_case: self.update_delivery,
            submit_feedback_use_case: self.submit_feedback,
        }
    }
}
