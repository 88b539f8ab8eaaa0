//! Hand-written stand-ins for every port and use case, for handler tests.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{Principal, User};
use crate::modules::auth::application::ports::outgoing::session_store::{
    SessionStore, SessionStoreError,
};
use crate::modules::auth::application::use_cases::login::{
    ILoginUseCase, LoginError, LoginOutcome, LoginRole,
};
use crate::modules::auth::application::use_cases::logout::{ILogoutUseCase, LogoutError};
use crate::modules::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterUserError, RegisterUserInput,
};
use crate::modules::catalog::application::ports::outgoing::food_query::AvailableFoodRow;
use crate::modules::catalog::application::use_cases::list_available_food::{
    IListAvailableFoodUseCase, ListAvailableFoodError,
};
use crate::modules::delivery::application::domain::entities::{Delivery, DeliveryStatus, Volunteer};
use crate::modules::delivery::application::ports::outgoing::delivery_query::DeliveryBoardRow;
use crate::modules::delivery::application::ports::outgoing::delivery_repository::UpdateDeliveryError;
use crate::modules::delivery::application::ports::outgoing::volunteer_repository::NewVolunteer;
use crate::modules::delivery::application::use_cases::add_volunteer::{
    AddVolunteerError, IAddVolunteerUseCase,
};
use crate::modules::delivery::application::use_cases::list_deliveries::{
    IListDeliveriesUseCase, ListDeliveriesError,
};
use crate::modules::delivery::application::use_cases::update_delivery::IUpdateDeliveryUseCase;
use crate::modules::feedback::application::domain::entities::Feedback;
use crate::modules::feedback::application::use_cases::submit_feedback::{
    ISubmitFeedbackUseCase, SubmitFeedbackError, SubmitFeedbackInput,
};
use crate::modules::proof::application::ports::outgoing::proof_store::{
    ProofStore, ProofStoreError,
};
use crate::modules::workflow::application::domain::request::{
    Request, RequestDecision, RequestStatus,
};
use crate::modules::workflow::application::ports::outgoing::assignment::{
    Assignment, AssignmentError,
};
use crate::modules::workflow::application::use_cases::admin_overview::{
    AdminOverview, AdminOverviewError, IAdminOverviewUseCase,
};
use crate::modules::workflow::application::use_cases::assign_volunteer::IAssignVolunteerUseCase;
use crate::modules::workflow::application::use_cases::decide_request::{
    DecideRequestError, IDecideRequestUseCase,
};
use crate::modules::workflow::application::use_cases::submit_request::{
    ISubmitRequestUseCase, SubmitRequestError, SubmitRequestInput,
};

// ============================================================================
// Session store
// ============================================================================

#[derive(Default)]
pub struct InMemorySessionStore {
    entries: Mutex<HashMap<String, Principal>>,
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn put(
        &self,
        token_hash: &str,
        principal: &Principal,
        _ttl_secs: u64,
    ) -> Result<(), SessionStoreError> {
        self.entries
            .lock()
            .unwrap()
            .insert(token_hash.to_string(), principal.clone());
        Ok(())
    }

    async fn get(&self, token_hash: &str) -> Result<Option<Principal>, SessionStoreError> {
        Ok(self.entries.lock().unwrap().get(token_hash).cloned())
    }

    async fn delete(&self, token_hash: &str) -> Result<(), SessionStoreError> {
        self.entries.lock().unwrap().remove(token_hash);
        Ok(())
    }
}

// ============================================================================
// Proof store
// ============================================================================

#[derive(Default)]
pub struct StubProofStore {
    files: Mutex<HashMap<String, Vec<u8>>>,
}

impl StubProofStore {
    pub fn with_file(name: &str, bytes: &[u8]) -> Self {
        let store = Self::default();
        store
            .files
            .lock()
            .unwrap()
            .insert(name.to_string(), bytes.to_vec());
        store
    }
}

#[async_trait]
impl ProofStore for StubProofStore {
    async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<String, ProofStoreError> {
        let stored = format!("stored_{original_name}");
        self.files
            .lock()
            .unwrap()
            .insert(stored.clone(), bytes.to_vec());
        Ok(stored)
    }

    async fn load(&self, stored_name: &str) -> Result<Vec<u8>, ProofStoreError> {
        self.files
            .lock()
            .unwrap()
            .get(stored_name)
            .cloned()
            .ok_or(ProofStoreError::NotFound)
    }
}

// ============================================================================
// Use case stubs: happy-path defaults, overridden per test where it matters
// ============================================================================

pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(&self, input: RegisterUserInput) -> Result<User, RegisterUserError> {
        Ok(User {
            id: Uuid::new_v4(),
            user_type: input.user_type,
            name: input.name,
            contact_number: input.contact_number,
            email: input.email,
            address: input.address,
            proof_type: input.proof_type,
            proof_number: input.proof_number,
            username: input.username,
            password_hash: "stub-hash".to_string(),
            created_at: Utc::now(),
        })
    }
}

pub struct StubLoginUseCase;

#[async_trait]
impl ILoginUseCase for StubLoginUseCase {
    async fn execute(
        &self,
        _role: LoginRole,
        _username: &str,
        _password: &str,
    ) -> Result<LoginOutcome, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

pub struct StubLogoutUseCase;

#[async_trait]
impl ILogoutUseCase for StubLogoutUseCase {
    async fn execute(&self, _token: &str) -> Result<(), LogoutError> {
        Ok(())
    }
}

pub struct StubListAvailableFoodUseCase;

#[async_trait]
impl IListAvailableFoodUseCase for StubListAvailableFoodUseCase {
    async fn execute(&self) -> Result<Vec<AvailableFoodRow>, ListAvailableFoodError> {
        Ok(vec![])
    }
}

pub struct StubSubmitRequestUseCase;

#[async_trait]
impl ISubmitRequestUseCase for StubSubmitRequestUseCase {
    async fn execute(&self, input: SubmitRequestInput) -> Result<Request, SubmitRequestError> {
        Ok(Request {
            id: Uuid::new_v4(),
            user_id: input.user_id,
            food_id: input.food_id,
            proof_file: None,
            request_date: Utc::now(),
            status: RequestStatus::Pending,
            verified: false,
        })
    }
}

pub struct StubDecideRequestUseCase;

#[async_trait]
impl IDecideRequestUseCase for StubDecideRequestUseCase {
    async fn execute(
        &self,
        req_id: Uuid,
        decision: RequestDecision,
    ) -> Result<Request, DecideRequestError> {
        Ok(Request {
            id: req_id,
            user_id: Uuid::new_v4(),
            food_id: Uuid::new_v4(),
            proof_file: None,
            request_date: Utc::now(),
            status: decision.target_status(),
            verified: decision.verified_flag(),
        })
    }
}

pub struct StubAssignVolunteerUseCase;

#[async_trait]
impl IAssignVolunteerUseCase for StubAssignVolunteerUseCase {
    async fn execute(
        &self,
        req_id: Uuid,
        volunteer_id: Uuid,
    ) -> Result<Assignment, AssignmentError> {
        Ok(Assignment {
            delivery_id: Uuid::new_v4(),
            request_id: req_id,
            volunteer_id,
            pickup_time: Utc::now(),
        })
    }
}

pub struct StubAdminOverviewUseCase;

#[async_trait]
impl IAdminOverviewUseCase for StubAdminOverviewUseCase {
    async fn execute(&self) -> Result<AdminOverview, AdminOverviewError> {
        Ok(AdminOverview {
            requests: vec![],
            volunteers: vec![],
            users: vec![],
            donors: vec![],
        })
    }
}

pub struct StubAddVolunteerUseCase;

#[async_trait]
impl IAddVolunteerUseCase for StubAddVolunteerUseCase {
    async fn execute(&self, new: NewVolunteer) -> Result<Volunteer, AddVolunteerError> {
        Ok(Volunteer {
            id: Uuid::new_v4(),
            name: new.name,
            contact_number: new.contact_number,
            ngo_id: new.ngo_id,
        })
    }
}

pub struct StubListDeliveriesUseCase;

#[async_trait]
impl IListDeliveriesUseCase for StubListDeliveriesUseCase {
    async fn execute(&self) -> Result<Vec<DeliveryBoardRow>, ListDeliveriesError> {
        Ok(vec![])
    }
}

pub struct StubUpdateDeliveryUseCase;

#[async_trait]
impl IUpdateDeliveryUseCase for StubUpdateDeliveryUseCase {
    async fn execute(
        &self,
        delivery_id: Uuid,
        status: DeliveryStatus,
    ) -> Result<Delivery, UpdateDeliveryError> {
        Ok(Delivery {
            id: delivery_id,
            request_id: Uuid::new_v4(),
            volunteer_id: Uuid::new_v4(),
            status,
            pickup_time: Utc::now(),
            delivery_time: status.is_terminal().then(Utc::now),
        })
    }
}

pub struct StubSubmitFeedbackUseCase;

#[async_trait]
impl ISubmitFeedbackUseCase for StubSubmitFeedbackUseCase {
    async fn execute(&self, input: SubmitFeedbackInput) -> Result<Feedback, SubmitFeedbackError> {
        Ok(Feedback {
            id: Uuid::new_v4(),
            user_id: input.user_id,
            donor_id: input.donor_id,
            rating: input.rating,
            comments: input.comments,
            submitted_on: Utc::now().date_naive(),
        })
    }
}
