use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::feedback::application::domain::entities::Feedback;
use crate::modules::feedback::application::ports::outgoing::feedback_repository::{
    FeedbackRepository, FeedbackRepositoryError, NewFeedback,
};

use super::sea_orm_entity::feedback::ActiveModel as FeedbackActiveModel;

#[derive(Clone, Debug)]
pub struct FeedbackRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FeedbackRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// A tripped donor FK means the caller pointed at a donor that is not
    /// there; everything else is a plain database failure.
    fn map_insert_error(e: sea_orm::DbErr) -> FeedbackRepositoryError {
        let err_str = e.to_string().to_lowercase();
        let is_fk_violation = err_str.contains("23503") || err_str.contains("foreign key");

        if is_fk_violation && err_str.contains("donor") {
            return FeedbackRepositoryError::DonorNotFound;
        }
        FeedbackRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl FeedbackRepository for FeedbackRepositoryPostgres {
    async fn insert(&self, new: NewFeedback) -> Result<Feedback, FeedbackRepositoryError> {
        let active = FeedbackActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(new.user_id),
            donor_id: Set(new.donor_id),
            rating: Set(new.rating),
            comments: Set(new.comments),
            submitted_on: Set(new.submitted_on),
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(Self::map_insert_error)?;

        Ok(Feedback {
            id: inserted.id,
            user_id: inserted.user_id,
            donor_id: inserted.donor_id,
            rating: inserted.rating,
            comments: inserted.comments,
            submitted_on: inserted.submitted_on,
        })
    }
}
