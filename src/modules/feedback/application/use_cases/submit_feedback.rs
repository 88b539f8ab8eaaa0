use crate::modules::feedback::application::domain::entities::Feedback;
use crate::modules::feedback::application::ports::outgoing::feedback_repository::{
    FeedbackRepository, FeedbackRepositoryError, NewFeedback,
};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum SubmitFeedbackError {
    /// Rating is outside 1..=5.
    InvalidRating,
    DonorNotFound,
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct SubmitFeedbackInput {
    pub user_id: Uuid,
    pub donor_id: Uuid,
    pub rating: i16,
    pub comments: String,
}

#[async_trait]
pub trait ISubmitFeedbackUseCase: Send + Sync {
    async fn execute(&self, input: SubmitFeedbackInput) -> Result<Feedback, SubmitFeedbackError>;
}

/// Append-only. Whether the user actually received a delivery from this
/// donor is deliberately not checked.
pub struct SubmitFeedbackUseCase<R>
where
    R: FeedbackRepository + Send + Sync,
{
    feedback: R,
}

impl<R> SubmitFeedbackUseCase<R>
where
    R: FeedbackRepository + Send + Sync,
{
    pub fn new(feedback: R) -> Self {
        Self { feedback }
    }
}

#[async_trait]
impl<R> ISubmitFeedbackUseCase for SubmitFeedbackUseCase<R>
where
    R: FeedbackRepository + Send + Sync,
{
    async fn execute(&self, input: SubmitFeedbackInput) -> Result<Feedback, SubmitFeedbackError> {
        if !(1..=5).contains(&input.rating) {
            return Err(SubmitFeedbackError::InvalidRating);
        }

        match self
            .feedback
            .insert(NewFeedback {
                user_id: input.user_id,
                donor_id: input.donor_id,
                rating: input.rating,
                comments: input.comments,
                submitted_on: chrono::Utc::now().date_naive(),
            })
            .await
        {
            Ok(feedback) => Ok(feedback),
            Err(FeedbackRepositoryError::DonorNotFound) => Err(SubmitFeedbackError::DonorNotFound),
            Err(FeedbackRepositoryError::DatabaseError(e)) => {
                Err(SubmitFeedbackError::RepositoryError(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockFeedbackRepository {
        unknown_donor: bool,
        inserted: Mutex<Vec<NewFeedback>>,
    }

    #[async_trait]
    impl FeedbackRepository for MockFeedbackRepository {
        async fn insert(&self, new: NewFeedback) -> Result<Feedback, FeedbackRepositoryError> {
            if self.unknown_donor {
                return Err(FeedbackRepositoryError::DonorNotFound);
            }
            let feedback = Feedback {
                id: Uuid::new_v4(),
                user_id: new.user_id,
                donor_id: new.donor_id,
                rating: new.rating,
                comments: new.comments.clone(),
                submitted_on: new.submitted_on,
            };
            self.inserted.lock().unwrap().push(new);
            Ok(feedback)
        }
    }

    fn input(rating: i16) -> SubmitFeedbackInput {
        SubmitFeedbackInput {
            user_id: Uuid::new_v4(),
            donor_id: Uuid::new_v4(),
            rating,
            comments: "Great rice, thank you".to_string(),
        }
    }

    #[tokio::test]
    async fn test_valid_feedback_is_appended() {
        // Arrange
        let use_case = SubmitFeedbackUseCase::new(MockFeedbackRepository::default());

        // Act
        let feedback = use_case.execute(input(5)).await.unwrap();

        // Assert
        assert_eq!(feedback.rating, 5);
        assert_eq!(use_case.feedback.inserted.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_out_of_range_ratings_are_rejected() {
        // Arrange
        let use_case = SubmitFeedbackUseCase::new(MockFeedbackRepository::default());

        // Act & Assert
        for rating in [0, 6, -1] {
            let result = use_case.execute(input(rating)).await;
            assert!(matches!(result, Err(SubmitFeedbackError::InvalidRating)));
        }
        assert!(use_case.feedback.inserted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_donor_surfaces() {
        // Arrange
        let use_case = SubmitFeedbackUseCase::new(MockFeedbackRepository {
            unknown_donor: true,
            ..Default::default()
        });

        // Act
        let result = use_case.execute(input(3)).await;

        // Assert
        assert!(matches!(result, Err(SubmitFeedbackError::DonorNotFound)));
    }
}
