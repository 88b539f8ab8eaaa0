pub mod feedback_repository;

pub use feedback_repository::{FeedbackRepository, FeedbackRepositoryError, NewFeedback};
