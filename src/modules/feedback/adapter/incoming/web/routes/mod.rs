pub mod feedback;

pub use feedback::{__path_feedback_handler, feedback_handler, FeedbackForm};
