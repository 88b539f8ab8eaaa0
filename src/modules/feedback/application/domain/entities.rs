use chrono::NaiveDate;
use uuid::Uuid;

/// A user's rating of a donor. Append-only; nothing edits or deletes these.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub id: Uuid,
    pub user_id: Uuid,
    pub donor_id: Uuid,
    pub rating: i16,
    pub comments: String,
    pub submitted_on: NaiveDate,
}
