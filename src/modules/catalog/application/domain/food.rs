use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Lifecycle of a donated item. `Assigned` is set only inside the
/// volunteer-assignment transaction and is never unset by any flow here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodStatus {
    Available,
    Assigned,
}

impl FoodStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodStatus::Available => "Available",
            FoodStatus::Assigned => "Assigned",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Available" => Some(FoodStatus::Available),
            "Assigned" => Some(FoodStatus::Assigned),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FoodItem {
    pub id: Uuid,
    pub donor_id: Uuid,
    pub food_name: String,
    pub quantity: String,
    pub status: FoodStatus,
    pub posted_at: DateTime<Utc>,
}
