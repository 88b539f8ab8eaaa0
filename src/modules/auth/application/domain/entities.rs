use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered requesting user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub user_type: String,
    pub name: String,
    pub contact_number: String,
    pub email: String,
    pub address: String,
    pub proof_type: Option<String>,
    pub proof_number: Option<String>,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// The authenticated caller resolved from an opaque session token.
///
/// Handlers never read ambient session state; they receive a `Principal`
/// (via the session extractors) or nothing at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Principal {
    User { user_id: Uuid, user_type: String },
    Admin { admin_id: Uuid },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_principal_round_trips_through_json() {
        let principal = Principal::User {
            user_id: Uuid::new_v4(),
            user_type: "Individual".to_string(),
        };

        let json = serde_json::to_string(&principal).unwrap();
        let back: Principal = serde_json::from_str(&json).unwrap();

        assert_eq!(principal, back);
    }

    #[test]
    fn test_admin_principal_round_trips_through_json() {
        let principal = Principal::Admin {
            admin_id: Uuid::new_v4(),
        };

        let json = serde_json::to_string(&principal).unwrap();
        let back: Principal = serde_json::from_str(&json).unwrap();

        assert_eq!(principal, back);
    }
}
