use chrono::{DateTime, Utc};
use std::str::FromStr;
use uuid::Uuid;

/// Closed set of delivery states. The volunteer form posts one of these by
/// name; anything else is rejected at the boundary, never written through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    Picked,
    InTransit,
    Delivered,
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Picked => "Picked",
            DeliveryStatus::InTransit => "InTransit",
            DeliveryStatus::Delivered => "Delivered",
        }
    }

    /// A delivered delivery is final; everything earlier may still move.
    pub fn is_terminal(&self) -> bool {
        matches!(self, DeliveryStatus::Delivered)
    }
}

impl FromStr for DeliveryStatus {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "picked" => Ok(DeliveryStatus::Picked),
            "intransit" | "in_transit" | "in transit" => Ok(DeliveryStatus::InTransit),
            "delivered" => Ok(DeliveryStatus::Delivered),
            _ => Err(()),
        }
    }
}

/// The fulfillment record tied one-to-one to an assigned request.
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    pub id: Uuid,
    pub request_id: Uuid,
    pub volunteer_id: Uuid,
    pub status: DeliveryStatus,
    pub pickup_time: DateTime<Utc>,
    pub delivery_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Volunteer {
    pub id: Uuid,
    pub name: String,
    pub contact_number: String,
    pub ngo_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parses_form_values() {
        assert_eq!("Picked".parse(), Ok(DeliveryStatus::Picked));
        assert_eq!("delivered".parse(), Ok(DeliveryStatus::Delivered));
        assert_eq!("InTransit".parse(), Ok(DeliveryStatus::InTransit));
        assert_eq!("in transit".parse(), Ok(DeliveryStatus::InTransit));
    }

    #[test]
    fn test_free_text_statuses_are_rejected() {
        assert!(DeliveryStatus::from_str("lost the package").is_err());
        assert!(DeliveryStatus::from_str("").is_err());
    }

    #[test]
    fn test_only_delivered_is_terminal() {
        assert!(DeliveryStatus::Delivered.is_terminal());
        assert!(!DeliveryStatus::Picked.is_terminal());
        assert!(!DeliveryStatus::InTransit.is_terminal());
    }
}
