use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::DomainError;

/// Order lifecycle. The wire accepts only these four values, lowercase;
/// anything else is rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    New,
    Preparing,
    Ready,
    Completed,
}

impl OrderStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "new" => Some(OrderStatus::New),
            "preparing" => Some(OrderStatus::Preparing),
            "ready" => Some(OrderStatus::Ready),
            "completed" => Some(OrderStatus::Completed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
        }
    }

    fn rank(&self) -> u8 {
        match self {
            OrderStatus::New => 0,
            OrderStatus::Preparing => 1,
            OrderStatus::Ready => 2,
            OrderStatus::Completed => 3,
        }
    }

    /// A transition is legal iff it moves strictly forward in the
    /// lifecycle. Skipping a stage is allowed; rollbacks and self-loops
    /// are not, and `completed` is terminal.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        next.rank() > self.rank()
    }
}

/// Shared by every store adapter: check a requested transition against the
/// current status, with the error message the boundary reports as a 400.
pub fn validate_transition(current: OrderStatus, next: OrderStatus) -> Result<(), DomainError> {
    if current.can_transition_to(next) {
        Ok(())
    } else {
        Err(DomainError::InvalidInput(format!(
            "status: cannot move from '{current}' to '{next}'"
        )))
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of an order. Serde shape doubles as the wire and the
/// persisted representation (camelCase keys inside the JSONB envelope).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub item_id: String,
    pub name: String,
    pub price: i64,
    pub quantity: i32,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub customization: Option<String>,
    #[serde(default = "default_preparation_time")]
    pub preparation_time: i32,
}

fn default_preparation_time() -> i32 {
    15
}

#[derive(Debug, Clone)]
pub struct NewOrderInput {
    pub customer_name: String,
    pub table_number: i32,
    pub items: Vec<LineItem>,
    pub total: BigDecimal,
    pub subtotal: BigDecimal,
    pub gst: BigDecimal,
    pub payment_method: String,
    pub customer_instructions: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OrderView {
    pub id: Uuid,
    pub customer_name: String,
    pub table_number: i32,
    pub items: Vec<LineItem>,
    pub status: OrderStatus,
    pub total: BigDecimal,
    pub subtotal: BigDecimal,
    pub gst: BigDecimal,
    pub payment_method: String,
    pub customer_instructions: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_the_four_lifecycle_states() {
        assert_eq!(OrderStatus::parse("new"), Some(OrderStatus::New));
        assert_eq!(OrderStatus::parse("preparing"), Some(OrderStatus::Preparing));
        assert_eq!(OrderStatus::parse("ready"), Some(OrderStatus::Ready));
        assert_eq!(OrderStatus::parse("completed"), Some(OrderStatus::Completed));
    }

    #[test]
    fn parse_rejects_unknown_and_uppercase() {
        assert_eq!(OrderStatus::parse("cancelled"), None);
        assert_eq!(OrderStatus::parse("NEW"), None);
        assert_eq!(OrderStatus::parse(""), None);
    }

    #[test]
    fn forward_transitions_are_legal() {
        assert!(OrderStatus::New.can_transition_to(OrderStatus::Preparing));
        assert!(OrderStatus::Preparing.can_transition_to(OrderStatus::Ready));
        assert!(OrderStatus::Ready.can_transition_to(OrderStatus::Completed));
        // skipping a stage is fine
        assert!(OrderStatus::New.can_transition_to(OrderStatus::Completed));
    }

    #[test]
    fn rollbacks_and_self_loops_are_rejected() {
        assert!(!OrderStatus::Ready.can_transition_to(OrderStatus::Preparing));
        assert!(!OrderStatus::Preparing.can_transition_to(OrderStatus::Preparing));
        assert!(!OrderStatus::Completed.can_transition_to(OrderStatus::New));
    }

    #[test]
    fn completed_is_terminal() {
        for next in [
            OrderStatus::New,
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::Completed,
        ] {
            assert!(!OrderStatus::Completed.can_transition_to(next));
        }
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Preparing).unwrap(),
            "\"preparing\""
        );
    }

    #[test]
    fn line_item_wire_shape_is_camel_case_with_defaults() {
        let item: LineItem = serde_json::from_str(
            r#"{"itemId": "item1", "name": "Butter Chicken", "price": 320, "quantity": 2}"#,
        )
        .unwrap();
        assert_eq!(item.item_id, "item1");
        assert_eq!(item.preparation_time, 15);
        assert_eq!(item.category, None);

        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("itemId").is_some());
        assert!(json.get("preparationTime").is_some());
    }
}
