use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::order::{LineItem, OrderStatus, OrderView};

/// The order payload carried by a `new_order` event. A trimmed view of the
/// order, not the full REST representation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAnnouncement {
    pub id: Uuid,
    pub customer_name: String,
    pub table_number: i32,
    pub items: Vec<LineItem>,
    pub status: OrderStatus,
    pub total: BigDecimal,
    pub timestamp: DateTime<Utc>,
}

impl From<&OrderView> for OrderAnnouncement {
    fn from(order: &OrderView) -> Self {
        Self {
            id: order.id,
            customer_name: order.customer_name.clone(),
            table_number: order.table_number,
            items: order.items.clone(),
            status: order.status,
            total: order.total.clone(),
            timestamp: order.created_at,
        }
    }
}

/// JSON envelopes pushed to every live viewer: `{"type": ..., ...payload}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    NewOrder {
        order: OrderAnnouncement,
    },
    OrderUpdated {
        #[serde(rename = "orderId")]
        order_id: Uuid,
        status: OrderStatus,
    },
    MenuUpdated,
    Ping,
}
