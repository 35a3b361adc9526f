use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::menu::{MenuItemView, NutritionInfo};
use crate::domain::order::{LineItem, OrderStatus, OrderView};
use crate::schema::{menu_items, orders};

// ── Versioned JSONB envelope for order line items ────────────────────────────

pub const LINE_ITEMS_SCHEMA_VERSION: u32 = 1;

/// What actually lands in the `orders.items` column. The explicit version
/// plus `#[serde(default)]` keeps rows written by older builds readable
/// after a field is added.
#[derive(Debug, Serialize, Deserialize)]
pub struct StoredLineItems {
    pub version: u32,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

pub fn encode_line_items(items: &[LineItem]) -> Result<Value, DomainError> {
    serde_json::to_value(StoredLineItems {
        version: LINE_ITEMS_SCHEMA_VERSION,
        items: items.to_vec(),
    })
    .map_err(|e| DomainError::Internal(format!("encoding line items: {e}")))
}

pub fn decode_line_items(value: Value) -> Result<Vec<LineItem>, DomainError> {
    let stored: StoredLineItems = serde_json::from_value(value)
        .map_err(|e| DomainError::Internal(format!("decoding line items: {e}")))?;
    Ok(stored.items)
}

// ── Order rows ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: Uuid,
    pub customer_name: String,
    pub table_number: i32,
    pub items: Value,
    pub status: String,
    pub total: BigDecimal,
    pub subtotal: BigDecimal,
    pub gst: BigDecimal,
    pub payment_method: String,
    pub customer_instructions: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderRow {
    pub fn into_view(self) -> Result<OrderView, DomainError> {
        let status = OrderStatus::parse(&self.status).ok_or_else(|| {
            DomainError::Internal(format!("corrupt status '{}' on order {}", self.status, self.id))
        })?;
        Ok(OrderView {
            id: self.id,
            customer_name: self.customer_name,
            table_number: self.table_number,
            items: decode_line_items(self.items)?,
            status,
            total: self.total,
            subtotal: self.subtotal,
            gst: self.gst,
            payment_method: self.payment_method,
            customer_instructions: self.customer_instructions,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow {
    pub id: Uuid,
    pub customer_name: String,
    pub table_number: i32,
    pub items: Value,
    pub status: String,
    pub total: BigDecimal,
    pub subtotal: BigDecimal,
    pub gst: BigDecimal,
    pub payment_method: String,
    pub customer_instructions: Option<String>,
}

// ── Menu item rows ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = menu_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MenuItemRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: i32,
    pub category: String,
    pub available: bool,
    pub preparation_time_minutes: i32,
    pub tags: Value,
    pub nutrition_info: Option<Value>,
    pub ai_recommended: bool,
    pub image: Option<String>,
}

impl MenuItemRow {
    pub fn into_view(self) -> Result<MenuItemView, DomainError> {
        let tags: Vec<String> = serde_json::from_value(self.tags)
            .map_err(|e| DomainError::Internal(format!("decoding tags: {e}")))?;
        let nutrition_info: Option<NutritionInfo> = self
            .nutrition_info
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| DomainError::Internal(format!("decoding nutrition info: {e}")))?;
        Ok(MenuItemView {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            available: self.available,
            preparation_time_minutes: self.preparation_time_minutes,
            tags,
            nutrition_info,
            ai_recommended: self.ai_recommended,
            image: self.image,
        })
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = menu_items)]
pub struct NewMenuItemRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: i32,
    pub category: String,
    pub available: bool,
    pub preparation_time_minutes: i32,
    pub tags: Value,
    pub nutrition_info: Option<Value>,
    pub ai_recommended: bool,
    pub image: Option<String>,
}

/// Update changeset. `image` and `nutrition_info` are deliberately absent:
/// menu updates never touch them.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = menu_items)]
pub struct MenuItemChanges {
    pub name: String,
    pub description: String,
    pub price: i32,
    pub category: String,
    pub available: bool,
    pub preparation_time_minutes: i32,
    pub tags: Value,
    pub ai_recommended: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn line_item() -> LineItem {
        LineItem {
            item_id: "item3".to_string(),
            name: "Chicken Biryani".to_string(),
            price: 350,
            quantity: 2,
            category: Some("Main Course".to_string()),
            customization: Some("extra raita".to_string()),
            preparation_time: 30,
        }
    }

    #[test]
    fn line_items_survive_the_storage_envelope() {
        let items = vec![line_item()];
        let encoded = encode_line_items(&items).unwrap();
        assert_eq!(encoded["version"], LINE_ITEMS_SCHEMA_VERSION);
        assert_eq!(decode_line_items(encoded).unwrap(), items);
    }

    #[test]
    fn decode_tolerates_fields_from_newer_schemas() {
        let row = json!({
            "version": 2,
            "items": [{
                "itemId": "item5",
                "name": "Masala Chai",
                "price": 60,
                "quantity": 1,
                "servedIced": true
            }],
            "revisedBy": "till-7"
        });
        let items = decode_line_items(row).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].preparation_time, 15);
    }

    #[test]
    fn decode_rejects_non_envelope_payloads() {
        assert!(decode_line_items(json!([1, 2, 3])).is_err());
    }

    #[test]
    fn corrupt_status_surfaces_as_internal_error() {
        let row = OrderRow {
            id: Uuid::new_v4(),
            customer_name: "Asha".to_string(),
            table_number: 2,
            items: encode_line_items(&[line_item()]).unwrap(),
            status: "on-fire".to_string(),
            total: BigDecimal::from(700),
            subtotal: BigDecimal::from(700),
            gst: BigDecimal::from(0),
            payment_method: "cash".to_string(),
            customer_instructions: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert!(matches!(
            row.into_view().unwrap_err(),
            DomainError::Internal(_)
        ));
    }
}
