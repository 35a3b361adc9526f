use actix_web::{web, HttpResponse};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::order::{LineItem, NewOrderInput, OrderStatus, OrderView};
use crate::errors::AppError;
use crate::AppOrderService;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub item_id: String,
    pub name: String,
    /// Integer currency units.
    pub price: i64,
    pub quantity: i32,
    #[serde(default)]
    pub category: Option<String>,
    /// Free-text customization as entered by the customer.
    #[serde(default)]
    pub customization: Option<String>,
    #[serde(default = "default_preparation_time")]
    pub preparation_time: i32,
}

fn default_preparation_time() -> i32 {
    15
}

impl From<OrderItemDto> for LineItem {
    fn from(dto: OrderItemDto) -> Self {
        LineItem {
            item_id: dto.item_id,
            name: dto.name,
            price: dto.price,
            quantity: dto.quantity,
            category: dto.category,
            customization: dto.customization,
            preparation_time: dto.preparation_time,
        }
    }
}

impl From<LineItem> for OrderItemDto {
    fn from(item: LineItem) -> Self {
        OrderItemDto {
            item_id: item.item_id,
            name: item.name,
            price: item.price,
            quantity: item.quantity,
            category: item.category,
            customization: item.customization,
            preparation_time: item.preparation_time,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub items: Vec<OrderItemDto>,
    pub table_number: i32,
    pub customer_name: String,
    pub payment_method: String,
    #[serde(default)]
    pub customer_instructions: Option<String>,
    pub total: f64,
    pub subtotal: f64,
    pub gst: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateOrderResponse {
    pub id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: Uuid,
    pub customer_name: String,
    pub table_number: i32,
    pub items: Vec<OrderItemDto>,
    pub status: String,
    /// Decimal amounts as strings to avoid floating-point issues, e.g. "335.50"
    pub total: String,
    pub subtotal: String,
    pub gst: String,
    pub payment_method: String,
    pub customer_instructions: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<OrderView> for OrderResponse {
    fn from(order: OrderView) -> Self {
        OrderResponse {
            id: order.id,
            customer_name: order.customer_name,
            table_number: order.table_number,
            items: order.items.into_iter().map(OrderItemDto::from).collect(),
            status: order.status.to_string(),
            total: order.total.to_string(),
            subtotal: order.subtotal.to_string(),
            gst: order.gst.to_string(),
            payment_method: order.payment_method,
            customer_instructions: order.customer_instructions,
            created_at: order.created_at.to_rfc3339(),
            updated_at: order.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderRequest {
    pub status: String,
}

fn decimal_field(value: f64, field: &str) -> Result<BigDecimal, AppError> {
    BigDecimal::try_from(value)
        .map_err(|_| AppError::Validation(format!("{field}: not a finite number")))
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /api/orders
///
/// Stores the order and announces it to every live viewer once the write
/// has committed. Totals are stored as supplied; the server does not
/// recompute them from the line items.
#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created successfully", body = CreateOrderResponse),
        (status = 400, description = "Validation failure"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    service: web::Data<AppOrderService>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();

    let input = NewOrderInput {
        customer_name: body.customer_name,
        table_number: body.table_number,
        items: body.items.into_iter().map(LineItem::from).collect(),
        total: decimal_field(body.total, "total")?,
        subtotal: decimal_field(body.subtotal, "subtotal")?,
        gst: decimal_field(body.gst, "gst")?,
        payment_method: body.payment_method,
        customer_instructions: body.customer_instructions,
    };

    let order = web::block(move || service.create_order(input))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(json!({ "id": order.id })))
}

/// GET /api/orders/{id}
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(
        ("id" = Uuid, Path, description = "Order UUID"),
    ),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    service: web::Data<AppOrderService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();

    let order = web::block(move || service.get_order(order_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

/// GET /api/orders
#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "All orders, newest first", body = [OrderResponse]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn list_orders(service: web::Data<AppOrderService>) -> Result<HttpResponse, AppError> {
    let orders = web::block(move || service.list_orders())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let responses: Vec<OrderResponse> = orders.into_iter().map(OrderResponse::from).collect();
    Ok(HttpResponse::Ok().json(responses))
}

/// PATCH /api/orders/{id}
///
/// The wire accepts only the four lifecycle states; unknown strings and
/// backward transitions come back as 400 before anything is written.
#[utoipa::path(
    patch,
    path = "/api/orders/{id}",
    params(
        ("id" = Uuid, Path, description = "Order UUID"),
    ),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Status updated"),
        (status = 400, description = "Unknown status or illegal transition"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn update_order_status(
    service: web::Data<AppOrderService>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();
    let body = body.into_inner();

    let status = OrderStatus::parse(&body.status)
        .ok_or_else(|| AppError::Validation(format!("status: unknown value '{}'", body.status)))?;

    web::block(move || service.set_status(order_id, status))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(json!({ "message": "Order updated successfully" })))
}
