use actix_web::{web, HttpResponse};
use rand::Rng;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ai::customization::derive_kitchen_instruction;
use crate::ai::suggestions::{
    suggest_action as pick_suggestion, CustomerType, OrderValue, PartySize, SuggestionContext,
    TimeOfDay,
};
use crate::errors::AppError;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomizationRequest {
    pub custom_text: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomizationResponse {
    pub kitchen_instruction: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    pub order_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SuggestionResponse {
    pub suggestion: String,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /api/ai/customize
///
/// Turns free-text customer wishes into a structured kitchen instruction.
/// Pure rewriting; nothing is persisted or broadcast.
#[utoipa::path(
    post,
    path = "/api/ai/customize",
    request_body = CustomizationRequest,
    responses(
        (status = 200, description = "Derived kitchen instruction", body = CustomizationResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "ai"
)]
pub async fn customize(
    body: web::Json<CustomizationRequest>,
) -> Result<HttpResponse, AppError> {
    let kitchen_instruction = derive_kitchen_instruction(&body.custom_text);
    Ok(HttpResponse::Ok().json(CustomizationResponse {
        kitchen_instruction,
    }))
}

/// POST /api/ai/suggest_action
///
/// One hospitality prompt for the waitstaff. Fresh draw per request,
/// nothing persisted or broadcast.
#[utoipa::path(
    post,
    path = "/api/ai/suggest_action",
    request_body = SuggestionRequest,
    responses(
        (status = 200, description = "Suggested server action", body = SuggestionResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "ai"
)]
pub async fn suggest_action(
    body: web::Json<SuggestionRequest>,
) -> Result<HttpResponse, AppError> {
    log::debug!("suggestion requested for order {}", body.order_id);

    let mut rng = rand::thread_rng();
    let context = sample_order_context(&mut rng);
    let suggestion = pick_suggestion(&context, &mut rng);

    Ok(HttpResponse::Ok().json(SuggestionResponse { suggestion }))
}

/// Stand-in for real order telemetry: buckets are drawn at random instead
/// of being derived from the referenced order.
fn sample_order_context<R: Rng + ?Sized>(rng: &mut R) -> SuggestionContext {
    let time_of_day = [TimeOfDay::Lunch, TimeOfDay::Dinner, TimeOfDay::Late]
        [rng.gen_range(0..3)];
    let party_size = [PartySize::Small, PartySize::Medium, PartySize::Large]
        [rng.gen_range(0..3)];
    let customer_type = [
        CustomerType::Family,
        CustomerType::Couple,
        CustomerType::Individual,
        CustomerType::Group,
    ][rng.gen_range(0..4)];
    let order_value = [OrderValue::Low, OrderValue::Medium, OrderValue::High]
        [rng.gen_range(0..3)];

    SuggestionContext {
        time_of_day,
        party_size,
        customer_type,
        order_value,
        wait_minutes: rng.gen_range(5..=25),
    }
}
