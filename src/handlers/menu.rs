use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::menu::{MenuItemInput, MenuItemView, NutritionInfo};
use crate::errors::AppError;
use crate::AppMenuService;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemRequest {
    pub name: String,
    pub description: String,
    /// Integer currency units.
    pub price: i32,
    pub category: String,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default = "default_preparation_time")]
    pub preparation_time: i32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub ai_recommended: bool,
    #[serde(default)]
    pub image: Option<String>,
}

fn default_available() -> bool {
    true
}

fn default_preparation_time() -> i32 {
    15
}

impl From<MenuItemRequest> for MenuItemInput {
    fn from(request: MenuItemRequest) -> Self {
        MenuItemInput {
            name: request.name,
            description: request.description,
            price: request.price,
            category: request.category,
            available: request.available,
            preparation_time_minutes: request.preparation_time,
            tags: request.tags,
            // Nutrition facts are maintained out of band, never via this API.
            nutrition_info: None,
            ai_recommended: request.ai_recommended,
            image: request.image,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: i32,
    pub category: String,
    pub available: bool,
    pub preparation_time: i32,
    pub tags: Vec<String>,
    pub nutrition_info: Option<NutritionInfo>,
    pub ai_recommended: bool,
    pub image: Option<String>,
}

impl From<MenuItemView> for MenuItemResponse {
    fn from(item: MenuItemView) -> Self {
        MenuItemResponse {
            id: item.id,
            name: item.name,
            description: item.description,
            price: item.price,
            category: item.category,
            available: item.available,
            preparation_time: item.preparation_time_minutes,
            tags: item.tags,
            nutrition_info: item.nutrition_info,
            ai_recommended: item.ai_recommended,
            image: item.image,
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /api/menu
#[utoipa::path(
    get,
    path = "/api/menu",
    responses(
        (status = 200, description = "All menu items", body = [MenuItemResponse]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "menu"
)]
pub async fn list_menu_items(service: web::Data<AppMenuService>) -> Result<HttpResponse, AppError> {
    let items = web::block(move || service.list_items())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let responses: Vec<MenuItemResponse> = items.into_iter().map(MenuItemResponse::from).collect();
    Ok(HttpResponse::Ok().json(responses))
}

/// POST /api/menu
#[utoipa::path(
    post,
    path = "/api/menu",
    request_body = MenuItemRequest,
    responses(
        (status = 201, description = "Menu item created"),
        (status = 400, description = "Validation failure"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "menu"
)]
pub async fn create_menu_item(
    service: web::Data<AppMenuService>,
    body: web::Json<MenuItemRequest>,
) -> Result<HttpResponse, AppError> {
    let input = MenuItemInput::from(body.into_inner());

    let item = web::block(move || service.create_item(input))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(json!({ "id": item.id })))
}

/// PUT /api/menu/{id}
#[utoipa::path(
    put,
    path = "/api/menu/{id}",
    params(
        ("id" = Uuid, Path, description = "Menu item UUID"),
    ),
    request_body = MenuItemRequest,
    responses(
        (status = 200, description = "Menu item updated"),
        (status = 404, description = "Menu item not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "menu"
)]
pub async fn update_menu_item(
    service: web::Data<AppMenuService>,
    path: web::Path<Uuid>,
    body: web::Json<MenuItemRequest>,
) -> Result<HttpResponse, AppError> {
    let item_id = path.into_inner();
    let input = MenuItemInput::from(body.into_inner());

    web::block(move || service.update_item(item_id, input))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(json!({ "message": "Menu item updated successfully" })))
}

/// DELETE /api/menu/{id}
#[utoipa::path(
    delete,
    path = "/api/menu/{id}",
    params(
        ("id" = Uuid, Path, description = "Menu item UUID"),
    ),
    responses(
        (status = 200, description = "Menu item deleted"),
        (status = 404, description = "Menu item not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "menu"
)]
pub async fn delete_menu_item(
    service: web::Data<AppMenuService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let item_id = path.into_inner();

    web::block(move || service.delete_item(item_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(json!({ "message": "Menu item deleted successfully" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_match_the_wire_contract() {
        let body = serde_json::json!({
            "name": "Garlic Naan",
            "description": "Soft leavened bread topped with garlic and butter",
            "price": 80,
            "category": "Breads"
        });
        let request: MenuItemRequest = serde_json::from_value(body).unwrap();
        assert!(request.available);
        assert_eq!(request.preparation_time, 15);
        assert!(request.tags.is_empty());
        assert!(!request.ai_recommended);
        assert_eq!(request.image, None);
    }

    #[test]
    fn response_serializes_camel_case() {
        let view = MenuItemView {
            id: Uuid::new_v4(),
            name: "Mango Lassi".to_string(),
            description: "Refreshing yogurt-based drink".to_string(),
            price: 100,
            category: "Beverages".to_string(),
            available: true,
            preparation_time_minutes: 5,
            tags: vec!["Cold".to_string()],
            nutrition_info: Some(NutritionInfo {
                calories: 180,
                protein: 6,
                carbs: 32,
                fat: 4,
            }),
            ai_recommended: true,
            image: None,
        };
        let json = serde_json::to_value(MenuItemResponse::from(view)).unwrap();
        assert_eq!(json["preparationTime"], 5);
        assert_eq!(json["aiRecommended"], true);
        assert_eq!(json["nutritionInfo"]["calories"], 180);
    }
}
