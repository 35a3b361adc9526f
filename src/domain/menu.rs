use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Structured nutrition facts. Persisted as typed JSONB; `#[serde(default)]`
/// on every field keeps old rows readable when a field is added later.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionInfo {
    #[serde(default)]
    pub calories: i32,
    #[serde(default)]
    pub protein: i32,
    #[serde(default)]
    pub carbs: i32,
    #[serde(default)]
    pub fat: i32,
}

#[derive(Debug, Clone)]
pub struct MenuItemInput {
    pub name: String,
    pub description: String,
    pub price: i32,
    pub category: String,
    pub available: bool,
    pub preparation_time_minutes: i32,
    pub tags: Vec<String>,
    pub nutrition_info: Option<NutritionInfo>,
    pub ai_recommended: bool,
    pub image: Option<String>,
}

#[derive(Debug, Clone)]
pub struct MenuItemView {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: i32,
    pub category: String,
    pub available: bool,
    pub preparation_time_minutes: i32,
    pub tags: Vec<String>,
    pub nutrition_info: Option<NutritionInfo>,
    pub ai_recommended: bool,
    pub image: Option<String>,
}
