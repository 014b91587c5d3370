use serde::{Deserialize, Serialize};

use super::aggregate::{GroceryItem, LockedMeal};

#[derive(Debug, Deserialize)]
pub struct GroceryListRequest {
    #[serde(default)]
    pub locked_meals: Vec<LockedMeal>,
}

#[derive(Debug, Serialize)]
pub struct GroceryListResponse {
    pub items: Vec<GroceryItem>,
}
