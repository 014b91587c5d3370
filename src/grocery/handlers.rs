use axum::Json;
use tracing::{debug, instrument};

use super::aggregate::build_grocery_list;
use super::dto::{GroceryListRequest, GroceryListResponse};

#[instrument(skip(body), fields(locked = body.locked_meals.len()))]
pub async fn grocery_list(Json(body): Json<GroceryListRequest>) -> Json<GroceryListResponse> {
    let items = build_grocery_list(&body.locked_meals);
    debug!(items = items.len(), "grocery list built");
    Json(GroceryListResponse { items })
}

#[cfg(test)]
mod handler_tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::grocery::aggregate::LockedMeal;
    use time::macros::date;

    #[tokio::test]
    async fn empty_request_yields_empty_items() {
        let Json(body) = grocery_list(Json(GroceryListRequest {
            locked_meals: vec![],
        }))
        .await;
        assert!(body.items.is_empty());
    }

    #[tokio::test]
    async fn locked_meals_produce_a_grouped_list() {
        let catalog = Catalog::embedded().expect("embedded catalog must parse");
        let meal = catalog.by_id("l1").expect("l1").clone();
        let Json(body) = grocery_list(Json(GroceryListRequest {
            locked_meals: vec![LockedMeal {
                meal_date: date!(2026 - 08 - 24),
                meal_type: meal.meal_type,
                meal,
            }],
        }))
        .await;
        assert!(body.items.iter().any(|i| i.name == "chicken breast"));
        assert!(body.items.iter().all(|i| !i.checked));
    }
}
