mod dto;
pub mod filter;
mod handlers;
pub mod rotation;
pub mod score;
pub mod summary;
pub mod swap;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/meals", get(handlers::list_meals))
        .route("/meals/filter", post(handlers::filter))
        .route("/meals/:id", get(handlers::get_meal))
        .route("/meals/:id/swaps", post(handlers::swaps))
        .route("/plan/day", post(handlers::plan_day))
        .route("/plan/week", post(handlers::plan_week))
        .route("/plan/summary", post(handlers::summary))
}
