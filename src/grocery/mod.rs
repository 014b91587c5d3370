pub mod aggregate;
pub mod categorize;
mod dto;
mod handlers;
pub mod parse;

use axum::{routing::post, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/grocery/list", post(handlers::grocery_list))
}
