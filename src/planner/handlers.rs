use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{error, instrument};

use crate::catalog::MealRecord;
use crate::state::AppState;

use super::dto::{
    DayPlanRequest, DayPlanResponse, FilterRequest, MealListResponse, SwapRequest,
    WeekPlanRequest, WeekPlanResponse,
};
use super::filter::filter_meals;
use super::rotation::meals_for_day;
use super::summary::plan_summary;
use super::swap::swap_options;

/// Days in the week strip the plan page renders.
const WEEK_DAYS: u32 = 7;

#[instrument(skip(state))]
pub async fn list_meals(State(state): State<AppState>) -> Json<MealListResponse> {
    Json(MealListResponse {
        meals: state.catalog.meals().to_vec(),
    })
}

#[instrument(skip(state))]
pub async fn get_meal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MealRecord>, (StatusCode, String)> {
    match state.catalog.by_id(&id) {
        Some(meal) => Ok(Json(meal.clone())),
        None => {
            error!(%id, "meal not found");
            Err((StatusCode::NOT_FOUND, "Meal not found".into()))
        }
    }
}

#[instrument(skip(state, body))]
pub async fn filter(
    State(state): State<AppState>,
    Json(body): Json<FilterRequest>,
) -> Json<MealListResponse> {
    let meals = filter_meals(&state.catalog, &body.profile)
        .into_iter()
        .cloned()
        .collect();
    Json(MealListResponse { meals })
}

#[instrument(skip(state, body))]
pub async fn swaps(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<SwapRequest>,
) -> Result<Json<MealListResponse>, (StatusCode, String)> {
    if state.catalog.by_id(&id).is_none() {
        error!(%id, "swap source meal not found");
        return Err((StatusCode::NOT_FOUND, "Meal not found".into()));
    }
    let meals = swap_options(&state.catalog, &id, body.meal_type, &body.profile)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(MealListResponse { meals }))
}

#[instrument(skip(state, body))]
pub async fn plan_day(
    State(state): State<AppState>,
    Json(body): Json<DayPlanRequest>,
) -> Json<DayPlanResponse> {
    let plan = meals_for_day(&state.catalog, body.day_index, &body.profile);
    Json(DayPlanResponse {
        day_index: body.day_index,
        plan,
    })
}

#[instrument(skip(state, body))]
pub async fn plan_week(
    State(state): State<AppState>,
    Json(body): Json<WeekPlanRequest>,
) -> Json<WeekPlanResponse> {
    let days = (body.start_day_index..body.start_day_index + WEEK_DAYS)
        .map(|day_index| DayPlanResponse {
            day_index,
            plan: meals_for_day(&state.catalog, day_index, &body.profile),
        })
        .collect();
    Json(WeekPlanResponse { days })
}

/// Plain-text day summary for the chat gateway payload.
#[instrument(skip(state, body))]
pub async fn summary(
    State(state): State<AppState>,
    Json(body): Json<DayPlanRequest>,
) -> String {
    let plan = meals_for_day(&state.catalog, body.day_index, &body.profile);
    plan_summary(&plan)
}
