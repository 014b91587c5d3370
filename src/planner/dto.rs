use serde::{Deserialize, Serialize};

use crate::catalog::{MealRecord, MealType};
use crate::profile::UserProfile;

use super::rotation::DailyPlan;

#[derive(Debug, Deserialize)]
pub struct FilterRequest {
    #[serde(default)]
    pub profile: UserProfile,
}

#[derive(Debug, Deserialize)]
pub struct SwapRequest {
    pub meal_type: MealType,
    #[serde(default)]
    pub profile: UserProfile,
}

#[derive(Debug, Deserialize)]
pub struct DayPlanRequest {
    pub day_index: u32,
    #[serde(default)]
    pub profile: UserProfile,
}

#[derive(Debug, Deserialize)]
pub struct WeekPlanRequest {
    #[serde(default)]
    pub start_day_index: u32,
    #[serde(default)]
    pub profile: UserProfile,
}

#[derive(Debug, Serialize)]
pub struct DayPlanResponse {
    pub day_index: u32,
    #[serde(flatten)]
    pub plan: DailyPlan,
}

#[derive(Debug, Serialize)]
pub struct WeekPlanResponse {
    pub days: Vec<DayPlanResponse>,
}

#[derive(Debug, Serialize)]
pub struct MealListResponse {
    pub meals: Vec<MealRecord>,
}
