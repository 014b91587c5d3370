use std::cmp::Reverse;

use serde::Serialize;

use crate::catalog::{Catalog, MealRecord, MealType, MealVariety};
use crate::profile::UserProfile;

use super::filter::filter_meals;
use super::score::suitability_score;

/// How many meals each slot surfaces, in priority order.
pub const MEALS_PER_SLOT: usize = 2;

/// One day's selection. Empty vecs are valid, displayable states, not
/// errors (disabled slot, or nothing survived filtering).
#[derive(Debug, Clone, Default, Serialize)]
pub struct DailyPlan {
    pub breakfast: Vec<MealRecord>,
    pub lunch: Vec<MealRecord>,
    pub dinner: Vec<MealRecord>,
    pub snacks: Vec<MealRecord>,
}

impl DailyPlan {
    pub fn slot(&self, meal_type: MealType) -> &[MealRecord] {
        match meal_type {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
            MealType::Snacks => &self.snacks,
        }
    }
}

/// Build the plan for one day. Pure and deterministic: the same
/// `(day_index, profile)` always yields the same meals in the same order,
/// since the UI re-invokes this on every render without memoization.
pub fn meals_for_day(catalog: &Catalog, day_index: u32, profile: &UserProfile) -> DailyPlan {
    let filtered = filter_meals(catalog, profile);

    let mut plan = DailyPlan::default();
    for meal_type in MealType::ALL {
        let enabled = match meal_type {
            MealType::Breakfast => profile.meals_per_day.breakfast,
            MealType::Lunch => profile.meals_per_day.lunch,
            MealType::Dinner => profile.meals_per_day.dinner,
            MealType::Snacks => profile.meals_per_day.snacks,
        };
        if !enabled {
            continue;
        }

        let selected = select_for_slot(&filtered, meal_type, day_index, profile);
        match meal_type {
            MealType::Breakfast => plan.breakfast = selected,
            MealType::Lunch => plan.lunch = selected,
            MealType::Dinner => plan.dinner = selected,
            MealType::Snacks => plan.snacks = selected,
        }
    }
    plan
}

fn select_for_slot(
    filtered: &[&MealRecord],
    meal_type: MealType,
    day_index: u32,
    profile: &UserProfile,
) -> Vec<MealRecord> {
    let mut slot: Vec<&MealRecord> = filtered
        .iter()
        .copied()
        .filter(|m| m.meal_type == meal_type)
        .collect();
    if slot.is_empty() {
        return Vec::new();
    }

    // Stable sort: ties keep filtered (catalog) order.
    slot.sort_by_key(|m| Reverse(suitability_score(m, profile)));

    let offset = rotation_offset(profile.meal_variety(), day_index, slot.len());
    slot.iter()
        .cycle()
        .skip(offset)
        .take(MEALS_PER_SLOT.min(slot.len()))
        .map(|m| (*m).clone())
        .collect()
}

/// Day-dependent left-rotation offset into a slot's sorted list.
pub fn rotation_offset(variety: MealVariety, day_index: u32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    match variety {
        MealVariety::SameDaily => 0,
        MealVariety::SlightVariation => day_index as usize % len,
        MealVariety::NewDaily => (day_index as usize * 2) % len,
    }
}
