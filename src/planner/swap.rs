use crate::catalog::{Catalog, MealRecord, MealType};
use crate::profile::UserProfile;

use super::filter::filter_meals;

/// Every same-slot alternative the user could switch to, minus the meal
/// currently assigned. No scoring or rotation; the caller shows the whole
/// set in filtered (catalog) order. Empty when no alternative exists.
pub fn swap_options<'a>(
    catalog: &'a Catalog,
    current_meal_id: &str,
    meal_type: MealType,
    profile: &UserProfile,
) -> Vec<&'a MealRecord> {
    filter_meals(catalog, profile)
        .into_iter()
        .filter(|m| m.meal_type == meal_type)
        .filter(|m| m.id != current_meal_id)
        .collect()
}
