use crate::catalog::{Allergen, Catalog, DietType, MealRecord};
use crate::profile::UserProfile;

/// Narrow the catalog to meals that satisfy the profile's hard constraints.
///
/// Diet gating is strict and asymmetric:
/// - vegetarian means ovo-exclusive: the meal must be flagged vegetarian,
///   not non-veg, and must not carry the eggs allergen — even when its
///   `diet_types` tag claims vegetarian eligibility. Do not relax this.
/// - vegan additionally excludes dairy.
/// - non-vegetarian and "anything" exclude nothing (a non-veg eater may
///   still eat vegetarian meals).
/// - keto accepts an explicit keto tag or falls back to carbs < 20g.
///
/// Allergen exclusion applies after diet gating and is absolute.
/// Catalog order is preserved; the function is total.
pub fn filter_meals<'a>(catalog: &'a Catalog, profile: &UserProfile) -> Vec<&'a MealRecord> {
    catalog
        .meals()
        .iter()
        .filter(|meal| matches_diet(meal, profile.diet_type()))
        .filter(|meal| !has_any_allergen(meal, &profile.allergies))
        .collect()
}

fn matches_diet(meal: &MealRecord, diet: DietType) -> bool {
    match diet {
        DietType::Anything | DietType::NonVegetarian => true,
        DietType::Vegetarian => {
            meal.is_vegetarian && !meal.is_non_veg && !meal.has_allergen(Allergen::Eggs)
        }
        DietType::Vegan => {
            meal.is_vegan
                && !meal.is_non_veg
                && !meal.has_allergen(Allergen::Eggs)
                && !meal.has_allergen(Allergen::Dairy)
        }
        DietType::Keto => meal.declares_diet(DietType::Keto) || meal.carbs_grams < 20,
        DietType::Paleo => meal.declares_diet(DietType::Paleo),
        DietType::Pescatarian => meal.declares_diet(DietType::Pescatarian),
    }
}

fn has_any_allergen(meal: &MealRecord, allergies: &[Allergen]) -> bool {
    allergies.iter().any(|a| meal.has_allergen(*a))
}
