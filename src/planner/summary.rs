use std::fmt::Write;

use crate::catalog::MealType;

use super::rotation::DailyPlan;

/// Render a day's plan as plain text for the chat gateway payload.
/// The assistant receives this as context alongside the conversation, so
/// the format stays simple and line-oriented.
pub fn plan_summary(plan: &DailyPlan) -> String {
    let mut out = String::from("Current meal plan:\n");
    for meal_type in MealType::ALL {
        let slot = plan.slot(meal_type);
        if slot.is_empty() {
            let _ = writeln!(out, "{}: (none planned)", meal_type.label());
            continue;
        }
        for meal in slot {
            let _ = writeln!(
                out,
                "{}: {} ({} kcal, {}g protein, {}g carbs, {}g fats)",
                meal_type.label(),
                meal.name,
                meal.calories,
                meal.protein_grams,
                meal.carbs_grams,
                meal.fats_grams
            );
        }
    }
    out
}
