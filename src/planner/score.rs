use crate::catalog::{FitnessGoal, MealRecord};
use crate::profile::UserProfile;

const GOAL_MATCH: u32 = 30;
const ACTIVITY_MATCH: u32 = 20;
const GENDER_MATCH: u32 = 10;
const AGE_MATCH: u32 = 10;
const GOAL_NUTRITION_BONUS: u32 = 15;

const MUSCLE_PROTEIN_GRAMS: u32 = 25;
const LOSE_FAT_CALORIE_CEILING: u32 = 400;
const GAIN_WEIGHT_CALORIE_FLOOR: u32 = 450;

/// Additive soft-fit score. A zero score never excludes a meal; it only
/// ranks it behind better fits within its slot.
pub fn suitability_score(meal: &MealRecord, profile: &UserProfile) -> u32 {
    let mut score = 0;

    if let Some(goal) = profile.fitness_goal {
        if meal.suitable_for.goals.contains(&goal) {
            score += GOAL_MATCH;
        }
        let nutrition_fits = match goal {
            FitnessGoal::BuildMuscle => meal.protein_grams > MUSCLE_PROTEIN_GRAMS,
            FitnessGoal::LoseFat => meal.calories < LOSE_FAT_CALORIE_CEILING,
            FitnessGoal::GainWeight => meal.calories > GAIN_WEIGHT_CALORIE_FLOOR,
            FitnessGoal::Maintain => false,
        };
        if nutrition_fits {
            score += GOAL_NUTRITION_BONUS;
        }
    }

    if let Some(level) = profile.activity_level {
        if meal.suitable_for.activity_levels.contains(&level) {
            score += ACTIVITY_MATCH;
        }
    }

    if let Some(gender) = profile.gender {
        if meal.suitable_for.genders.contains(&gender) {
            score += GENDER_MATCH;
        }
    }

    if let (Some(age), Some(range)) = (profile.age, meal.suitable_for.age_range) {
        if range.contains(age) {
            score += AGE_MATCH;
        }
    }

    score
}

#[cfg(test)]
mod score_tests {
    use super::*;
    use crate::catalog::{ActivityLevel, Catalog, Gender};

    fn catalog() -> Catalog {
        Catalog::embedded().expect("embedded catalog must parse")
    }

    #[test]
    fn empty_profile_scores_zero() {
        let catalog = catalog();
        for meal in catalog.meals() {
            assert_eq!(suitability_score(meal, &UserProfile::default()), 0);
        }
    }

    #[test]
    fn lose_fat_prefers_lighter_meals_by_at_least_the_bonus() {
        // l4 (350 kcal) vs d1 (580 kcal), profile only sets the goal.
        let catalog = catalog();
        let profile = UserProfile {
            fitness_goal: Some(FitnessGoal::LoseFat),
            ..UserProfile::default()
        };
        let light = suitability_score(catalog.by_id("l4").expect("l4"), &profile);
        let heavy = suitability_score(catalog.by_id("d1").expect("d1"), &profile);
        assert!(light >= heavy + 15, "light={light} heavy={heavy}");
    }

    #[test]
    fn build_muscle_bonus_requires_protein_over_threshold() {
        let catalog = catalog();
        let profile = UserProfile {
            fitness_goal: Some(FitnessGoal::BuildMuscle),
            ..UserProfile::default()
        };
        // s2: goal listed + 30g protein -> 30 + 15.
        assert_eq!(suitability_score(catalog.by_id("s2").expect("s2"), &profile), 45);
        // b2: 14g protein, goal not listed -> 0.
        assert_eq!(suitability_score(catalog.by_id("b2").expect("b2"), &profile), 0);
    }

    #[test]
    fn all_criteria_stack_additively() {
        let catalog = catalog();
        let profile = UserProfile {
            fitness_goal: Some(FitnessGoal::GainWeight),
            activity_level: Some(ActivityLevel::VeryActive),
            gender: Some(Gender::Female),
            age: Some(30),
            ..UserProfile::default()
        };
        // d3: goal +30, calories 620 > 450 +15, level +20, gender +10,
        // age 30 in 18..=55 +10.
        assert_eq!(suitability_score(catalog.by_id("d3").expect("d3"), &profile), 85);
    }

    #[test]
    fn age_outside_declared_range_earns_nothing() {
        let catalog = catalog();
        let profile = UserProfile {
            age: Some(70),
            ..UserProfile::default()
        };
        assert_eq!(suitability_score(catalog.by_id("d3").expect("d3"), &profile), 0);
    }
}
