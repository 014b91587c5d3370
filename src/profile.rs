use serde::{Deserialize, Serialize};

use crate::catalog::{ActivityLevel, Allergen, DietType, FitnessGoal, Gender, MealVariety};

/// Which slots the user wants planned. Unset slots default to enabled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MealsPerDay {
    #[serde(default = "enabled")]
    pub breakfast: bool,
    #[serde(default = "enabled")]
    pub lunch: bool,
    #[serde(default = "enabled")]
    pub dinner: bool,
    #[serde(default = "enabled")]
    pub snacks: bool,
}

fn enabled() -> bool {
    true
}

impl Default for MealsPerDay {
    fn default() -> Self {
        Self {
            breakfast: true,
            lunch: true,
            dinner: true,
            snacks: true,
        }
    }
}

/// Nutritional profile collected during onboarding. Owned by the external
/// persistence service; this core only reads it. Every field is optional so
/// a half-finished onboarding still produces a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub activity_level: Option<ActivityLevel>,
    #[serde(default)]
    pub fitness_goal: Option<FitnessGoal>,
    #[serde(default)]
    pub diet_type: Option<DietType>,
    #[serde(default)]
    pub meal_variety: Option<MealVariety>,
    #[serde(default)]
    pub meals_per_day: MealsPerDay,
    #[serde(default)]
    pub allergies: Vec<Allergen>,
}

impl UserProfile {
    /// Unset diet means no diet-type exclusion.
    pub fn diet_type(&self) -> DietType {
        self.diet_type.unwrap_or(DietType::Anything)
    }

    pub fn meal_variety(&self) -> MealVariety {
        self.meal_variety.unwrap_or_default()
    }
}
