use serde::{Deserialize, Serialize};

/// Meal-time slot. Every catalog record belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snacks,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snacks => "Snacks",
        }
    }
}

/// Closed set of diet classifications. Keeping this an enum (instead of the
/// free-form strings the profile UI sends) forces the filter to handle every
/// variant explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    Anything,
    Vegetarian,
    Vegan,
    NonVegetarian,
    Keto,
    Paleo,
    Pescatarian,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Allergen {
    Nuts,
    Dairy,
    Eggs,
    Soy,
    Gluten,
    Seafood,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    LoseFat,
    GainWeight,
    BuildMuscle,
    Maintain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// How much day-to-day variety the rotation engine should produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealVariety {
    SameDaily,
    #[default]
    SlightVariation,
    NewDaily,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: u32,
    pub max: u32,
}

impl AgeRange {
    pub fn contains(&self, age: u32) -> bool {
        age >= self.min && age <= self.max
    }
}

/// Soft-fit metadata: who a meal suits best. Influences ranking only,
/// never exclusion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Suitability {
    #[serde(default)]
    pub goals: Vec<FitnessGoal>,
    #[serde(default)]
    pub activity_levels: Vec<ActivityLevel>,
    #[serde(default)]
    pub genders: Vec<Gender>,
    #[serde(default)]
    pub age_range: Option<AgeRange>,
}

/// One immutable catalog entry.
///
/// The strict-diet flags (`is_vegetarian`/`is_vegan`/`is_non_veg`) are kept
/// independent of `diet_types` on purpose: a meal may carry a `vegetarian`
/// tag for browsing and still be excluded from strict vegetarian results
/// (e.g. when it contains eggs).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealRecord {
    pub id: String,
    pub name: String,
    pub image_ref: String,
    pub prep_time_minutes: u32,
    pub calories: u32,
    pub protein_grams: u32,
    pub carbs_grams: u32,
    pub fats_grams: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub diet_types: Vec<DietType>,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub is_non_veg: bool,
    #[serde(default)]
    pub contains_allergies: Vec<Allergen>,
    #[serde(default)]
    pub suitable_for: Suitability,
    pub meal_type: MealType,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
}

impl MealRecord {
    pub fn has_allergen(&self, allergen: Allergen) -> bool {
        self.contains_allergies.contains(&allergen)
    }

    pub fn declares_diet(&self, diet: DietType) -> bool {
        self.diet_types.contains(&diet)
    }
}

#[cfg(test)]
mod serde_tests {
    use super::*;

    #[test]
    fn enums_use_snake_case_wire_names() {
        assert_eq!(
            serde_json::to_string(&DietType::NonVegetarian).expect("serialize"),
            r#""non_vegetarian""#
        );
        assert_eq!(
            serde_json::to_string(&ActivityLevel::LightlyActive).expect("serialize"),
            r#""lightly_active""#
        );
        let variety: MealVariety =
            serde_json::from_str(r#""new_daily""#).expect("deserialize");
        assert_eq!(variety, MealVariety::NewDaily);
    }

    #[test]
    fn meal_variety_defaults_to_slight_variation() {
        assert_eq!(MealVariety::default(), MealVariety::SlightVariation);
    }

    #[test]
    fn age_range_bounds_are_inclusive() {
        let range = AgeRange { min: 18, max: 55 };
        assert!(range.contains(18));
        assert!(range.contains(55));
        assert!(!range.contains(56));
    }
}
