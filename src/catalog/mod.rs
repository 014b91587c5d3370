mod store;
mod types;

pub use store::{Catalog, CatalogError};
pub use types::{
    ActivityLevel, AgeRange, Allergen, DietType, FitnessGoal, Gender, MealRecord, MealType,
    MealVariety, Suitability,
};
