use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::types::{MealRecord, MealType};

/// Raw structure of the catalog data file.
#[derive(Deserialize)]
struct CatalogData {
    meals: Vec<MealRecord>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate meal id in catalog: {0}")]
    DuplicateId(String),
    #[error("catalog contains no meals")]
    Empty,
}

/// Immutable meal catalog, loaded once at startup. All planner and grocery
/// operations read from it; nothing ever writes to it.
#[derive(Debug)]
pub struct Catalog {
    meals: Vec<MealRecord>,
}

impl Catalog {
    /// Built-in catalog shipped with the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(include_str!("../../data/meals.json"))
    }

    /// Load a catalog from an external JSON file (`CATALOG_PATH` override).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json(&json)?;
        info!(path = %path.as_ref().display(), meals = catalog.len(), "catalog loaded from file");
        Ok(catalog)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;
        Self::new(data.meals)
    }

    pub fn new(meals: Vec<MealRecord>) -> Result<Self, CatalogError> {
        if meals.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for meal in &meals {
            if !seen.insert(meal.id.as_str()) {
                return Err(CatalogError::DuplicateId(meal.id.clone()));
            }
        }
        Ok(Self { meals })
    }

    /// All meals in stable catalog order.
    pub fn meals(&self) -> &[MealRecord] {
        &self.meals
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    pub fn by_id(&self, id: &str) -> Option<&MealRecord> {
        self.meals.iter().find(|m| m.id == id)
    }

    /// Meals of one slot, catalog order preserved.
    pub fn by_meal_type(&self, meal_type: MealType) -> impl Iterator<Item = &MealRecord> {
        self.meals.iter().filter(move |m| m.meal_type == meal_type)
    }
}
