use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::catalog::{MealRecord, MealType};

use super::categorize::categorize;
use super::parse::parse_ingredient;

/// A meal the user pinned to a date and slot. The record is a snapshot
/// taken when the meal was locked; the external persistence service owns
/// the entries and hands them to us in bulk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockedMeal {
    pub meal_date: Date,
    pub meal_type: MealType,
    pub meal: MealRecord,
}

/// One line of the derived shopping list. Recomputed on every call, never
/// persisted; `checked` is client-local toggle state and always starts
/// false.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroceryItem {
    pub name: String,
    pub quantity: String,
    pub category: String,
    #[serde(default)]
    pub checked: bool,
}

struct Accumulated {
    quantity: String,
    category: &'static str,
    count: u32,
}

/// Derive a shopping list from the locked meals' ingredient strings.
///
/// Each string is split into quantity and name, categorized against the
/// raw text, and merged with other occurrences of the same normalized
/// name. The first occurrence decides category and quantity; duplicates
/// only bump the count, shown as "{n}x". Items come back sorted by
/// category name, insertion order within a category. Empty input yields
/// an empty list.
pub fn build_grocery_list(locked_meals: &[LockedMeal]) -> Vec<GroceryItem> {
    let mut order: Vec<String> = Vec::new();
    let mut entries: HashMap<String, Accumulated> = HashMap::new();

    for locked in locked_meals {
        for raw in &locked.meal.ingredients {
            let parsed = parse_ingredient(raw);
            if parsed.name.is_empty() {
                continue;
            }
            match entries.get_mut(&parsed.name) {
                Some(entry) => entry.count += 1,
                None => {
                    order.push(parsed.name.clone());
                    entries.insert(
                        parsed.name,
                        Accumulated {
                            quantity: parsed.quantity,
                            category: categorize(raw),
                            count: 1,
                        },
                    );
                }
            }
        }
    }

    let mut items: Vec<GroceryItem> = order
        .into_iter()
        .map(|name| {
            let entry = entries.remove(&name).expect("entry recorded for name");
            let quantity = if entry.count > 1 {
                format!("{}x", entry.count)
            } else {
                entry.quantity
            };
            GroceryItem {
                name,
                quantity,
                category: entry.category.to_string(),
                checked: false,
            }
        })
        .collect();

    // Stable sort keeps insertion order inside each category group.
    items.sort_by(|a, b| a.category.cmp(&b.category));
    items
}

#[cfg(test)]
mod aggregate_tests {
    use super::*;
    use crate::catalog::Catalog;
    use time::macros::date;

    fn locked(meal_id: &str, meal_date: Date) -> LockedMeal {
        let catalog = Catalog::embedded().expect("embedded catalog must parse");
        let meal = catalog.by_id(meal_id).expect("meal exists").clone();
        LockedMeal {
            meal_date,
            meal_type: meal.meal_type,
            meal,
        }
    }

    fn with_ingredients(ingredients: &[&str]) -> LockedMeal {
        let mut entry = locked("b1", date!(2026 - 08 - 24));
        entry.meal.ingredients = ingredients.iter().map(|s| s.to_string()).collect();
        entry
    }

    #[test]
    fn empty_input_yields_empty_list() {
        assert!(build_grocery_list(&[]).is_empty());
        assert!(build_grocery_list(&[with_ingredients(&[])]).is_empty());
    }

    #[test]
    fn identical_ingredient_strings_merge_into_one_item() {
        let meals = [
            with_ingredients(&["500g chicken breast"]),
            with_ingredients(&["500g chicken breast"]),
        ];
        let items = build_grocery_list(&meals);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "chicken breast");
        assert_eq!(items[0].quantity, "2x");
    }

    #[test]
    fn quantity_prefix_does_not_block_deduplication() {
        // "500g chicken breast" and a bare "chicken breast" normalize to
        // the same name.
        let meals = [
            with_ingredients(&["500g chicken breast"]),
            with_ingredients(&["chicken breast"]),
        ];
        let items = build_grocery_list(&meals);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, "2x");
        assert_eq!(items[0].category, "Proteins");
    }

    #[test]
    fn single_occurrence_keeps_its_parsed_quantity() {
        let items = build_grocery_list(&[with_ingredients(&["500g quinoa", "olive oil"])]);
        let quinoa = items.iter().find(|i| i.name == "quinoa").expect("quinoa");
        assert_eq!(quinoa.quantity, "500g");
        let oil = items.iter().find(|i| i.name == "olive oil").expect("oil");
        assert_eq!(oil.quantity, "1 unit");
    }

    #[test]
    fn first_seen_category_wins_for_merged_names() {
        // Same normalized name, different raw prefixes; the first
        // occurrence's category sticks.
        let meals = [
            with_ingredients(&["200g greek yogurt"]),
            with_ingredients(&["greek yogurt"]),
        ];
        let items = build_grocery_list(&meals);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].category, "Proteins");
        assert_eq!(items[0].quantity, "2x");
    }

    #[test]
    fn items_are_grouped_by_category_name() {
        let meals = [
            locked("l1", date!(2026 - 08 - 24)),
            locked("d1", date!(2026 - 08 - 25)),
        ];
        let items = build_grocery_list(&meals);
        assert!(!items.is_empty());
        let categories: Vec<&str> = items.iter().map(|i| i.category.as_str()).collect();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);
    }

    #[test]
    fn checked_always_starts_false() {
        let items = build_grocery_list(&[locked("s1", date!(2026 - 08 - 24))]);
        assert!(items.iter().all(|i| !i.checked));
    }
}
