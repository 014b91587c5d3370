use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

/// Category for ingredients no keyword claims.
pub const FALLBACK_CATEGORY: &str = "Pantry";

/// Raw structure of the keyword taxonomy file. The table is configuration
/// data, not logic: extending a category means editing the JSON, not this
/// module.
#[derive(Deserialize)]
struct CategoryData {
    categories: Vec<CategoryEntry>,
}

#[derive(Deserialize)]
struct CategoryEntry {
    name: String,
    keywords: Vec<String>,
}

/// Keyword table compiled from `data/grocery_categories.json`. Categories
/// are tried in file order, so earlier entries win ambiguous strings
/// ("peanut butter" lands in Nuts & Seeds before Dairy can see "butter").
lazy_static! {
    static ref CATEGORY_TABLE: Vec<(String, Vec<Regex>)> = {
        let json = include_str!("../../data/grocery_categories.json");
        let data: CategoryData =
            serde_json::from_str(json).expect("grocery_categories.json is valid");
        data.categories
            .into_iter()
            .map(|entry| {
                let patterns = entry
                    .keywords
                    .iter()
                    .map(|kw| {
                        Regex::new(&format!(r"(?i)\b{}\b", regex::escape(kw)))
                            .expect("keyword compiles to a regex")
                    })
                    .collect();
                (entry.name, patterns)
            })
            .collect()
    };
}

/// Categorize an ingredient by keyword match against the raw string.
/// Matching runs over the original (unparsed) text so category-relevant
/// words in a quantity prefix are not lost. Falls through to Pantry.
pub fn categorize(raw: &str) -> &'static str {
    for (name, patterns) in CATEGORY_TABLE.iter() {
        if patterns.iter().any(|re| re.is_match(raw)) {
            return name.as_str();
        }
    }
    FALLBACK_CATEGORY
}

#[cfg(test)]
mod categorize_tests {
    use super::*;

    #[test]
    fn proteins() {
        assert_eq!(categorize("500g chicken breast"), "Proteins");
        assert_eq!(categorize("Greek Yogurt"), "Proteins");
        assert_eq!(categorize("3 pcs eggs"), "Proteins");
        assert_eq!(categorize("200g firm tofu"), "Proteins");
    }

    #[test]
    fn vegetables_and_fruits() {
        assert_eq!(categorize("1 bunch asparagus"), "Vegetables");
        assert_eq!(categorize("1 large sweet potato"), "Vegetables");
        assert_eq!(categorize("150g mixed berries"), "Fruits");
        assert_eq!(categorize("1 medium banana"), "Fruits");
    }

    #[test]
    fn nut_butter_is_not_dairy() {
        assert_eq!(categorize("2 tbsp peanut butter"), "Nuts & Seeds");
        assert_eq!(categorize("butter"), "Dairy");
    }

    #[test]
    fn olives_do_not_drag_olive_oil_out_of_pantry() {
        assert_eq!(categorize("50g olives"), "Vegetables");
        assert_eq!(categorize("2 tbsp olive oil"), "Pantry");
    }

    #[test]
    fn unknown_strings_fall_back_to_pantry() {
        assert_eq!(categorize("1 tbsp tikka spice mix"), "Pantry");
        assert_eq!(categorize(""), "Pantry");
    }

    #[test]
    fn word_boundaries_prevent_substring_hits() {
        // "eggplant" must not match the "egg" keyword.
        assert_eq!(categorize("1 pcs eggplant"), "Pantry");
    }
}
