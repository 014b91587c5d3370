use lazy_static::lazy_static;
use regex::Regex;

/// Display quantity for ingredient strings with no recognizable prefix.
pub const UNIT_PLACEHOLDER: &str = "1 unit";

/// An ingredient string split into a display quantity and a normalized name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedIngredient {
    pub quantity: String,
    pub name: String,
}

/// Split a free-text ingredient string into `(quantity, name)`.
///
/// A quantity prefix is digits optionally followed by a unit from a fixed
/// set, then whitespace ("500g chicken breast", "2 cups rice", "1 medium
/// banana"). Anything else falls back to the whole string as the name with
/// a placeholder quantity. The name is trimmed and lower-cased so the same
/// ingredient de-duplicates across meals. Never fails.
pub fn parse_ingredient(raw: &str) -> ParsedIngredient {
    lazy_static! {
        static ref QUANTITY_RE: Regex = Regex::new(
            r"(?i)^(\d+(?:\.\d+)?\s*(?:kg|g|ml|l|cups?|tbsp|tsp|pcs|pieces|bunch|medium|large|small)?)\s+(\S.*)$"
        )
        .expect("quantity regex is valid");
    }

    let trimmed = raw.trim();
    if let Some(caps) = QUANTITY_RE.captures(trimmed) {
        ParsedIngredient {
            quantity: caps[1].trim().to_string(),
            name: caps[2].trim().to_lowercase(),
        }
    } else {
        ParsedIngredient {
            quantity: UNIT_PLACEHOLDER.to_string(),
            name: trimmed.to_lowercase(),
        }
    }
}
