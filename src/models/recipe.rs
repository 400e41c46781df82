use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four meal categories a recipe can be served as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];

    /// Parse a raw catalog tag. Unknown tags yield `None`.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "breakfast" => Some(MealSlot::Breakfast),
            "lunch" => Some(MealSlot::Lunch),
            "dinner" => Some(MealSlot::Dinner),
            "snack" => Some(MealSlot::Snack),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snack => "snack",
        }
    }

    /// Display label used in rendered tables and exports.
    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::Snack => "Snack",
        }
    }

    /// Position in a day's menu; unknown slots sort last.
    pub fn order(tag: &str) -> u8 {
        match Self::parse(tag) {
            Some(MealSlot::Breakfast) => 1,
            Some(MealSlot::Lunch) => 2,
            Some(MealSlot::Dinner) => 3,
            Some(MealSlot::Snack) => 4,
            None => 99,
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog recipe. Read-only for the planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealItem {
    pub id: u32,

    pub name: String,

    /// Raw slot tag as stored in the catalog.
    pub meal_type: String,

    pub kcal: f64,

    #[serde(default)]
    pub protein_g: f64,

    #[serde(default)]
    pub fat_g: f64,

    #[serde(default)]
    pub carbs_g: f64,

    #[serde(default)]
    pub price: f64,

    #[serde(default)]
    pub weight_g: f64,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub diet_tags: BTreeSet<String>,

    #[serde(default)]
    pub allergens: BTreeSet<String>,
}

impl MealItem {
    #[inline]
    pub fn slot(&self) -> Option<MealSlot> {
        MealSlot::parse(&self.meal_type)
    }

    #[inline]
    pub fn is_snack(&self) -> bool {
        self.slot() == Some(MealSlot::Snack)
    }

    /// True when every required tag is present and no excluded allergen is.
    pub fn matches(
        &self,
        required_diet_tags: &BTreeSet<String>,
        excluded_allergens: &BTreeSet<String>,
    ) -> bool {
        required_diet_tags.is_subset(&self.diet_tags)
            && self.allergens.is_disjoint(excluded_allergens)
    }

    /// Non-negative numeric fields and a non-empty name.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.kcal >= 0.0
            && self.price >= 0.0
            && self.protein_g >= 0.0
            && self.fat_g >= 0.0
            && self.carbs_g >= 0.0
            && self.weight_g >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn sample_item() -> MealItem {
        MealItem {
            id: 2,
            name: "Oatmeal with banana".to_string(),
            meal_type: "breakfast".to_string(),
            kcal: 380.0,
            protein_g: 11.0,
            fat_g: 8.0,
            carbs_g: 66.0,
            price: 35.0,
            weight_g: 300.0,
            description: String::new(),
            diet_tags: tags(&["standard", "vegetarian"]),
            allergens: tags(&["gluten"]),
        }
    }

    #[test]
    fn test_slot_parsing() {
        assert_eq!(MealSlot::parse("lunch"), Some(MealSlot::Lunch));
        assert_eq!(MealSlot::parse("brunch"), None);
        assert_eq!(sample_item().slot(), Some(MealSlot::Breakfast));
        assert!(!sample_item().is_snack());
    }

    #[test]
    fn test_slot_order_puts_unknown_last() {
        assert!(MealSlot::order("breakfast") < MealSlot::order("snack"));
        assert_eq!(MealSlot::order("supper"), 99);
    }

    #[test]
    fn test_matches_requires_all_diet_tags() {
        let item = sample_item();
        assert!(item.matches(&tags(&[]), &tags(&[])));
        assert!(item.matches(&tags(&["vegetarian"]), &tags(&[])));
        assert!(!item.matches(&tags(&["vegetarian", "vegan"]), &tags(&[])));
    }

    #[test]
    fn test_matches_rejects_excluded_allergens() {
        let item = sample_item();
        assert!(!item.matches(&tags(&[]), &tags(&["gluten"])));
        assert!(item.matches(&tags(&[]), &tags(&["milk", "nuts"])));
    }

    #[test]
    fn test_is_valid() {
        assert!(sample_item().is_valid());
        let mut invalid = sample_item();
        invalid.price = -1.0;
        assert!(!invalid.is_valid());
    }
}
