use std::collections::BTreeSet;

use tracing::debug;

use crate::error::{Result, VitaError};
use crate::models::{MealItem, MealSlot};

/// Where the planner reads candidate recipes from.
///
/// Implementations must return only items carrying every tag in
/// `diet_tags` and none of `excluded_allergens`; empty sets mean no
/// constraint. Repeated calls with the same arguments and an unchanged
/// catalog return the same items in the same order.
pub trait RecipeSource {
    fn fetch(
        &self,
        diet_tags: &BTreeSet<String>,
        excluded_allergens: &BTreeSet<String>,
    ) -> Result<Vec<MealItem>>;
}

/// Filters for browsing the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeQuery {
    pub slot: Option<MealSlot>,
    pub min_kcal: Option<f64>,
    pub max_kcal: Option<f64>,
    pub max_price: Option<f64>,
    pub diet_tags: BTreeSet<String>,
    pub exclude_allergens: BTreeSet<String>,
}

impl RecipeQuery {
    pub fn matches(&self, item: &MealItem) -> bool {
        self.slot.is_none_or(|slot| item.slot() == Some(slot))
            && self.min_kcal.is_none_or(|min| item.kcal >= min)
            && self.max_kcal.is_none_or(|max| item.kcal <= max)
            && self.max_price.is_none_or(|max| item.price <= max)
            && item.matches(&self.diet_tags, &self.exclude_allergens)
    }
}

/// In-memory catalog snapshot, kept in catalog order.
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    items: Vec<MealItem>,
}

impl RecipeCatalog {
    pub fn new(items: Vec<MealItem>) -> Self {
        Self { items }
    }

    pub fn get(&self, id: u32) -> Option<&MealItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[MealItem] {
        &self.items
    }

    /// Insert or replace by id. Returns true when the item was new.
    pub fn upsert(&mut self, item: MealItem) -> Result<bool> {
        if !item.is_valid() {
            return Err(VitaError::InvalidRequest(format!(
                "recipe #{} has an empty name or negative values",
                item.id
            )));
        }

        match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => {
                debug!(item_id = item.id, name = %item.name, "recipe replaced");
                *existing = item;
                Ok(false)
            }
            None => {
                debug!(item_id = item.id, name = %item.name, "recipe added");
                self.items.push(item);
                Ok(true)
            }
        }
    }

    /// Catalog items matching `query`, cheapest first.
    pub fn search(&self, query: &RecipeQuery) -> Vec<&MealItem> {
        let mut found: Vec<&MealItem> = self.items.iter().filter(|i| query.matches(i)).collect();
        found.sort_by(|a, b| a.price.total_cmp(&b.price));
        found
    }

    /// Every allergen tag present in the catalog.
    pub fn known_allergens(&self) -> BTreeSet<String> {
        self.items
            .iter()
            .flat_map(|item| item.allergens.iter().cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl RecipeSource for RecipeCatalog {
    fn fetch(
        &self,
        diet_tags: &BTreeSet<String>,
        excluded_allergens: &BTreeSet<String>,
    ) -> Result<Vec<MealItem>> {
        Ok(self
            .items
            .iter()
            .filter(|item| item.matches(diet_tags, excluded_allergens))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn item(id: u32, meal_type: &str, kcal: f64, price: f64, diet: &[&str], allergens: &[&str]) -> MealItem {
        MealItem {
            id,
            name: format!("item-{}", id),
            meal_type: meal_type.to_string(),
            kcal,
            protein_g: 0.0,
            fat_g: 0.0,
            carbs_g: 0.0,
            price,
            weight_g: 0.0,
            description: String::new(),
            diet_tags: tags(diet),
            allergens: tags(allergens),
        }
    }

    fn sample_catalog() -> RecipeCatalog {
        RecipeCatalog::new(vec![
            item(1, "breakfast", 420.0, 60.0, &["standard"], &["eggs", "milk"]),
            item(2, "breakfast", 380.0, 35.0, &["standard", "vegetarian"], &["gluten"]),
            item(3, "lunch", 650.0, 85.0, &["standard"], &[]),
            item(4, "snack", 120.0, 15.0, &["standard", "vegetarian", "vegan"], &[]),
        ])
    }

    #[test]
    fn test_fetch_without_constraints_returns_everything() {
        let catalog = sample_catalog();
        assert_eq!(catalog.fetch(&tags(&[]), &tags(&[])).unwrap().len(), 4);
    }

    #[test]
    fn test_fetch_filters_tags_and_allergens() {
        let catalog = sample_catalog();
        let ids: Vec<u32> = catalog
            .fetch(&tags(&["vegetarian"]), &tags(&["gluten"]))
            .unwrap()
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![4]);
    }

    #[test]
    fn test_search_orders_by_price() {
        let catalog = sample_catalog();
        let query = RecipeQuery {
            max_kcal: Some(500.0),
            ..Default::default()
        };
        let ids: Vec<u32> = catalog.search(&query).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![4, 2, 1]);
    }

    #[test]
    fn test_search_by_slot_and_price() {
        let catalog = sample_catalog();
        let query = RecipeQuery {
            slot: Some(MealSlot::Breakfast),
            max_price: Some(60.0),
            min_kcal: Some(400.0),
            ..Default::default()
        };
        let ids: Vec<u32> = catalog.search(&query).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_upsert_replaces_by_id() {
        let mut catalog = sample_catalog();
        let mut updated = item(3, "lunch", 600.0, 80.0, &["standard"], &[]);
        updated.name = "Buckwheat with turkey".to_string();

        assert!(!catalog.upsert(updated).unwrap());
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get(3).unwrap().kcal, 600.0);

        assert!(catalog.upsert(item(9, "dinner", 500.0, 90.0, &[], &[])).unwrap());
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn test_upsert_rejects_invalid_item() {
        let mut catalog = sample_catalog();
        let bad = item(10, "dinner", -5.0, 1.0, &[], &[]);
        assert!(matches!(catalog.upsert(bad), Err(VitaError::InvalidRequest(_))));
    }

    #[test]
    fn test_known_allergens() {
        let allergens = sample_catalog().known_allergens();
        assert_eq!(allergens, tags(&["eggs", "gluten", "milk"]));
    }
}
