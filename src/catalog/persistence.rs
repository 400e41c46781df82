use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::Result;
use crate::models::MealItem;

use super::source::RecipeCatalog;

/// Drop earlier duplicates of the same id, keeping the last occurrence at
/// the position of the first one.
fn dedup_last_wins(items: Vec<MealItem>) -> Vec<MealItem> {
    let mut seen = HashSet::new();
    let mut out: Vec<MealItem> = Vec::with_capacity(items.len());

    for item in items {
        if seen.insert(item.id) {
            out.push(item);
        } else if let Some(existing) = out.iter_mut().find(|e| e.id == item.id) {
            warn!(item_id = item.id, "duplicate recipe id, keeping the later entry");
            *existing = item;
        }
    }
    out
}

/// Load a recipe catalog from a JSON array.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<RecipeCatalog> {
    let content = fs::read_to_string(path)?;
    let items: Vec<MealItem> = serde_json::from_str(&content)?;
    let catalog = RecipeCatalog::new(dedup_last_wins(items));
    debug!(recipes = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Save a recipe catalog as a pretty JSON array.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &RecipeCatalog) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog.items())?;
    fs::write(path, json)?;
    Ok(())
}
