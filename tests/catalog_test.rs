use std::collections::BTreeSet;
use std::fs;

use tempfile::TempDir;

use vitacode_rs::catalog::{
    demo_recipes, load_catalog, save_catalog, seed_demo, RecipeCatalog, RecipeQuery, RecipeSource,
};
use vitacode_rs::models::{MealSlot, PlanRequest, WeekRequest};
use vitacode_rs::planner::plan_week;

fn tags(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn demo_catalog() -> RecipeCatalog {
    RecipeCatalog::new(demo_recipes())
}

#[test]
fn test_fetch_is_idempotent_and_keeps_catalog_order() {
    let catalog = demo_catalog();
    let vegan = tags(&["vegan"]);

    let first = catalog.fetch(&vegan, &BTreeSet::new()).unwrap();
    let second = catalog.fetch(&vegan, &BTreeSet::new()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.iter().map(|i| i.id).collect::<Vec<_>>(), vec![33, 28, 29]);
}

#[test]
fn test_fetch_excludes_allergens() {
    let catalog = demo_catalog();
    let pool = catalog
        .fetch(&BTreeSet::new(), &tags(&["gluten", "milk"]))
        .unwrap();

    assert!(!pool.is_empty());
    assert!(pool.iter().all(|i| !i.allergens.contains("gluten") && !i.allergens.contains("milk")));
    assert!(pool.iter().any(|i| i.id == 8));
    assert!(pool.iter().all(|i| i.slot() != Some(MealSlot::Breakfast)));
}

#[test]
fn test_empty_filters_return_everything() {
    let catalog = demo_catalog();
    let pool = catalog.fetch(&BTreeSet::new(), &BTreeSet::new()).unwrap();
    assert_eq!(pool.len(), catalog.len());
}

#[test]
fn test_search_sorts_by_price() {
    let catalog = demo_catalog();

    let snacks = catalog.search(&RecipeQuery {
        slot: Some(MealSlot::Snack),
        max_price: Some(30.0),
        ..Default::default()
    });
    assert_eq!(snacks.iter().map(|i| i.id).collect::<Vec<_>>(), vec![28, 29]);

    let heavy = catalog.search(&RecipeQuery {
        min_kcal: Some(700.0),
        ..Default::default()
    });
    // equal prices keep catalog order
    assert_eq!(heavy.iter().map(|i| i.id).collect::<Vec<_>>(), vec![11, 22, 10]);
}

#[test]
fn test_seeding_twice_adds_nothing_new() {
    let mut catalog = RecipeCatalog::default();
    assert_eq!(seed_demo(&mut catalog).unwrap(), 20);
    assert_eq!(seed_demo(&mut catalog).unwrap(), 0);
    assert_eq!(catalog.len(), 20);
}

#[test]
fn test_catalog_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");

    let catalog = demo_catalog();
    save_catalog(&path, &catalog).unwrap();
    let loaded = load_catalog(&path).unwrap();

    assert_eq!(loaded.items(), catalog.items());
}

#[test]
fn test_catalog_file_with_minimal_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(
        &path,
        r#"[
            {"id": 1, "name": "Porridge", "meal_type": "breakfast", "kcal": 300, "price": 12.5},
            {"id": 2, "name": "Mystery", "meal_type": "elevenses", "kcal": 100}
        ]"#,
    )
    .unwrap();

    let catalog = load_catalog(&path).unwrap();
    assert_eq!(catalog.len(), 2);
    let porridge = catalog.get(1).unwrap();
    assert_eq!(porridge.price, 12.5);
    assert!(porridge.diet_tags.is_empty());
    assert_eq!(catalog.get(2).unwrap().slot(), None);
}

#[test]
fn test_demo_catalog_supports_a_full_week() {
    let catalog = demo_catalog();
    let day = PlanRequest::new(2000, 250.0)
        .with_snacks(1)
        .with_diet_tags(["standard"]);
    let week = plan_week(&catalog, &WeekRequest::new(day, 7)).unwrap();

    assert_eq!(week.day_count(), 7);
    for day in &week.days {
        assert!(day.count_slot(MealSlot::Breakfast) >= 1);
        assert!(day.count_slot(MealSlot::Lunch) >= 1);
        assert!(day.count_slot(MealSlot::Dinner) >= 1);
        assert_eq!(day.summary.items, day.items.len());
    }
}
