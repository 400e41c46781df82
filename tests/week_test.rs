#[macro_use]
extern crate assert_float_eq;

use std::cell::Cell;
use std::collections::BTreeSet;

use vitacode_rs::catalog::{RecipeCatalog, RecipeSource};
use vitacode_rs::error::{Result, VitaError};
use vitacode_rs::models::{MealItem, PlanRequest, WeekRequest};
use vitacode_rs::planner::{plan_day, plan_week, UsedIdSet};

fn make_item(id: u32, meal_type: &str, kcal: f64, price: f64, tags: &[&str]) -> MealItem {
    MealItem {
        id,
        name: format!("Dish {}", id),
        meal_type: meal_type.to_string(),
        kcal,
        protein_g: 10.0,
        fat_g: 5.0,
        carbs_g: 20.0,
        price,
        weight_g: 200.0,
        description: String::new(),
        diet_tags: tags.iter().map(|t| t.to_string()).collect(),
        allergens: Default::default(),
    }
}

/// Two interchangeable dishes per main slot; the cheaper one ranks first.
fn two_per_slot() -> RecipeCatalog {
    RecipeCatalog::new(vec![
        make_item(1, "breakfast", 500.0, 10.0, &["standard"]),
        make_item(2, "breakfast", 500.0, 12.0, &["standard"]),
        make_item(11, "lunch", 600.0, 10.0, &["standard"]),
        make_item(12, "lunch", 600.0, 12.0, &["standard"]),
        make_item(21, "dinner", 500.0, 10.0, &["standard"]),
        make_item(22, "dinner", 500.0, 12.0, &["standard"]),
    ])
}

/// Catalog wrapper counting how often a snapshot is taken.
struct CountingSource {
    inner: RecipeCatalog,
    fetches: Cell<usize>,
}

impl RecipeSource for CountingSource {
    fn fetch(
        &self,
        diet_tags: &BTreeSet<String>,
        excluded_allergens: &BTreeSet<String>,
    ) -> Result<Vec<MealItem>> {
        self.fetches.set(self.fetches.get() + 1);
        self.inner.fetch(diet_tags, excluded_allergens)
    }
}

#[test]
fn test_week_rotates_through_unused_dishes() {
    let catalog = two_per_slot();
    let request = WeekRequest::new(PlanRequest::new(1600, 100.0), 3);
    let week = plan_week(&catalog, &request).unwrap();

    assert_eq!(week.day_count(), 3);
    assert_eq!(week.days[0].ids(), vec![1, 11, 21]);
    assert_eq!(week.days[1].ids(), vec![2, 12, 22]);
    // everything has been served once, so the best-ranked dishes return
    assert_eq!(week.days[2].ids(), vec![1, 11, 21]);

    assert_f64_near!(week.total_kcal, 4800.0);
    assert_f64_near!(week.total_price, 96.0);
    assert_eq!(week.item_count(), 9);
}

#[test]
fn test_caller_owned_used_set_carries_between_days() {
    let catalog = two_per_slot();
    let request = PlanRequest::new(1600, 100.0);
    let mut used = UsedIdSet::new();

    let first = plan_day(&catalog, &request, Some(&mut used)).unwrap();
    assert_eq!(used.len(), 3);
    let second = plan_day(&catalog, &request, Some(&mut used)).unwrap();
    assert_eq!(used.len(), 6);

    assert!(first.ids().iter().all(|id| !second.ids().contains(id)));

    // without a set, every call starts from scratch
    let fresh = plan_day(&catalog, &request, None).unwrap();
    assert_eq!(fresh.ids(), first.ids());
}

#[test]
fn test_day_count_is_clamped() {
    let catalog = two_per_slot();
    let day = PlanRequest::new(1600, 100.0);

    let week = plan_week(&catalog, &WeekRequest::new(day.clone(), 0)).unwrap();
    assert_eq!(week.day_count(), 1);

    let week = plan_week(&catalog, &WeekRequest::new(day, 30)).unwrap();
    assert_eq!(week.day_count(), 14);
}

#[test]
fn test_each_day_takes_a_fresh_snapshot() {
    let source = CountingSource {
        inner: two_per_slot(),
        fetches: Cell::new(0),
    };
    let request = WeekRequest::new(PlanRequest::new(1600, 100.0), 5);

    plan_week(&source, &request).unwrap();
    assert_eq!(source.fetches.get(), 5);
}

#[test]
fn test_empty_filtered_pool_fails_the_week() {
    let source = CountingSource {
        inner: two_per_slot(),
        fetches: Cell::new(0),
    };
    let request = WeekRequest::new(PlanRequest::new(1600, 100.0).with_diet_tags(["vegan"]), 7);

    let err = plan_week(&source, &request).unwrap_err();
    assert!(matches!(err, VitaError::EmptyPool));
    // the first failing day aborts the rest
    assert_eq!(source.fetches.get(), 1);
}

#[test]
fn test_invalid_week_request_skips_catalog() {
    let source = CountingSource {
        inner: two_per_slot(),
        fetches: Cell::new(0),
    };
    let request = WeekRequest::new(PlanRequest::new(0, 100.0), 7);

    let err = plan_week(&source, &request).unwrap_err();
    assert!(matches!(err, VitaError::InvalidRequest(_)));
    assert_eq!(source.fetches.get(), 0);
}
