use tracing::debug;

use crate::models::{MealItem, MealSlot};
use crate::planner::partition::SlotBuckets;
use crate::planner::used::UsedIdSet;

fn is_used(item: &MealItem, used: Option<&UsedIdSet>) -> bool {
    used.is_some_and(|set| set.contains(item.id))
}

/// Best item of a ranked main-meal bucket, preferring one not served on an
/// earlier day. Falls back to the bucket head when every item is used.
pub fn pick_main<'a>(bucket: &[&'a MealItem], used: Option<&UsedIdSet>) -> Option<&'a MealItem> {
    bucket
        .iter()
        .find(|item| !is_used(item, used))
        .or_else(|| bucket.first())
        .copied()
}

/// Next snack: first ranked snack neither already in `selected` nor used,
/// else the bucket head (which may repeat).
pub fn pick_snack<'a>(
    bucket: &[&'a MealItem],
    selected: &[&'a MealItem],
    used: Option<&UsedIdSet>,
) -> Option<&'a MealItem> {
    bucket
        .iter()
        .find(|item| !selected.iter().any(|s| s.id == item.id) && !is_used(item, used))
        .or_else(|| bucket.first())
        .copied()
}

/// Greedy initial menu from ranked buckets: one breakfast, lunch and dinner
/// when available, then up to `snacks` snacks. Missing slots are skipped.
pub fn select_initial<'a>(
    buckets: &SlotBuckets<'a>,
    snacks: u32,
    used: Option<&UsedIdSet>,
) -> Vec<&'a MealItem> {
    let mut selected: Vec<&'a MealItem> = Vec::with_capacity(3 + snacks as usize);

    for slot in [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner] {
        match pick_main(buckets.bucket(slot), used) {
            Some(item) => selected.push(item),
            None => debug!(slot = %slot, "no candidates for slot, skipping"),
        }
    }

    for _ in 0..snacks {
        match pick_snack(buckets.bucket(MealSlot::Snack), &selected, used) {
            Some(item) => selected.push(item),
            None => break,
        }
    }

    selected
}
