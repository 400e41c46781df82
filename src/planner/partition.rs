use std::cmp::Ordering;

use crate::error::{Result, VitaError};
use crate::models::{MealItem, MealSlot};
use crate::planner::used::UsedIdSet;

/// The candidate pool grouped by meal slot. Items keep pool order until
/// [`SlotBuckets::rank`] is applied.
#[derive(Debug, Default)]
pub struct SlotBuckets<'a> {
    pub breakfast: Vec<&'a MealItem>,
    pub lunch: Vec<&'a MealItem>,
    pub dinner: Vec<&'a MealItem>,
    pub snack: Vec<&'a MealItem>,
}

impl<'a> SlotBuckets<'a> {
    /// Group a filtered pool by slot. Items with an unknown slot tag are
    /// dropped; an empty pool is an error.
    pub fn partition(pool: &'a [MealItem]) -> Result<Self> {
        if pool.is_empty() {
            return Err(VitaError::EmptyPool);
        }

        let mut buckets = Self::default();
        for item in pool {
            if let Some(slot) = item.slot() {
                buckets.bucket_mut(slot).push(item);
            }
        }
        Ok(buckets)
    }

    pub fn bucket(&self, slot: MealSlot) -> &[&'a MealItem] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
            MealSlot::Snack => &self.snack,
        }
    }

    fn bucket_mut(&mut self, slot: MealSlot) -> &mut Vec<&'a MealItem> {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
            MealSlot::Snack => &mut self.snack,
        }
    }

    /// Sort every bucket by (already used, kcal deviation from
    /// `per_slot_kcal`, price), ascending. The sort is stable so equal keys
    /// keep pool order.
    pub fn rank(&mut self, per_slot_kcal: f64, used: Option<&UsedIdSet>) {
        for slot in MealSlot::ALL {
            self.bucket_mut(slot)
                .sort_by(|a, b| compare_candidates(a, b, per_slot_kcal, used));
        }
    }

    pub fn len(&self) -> usize {
        MealSlot::ALL.iter().map(|s| self.bucket(*s).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn used_penalty(item: &MealItem, used: Option<&UsedIdSet>) -> u8 {
    match used {
        Some(set) if set.contains(item.id) => 1,
        _ => 0,
    }
}

fn compare_candidates(
    a: &MealItem,
    b: &MealItem,
    per_slot_kcal: f64,
    used: Option<&UsedIdSet>,
) -> Ordering {
    used_penalty(a, used)
        .cmp(&used_penalty(b, used))
        .then_with(|| {
            let dev_a = (a.kcal - per_slot_kcal).abs();
            let dev_b = (b.kcal - per_slot_kcal).abs();
            dev_a.total_cmp(&dev_b)
        })
        .then_with(|| a.price.total_cmp(&b.price))
}
