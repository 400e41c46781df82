use serde::{Deserialize, Serialize};

use crate::models::recipe::{MealItem, MealSlot};

/// Rounded totals of one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    /// Total energy, rounded to one decimal.
    pub kcal: f64,

    /// Total price, rounded to two decimals.
    pub price: f64,

    /// Number of selected items (repeats counted individually).
    pub items: usize,
}

/// The final menu of one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySelection {
    pub items: Vec<MealItem>,
    pub summary: DaySummary,
}

impl DaySelection {
    /// Number of selected items served in `slot`.
    pub fn count_slot(&self, slot: MealSlot) -> usize {
        self.items.iter().filter(|i| i.slot() == Some(slot)).count()
    }

    pub fn ids(&self) -> Vec<u32> {
        self.items.iter().map(|i| i.id).collect()
    }

    /// Macro totals (protein, fat, carbs) in grams, unrounded.
    pub fn macros(&self) -> (f64, f64, f64) {
        self.items.iter().fold((0.0, 0.0, 0.0), |(p, f, c), i| {
            (p + i.protein_g, f + i.fat_g, c + i.carbs_g)
        })
    }

    /// Items merged by (slot, name) for display.
    pub fn grouped(&self) -> Vec<GroupedItem> {
        group_items(&self.items)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A multi-day plan with totals summed over the day summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekPlan {
    pub days: Vec<DaySelection>,
    pub total_kcal: f64,
    pub total_price: f64,
}

impl WeekPlan {
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn item_count(&self) -> usize {
        self.days.iter().map(|d| d.summary.items).sum()
    }
}

/// Presentation row: repeats of the same dish within one day merged together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedItem {
    pub meal_type: String,
    pub name: String,
    pub description: String,
    pub count: u32,
    pub kcal: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
    pub price: f64,
    pub weight_g: f64,
}

impl GroupedItem {
    fn from_item(item: &MealItem) -> Self {
        Self {
            meal_type: item.meal_type.clone(),
            name: item.name.clone(),
            description: item.description.clone(),
            count: 1,
            kcal: item.kcal,
            protein_g: item.protein_g,
            fat_g: item.fat_g,
            carbs_g: item.carbs_g,
            price: item.price,
            weight_g: item.weight_g,
        }
    }

    fn absorb(&mut self, item: &MealItem) {
        self.count += 1;
        self.kcal += item.kcal;
        self.protein_g += item.protein_g;
        self.fat_g += item.fat_g;
        self.carbs_g += item.carbs_g;
        self.price += item.price;
        self.weight_g += item.weight_g;
    }

    /// Name with a repeat marker, e.g. `Banana (x2)`.
    pub fn display_name(&self) -> String {
        if self.count > 1 {
            format!("{} (x{})", self.name, self.count)
        } else {
            self.name.clone()
        }
    }
}

/// Merge items sharing (slot, name), keeping first-seen order within a slot,
/// then order rows breakfast, lunch, dinner, snack, unknown.
pub fn group_items(items: &[MealItem]) -> Vec<GroupedItem> {
    let mut rows: Vec<GroupedItem> = Vec::new();

    for item in items {
        match rows
            .iter_mut()
            .find(|row| row.meal_type == item.meal_type && row.name == item.name)
        {
            Some(row) => row.absorb(item),
            None => rows.push(GroupedItem::from_item(item)),
        }
    }

    rows.sort_by_key(|row| MealSlot::order(&row.meal_type));
    rows
}
