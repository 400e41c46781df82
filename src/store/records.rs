use serde::{Deserialize, Serialize};

use crate::models::{DaySelection, MealItem, Profile, ProfileMetrics, WeekPlan};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanKind {
    Day,
    Week,
}

/// A stored profile with its cached energy figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub id: u32,
    #[serde(flatten)]
    pub profile: Profile,
    pub metrics: ProfileMetrics,
}

/// Snapshot of one served dish inside a saved plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedMeal {
    /// 1-based day within the plan.
    pub day_index: u32,
    pub name: String,
    pub meal_type: String,
    pub kcal: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
    pub price: f64,
    #[serde(default)]
    pub weight_g: f64,
    #[serde(default)]
    pub description: String,
}

impl SavedMeal {
    pub fn from_item(day_index: u32, item: &MealItem) -> Self {
        Self {
            day_index,
            name: item.name.clone(),
            meal_type: item.meal_type.clone(),
            kcal: item.kcal,
            protein_g: item.protein_g,
            fat_g: item.fat_g,
            carbs_g: item.carbs_g,
            price: item.price,
            weight_g: item.weight_g,
            description: item.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPlan {
    pub id: u32,
    pub kind: PlanKind,
    pub user_id: Option<u32>,
    pub total_kcal: f64,
    pub total_price: f64,
    pub meals: Vec<SavedMeal>,
}

/// Meals of a generated day, all on day 1.
pub fn day_meals(day: &DaySelection) -> Vec<SavedMeal> {
    day.items
        .iter()
        .map(|item| SavedMeal::from_item(1, item))
        .collect()
}

/// Meals of a generated week with 1-based day indices.
pub fn week_meals(week: &WeekPlan) -> Vec<SavedMeal> {
    week.days
        .iter()
        .zip(1u32..)
        .flat_map(|(day, index)| day.items.iter().map(move |item| SavedMeal::from_item(index, item)))
        .collect()
}
