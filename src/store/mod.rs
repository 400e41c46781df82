mod manager;
mod records;

pub use manager::Store;
pub use records::{day_meals, week_meals, PlanKind, ProfileRecord, SavedMeal, SavedPlan};
