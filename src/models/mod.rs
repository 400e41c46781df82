pub mod plan;
pub mod profile;
pub mod recipe;
pub mod request;

pub use plan::{group_items, DaySelection, DaySummary, GroupedItem, WeekPlan};
pub use profile::{
    guided_day_request, profile_day_request, Goal, Profile, ProfileMetrics, Sex,
    FALLBACK_BUDGET, FALLBACK_TARGET_KCAL,
};
pub use recipe::{MealItem, MealSlot};
pub use request::{PlanRequest, WeekRequest};
