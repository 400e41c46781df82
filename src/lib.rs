pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod store;

pub use catalog::{RecipeCatalog, RecipeSource};
pub use error::{Result, VitaError};
pub use models::{DaySelection, MealItem, PlanRequest, WeekPlan, WeekRequest};
pub use planner::{generate_day, plan_day, plan_week, UsedIdSet};
