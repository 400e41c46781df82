pub mod prompts;
pub mod render;

pub use prompts::{
    collect_profile, match_allergen, prompt_allergies, prompt_week_mode, prompt_yes_no,
    AllergenMatch,
};
pub use render::{
    display_day_plan, display_profile, display_recipes, display_saved_plan, display_saved_plans,
    display_week_plan,
};
