use crate::models::{DaySelection, MealItem, MealSlot, WeekPlan};
use crate::planner::Regime;
use crate::store::{ProfileRecord, SavedPlan};

fn slot_label(meal_type: &str) -> String {
    MealSlot::parse(meal_type)
        .map(|slot| slot.label().to_string())
        .unwrap_or_else(|| meal_type.to_string())
}

/// Print one day's menu as an aligned table.
pub fn display_day_plan(day: &DaySelection, title: &str, target_kcal: u32, budget: f64) {
    println!();
    println!("=== {} ===", title);
    println!();

    if day.is_empty() {
        println!("No dishes could be selected for this day.");
        return;
    }

    let rows = day.grouped();
    let name_width = rows
        .iter()
        .map(|r| r.display_name().chars().count())
        .max()
        .unwrap_or(10);

    for row in &rows {
        println!(
            "  {:<9} {:<width$}  {:>6.0} kcal  {:>7.2}  P {:>5.1} F {:>5.1} C {:>5.1}",
            slot_label(&row.meal_type),
            row.display_name(),
            row.kcal,
            row.price,
            row.protein_g,
            row.fat_g,
            row.carbs_g,
            width = name_width
        );
    }

    let regime = Regime::for_target(target_kcal);
    println!();
    println!("--- Summary ---");
    println!("Dishes: {}", day.summary.items);
    println!(
        "Energy: {:.1} kcal (target {}, allowed {:.0}-{:.0})",
        day.summary.kcal,
        target_kcal,
        regime.min_kcal(target_kcal),
        regime.max_kcal(target_kcal)
    );
    println!("Price: {:.2} (budget {:.2})", day.summary.price, budget);
    if day.summary.price > budget {
        println!("Note: no cheaper combination was found; the plan exceeds the budget.");
    }
}

/// Print every day of a week plan followed by the period totals.
pub fn display_week_plan(week: &WeekPlan, target_kcal: u32, budget: f64) {
    for (i, day) in week.days.iter().enumerate() {
        display_day_plan(day, &format!("Day {}", i + 1), target_kcal, budget);
    }

    let days = week.day_count() as f64;
    println!();
    println!("=== Period ({} days) ===", week.day_count());
    println!(
        "Total energy: {:.1} kcal (target {:.0})",
        week.total_kcal,
        target_kcal as f64 * days
    );
    println!(
        "Total price: {:.2} (budget {:.2})",
        week.total_price,
        budget * days
    );
    println!("Total dishes: {}", week.item_count());
    println!();
}

/// Print a recipe listing.
pub fn display_recipes(recipes: &[&MealItem]) {
    if recipes.is_empty() {
        println!("No recipes match the given filters.");
        return;
    }

    println!();
    println!("=== Recipes ({} items) ===", recipes.len());
    println!();

    for item in recipes {
        let diet: Vec<&str> = item.diet_tags.iter().map(String::as_str).collect();
        let allergens: Vec<&str> = item.allergens.iter().map(String::as_str).collect();
        println!(
            "  #{:<3} {:<9} {} - {} kcal, {:.2}, P:{} F:{} C:{} [{}] allergens: {}",
            item.id,
            slot_label(&item.meal_type),
            item.name,
            item.kcal,
            item.price,
            item.protein_g,
            item.fat_g,
            item.carbs_g,
            diet.join(", "),
            if allergens.is_empty() {
                "-".to_string()
            } else {
                allergens.join(", ")
            }
        );
    }

    println!();
}

pub fn display_profile(record: &ProfileRecord) {
    let p = &record.profile;
    let allergies: Vec<&str> = p.allergies.iter().map(String::as_str).collect();

    println!();
    println!("=== Profile #{} ===", record.id);
    println!(
        "  {:?}, {} y, {} cm, {} kg, activity x{}",
        p.sex, p.age, p.height_cm, p.weight_kg, p.activity_factor
    );
    println!("  Goal: {}", p.goal.label());
    println!("  Budget per day: {:.2}", p.budget_per_day);
    println!(
        "  Allergies: {}",
        if allergies.is_empty() {
            "none".to_string()
        } else {
            allergies.join(", ")
        }
    );
    println!(
        "  BMR {:.0} kcal, TDEE {:.0} kcal, target {:.0} kcal",
        record.metrics.bmr, record.metrics.tdee, record.metrics.target_kcal
    );
    println!();
}

pub fn display_saved_plans(plans: &[&SavedPlan]) {
    if plans.is_empty() {
        println!("No saved plans.");
        return;
    }

    for plan in plans {
        let user = plan
            .user_id
            .map(|id| format!("profile #{}", id))
            .unwrap_or_else(|| "no profile".to_string());
        println!(
            "  #{:<4} {:?} ({}) - {:.1} kcal, {:.2}, {} meals",
            plan.id,
            plan.kind,
            user,
            plan.total_kcal,
            plan.total_price,
            plan.meals.len()
        );
    }
}

pub fn display_saved_plan(plan: &SavedPlan) {
    println!();
    println!("=== Saved plan #{} ({:?}) ===", plan.id, plan.kind);

    let mut current_day = 0;
    for meal in &plan.meals {
        if meal.day_index != current_day {
            current_day = meal.day_index;
            println!("  Day {}:", current_day);
        }
        println!(
            "    {:<9} {} - {:.0} kcal, {:.2}",
            slot_label(&meal.meal_type),
            meal.name,
            meal.kcal,
            meal.price
        );
    }

    println!(
        "  Total: {:.1} kcal, {:.2}",
        plan.total_kcal, plan.total_price
    );
    println!();
}
