use tracing::info;

use crate::catalog::RecipeSource;
use crate::error::Result;
use crate::models::{DaySelection, WeekPlan, WeekRequest};
use crate::planner::calculations::round_to;
use crate::planner::day::plan_day;
use crate::planner::used::UsedIdSet;

/// Sum per-day rounded totals, rounding the grand totals once at the end.
pub fn aggregate_days(days: Vec<DaySelection>) -> WeekPlan {
    let (kcal, price) = days.iter().fold((0.0, 0.0), |(k, p), day| {
        (k + day.summary.kcal, p + day.summary.price)
    });

    WeekPlan {
        days,
        total_kcal: round_to(kcal, 1),
        total_price: round_to(price, 2),
    }
}

/// Plan `days` consecutive days (clamped to 1..=14), threading one used-id
/// set through them for variety. Each day reads a fresh catalog snapshot;
/// the first failing day aborts the run.
pub fn plan_week<S: RecipeSource + ?Sized>(source: &S, request: &WeekRequest) -> Result<WeekPlan> {
    let days = request.clamped_days();
    let mut used = UsedIdSet::new();
    let mut plans = Vec::with_capacity(days as usize);

    for _ in 0..days {
        plans.push(plan_day(source, &request.day, Some(&mut used))?);
    }

    let week = aggregate_days(plans);
    info!(
        days = week.day_count(),
        total_kcal = week.total_kcal,
        total_price = week.total_price,
        distinct_items = used.len(),
        "week plan generated"
    );
    Ok(week)
}
