use tracing::{debug, info};

use crate::catalog::RecipeSource;
use crate::error::Result;
use crate::models::{DaySelection, DaySummary, MealItem, PlanRequest};
use crate::planner::calculations::{round_to, target_per_slot, Totals};
use crate::planner::fill::{fill_up, FillBounds};
use crate::planner::partition::SlotBuckets;
use crate::planner::regime::Regime;
use crate::planner::repair::{repair, RepairBounds, RepairReport};
use crate::planner::selection::select_initial;
use crate::planner::used::UsedIdSet;

/// A generated day together with how the pipeline got there.
#[derive(Debug, Clone, PartialEq)]
pub struct DayReport {
    pub selection: DaySelection,
    pub regime: Regime,
    /// Ids picked by the greedy pass, before any repair.
    pub initial: Vec<u32>,
    pub repair: RepairReport,
    /// Ids appended by the fill-up pass.
    pub filled: Vec<u32>,
}

/// Package the final menu with rounded totals and record its ids as used.
fn assemble(selected: &[&MealItem], used: Option<&mut UsedIdSet>) -> DaySelection {
    if let Some(used) = used {
        used.extend(selected.iter().map(|item| item.id));
    }

    let totals = Totals::of(selected.iter().copied());
    DaySelection {
        items: selected.iter().map(|item| (*item).clone()).collect(),
        summary: DaySummary {
            kcal: round_to(totals.kcal, 1),
            price: round_to(totals.price, 2),
            items: selected.len(),
        },
    }
}

/// Run the full day pipeline over an already filtered pool.
///
/// `used` biases selection away from ids served earlier in a week run and is
/// extended with this day's ids once the menu is final.
pub fn generate_day_report(
    pool: &[MealItem],
    request: &PlanRequest,
    used: Option<&mut UsedIdSet>,
) -> Result<DayReport> {
    request.validate()?;

    let regime = Regime::for_target(request.kcal);
    debug!(
        target = request.kcal,
        overflow_limit = regime.overflow_limit,
        fill_goal = regime.fill_goal,
        "regime selected"
    );

    let mut buckets = SlotBuckets::partition(pool)?;
    let per_slot = target_per_slot(request.kcal, request.snacks);
    buckets.rank(per_slot, used.as_deref());

    let mut selected = select_initial(&buckets, request.snacks, used.as_deref());
    let initial: Vec<u32> = selected.iter().map(|item| item.id).collect();

    let repair_report = repair(
        &mut selected,
        &buckets,
        RepairBounds {
            max_kcal: regime.max_kcal(request.kcal),
            budget: request.budget,
        },
    );

    let filled = fill_up(
        &mut selected,
        pool,
        FillBounds {
            min_kcal: regime.min_kcal(request.kcal),
            max_kcal: regime.max_kcal(request.kcal),
            budget: request.budget,
        },
    );

    let selection = assemble(&selected, used);
    info!(
        target = request.kcal,
        budget = request.budget,
        kcal = selection.summary.kcal,
        price = selection.summary.price,
        items = selection.summary.items,
        "day plan generated"
    );

    Ok(DayReport {
        selection,
        regime,
        initial,
        repair: repair_report,
        filled,
    })
}

/// Generate one day's menu from a filtered pool.
pub fn generate_day(
    pool: &[MealItem],
    request: &PlanRequest,
    used: Option<&mut UsedIdSet>,
) -> Result<DaySelection> {
    generate_day_report(pool, request, used).map(|report| report.selection)
}

/// Fetch a fresh pool from `source` and generate one day's menu.
pub fn plan_day<S: RecipeSource + ?Sized>(
    source: &S,
    request: &PlanRequest,
    used: Option<&mut UsedIdSet>,
) -> Result<DaySelection> {
    request.validate()?;
    let pool = source.fetch(&request.diet_tags, &request.exclude_allergens)?;
    generate_day(&pool, request, used)
}
