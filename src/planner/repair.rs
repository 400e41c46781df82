use std::fmt;

use tracing::{debug, warn};

use crate::models::MealItem;
use crate::planner::calculations::Totals;
use crate::planner::constants::{MAX_REPAIR_ITERATIONS, MIN_KCAL_SWAP_GAIN};
use crate::planner::partition::SlotBuckets;

/// Which bound a repair move was fixing. Kcal wins when both are violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Kcal,
    Budget,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Kcal => f.write_str("kcal"),
            Violation::Budget => f.write_str("budget"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepairMove {
    /// `removed` replaced in place by `added` from the same slot.
    Swap { removed: u32, added: u32 },
    /// A snack dropped without replacement.
    DropSnack { removed: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepairStep {
    pub violation: Violation,
    pub action: RepairMove,
    pub before: Totals,
    pub after: Totals,
}

/// How the repair loop ended. None of these is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepairExit {
    /// Both bounds hold.
    Satisfied,
    /// Iteration budget spent while still violating.
    Exhausted,
    /// No improving swap and no snack left to drop.
    Stuck,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RepairReport {
    pub steps: Vec<RepairStep>,
    pub exit: RepairExit,
}

/// Bounds the repair loop enforces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepairBounds {
    pub max_kcal: f64,
    pub budget: f64,
}

impl RepairBounds {
    fn violation(&self, totals: Totals) -> Option<Violation> {
        if totals.kcal > self.max_kcal {
            Some(Violation::Kcal)
        } else if totals.price > self.budget {
            Some(Violation::Budget)
        } else {
            None
        }
    }
}

fn improves(current: &MealItem, replacement: &MealItem, violation: Violation) -> bool {
    match violation {
        Violation::Kcal => current.kcal - replacement.kcal > MIN_KCAL_SWAP_GAIN,
        Violation::Budget => current.price - replacement.price > 0.0,
    }
}

/// Removal order: heaviest (kcal) or priciest first; ties keep menu order.
fn removal_order(selected: &[&MealItem], violation: Violation) -> Vec<usize> {
    let mut order: Vec<usize> = (0..selected.len()).collect();
    order.sort_by(|&a, &b| match violation {
        Violation::Kcal => selected[b].kcal.total_cmp(&selected[a].kcal),
        Violation::Budget => selected[b].price.total_cmp(&selected[a].price),
    });
    order
}

/// First swap found for the highest-priority item: scans each candidate's
/// slot bucket in ranked order and takes the first improving replacement.
fn find_swap<'a>(
    selected: &[&'a MealItem],
    buckets: &SlotBuckets<'a>,
    violation: Violation,
) -> Option<(u32, &'a MealItem)> {
    for idx in removal_order(selected, violation) {
        let current = selected[idx];
        let Some(slot) = current.slot() else {
            continue;
        };

        let replacement = buckets.bucket(slot).iter().copied().find(|option| {
            !selected.iter().any(|s| s.id == option.id) && improves(current, option, violation)
        });

        if let Some(option) = replacement {
            return Some((current.id, option));
        }
    }
    None
}

/// Swap or drop items until the menu fits under the kcal ceiling and the
/// budget, the iteration budget runs out, or no move is possible.
pub fn repair<'a>(
    selected: &mut Vec<&'a MealItem>,
    buckets: &SlotBuckets<'a>,
    bounds: RepairBounds,
) -> RepairReport {
    let mut steps = Vec::new();

    for _ in 0..MAX_REPAIR_ITERATIONS {
        let before = Totals::of(selected.iter().copied());
        let Some(violation) = bounds.violation(before) else {
            return RepairReport {
                steps,
                exit: RepairExit::Satisfied,
            };
        };

        let action = if let Some((removed, option)) = find_swap(selected, buckets, violation) {
            if let Some(pos) = selected.iter().position(|s| s.id == removed) {
                selected[pos] = option;
            }
            RepairMove::Swap {
                removed,
                added: option.id,
            }
        } else if let Some(pos) = selected.iter().position(|s| s.is_snack()) {
            let dropped = selected.remove(pos);
            RepairMove::DropSnack {
                removed: dropped.id,
            }
        } else {
            warn!(
                %violation,
                kcal = before.kcal,
                price = before.price,
                "no improving move left, keeping plan as is"
            );
            return RepairReport {
                steps,
                exit: RepairExit::Stuck,
            };
        };

        let after = Totals::of(selected.iter().copied());
        debug!(%violation, ?action, kcal = after.kcal, price = after.price, "repair move");
        steps.push(RepairStep {
            violation,
            action,
            before,
            after,
        });
    }

    let exit = match bounds.violation(Totals::of(selected.iter().copied())) {
        None => RepairExit::Satisfied,
        Some(violation) => {
            warn!(%violation, "repair iteration budget exhausted");
            RepairExit::Exhausted
        }
    };
    RepairReport { steps, exit }
}
