use tracing::debug;

use crate::models::MealItem;
use crate::planner::calculations::Totals;

/// Bounds the fill-up pass must respect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillBounds {
    /// Stop adding once the total reaches this.
    pub min_kcal: f64,
    /// Never add an item that would push the total above this.
    pub max_kcal: f64,
    pub budget: f64,
}

/// Top up an undershooting menu from the whole pool, heaviest first (cheaper
/// on ties). Items already on the menu may be added again. Single pass;
/// returns the ids added in order.
pub fn fill_up<'a>(
    selected: &mut Vec<&'a MealItem>,
    pool: &'a [MealItem],
    bounds: FillBounds,
) -> Vec<u32> {
    let mut added = Vec::new();
    if Totals::of(selected.iter().copied()).kcal >= bounds.min_kcal {
        return added;
    }

    let mut candidates: Vec<&'a MealItem> = pool.iter().collect();
    candidates.sort_by(|a, b| b.kcal.total_cmp(&a.kcal).then(a.price.total_cmp(&b.price)));

    for candidate in candidates {
        let totals = Totals::of(selected.iter().copied());
        if totals.kcal >= bounds.min_kcal {
            break;
        }
        if totals.price + candidate.price > bounds.budget {
            continue;
        }
        if totals.kcal + candidate.kcal > bounds.max_kcal {
            continue;
        }

        debug!(
            item_id = candidate.id,
            kcal = candidate.kcal,
            price = candidate.price,
            "fill-up adds item"
        );
        selected.push(candidate);
        added.push(candidate.id);
    }

    added
}
