use crate::models::MealItem;

/// Running totals of a selection.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub kcal: f64,
    pub price: f64,
}

impl Totals {
    pub fn of<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a MealItem>,
    {
        items.into_iter().fold(Self::default(), |acc, item| Self {
            kcal: acc.kcal + item.kcal,
            price: acc.price + item.price,
        })
    }
}

/// Round to `decimals` places. Exact ties go to the even digit.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round_ties_even() / factor
}

/// Kcal each slot should carry when the target is spread evenly over the
/// three main meals plus every snack slot.
pub fn target_per_slot(target_kcal: u32, snacks: u32) -> f64 {
    let slots = crate::planner::constants::MANDATORY_SLOTS + snacks;
    target_kcal as f64 / slots.max(1) as f64
}
