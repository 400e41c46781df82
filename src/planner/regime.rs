use crate::planner::constants::*;

/// Ceiling and floor applied to the daily total, chosen from the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Regime {
    /// Maximum multiple of the target before repair kicks in.
    pub overflow_limit: f64,

    /// Fraction of the target below which the fill-up pass runs.
    pub fill_goal: f64,
}

impl Regime {
    /// Pick the regime for a target. Both breakpoints are exclusive, so
    /// exactly 2000 and exactly 2800 land in the balanced regime.
    pub fn for_target(target_kcal: u32) -> Self {
        if target_kcal < REDUCTION_BREAKPOINT_KCAL {
            Self {
                overflow_limit: REDUCTION_OVERFLOW_LIMIT,
                fill_goal: REDUCTION_FILL_GOAL,
            }
        } else if target_kcal > SURPLUS_BREAKPOINT_KCAL {
            Self {
                overflow_limit: SURPLUS_OVERFLOW_LIMIT,
                fill_goal: SURPLUS_FILL_GOAL,
            }
        } else {
            Self {
                overflow_limit: BALANCED_OVERFLOW_LIMIT,
                fill_goal: BALANCED_FILL_GOAL,
            }
        }
    }

    /// Absolute kcal ceiling for `target`.
    #[inline]
    pub fn max_kcal(&self, target_kcal: u32) -> f64 {
        target_kcal as f64 * self.overflow_limit
    }

    /// Absolute kcal floor for `target`.
    #[inline]
    pub fn min_kcal(&self, target_kcal: u32) -> f64 {
        target_kcal as f64 * self.fill_goal
    }
}
