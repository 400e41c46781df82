// ─────────────────────────────────────────────────────────────────────────────
// Regime breakpoints and thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Targets strictly below this use the reduction regime.
pub const REDUCTION_BREAKPOINT_KCAL: u32 = 2000;

/// Targets strictly above this use the surplus regime.
pub const SURPLUS_BREAKPOINT_KCAL: u32 = 2800;

/// Reduction regime: strict ceiling (+3%), lenient floor (85%).
pub const REDUCTION_OVERFLOW_LIMIT: f64 = 1.03;
pub const REDUCTION_FILL_GOAL: f64 = 0.85;

/// Balanced regime: +5% ceiling, 90% floor.
pub const BALANCED_OVERFLOW_LIMIT: f64 = 1.05;
pub const BALANCED_FILL_GOAL: f64 = 0.90;

/// Surplus regime: lenient ceiling (+10%), strict floor (97%).
pub const SURPLUS_OVERFLOW_LIMIT: f64 = 1.10;
pub const SURPLUS_FILL_GOAL: f64 = 0.97;

// ─────────────────────────────────────────────────────────────────────────────
// Selection and repair
// ─────────────────────────────────────────────────────────────────────────────

/// Breakfast, lunch and dinner.
pub const MANDATORY_SLOTS: u32 = 3;

/// Maximum iterations of the repair loop.
pub const MAX_REPAIR_ITERATIONS: usize = 10;

/// A kcal-driven swap must cut more than this many kcal.
pub const MIN_KCAL_SWAP_GAIN: f64 = 20.0;

// ─────────────────────────────────────────────────────────────────────────────
// Week planning
// ─────────────────────────────────────────────────────────────────────────────

pub const MIN_WEEK_DAYS: u32 = 1;
pub const MAX_WEEK_DAYS: u32 = 14;
pub const DEFAULT_WEEK_DAYS: u32 = 7;
