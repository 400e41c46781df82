pub mod calculations;
pub mod constants;
pub mod day;
pub mod fill;
pub mod partition;
pub mod regime;
pub mod repair;
pub mod selection;
pub mod used;
pub mod week;

pub use calculations::{round_to, target_per_slot, Totals};
pub use constants::*;
pub use day::{generate_day, generate_day_report, plan_day, DayReport};
pub use fill::{fill_up, FillBounds};
pub use partition::SlotBuckets;
pub use regime::Regime;
pub use repair::{repair, RepairBounds, RepairExit, RepairMove, RepairReport, RepairStep, Violation};
pub use selection::{pick_main, pick_snack, select_initial};
pub use used::UsedIdSet;
pub use week::{aggregate_days, plan_week};
