use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VitaError};
use crate::planner::constants::{DEFAULT_WEEK_DAYS, MAX_WEEK_DAYS, MIN_WEEK_DAYS};

/// Input to one day-generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Daily energy target.
    pub kcal: u32,

    /// Daily budget in currency units.
    pub budget: f64,

    #[serde(default)]
    pub snacks: u32,

    /// Tags every recipe must carry. Empty means no filtering.
    #[serde(default)]
    pub diet_tags: BTreeSet<String>,

    /// Allergens no recipe may contain.
    #[serde(default)]
    pub exclude_allergens: BTreeSet<String>,
}

impl PlanRequest {
    pub fn new(kcal: u32, budget: f64) -> Self {
        Self {
            kcal,
            budget,
            snacks: 0,
            diet_tags: BTreeSet::new(),
            exclude_allergens: BTreeSet::new(),
        }
    }

    pub fn with_snacks(mut self, snacks: u32) -> Self {
        self.snacks = snacks;
        self
    }

    pub fn with_diet_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.diet_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_excluded_allergens<I, S>(mut self, allergens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_allergens = allergens.into_iter().map(Into::into).collect();
        self
    }

    /// Reject structurally impossible requests before any catalog access.
    pub fn validate(&self) -> Result<()> {
        if self.kcal == 0 {
            return Err(VitaError::InvalidRequest(
                "target kcal must be positive".to_string(),
            ));
        }
        if !self.budget.is_finite() || self.budget < 0.0 {
            return Err(VitaError::InvalidRequest(format!(
                "budget must be a non-negative number, got {}",
                self.budget
            )));
        }
        Ok(())
    }
}

/// A multi-day request: the same day request repeated `days` times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekRequest {
    #[serde(flatten)]
    pub day: PlanRequest,

    #[serde(default = "default_days")]
    pub days: u32,
}

fn default_days() -> u32 {
    DEFAULT_WEEK_DAYS
}

impl WeekRequest {
    pub fn new(day: PlanRequest, days: u32) -> Self {
        Self { day, days }
    }

    /// Day count clamped into the supported range.
    pub fn clamped_days(&self) -> u32 {
        self.days.clamp(MIN_WEEK_DAYS, MAX_WEEK_DAYS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_zero_budget() {
        assert!(PlanRequest::new(1800, 0.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_kcal() {
        let err = PlanRequest::new(0, 100.0).validate().unwrap_err();
        assert!(matches!(err, VitaError::InvalidRequest(_)));
    }

    #[test]
    fn test_validate_rejects_negative_budget() {
        assert!(PlanRequest::new(2000, -5.0).validate().is_err());
        assert!(PlanRequest::new(2000, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_clamped_days() {
        let day = PlanRequest::new(2000, 200.0);
        assert_eq!(WeekRequest::new(day.clone(), 0).clamped_days(), 1);
        assert_eq!(WeekRequest::new(day.clone(), 7).clamped_days(), 7);
        assert_eq!(WeekRequest::new(day, 30).clamped_days(), 14);
    }

    #[test]
    fn test_week_request_defaults_to_seven_days() {
        let json = r#"{"kcal": 2200, "budget": 250.0, "snacks": 1}"#;
        let request: WeekRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.days, 7);
        assert_eq!(request.day.snacks, 1);
        assert!(request.day.diet_tags.is_empty());
    }
}
