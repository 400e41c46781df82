use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::request::PlanRequest;

/// Fallback target when a profile has no computed energy figures.
pub const FALLBACK_TARGET_KCAL: u32 = 2000;

/// Fallback daily budget when a profile has none.
pub const FALLBACK_BUDGET: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Lenient parse of form input; anything unrecognised is treated as male.
    pub fn parse_lenient(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "female" | "f" | "жіноча" | "жінка" => Sex::Female,
            _ => Sex::Male,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    #[default]
    Maintain,
    Gain,
}

impl Goal {
    /// Lenient parse of form input; anything unrecognised maps to maintain.
    pub fn parse_lenient(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "lose" | "схуднення" => Goal::Lose,
            "gain" | "набір" => Goal::Gain,
            _ => Goal::Maintain,
        }
    }

    /// Multiplier applied to TDEE.
    pub fn tdee_factor(&self) -> f64 {
        match self {
            Goal::Lose => 0.8,
            Goal::Maintain => 1.0,
            Goal::Gain => 1.15,
        }
    }

    /// Snack slots used by the guided planning flow.
    pub fn default_snacks(&self) -> u32 {
        match self {
            Goal::Lose => 0,
            Goal::Maintain => 1,
            Goal::Gain => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Goal::Lose => "Weight loss",
            Goal::Maintain => "Weight maintenance",
            Goal::Gain => "Weight gain",
        }
    }
}

/// Body data and preferences entered by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub sex: Sex,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_factor: f64,

    #[serde(default)]
    pub budget_per_day: f64,

    #[serde(default)]
    pub goal: Goal,

    #[serde(default)]
    pub allergies: BTreeSet<String>,
}

/// Energy figures derived from a profile.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileMetrics {
    pub bmr: f64,
    pub tdee: f64,
    pub target_kcal: f64,
}

/// Mifflin-St Jeor basal metabolic rate.
pub fn calc_bmr(sex: Sex, weight_kg: f64, height_cm: f64, age: u32) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64;
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

pub fn calc_tdee(bmr: f64, activity_factor: f64) -> f64 {
    bmr * activity_factor
}

impl Profile {
    /// BMR, TDEE and the goal-adjusted daily target (never below BMR).
    pub fn metrics(&self) -> ProfileMetrics {
        let bmr = calc_bmr(self.sex, self.weight_kg, self.height_cm, self.age);
        let tdee = calc_tdee(bmr, self.activity_factor);
        let target = bmr.max(tdee * self.goal.tdee_factor());

        ProfileMetrics {
            bmr,
            tdee,
            target_kcal: target.round_ties_even(),
        }
    }
}

impl ProfileMetrics {
    /// First positive figure among target, TDEE and BMR, else the fallback.
    pub fn effective_target(&self) -> u32 {
        [self.target_kcal, self.tdee, self.bmr]
            .into_iter()
            .find(|v| *v > 0.0)
            .map(|v| v as u32)
            .filter(|v| *v > 0)
            .unwrap_or(FALLBACK_TARGET_KCAL)
    }
}

/// Plain day request for a stored profile: no snacks, no diet tags,
/// profile allergies excluded.
pub fn profile_day_request(profile: &Profile, metrics: &ProfileMetrics) -> PlanRequest {
    let budget = if profile.budget_per_day > 0.0 {
        profile.budget_per_day
    } else {
        FALLBACK_BUDGET
    };

    PlanRequest::new(metrics.effective_target(), budget)
        .with_excluded_allergens(profile.allergies.iter().cloned())
}

/// Request used by the guided flow: goal-driven snack count and the
/// `standard` diet tag.
pub fn guided_day_request(profile: &Profile, metrics: &ProfileMetrics) -> PlanRequest {
    PlanRequest::new(metrics.target_kcal as u32, profile.budget_per_day)
        .with_snacks(profile.goal.default_snacks())
        .with_diet_tags(["standard"])
        .with_excluded_allergens(profile.allergies.iter().cloned())
}
