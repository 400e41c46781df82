use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, VitaError};
use crate::models::Profile;

use super::records::{PlanKind, ProfileRecord, SavedMeal, SavedPlan};

/// Profiles and saved plans, persisted together as one JSON document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Store {
    #[serde(default)]
    profiles: Vec<ProfileRecord>,

    #[serde(default)]
    plans: Vec<SavedPlan>,
}

impl Store {
    /// Load the store from `path`; a missing file yields an empty store.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "store file missing, starting empty");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Profiles
    // ─────────────────────────────────────────────────────────────────────

    /// Store a profile with freshly computed metrics.
    pub fn create_profile(&mut self, profile: Profile) -> Result<&ProfileRecord> {
        if profile.age == 0
            || profile.height_cm <= 0.0
            || profile.weight_kg <= 0.0
            || profile.activity_factor <= 0.0
        {
            return Err(VitaError::InvalidRequest(
                "age, height, weight and activity factor must be positive".to_string(),
            ));
        }

        let id = self.profiles.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let metrics = profile.metrics();
        self.profiles.push(ProfileRecord {
            id,
            profile,
            metrics,
        });
        Ok(&self.profiles[self.profiles.len() - 1])
    }

    pub fn get_profile(&self, id: u32) -> Result<&ProfileRecord> {
        self.profiles
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| VitaError::NotFound(format!("profile #{}", id)))
    }

    /// Profiles, newest first.
    pub fn list_profiles(&self) -> Vec<&ProfileRecord> {
        let mut profiles: Vec<&ProfileRecord> = self.profiles.iter().collect();
        profiles.sort_by(|a, b| b.id.cmp(&a.id));
        profiles
    }

    /// Remove a profile. Returns false when it did not exist.
    pub fn delete_profile(&mut self, id: u32) -> bool {
        let before = self.profiles.len();
        self.profiles.retain(|p| p.id != id);
        self.profiles.len() != before
    }

    // ─────────────────────────────────────────────────────────────────────
    // Saved plans
    // ─────────────────────────────────────────────────────────────────────

    /// Save a plan; totals are the sums over `meals`.
    pub fn create_plan(
        &mut self,
        kind: PlanKind,
        user_id: Option<u32>,
        meals: Vec<SavedMeal>,
    ) -> Result<&SavedPlan> {
        if meals.is_empty() {
            return Err(VitaError::InvalidRequest(
                "a saved plan needs at least one meal".to_string(),
            ));
        }

        let id = self.plans.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let total_kcal = meals.iter().map(|m| m.kcal).sum();
        let total_price = meals.iter().map(|m| m.price).sum();

        self.plans.push(SavedPlan {
            id,
            kind,
            user_id,
            total_kcal,
            total_price,
            meals,
        });
        Ok(&self.plans[self.plans.len() - 1])
    }

    pub fn get_plan(&self, id: u32) -> Result<&SavedPlan> {
        self.plans
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| VitaError::NotFound(format!("plan #{}", id)))
    }

    /// Saved plans, newest first, optionally only those of one user.
    pub fn list_plans(&self, user_id: Option<u32>) -> Vec<&SavedPlan> {
        let mut plans: Vec<&SavedPlan> = self
            .plans
            .iter()
            .filter(|p| user_id.is_none() || p.user_id == user_id)
            .collect();
        plans.sort_by(|a, b| b.id.cmp(&a.id));
        plans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Goal, Sex};

    fn sample_profile() -> Profile {
        Profile {
            sex: Sex::Female,
            age: 28,
            height_cm: 165.0,
            weight_kg: 60.0,
            activity_factor: 1.4,
            budget_per_day: 220.0,
            goal: Goal::Lose,
            allergies: Default::default(),
        }
    }

    fn meal(day_index: u32, kcal: f64, price: f64) -> SavedMeal {
        SavedMeal {
            day_index,
            name: "Banana".to_string(),
            meal_type: "snack".to_string(),
            kcal,
            protein_g: 1.5,
            fat_g: 0.5,
            carbs_g: 27.0,
            price,
            weight_g: 120.0,
            description: String::new(),
        }
    }

    #[test]
    fn test_create_profile_assigns_ids_and_metrics() {
        let mut store = Store::default();
        let first = store.create_profile(sample_profile()).unwrap().id;
        let record = store.create_profile(sample_profile()).unwrap();
        assert_eq!(first, 1);
        assert_eq!(record.id, 2);
        assert!(record.metrics.bmr > 0.0);
    }

    #[test]
    fn test_create_profile_rejects_nonsense() {
        let mut store = Store::default();
        let mut profile = sample_profile();
        profile.weight_kg = 0.0;
        assert!(matches!(
            store.create_profile(profile),
            Err(VitaError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_profile_lookup_and_delete() {
        let mut store = Store::default();
        store.create_profile(sample_profile()).unwrap();
        store.create_profile(sample_profile()).unwrap();

        let ids: Vec<u32> = store.list_profiles().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);

        assert!(store.delete_profile(1));
        assert!(!store.delete_profile(1));
        assert!(matches!(store.get_profile(1), Err(VitaError::NotFound(_))));
    }

    #[test]
    fn test_create_plan_rejects_empty_meals() {
        let mut store = Store::default();
        let err = store.create_plan(PlanKind::Day, None, Vec::new()).unwrap_err();
        assert!(matches!(err, VitaError::InvalidRequest(_)));
    }

    #[test]
    fn test_create_plan_sums_totals() {
        let mut store = Store::default();
        let plan = store
            .create_plan(PlanKind::Week, Some(3), vec![meal(1, 120.0, 15.0), meal(2, 250.0, 35.0)])
            .unwrap();
        assert_eq!(plan.total_kcal, 370.0);
        assert_eq!(plan.total_price, 50.0);
        assert_eq!(plan.kind, PlanKind::Week);
    }

    #[test]
    fn test_list_plans_filters_by_user() {
        let mut store = Store::default();
        store.create_plan(PlanKind::Day, Some(1), vec![meal(1, 100.0, 1.0)]).unwrap();
        store.create_plan(PlanKind::Day, Some(2), vec![meal(1, 100.0, 1.0)]).unwrap();
        store.create_plan(PlanKind::Day, Some(1), vec![meal(1, 100.0, 1.0)]).unwrap();

        let ids: Vec<u32> = store.list_plans(Some(1)).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(store.list_plans(None).len(), 3);
        assert!(store.get_plan(9).is_err());
    }
}
