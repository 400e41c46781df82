use std::collections::BTreeSet;

use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{Result, VitaError};
use crate::models::{Goal, Profile, Sex};

/// Similarity above which a typed allergen is offered as a suggestion.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Outcome of matching typed text against known allergen tags.
#[derive(Debug, Clone, PartialEq)]
pub enum AllergenMatch {
    Exact(String),
    /// Suggestions, best first (at most five).
    Similar(Vec<String>),
    Unknown,
}

/// Match user input against known allergen tags, case-insensitively.
pub fn match_allergen(input: &str, known: &BTreeSet<String>) -> AllergenMatch {
    let needle = input.trim().to_lowercase();

    if let Some(exact) = known.iter().find(|k| k.to_lowercase() == needle) {
        return AllergenMatch::Exact(exact.clone());
    }

    let mut candidates: Vec<(&String, f64)> = known
        .iter()
        .map(|k| (k, jaro_winkler(&k.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();
    candidates.sort_by(|a, b| b.1.total_cmp(&a.1));

    if candidates.is_empty() {
        AllergenMatch::Unknown
    } else {
        AllergenMatch::Similar(candidates.into_iter().take(5).map(|(k, _)| k.clone()).collect())
    }
}

fn prompt_number<T: std::str::FromStr>(prompt: &str, default: &str) -> Result<T> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| VitaError::InvalidRequest(format!("'{}' is not a valid number", input)))
}

/// Prompt for allergies one at a time, suggesting close catalog tags.
pub fn prompt_allergies(known: &BTreeSet<String>) -> Result<BTreeSet<String>> {
    let mut allergies = BTreeSet::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Allergen to avoid (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        match match_allergen(input, known) {
            AllergenMatch::Exact(tag) => {
                println!("Added: {}", tag);
                allergies.insert(tag);
            }
            AllergenMatch::Similar(options) if options.len() == 1 => {
                let confirm = Confirm::new()
                    .with_prompt(format!("Did you mean '{}'?", options[0]))
                    .default(true)
                    .interact()?;
                if confirm {
                    println!("Added: {}", options[0]);
                    allergies.insert(options[0].clone());
                }
            }
            AllergenMatch::Similar(options) => {
                let mut items = options.clone();
                items.push("None of these".to_string());

                let selection = Select::new()
                    .with_prompt("Which did you mean?")
                    .items(&items)
                    .default(0)
                    .interact()?;

                if let Some(tag) = options.get(selection) {
                    println!("Added: {}", tag);
                    allergies.insert(tag.clone());
                }
            }
            AllergenMatch::Unknown => {
                // Still excluded; the catalog may gain such recipes later.
                let tag = input.to_lowercase();
                println!("'{}' is not used by any recipe yet, added anyway.", tag);
                allergies.insert(tag);
            }
        }
    }

    Ok(allergies)
}

/// Collect a full profile interactively.
pub fn collect_profile(known_allergens: &BTreeSet<String>) -> Result<Profile> {
    let sex_options = ["male", "female"];
    let sex = Select::new()
        .with_prompt("Sex")
        .items(&sex_options)
        .default(0)
        .interact()?;

    let age: u32 = prompt_number("Age (years)", "30")?;
    let height_cm: f64 = prompt_number("Height (cm)", "175")?;
    let weight_kg: f64 = prompt_number("Weight (kg)", "75")?;
    let activity_factor: f64 = prompt_number("Activity factor (1.2 - 1.9)", "1.4")?;
    let budget_per_day: f64 = prompt_number("Budget per day", "200")?;

    let goal_options = ["lose", "maintain", "gain"];
    let goal = Select::new()
        .with_prompt("Goal")
        .items(&goal_options)
        .default(1)
        .interact()?;

    let allergies = prompt_allergies(known_allergens)?;

    Ok(Profile {
        sex: Sex::parse_lenient(sex_options[sex]),
        age,
        height_cm,
        weight_kg,
        activity_factor,
        budget_per_day,
        goal: Goal::parse_lenient(goal_options[goal]),
        allergies,
    })
}

/// Ask whether to plan a single day or a week.
pub fn prompt_week_mode() -> Result<bool> {
    let options = ["One day", "One week"];
    let selection = Select::new()
        .with_prompt("Plan for")
        .items(&options)
        .default(0)
        .interact()?;
    Ok(selection == 1)
}

pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
