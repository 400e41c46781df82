use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::PlanRequest;
use crate::planner::DEFAULT_WEEK_DAYS;

/// VitaCode: builds daily and weekly menus within a calorie target and budget.
#[derive(Parser, Debug)]
#[command(name = "vitacode")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a TOML config file (default: vitacode.toml if present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the recipe catalog JSON file.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Path to the profile and saved-plan store.
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Log filter, e.g. `info` or `vitacode_rs=debug`.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log planner decisions at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search the recipe catalog.
    Recipes(RecipeArgs),

    /// Plan a single day.
    Day {
        #[command(flatten)]
        plan: PlanArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Plan several consecutive days without repeating dishes where possible.
    Week {
        #[command(flatten)]
        plan: PlanArgs,

        /// Number of days (1-14).
        #[arg(long, default_value_t = DEFAULT_WEEK_DAYS)]
        days: u32,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Manage stored profiles.
    #[command(subcommand)]
    Profile(ProfileCommand),

    /// Plan from a stored profile's energy target, budget and allergies.
    PlanProfile {
        /// Profile id.
        id: u32,

        /// Plan a week instead of a single day.
        #[arg(long)]
        week: bool,

        /// Number of days when planning a week (1-14).
        #[arg(long, default_value_t = DEFAULT_WEEK_DAYS)]
        days: u32,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Answer a few questions and get a plan.
    Guided {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Browse saved plans.
    #[command(subcommand)]
    Plans(PlansCommand),
}

impl Default for Command {
    fn default() -> Self {
        Command::Guided {
            output: OutputArgs::default(),
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct RecipeArgs {
    /// Only this meal slot (breakfast, lunch, dinner, snack).
    #[arg(long)]
    pub slot: Option<String>,

    #[arg(long)]
    pub min_kcal: Option<f64>,

    #[arg(long)]
    pub max_kcal: Option<f64>,

    #[arg(long)]
    pub max_price: Option<f64>,

    /// Required diet tags, comma-separated.
    #[arg(long, value_delimiter = ',')]
    pub diet: Vec<String>,

    /// Allergens to exclude, comma-separated.
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,
}

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Daily energy target in kcal.
    #[arg(long)]
    pub kcal: u32,

    /// Daily budget (default from config).
    #[arg(long)]
    pub budget: Option<f64>,

    /// Number of snacks per day.
    #[arg(long, default_value_t = 0)]
    pub snacks: u32,

    /// Required diet tags, comma-separated.
    #[arg(long, value_delimiter = ',')]
    pub diet: Vec<String>,

    /// Allergens to exclude, comma-separated.
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,
}

impl PlanArgs {
    pub fn to_request(&self, default_budget: f64) -> PlanRequest {
        PlanRequest::new(self.kcal, self.budget.unwrap_or(default_budget))
            .with_snacks(self.snacks)
            .with_diet_tags(self.diet.iter().map(|t| t.trim().to_lowercase()))
            .with_excluded_allergens(self.exclude.iter().map(|a| a.trim().to_lowercase()))
    }
}

#[derive(Args, Debug, Default)]
pub struct OutputArgs {
    /// Write the plan as CSV to this path.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Save the plan to the store.
    #[arg(long)]
    pub save: bool,
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Create a profile interactively.
    New,

    /// Show one profile.
    Show { id: u32 },

    /// List all profiles, newest first.
    List,

    /// Delete a profile.
    Delete { id: u32 },
}

#[derive(Subcommand, Debug)]
pub enum PlansCommand {
    /// List saved plans, newest first.
    List {
        /// Only plans of this profile.
        #[arg(long)]
        user: Option<u32>,
    },

    /// Show one saved plan.
    Show { id: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_args_build_request() {
        let cli = Cli::parse_from([
            "vitacode", "day", "--kcal", "1800", "--snacks", "2", "--diet", "Vegan, standard",
            "--exclude", "nuts",
        ]);
        match cli.command {
            Some(Command::Day { plan, output }) => {
                let request = plan.to_request(150.0);
                assert_eq!(request.kcal, 1800);
                assert_eq!(request.budget, 150.0);
                assert_eq!(request.snacks, 2);
                assert!(request.diet_tags.contains("vegan"));
                assert!(request.diet_tags.contains("standard"));
                assert!(request.exclude_allergens.contains("nuts"));
                assert!(output.export.is_none());
                assert!(!output.save);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "vitacode", "week", "--kcal", "2000", "--days", "3", "--catalog", "c.json", "-v",
        ]);
        assert_eq!(cli.catalog, Some(PathBuf::from("c.json")));
        assert!(cli.verbose);
        assert!(cli.log_level.is_none());
        assert!(matches!(cli.command, Some(Command::Week { days: 3, .. })));
    }

    #[test]
    fn test_log_level_flag() {
        let cli = Cli::parse_from(["vitacode", "plans", "list", "--log-level", "info"]);
        assert_eq!(cli.log_level.as_deref(), Some("info"));
        assert!(matches!(cli.command, Some(Command::Plans(PlansCommand::List { user: None }))));
    }

    #[test]
    fn test_plan_profile_week_flag() {
        let cli = Cli::parse_from(["vitacode", "plan-profile", "4", "--week", "--save"]);
        match cli.command {
            Some(Command::PlanProfile { id, week, days, output }) => {
                assert_eq!(id, 4);
                assert!(week);
                assert_eq!(days, DEFAULT_WEEK_DAYS);
                assert!(output.save);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_missing_command_defaults_to_guided() {
        let cli = Cli::parse_from(["vitacode"]);
        assert!(cli.command.is_none());
        assert!(matches!(Command::default(), Command::Guided { .. }));
    }
}
