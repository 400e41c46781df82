use std::collections::BTreeSet;
use std::path::Path;

use clap::Parser;

use vitacode_rs::catalog::{load_catalog, RecipeCatalog, RecipeQuery};
use vitacode_rs::cli::{Cli, Command, OutputArgs, PlansCommand, ProfileCommand, RecipeArgs};
use vitacode_rs::config::{AppConfig, Overrides};
use vitacode_rs::error::{Result, VitaError};
use vitacode_rs::export::export_plan_csv;
use vitacode_rs::interface::{
    collect_profile, display_day_plan, display_profile, display_recipes, display_saved_plan,
    display_saved_plans, display_week_plan, prompt_week_mode, prompt_yes_no,
};
use vitacode_rs::logging;
use vitacode_rs::models::{
    guided_day_request, profile_day_request, DaySelection, MealSlot, PlanRequest, WeekPlan,
    WeekRequest,
};
use vitacode_rs::planner::{plan_day, plan_week, DEFAULT_WEEK_DAYS};
use vitacode_rs::store::{day_meals, week_meals, PlanKind, SavedMeal, Store};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::resolve(
        cli.config.as_deref(),
        Overrides {
            catalog: cli.catalog.clone(),
            store: cli.store.clone(),
            log_level: cli.log_level.clone(),
        },
    )?;
    logging::init(&config.log_level, cli.verbose);

    let command = cli.command.unwrap_or_default();

    match command {
        Command::Recipes(args) => cmd_recipes(&config, &args),
        Command::Day { plan, output } => {
            let request = plan.to_request(config.default_budget);
            run_plan(&config, &request, None, None, &output)
        }
        Command::Week { plan, days, output } => {
            let request = plan.to_request(config.default_budget);
            run_plan(&config, &request, Some(days), None, &output)
        }
        Command::Profile(sub) => cmd_profile(&config, sub),
        Command::PlanProfile {
            id,
            week,
            days,
            output,
        } => cmd_plan_profile(&config, id, week.then_some(days), &output),
        Command::Guided { output } => cmd_guided(&config, &output),
        Command::Plans(sub) => cmd_plans(&config, sub),
    }
}

fn open_catalog(path: &Path) -> Result<RecipeCatalog> {
    if !path.exists() {
        return Err(VitaError::NotFound(format!(
            "recipe catalog {} (run seed_catalog to create it)",
            path.display()
        )));
    }
    load_catalog(path)
}

/// Allergen tags for prompt suggestions; empty when no catalog exists yet.
fn known_allergens(path: &Path) -> Result<BTreeSet<String>> {
    if !path.exists() {
        return Ok(BTreeSet::new());
    }
    Ok(load_catalog(path)?.known_allergens())
}

fn cmd_recipes(config: &AppConfig, args: &RecipeArgs) -> Result<()> {
    let catalog = open_catalog(&config.catalog)?;

    let slot = match &args.slot {
        Some(tag) => Some(MealSlot::parse(&tag.trim().to_lowercase()).ok_or_else(|| {
            VitaError::InvalidRequest(format!("unknown meal slot '{}'", tag))
        })?),
        None => None,
    };

    let query = RecipeQuery {
        slot,
        min_kcal: args.min_kcal,
        max_kcal: args.max_kcal,
        max_price: args.max_price,
        diet_tags: args.diet.iter().map(|t| t.trim().to_lowercase()).collect(),
        exclude_allergens: args.exclude.iter().map(|a| a.trim().to_lowercase()).collect(),
    };

    display_recipes(&catalog.search(&query));
    Ok(())
}

/// Generate, print, and optionally export/save a day (`days == None`) or
/// multi-day plan.
fn run_plan(
    config: &AppConfig,
    request: &PlanRequest,
    days: Option<u32>,
    user_id: Option<u32>,
    output: &OutputArgs,
) -> Result<()> {
    let catalog = open_catalog(&config.catalog)?;

    match days {
        None => {
            let day = plan_day(&catalog, request, None)?;
            display_day_plan(&day, "Meal plan", request.kcal, request.budget);
            finish_day(config, &day, user_id, output)
        }
        Some(days) => {
            let week = plan_week(&catalog, &WeekRequest::new(request.clone(), days))?;
            display_week_plan(&week, request.kcal, request.budget);
            finish_week(config, &week, user_id, output)
        }
    }
}

fn finish_day(
    config: &AppConfig,
    day: &DaySelection,
    user_id: Option<u32>,
    output: &OutputArgs,
) -> Result<()> {
    if let Some(path) = &output.export {
        export_plan_csv(path, std::slice::from_ref(day), false)?;
        println!("Exported to {}", path.display());
    }
    if output.save {
        save_plan(config, PlanKind::Day, user_id, day_meals(day))?;
    }
    Ok(())
}

fn finish_week(
    config: &AppConfig,
    week: &WeekPlan,
    user_id: Option<u32>,
    output: &OutputArgs,
) -> Result<()> {
    if let Some(path) = &output.export {
        export_plan_csv(path, &week.days, true)?;
        println!("Exported to {}", path.display());
    }
    if output.save {
        save_plan(config, PlanKind::Week, user_id, week_meals(week))?;
    }
    Ok(())
}

fn save_plan(
    config: &AppConfig,
    kind: PlanKind,
    user_id: Option<u32>,
    meals: Vec<SavedMeal>,
) -> Result<()> {
    let mut store = Store::open(&config.store)?;
    let id = store.create_plan(kind, user_id, meals)?.id;
    store.save(&config.store)?;
    println!("Plan saved as #{}", id);
    Ok(())
}

fn cmd_profile(config: &AppConfig, command: ProfileCommand) -> Result<()> {
    let mut store = Store::open(&config.store)?;

    match command {
        ProfileCommand::New => {
            let profile = collect_profile(&known_allergens(&config.catalog)?)?;
            let record = store.create_profile(profile)?.clone();
            store.save(&config.store)?;
            display_profile(&record);
            println!("Profile saved as #{}", record.id);
        }
        ProfileCommand::Show { id } => display_profile(store.get_profile(id)?),
        ProfileCommand::List => {
            let profiles = store.list_profiles();
            if profiles.is_empty() {
                println!("No profiles yet. Create one with 'vitacode profile new'.");
            }
            for record in profiles {
                display_profile(record);
            }
        }
        ProfileCommand::Delete { id } => {
            if !store.delete_profile(id) {
                return Err(VitaError::NotFound(format!("profile #{}", id)));
            }
            store.save(&config.store)?;
            println!("Profile #{} deleted.", id);
        }
    }

    Ok(())
}

fn cmd_plan_profile(
    config: &AppConfig,
    id: u32,
    days: Option<u32>,
    output: &OutputArgs,
) -> Result<()> {
    let store = Store::open(&config.store)?;
    let record = store.get_profile(id)?;
    let request = profile_day_request(&record.profile, &record.metrics);

    println!(
        "Planning for profile #{}: {} kcal, budget {:.2}",
        id, request.kcal, request.budget
    );
    run_plan(config, &request, days, Some(id), output)
}

fn cmd_guided(config: &AppConfig, output: &OutputArgs) -> Result<()> {
    println!("Tell us about yourself and we'll put a menu together.");
    println!();

    let profile = collect_profile(&known_allergens(&config.catalog)?)?;
    let metrics = profile.metrics();
    let request = guided_day_request(&profile, &metrics);

    println!();
    println!(
        "BMR {:.0} kcal, TDEE {:.0} kcal, daily target {} kcal",
        metrics.bmr, metrics.tdee, request.kcal
    );

    let days = prompt_week_mode()?.then_some(DEFAULT_WEEK_DAYS);
    let wants_save = output.save || prompt_yes_no("Save the plan afterwards?", false)?;
    let output = OutputArgs {
        export: output.export.clone(),
        save: wants_save,
    };

    run_plan(config, &request, days, None, &output)
}

fn cmd_plans(config: &AppConfig, command: PlansCommand) -> Result<()> {
    let store = Store::open(&config.store)?;

    match command {
        PlansCommand::List { user } => display_saved_plans(&store.list_plans(user)),
        PlansCommand::Show { id } => display_saved_plan(store.get_plan(id)?),
    }

    Ok(())
}
