use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::models::{DaySelection, MealSlot};
use crate::planner::round_to;

/// Byte order mark so spreadsheet apps pick UTF-8.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

const COLUMNS: [&str; 9] = [
    "Type",
    "Name",
    "Ingredients",
    "Weight (g)",
    "Kcal",
    "Protein",
    "Fat",
    "Carbs",
    "Price",
];

fn slot_label(meal_type: &str) -> String {
    MealSlot::parse(meal_type)
        .map(|slot| slot.label().to_string())
        .unwrap_or_else(|| meal_type.to_string())
}

/// Write day plans as CSV blocks: per day a title, the column header, one row
/// per grouped dish and a day total; then the period total and a footer.
pub fn write_plan_csv<W: Write>(mut out: W, days: &[DaySelection], is_week: bool) -> Result<()> {
    out.write_all(UTF8_BOM)?;

    let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(out);
    let mut total_kcal = 0.0;
    let mut total_price = 0.0;

    for (i, day) in days.iter().enumerate() {
        if is_week {
            wtr.write_record([format!("--- DAY {} ---", i + 1)])?;
        } else {
            wtr.write_record(["--- MEAL PLAN ---"])?;
        }
        wtr.write_record(COLUMNS)?;

        for row in day.grouped() {
            wtr.write_record([
                slot_label(&row.meal_type),
                row.display_name(),
                row.description.clone(),
                format!("{:.0}", row.weight_g),
                round_to(row.kcal, 1).to_string(),
                round_to(row.protein_g, 1).to_string(),
                round_to(row.fat_g, 1).to_string(),
                round_to(row.carbs_g, 1).to_string(),
                round_to(row.price, 2).to_string(),
            ])?;
        }

        let (protein, fat, carbs) = day.macros();
        let day_kcal = round_to(day.summary.kcal, 1);
        let day_price = round_to(day.summary.price, 2);
        wtr.write_record([
            "DAY TOTAL".to_string(),
            String::new(),
            String::new(),
            String::new(),
            day_kcal.to_string(),
            round_to(protein, 1).to_string(),
            round_to(fat, 1).to_string(),
            round_to(carbs, 1).to_string(),
            day_price.to_string(),
        ])?;
        wtr.write_record([""])?;

        total_kcal += day_kcal;
        total_price += day_price;
    }

    wtr.write_record([""])?;
    wtr.write_record([
        "PERIOD TOTAL".to_string(),
        String::new(),
        String::new(),
        String::new(),
        round_to(total_kcal, 0).to_string(),
        String::new(),
        String::new(),
        String::new(),
        round_to(total_price, 2).to_string(),
    ])?;
    wtr.write_record(["VitaCode Generator", "", "", "", "", "", "", "", ""])?;
    wtr.flush()?;
    Ok(())
}

/// Write a CSV export to `path`.
pub fn export_plan_csv<P: AsRef<Path>>(path: P, days: &[DaySelection], is_week: bool) -> Result<()> {
    let file = File::create(path)?;
    write_plan_csv(file, days, is_week)
}
