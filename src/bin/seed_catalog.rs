use std::path::PathBuf;

use clap::Parser;

use vitacode_rs::catalog::{load_catalog, save_catalog, seed_demo, RecipeCatalog};
use vitacode_rs::logging;

#[derive(Parser, Debug)]
#[command(name = "seed_catalog")]
#[command(about = "Write the demo recipes into a catalog file")]
struct Args {
    /// Catalog JSON file to create or update
    #[arg(long, default_value = "catalog.json")]
    catalog: PathBuf,

    /// Replace the file instead of merging into it
    #[arg(long)]
    fresh: bool,

    /// Log each upsert
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    logging::init("info", args.verbose);

    let mut catalog = if args.catalog.exists() && !args.fresh {
        match load_catalog(&args.catalog) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("Failed to read {}: {}", args.catalog.display(), e);
                std::process::exit(1);
            }
        }
    } else {
        RecipeCatalog::default()
    };

    let before = catalog.len();
    let added = match seed_demo(&mut catalog) {
        Ok(added) => added,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = save_catalog(&args.catalog, &catalog) {
        eprintln!("Failed to write {}: {}", args.catalog.display(), e);
        std::process::exit(1);
    }

    println!(
        "{}: {} recipes ({} before, {} new)",
        args.catalog.display(),
        catalog.len(),
        before,
        added
    );
}
