mod persistence;
mod seed;
mod source;

pub use persistence::{load_catalog, save_catalog};
pub use seed::{demo_recipes, seed_demo};
pub use source::{RecipeCatalog, RecipeQuery, RecipeSource};
