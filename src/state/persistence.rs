use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::models::{PlannedRecipe, Recipe, ShoppingListItem};
use crate::planner::{MealPlan, PLANNED_RECIPES_FILE, RECIPES_FILE, SHOPPING_LIST_FILE};
use crate::state::{AppState, RecipeBook};

/// Locations of the three storage files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub recipes: PathBuf,
    pub planned_recipes: PathBuf,
    pub shopping_list: PathBuf,
}

impl DataPaths {
    /// Standard file names inside `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            recipes: dir.join(RECIPES_FILE),
            planned_recipes: dir.join(PLANNED_RECIPES_FILE),
            shopping_list: dir.join(SHOPPING_LIST_FILE),
        }
    }
}

/// Read a JSON list. A missing file is an empty list.
fn load_list<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<Vec<T>> {
    let path = path.as_ref();
    if !path.exists() {
        debug!("{} does not exist, starting empty", path.display());
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write a JSON list, creating the parent directory if needed.
fn save_list<T: Serialize, P: AsRef<Path>>(path: P, items: &[T]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(items)?;
    fs::write(path, json)?;
    debug!("Wrote {} entries to {}", items.len(), path.display());
    Ok(())
}

/// Load recipes from a JSON file.
pub fn load_recipes<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    load_list(path)
}

/// Save recipes to a JSON file.
pub fn save_recipes<P: AsRef<Path>>(path: P, recipes: &[Recipe]) -> Result<()> {
    save_list(path, recipes)
}

/// Load planned recipes from a JSON file.
pub fn load_planned_recipes<P: AsRef<Path>>(path: P) -> Result<Vec<PlannedRecipe>> {
    load_list(path)
}

/// Save planned recipes to a JSON file.
pub fn save_planned_recipes<P: AsRef<Path>>(path: P, planned: &[PlannedRecipe]) -> Result<()> {
    save_list(path, planned)
}

/// Load the shopping list from a JSON file.
pub fn load_shopping_list<P: AsRef<Path>>(path: P) -> Result<Vec<ShoppingListItem>> {
    load_list(path)
}

/// Save the shopping list to a JSON file.
pub fn save_shopping_list<P: AsRef<Path>>(path: P, items: &[ShoppingListItem]) -> Result<()> {
    save_list(path, items)
}

/// Load the whole application state.
pub fn load_state(paths: &DataPaths) -> Result<AppState> {
    let recipes = RecipeBook::new(load_recipes(&paths.recipes)?);
    let plan = MealPlan::new(load_planned_recipes(&paths.planned_recipes)?);
    let shopping_list = load_shopping_list(&paths.shopping_list)?;

    info!(
        "Loaded {} recipes, {} planned, {} shopping items",
        recipes.len(),
        plan.len(),
        shopping_list.len()
    );

    let mut state = AppState::new(recipes, plan, shopping_list);
    state.reconcile();
    Ok(state)
}

/// Save the whole application state.
///
/// The shopping list is written before the plan; if a later write fails,
/// `load_state` rebuilds the list from whatever plan made it to disk.
pub fn save_state(paths: &DataPaths, state: &AppState) -> Result<()> {
    save_shopping_list(&paths.shopping_list, state.shopping_list())?;
    save_planned_recipes(&paths.planned_recipes, state.plan().entries())?;
    save_recipes(&paths.recipes, &state.recipes().to_recipes())?;
    Ok(())
}
