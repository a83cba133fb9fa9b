pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{RecipeFlowError, Result};
pub use models::{Ingredient, MealType, PlannedRecipe, Recipe, ShoppingListItem};
pub use planner::{recompute_shopping_list, MealPlan};
pub use state::AppState;
