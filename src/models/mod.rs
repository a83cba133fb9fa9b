pub mod plan;
pub mod recipe;
pub mod shopping;

pub use plan::{MealType, PlannedRecipe};
pub use recipe::{Ingredient, Recipe};
pub use shopping::ShoppingListItem;
