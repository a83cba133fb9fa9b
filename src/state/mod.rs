mod export;
mod manager;
mod persistence;
mod recipe_book;

pub use export::write_shopping_list_csv;
pub use manager::AppState;
pub use persistence::{
    load_planned_recipes, load_recipes, load_shopping_list, load_state, save_planned_recipes,
    save_recipes, save_shopping_list, save_state, DataPaths,
};
pub use recipe_book::RecipeBook;
