pub mod prompts;
pub mod render;

pub use prompts::{fuzzy_candidates, prompt_yes_no, resolve_recipe, select_recipe};
pub use render::{display_calendar, display_recipe, display_recipe_list, display_shopping_list};
