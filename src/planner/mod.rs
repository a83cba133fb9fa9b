pub mod aggregation;
pub mod constants;
pub mod quantity;
pub mod schedule;

pub use aggregation::{aggregate_ingredients, recompute_shopping_list};
pub use constants::*;
pub use quantity::{capitalize_first, format_quantity, normalize_key, parse_quantity};
pub use schedule::{DayPlan, MealPlan};
