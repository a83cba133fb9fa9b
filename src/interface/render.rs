use crate::models::{Recipe, ShoppingListItem};
use crate::planner::quantity::render_literal;
use crate::planner::DayPlan;

/// Display the shopping list with 1-based item numbers.
pub fn display_shopping_list(items: &[ShoppingListItem]) {
    if items.is_empty() {
        println!("Your shopping list is empty.");
        return;
    }

    println!();
    println!("=== Shopping List ===");
    println!();

    let width = items.len().to_string().len();
    for (i, item) in items.iter().enumerate() {
        let mark = if item.is_checked { "x" } else { " " };
        let tag = if item.is_custom { "  (custom)" } else { "" };
        println!("{:>width$}. [{}] {}{}", i + 1, mark, item.text, tag, width = width);
    }

    let checked = items.iter().filter(|i| i.is_checked).count();
    println!();
    println!("{} of {} items checked", checked, items.len());
    println!();
}

/// Display calendar days with their lunch and dinner slots.
pub fn display_calendar(days: &[DayPlan<'_>]) {
    println!();
    println!("=== Meal Plan ===");

    for day in days {
        println!();
        println!("{}", day.date.format("%A %Y-%m-%d"));
        println!("  Lunch:  {}", slot_label(day.lunch));
        println!("  Dinner: {}", slot_label(day.dinner));
    }

    println!();
}

fn slot_label(recipe: Option<&Recipe>) -> String {
    recipe
        .map(|r| format!("{} (#{})", r.title, r.id))
        .unwrap_or_else(|| "-".to_string())
}

/// Display a simple list of recipes.
pub fn display_recipe_list(recipes: &[&Recipe]) {
    if recipes.is_empty() {
        println!("No recipes yet.");
        return;
    }

    println!();
    println!("=== Recipes ({} items) ===", recipes.len());
    println!();

    for recipe in recipes {
        println!(
            "  #{:<4} {} - {} ingredients, {} steps",
            recipe.id,
            recipe.title,
            recipe.ingredients.len(),
            recipe.steps.len()
        );
    }

    println!();
}

/// Display a recipe with its ingredients and steps.
pub fn display_recipe(recipe: &Recipe) {
    println!();
    println!("=== {} (#{}) ===", recipe.title, recipe.id);
    println!();
    println!("Ingredients:");
    for ingredient in &recipe.ingredients {
        let amount = render_literal(ingredient.quantity.trim(), ingredient.unit.trim());
        println!("  - {} {}", amount, ingredient.name);
    }

    if !recipe.steps.is_empty() {
        println!();
        println!("Steps:");
        for (i, step) in recipe.steps.iter().enumerate() {
            println!("  {}. {}", i + 1, step);
        }
    }
    println!();
}
