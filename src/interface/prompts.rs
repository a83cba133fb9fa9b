use dialoguer::{Confirm, Select};
use strsim::jaro_winkler;

use crate::error::{RecipeFlowError, Result};
use crate::models::Recipe;
use crate::planner::constants::{FUZZY_MATCH_THRESHOLD, FUZZY_MAX_CANDIDATES};

/// Recipes whose title resembles `query`, best match first.
pub fn fuzzy_candidates<'a>(recipes: &[&'a Recipe], query: &str) -> Vec<&'a Recipe> {
    let query = query.trim().to_lowercase();

    let mut candidates: Vec<(&Recipe, f64)> = recipes
        .iter()
        .map(|r| (*r, jaro_winkler(&r.title.to_lowercase(), &query)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates
        .into_iter()
        .take(FUZZY_MAX_CANDIDATES)
        .map(|(r, _)| r)
        .collect()
}

/// Resolve a recipe argument: numeric id, exact title, then fuzzy title.
pub fn resolve_recipe(recipes: &[&Recipe], query: &str) -> Result<u32> {
    let query = query.trim();

    if let Ok(id) = query.parse::<u32>() {
        return recipes
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.id)
            .ok_or(RecipeFlowError::RecipeNotFound(id));
    }

    // Try exact match first (case-insensitive)
    if let Some(recipe) = recipes
        .iter()
        .find(|r| r.title.to_lowercase() == query.to_lowercase())
    {
        return Ok(recipe.id);
    }

    let candidates = fuzzy_candidates(recipes, query);
    match candidates.as_slice() {
        [] => Err(RecipeFlowError::InvalidInput(format!(
            "No recipe matching '{}'",
            query
        ))),
        [only] => {
            let confirm = prompt_yes_no(&format!("Did you mean '{}'?", only.title), true)?;
            if confirm {
                Ok(only.id)
            } else {
                Err(RecipeFlowError::InvalidInput("No recipe selected".to_string()))
            }
        }
        _ => select_recipe(&candidates, "Which did you mean?"),
    }
}

/// Let the user pick one recipe from a list.
pub fn select_recipe(recipes: &[&Recipe], prompt: &str) -> Result<u32> {
    if recipes.is_empty() {
        return Err(RecipeFlowError::InvalidInput(
            "No recipes to choose from".to_string(),
        ));
    }

    let options: Vec<String> = recipes
        .iter()
        .map(|r| format!("{} (#{})", r.title, r.id))
        .collect();

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&options)
        .default(0)
        .interact()?;

    Ok(recipes[selection].id)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
