use chrono::NaiveDate;
use log::{debug, info, warn};

use crate::error::{RecipeFlowError, Result};
use crate::models::{MealType, PlannedRecipe, Recipe, ShoppingListItem};
use crate::planner::{aggregate_ingredients, recompute_shopping_list, MealPlan};
use crate::state::RecipeBook;

/// Application state: recipes, the meal plan and the shopping list.
///
/// Every change to the plan or to a planned recipe rebuilds the derived part
/// of the shopping list before returning, so the list never holds lines from
/// an older plan. Mutations take `&mut self` and are therefore serialized.
pub struct AppState {
    recipes: RecipeBook,
    plan: MealPlan,
    shopping_list: Vec<ShoppingListItem>,
}

impl AppState {
    /// Assemble state as loaded from storage.
    ///
    /// The shopping list is taken as-is; see `reconcile` to check it
    /// against the plan and `refresh` to rebuild it.
    pub fn new(recipes: RecipeBook, plan: MealPlan, shopping_list: Vec<ShoppingListItem>) -> Self {
        Self {
            recipes,
            plan,
            shopping_list,
        }
    }

    /// Rebuild the derived shopping-list lines from the current plan.
    pub fn refresh(&mut self) {
        self.shopping_list = recompute_shopping_list(self.plan.entries(), &self.shopping_list);
        debug!(
            "Recomputed shopping list: {} planned recipes -> {} items",
            self.plan.len(),
            self.shopping_list.len()
        );
    }

    /// Rebuild the shopping list if its derived lines do not match the plan.
    ///
    /// Returns whether a rebuild happened. A list that already matches is
    /// left alone so checked derived lines keep their marks.
    pub fn reconcile(&mut self) -> bool {
        let expected = aggregate_ingredients(self.plan.entries());
        let stored = self.shopping_list.iter().filter(|item| !item.is_custom);

        let matches = stored
            .map(|item| &item.text)
            .eq(expected.iter().map(|item| &item.text));
        if matches {
            return false;
        }

        warn!("Stored shopping list is out of date with the meal plan, rebuilding");
        self.refresh();
        true
    }

    /// Plan a recipe from the book into a slot, replacing whatever was there.
    pub fn plan_recipe(
        &mut self,
        date: NaiveDate,
        meal_type: MealType,
        recipe_id: u32,
    ) -> Result<Option<PlannedRecipe>> {
        let snapshot = self
            .recipes
            .get(recipe_id)
            .cloned()
            .ok_or(RecipeFlowError::RecipeNotFound(recipe_id))?;

        info!("Planning '{}' for {} {}", snapshot.title, date, meal_type);
        let replaced = self.plan.add_planned_recipe(date, meal_type, snapshot);
        if let Some(previous) = &replaced {
            debug!("Replaced '{}' in {} {}", previous.recipe.title, date, meal_type);
        }

        self.refresh();
        Ok(replaced)
    }

    /// Clear a slot. A no-op on an empty slot.
    pub fn unplan(&mut self, date: NaiveDate, meal_type: MealType) -> Option<PlannedRecipe> {
        let removed = self.plan.remove_planned_recipe(date, meal_type);
        if removed.is_some() {
            info!("Removed {} {} from the plan", date, meal_type);
        }
        self.refresh();
        removed
    }

    /// Add a new recipe to the book. Returns its assigned id.
    pub fn add_recipe(&mut self, recipe: Recipe) -> Result<u32> {
        let id = self.recipes.create(recipe)?.id;
        info!("Created recipe {}", id);
        Ok(id)
    }

    /// Save an edited recipe and push the new version into the plan.
    ///
    /// Returns how many planned entries were updated.
    pub fn update_recipe(&mut self, id: u32, recipe: Recipe) -> Result<usize> {
        let saved = self.recipes.update(id, recipe)?.clone();
        let updated = self.plan.replace_recipe_everywhere(id, &saved);
        info!("Updated recipe {} ({} planned entries)", id, updated);

        self.refresh();
        Ok(updated)
    }

    /// Delete a recipe and everything planned with it.
    ///
    /// Returns the deleted recipe and how many planned entries went with it.
    pub fn delete_recipe(&mut self, id: u32) -> Result<(Recipe, usize)> {
        let deleted = self.recipes.delete(id)?;
        let removed = self.plan.remove_recipe_everywhere(id);
        info!("Deleted recipe {} ({} planned entries)", id, removed);

        self.refresh();
        Ok((deleted, removed))
    }

    /// Append a hand-written item to the shopping list.
    pub fn add_custom_item(&mut self, text: &str) -> Result<&ShoppingListItem> {
        let text = text.trim();
        if text.is_empty() {
            return Err(RecipeFlowError::InvalidInput(
                "Shopping list item cannot be empty".to_string(),
            ));
        }

        self.shopping_list.push(ShoppingListItem::custom(text.to_string()));
        Ok(&self.shopping_list[self.shopping_list.len() - 1])
    }

    /// Tick or untick an item by position.
    pub fn set_checked(&mut self, index: usize, checked: bool) -> Result<&ShoppingListItem> {
        let item = self
            .shopping_list
            .get_mut(index)
            .ok_or(RecipeFlowError::ItemNotFound(index))?;
        item.is_checked = checked;
        Ok(&*item)
    }

    /// Remove an item by position.
    ///
    /// A derived item removed this way comes back on the next recompute or
    /// the next `reconcile`.
    pub fn remove_item(&mut self, index: usize) -> Result<ShoppingListItem> {
        if index >= self.shopping_list.len() {
            return Err(RecipeFlowError::ItemNotFound(index));
        }
        Ok(self.shopping_list.remove(index))
    }

    /// Empty both the plan and the shopping list, custom items included.
    pub fn clear_all(&mut self) {
        self.plan.clear();
        self.shopping_list.clear();
        info!("Cleared meal plan and shopping list");
    }

    pub fn recipes(&self) -> &RecipeBook {
        &self.recipes
    }

    pub fn plan(&self) -> &MealPlan {
        &self.plan
    }

    pub fn shopping_list(&self) -> &[ShoppingListItem] {
        &self.shopping_list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ingredient;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    fn sample_book() -> RecipeBook {
        RecipeBook::new(vec![
            Recipe::new(1, "Omelette", vec![
                Ingredient::new("Eggs", "3", "whole"),
                Ingredient::new("Salt", "a pinch", ""),
            ]),
            Recipe::new(2, "Pancakes", vec![
                Ingredient::new("eggs", "2", "whole"),
                Ingredient::new("Flour", "200", "g"),
            ]),
        ])
    }

    fn sample_state() -> AppState {
        AppState::new(sample_book(), MealPlan::default(), Vec::new())
    }

    fn texts(state: &AppState) -> Vec<&str> {
        state.shopping_list().iter().map(|i| i.text.as_str()).collect()
    }

    #[test]
    fn test_plan_recipe_recomputes() {
        let mut state = sample_state();
        state.plan_recipe(date(1), MealType::Lunch, 1).unwrap();
        state.plan_recipe(date(1), MealType::Dinner, 2).unwrap();

        assert_eq!(
            texts(&state),
            vec!["Eggs: 5 whole", "Salt: a pinch", "Flour: 200 g"]
        );
    }

    #[test]
    fn test_plan_unknown_recipe_fails() {
        let mut state = sample_state();
        assert!(matches!(
            state.plan_recipe(date(1), MealType::Lunch, 9),
            Err(RecipeFlowError::RecipeNotFound(9))
        ));
        assert!(state.plan().is_empty());
    }

    #[test]
    fn test_update_recipe_propagates_to_plan() {
        let mut state = sample_state();
        state.plan_recipe(date(1), MealType::Lunch, 1).unwrap();
        state.plan_recipe(date(2), MealType::Lunch, 1).unwrap();

        let edited = Recipe::new(1, "Omelette", vec![Ingredient::new("Eggs", "4", "whole")]);
        assert_eq!(state.update_recipe(1, edited).unwrap(), 2);
        assert_eq!(texts(&state), vec!["Eggs: 8 whole"]);
    }

    #[test]
    fn test_delete_recipe_keeps_custom_items() {
        let mut state = sample_state();
        state.plan_recipe(date(1), MealType::Lunch, 1).unwrap();
        state.add_custom_item("Coffee").unwrap();
        state.set_checked(2, true).unwrap();

        let (deleted, removed) = state.delete_recipe(1).unwrap();
        assert_eq!(deleted.title, "Omelette");
        assert_eq!(removed, 1);
        assert_eq!(state.shopping_list().len(), 1);
        assert_eq!(state.shopping_list()[0].text, "Coffee");
        assert!(state.shopping_list()[0].is_checked);
    }

    #[test]
    fn test_custom_item_validation_and_indexing() {
        let mut state = sample_state();
        assert!(state.add_custom_item("   ").is_err());
        assert!(state.set_checked(0, true).is_err());

        state.add_custom_item(" Bread ").unwrap();
        assert_eq!(state.shopping_list()[0].text, "Bread");
        assert!(matches!(state.remove_item(3), Err(RecipeFlowError::ItemNotFound(3))));
        assert_eq!(state.remove_item(0).unwrap().text, "Bread");
    }

    #[test]
    fn test_reconcile_keeps_matching_list() {
        let mut state = sample_state();
        state.plan_recipe(date(1), MealType::Lunch, 2).unwrap();
        state.add_custom_item("Milk").unwrap();
        state.set_checked(0, true).unwrap();

        assert!(!state.reconcile());
        assert!(state.shopping_list()[0].is_checked);
    }

    #[test]
    fn test_reconcile_rebuilds_stale_list() {
        let stale = vec![
            ShoppingListItem::derived("Eggs: 99 whole".to_string()),
            ShoppingListItem::custom("Milk".to_string()),
        ];
        let book = sample_book();
        let mut plan = MealPlan::default();
        plan.add_planned_recipe(date(1), MealType::Lunch, book.get(1).unwrap().clone());
        let mut state = AppState::new(book, plan, stale);

        assert!(state.reconcile());
        assert_eq!(texts(&state), vec!["Eggs: 3 whole", "Salt: a pinch", "Milk"]);
    }

    #[test]
    fn test_add_recipe_assigns_id() {
        let mut state = sample_state();
        let id = state.add_recipe(Recipe::new(0, "Toast", Vec::new())).unwrap();
        assert_eq!(id, 3);
        assert_eq!(state.recipes().get(3).unwrap().title, "Toast");
    }

    #[test]
    fn test_clear_all() {
        let mut state = sample_state();
        state.plan_recipe(date(1), MealType::Lunch, 2).unwrap();
        state.add_custom_item("Milk").unwrap();

        state.clear_all();
        assert!(state.plan().is_empty());
        assert!(state.shopping_list().is_empty());
    }
}
