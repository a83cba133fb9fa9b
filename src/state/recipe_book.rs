use std::collections::BTreeMap;

use crate::error::{RecipeFlowError, Result};
use crate::models::Recipe;

/// Local catalog of recipes, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct RecipeBook {
    recipes: BTreeMap<u32, Recipe>,
}

impl RecipeBook {
    /// Create a book from a list of recipes (last duplicate id wins).
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: recipes.into_iter().map(|r| (r.id, r)).collect(),
        }
    }

    /// All recipes ordered by id.
    pub fn list(&self) -> Vec<&Recipe> {
        self.recipes.values().collect()
    }

    pub fn get(&self, id: u32) -> Option<&Recipe> {
        self.recipes.get(&id)
    }

    /// Store a new recipe under the next free id and return it.
    ///
    /// Ids are never reused, so a book whose highest id is `u32::MAX` is full.
    pub fn create(&mut self, mut recipe: Recipe) -> Result<&Recipe> {
        let id = match self.recipes.keys().next_back() {
            Some(last) => last.checked_add(1).ok_or_else(|| {
                RecipeFlowError::InvalidInput("No recipe ids left".to_string())
            })?,
            None => 1,
        };
        recipe.id = id;
        Ok(&*self.recipes.entry(id).or_insert(recipe))
    }

    /// Replace a stored recipe. The id inside `recipe` is forced to `id`.
    pub fn update(&mut self, id: u32, mut recipe: Recipe) -> Result<&Recipe> {
        let slot = self
            .recipes
            .get_mut(&id)
            .ok_or(RecipeFlowError::RecipeNotFound(id))?;
        recipe.id = id;
        *slot = recipe;
        Ok(&*slot)
    }

    pub fn delete(&mut self, id: u32) -> Result<Recipe> {
        self.recipes
            .remove(&id)
            .ok_or(RecipeFlowError::RecipeNotFound(id))
    }

    /// Convert to a list for JSON serialization.
    pub fn to_recipes(&self) -> Vec<Recipe> {
        self.recipes.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> RecipeBook {
        RecipeBook::new(vec![
            Recipe::new(3, "Pasta", Vec::new()),
            Recipe::new(1, "Soup", Vec::new()),
        ])
    }

    #[test]
    fn test_list_ordered_by_id() {
        let book = sample_book();
        let ids: Vec<u32> = book.list().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_create_assigns_next_id() {
        let mut book = sample_book();
        let created = book.create(Recipe::new(0, "Salad", Vec::new())).unwrap();
        assert_eq!(created.id, 4);

        let mut empty = RecipeBook::default();
        let first = empty.create(Recipe::new(99, "First", Vec::new())).unwrap();
        assert_eq!(first.id, 1);
    }

    #[test]
    fn test_create_fails_when_ids_exhausted() {
        let mut book = RecipeBook::new(vec![Recipe::new(u32::MAX, "Last", Vec::new())]);
        assert!(matches!(
            book.create(Recipe::new(0, "Overflow", Vec::new())),
            Err(RecipeFlowError::InvalidInput(_))
        ));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_update_and_delete() {
        let mut book = sample_book();
        let updated = book.update(1, Recipe::new(7, "Tomato Soup", Vec::new())).unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(book.get(1).unwrap().title, "Tomato Soup");

        assert!(matches!(
            book.update(42, Recipe::new(42, "Ghost", Vec::new())),
            Err(RecipeFlowError::RecipeNotFound(42))
        ));

        assert_eq!(book.delete(3).unwrap().title, "Pasta");
        assert!(book.delete(3).is_err());
        assert_eq!(book.len(), 1);
    }
}
