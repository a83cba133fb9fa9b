use chrono::{Duration, NaiveDate};

use crate::models::{MealType, PlannedRecipe, Recipe};

/// One calendar day with its two meal slots.
#[derive(Debug, Clone)]
pub struct DayPlan<'a> {
    pub date: NaiveDate,
    pub lunch: Option<&'a Recipe>,
    pub dinner: Option<&'a Recipe>,
}

/// The set of planned recipes, at most one per (date, meal type).
///
/// Keeps insertion order, which is also the order ingredients are
/// aggregated in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MealPlan {
    entries: Vec<PlannedRecipe>,
}

impl MealPlan {
    /// Build a plan from stored entries.
    ///
    /// Later duplicates of a slot replace earlier ones, same as `add_planned_recipe`.
    pub fn new(entries: Vec<PlannedRecipe>) -> Self {
        let mut plan = Self::default();
        for entry in entries {
            plan.add_planned_recipe(entry.date, entry.meal_type, entry.recipe);
        }
        plan
    }

    /// Assign a recipe to a slot.
    ///
    /// An occupied slot is replaced in place and the previous entry returned.
    pub fn add_planned_recipe(
        &mut self,
        date: NaiveDate,
        meal_type: MealType,
        recipe: Recipe,
    ) -> Option<PlannedRecipe> {
        let planned = PlannedRecipe::new(date, meal_type, recipe);
        match self.entries.iter_mut().find(|p| p.occupies(date, meal_type)) {
            Some(slot) => Some(std::mem::replace(slot, planned)),
            None => {
                self.entries.push(planned);
                None
            }
        }
    }

    /// Clear a slot. Returns the removed entry, if there was one.
    pub fn remove_planned_recipe(
        &mut self,
        date: NaiveDate,
        meal_type: MealType,
    ) -> Option<PlannedRecipe> {
        let pos = self
            .entries
            .iter()
            .position(|p| p.occupies(date, meal_type))?;
        Some(self.entries.remove(pos))
    }

    /// Swap in a new snapshot of a recipe wherever it is planned.
    ///
    /// Returns the number of entries updated.
    pub fn replace_recipe_everywhere(&mut self, recipe_id: u32, snapshot: &Recipe) -> usize {
        let mut updated = 0;
        for entry in self.entries.iter_mut().filter(|p| p.recipe.id == recipe_id) {
            entry.recipe = snapshot.clone();
            updated += 1;
        }
        updated
    }

    /// Drop every entry that references a recipe. Returns how many were removed.
    pub fn remove_recipe_everywhere(&mut self, recipe_id: u32) -> usize {
        let before = self.entries.len();
        self.entries.retain(|p| p.recipe.id != recipe_id);
        before - self.entries.len()
    }

    /// Recipe planned for a slot.
    pub fn slot(&self, date: NaiveDate, meal_type: MealType) -> Option<&Recipe> {
        self.entries
            .iter()
            .find(|p| p.occupies(date, meal_type))
            .map(|p| &p.recipe)
    }

    /// Calendar view of `count` consecutive days starting at `from`.
    pub fn days(&self, from: NaiveDate, count: u32) -> Vec<DayPlan<'_>> {
        (0..count)
            .map(|offset| {
                let date = from + Duration::days(i64::from(offset));
                DayPlan {
                    date,
                    lunch: self.slot(date, MealType::Lunch),
                    dinner: self.slot(date, MealType::Dinner),
                }
            })
            .collect()
    }

    pub fn entries(&self) -> &[PlannedRecipe] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
