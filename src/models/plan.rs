use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::RecipeFlowError;
use crate::models::Recipe;

/// Meal slot within a day. Lunch sorts before dinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MealType {
    Lunch,
    Dinner,
}

impl MealType {
    pub fn label(&self) -> &'static str {
        match self {
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MealType {
    type Err = RecipeFlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            other => Err(RecipeFlowError::InvalidInput(format!(
                "unknown meal type '{}' (expected lunch or dinner)",
                other
            ))),
        }
    }
}

/// One recipe assigned to a calendar date and meal slot.
///
/// Holds a snapshot of the recipe, not a live reference: edits must be
/// pushed in through `MealPlan::replace_recipe_everywhere`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedRecipe {
    pub date: NaiveDate,

    pub recipe: Recipe,

    pub meal_type: MealType,
}

impl PlannedRecipe {
    pub fn new(date: NaiveDate, meal_type: MealType, recipe: Recipe) -> Self {
        Self {
            date,
            recipe,
            meal_type,
        }
    }

    /// Whether this entry occupies the given slot.
    #[inline]
    pub fn occupies(&self, date: NaiveDate, meal_type: MealType) -> bool {
        self.date == date && self.meal_type == meal_type
    }
}
