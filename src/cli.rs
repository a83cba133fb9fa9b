use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::models::MealType;
use crate::planner::DEFAULT_CALENDAR_DAYS;
use crate::state::DataPaths;

/// RecipeFlow: plan recipes onto a calendar and build the shopping list.
#[derive(Parser, Debug)]
#[command(name = "recipe_flow")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding recipes.json, planned_recipes.json and shopping_list.json.
    #[arg(short, long, default_value = ".", global = true)]
    pub data_dir: PathBuf,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    pub fn data_paths(&self) -> DataPaths {
        DataPaths::in_dir(&self.data_dir)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the shopping list.
    List,

    /// List all recipes.
    Recipes,

    /// Show one recipe.
    Show {
        /// Recipe id.
        id: u32,
    },

    /// Plan a recipe for a date and meal (replaces what is already there).
    Plan {
        /// Date as YYYY-MM-DD.
        date: NaiveDate,

        /// lunch or dinner.
        meal: MealType,

        /// Recipe id or title. Prompts for a choice when omitted.
        recipe: Option<String>,
    },

    /// Remove the recipe planned for a date and meal.
    Unplan {
        /// Date as YYYY-MM-DD.
        date: NaiveDate,

        /// lunch or dinner.
        meal: MealType,
    },

    /// Show planned meals day by day.
    Calendar {
        /// First day to show (defaults to today).
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Number of days to show.
        #[arg(long, default_value_t = DEFAULT_CALENDAR_DAYS)]
        days: u32,
    },

    /// Add a custom item to the shopping list.
    Add {
        /// Item text.
        text: String,
    },

    /// Tick a shopping list item.
    Check {
        /// Item number as shown by `list`.
        number: usize,
    },

    /// Untick a shopping list item.
    Uncheck {
        /// Item number as shown by `list`.
        number: usize,
    },

    /// Remove a shopping list item.
    Remove {
        /// Item number as shown by `list`.
        number: usize,
    },

    /// Clear the meal plan and the whole shopping list.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },

    /// Replace a recipe with the contents of a JSON file (creates it if the id is 0).
    EditRecipe {
        /// Path to a recipe JSON file.
        file: PathBuf,
    },

    /// Delete a recipe and remove it from the plan.
    DeleteRecipe {
        /// Recipe id.
        id: u32,
    },

    /// Export the shopping list as CSV.
    Export {
        /// Output CSV path.
        path: PathBuf,
    },

    /// Rebuild the shopping list from the meal plan.
    Refresh,
}

impl Default for Command {
    fn default() -> Self {
        Command::List
    }
}
