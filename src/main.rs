use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDate};
use clap::Parser;
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use recipe_flow_rs::cli::{Cli, Command};
use recipe_flow_rs::error::{RecipeFlowError, Result};
use recipe_flow_rs::interface::{
    display_calendar, display_recipe, display_recipe_list, display_shopping_list, prompt_yes_no,
    resolve_recipe, select_recipe,
};
use recipe_flow_rs::models::{MealType, Recipe};
use recipe_flow_rs::state::{load_state, save_state, write_shopping_list_csv, AppState, DataPaths};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn run(cli: Cli) -> Result<()> {
    let paths = cli.data_paths();
    let mut state = load_state(&paths)?;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::List => display_shopping_list(state.shopping_list()),
        Command::Recipes => display_recipe_list(&state.recipes().list()),
        Command::Show { id } => {
            let recipe = state
                .recipes()
                .get(id)
                .ok_or(RecipeFlowError::RecipeNotFound(id))?;
            display_recipe(recipe);
        }
        Command::Plan { date, meal, recipe } => cmd_plan(&paths, &mut state, date, meal, recipe)?,
        Command::Unplan { date, meal } => {
            let removed = state.unplan(date, meal);
            save_state(&paths, &state)?;

            match removed {
                Some(removed) => {
                    println!("Removed '{}' from {} {}.", removed.recipe.title, date, meal)
                }
                None => println!("Nothing planned for {} {}.", date, meal),
            }
        }
        Command::Calendar { from, days } => {
            let from = from.unwrap_or_else(|| Local::now().date_naive());
            display_calendar(&state.plan().days(from, days));
        }
        Command::Add { text } => {
            let added = state.add_custom_item(&text)?.text.clone();
            save_state(&paths, &state)?;
            println!("Added '{}'.", added);
        }
        Command::Check { number } => cmd_set_checked(&paths, &mut state, number, true)?,
        Command::Uncheck { number } => cmd_set_checked(&paths, &mut state, number, false)?,
        Command::Remove { number } => {
            let removed = state.remove_item(item_index(number)?)?;
            save_state(&paths, &state)?;
            println!("Removed '{}'.", removed.text);
        }
        Command::Clear { yes } => {
            if yes || prompt_yes_no("Clear the meal plan and the shopping list?", false)? {
                state.clear_all();
                save_state(&paths, &state)?;
                println!("Meal plan and shopping list cleared.");
            }
        }
        Command::EditRecipe { file } => cmd_edit_recipe(&paths, &mut state, &file)?,
        Command::DeleteRecipe { id } => {
            let (deleted, removed) = state.delete_recipe(id)?;
            save_state(&paths, &state)?;
            println!("Deleted '{}' and {} planned meal(s).", deleted.title, removed);
        }
        Command::Export { path } => {
            write_shopping_list_csv(state.shopping_list(), &path)?;
            println!("Exported {} items to {}.", state.shopping_list().len(), path.display());
        }
        Command::Refresh => {
            state.refresh();
            save_state(&paths, &state)?;
            display_shopping_list(state.shopping_list());
        }
    }

    Ok(())
}

/// Convert a 1-based item number into a list index.
fn item_index(number: usize) -> Result<usize> {
    number
        .checked_sub(1)
        .ok_or_else(|| RecipeFlowError::InvalidInput("Item numbers start at 1".to_string()))
}

/// Plan a recipe, picking it interactively when no recipe was given.
fn cmd_plan(
    paths: &DataPaths,
    state: &mut AppState,
    date: NaiveDate,
    meal: MealType,
    recipe: Option<String>,
) -> Result<()> {
    let recipes = state.recipes().list();
    let recipe_id = match recipe {
        Some(query) => resolve_recipe(&recipes, &query)?,
        None => select_recipe(&recipes, &format!("Recipe for {} {}", date, meal))?,
    };

    let replaced = state.plan_recipe(date, meal, recipe_id)?;
    save_state(paths, state)?;

    if let Some(previous) = replaced {
        println!("Replaced '{}'.", previous.recipe.title);
    }

    if let Some(planned) = state.plan().slot(date, meal) {
        println!("Planned '{}' for {} {}.", planned.title, date, meal);
    }
    Ok(())
}

fn cmd_set_checked(
    paths: &DataPaths,
    state: &mut AppState,
    number: usize,
    checked: bool,
) -> Result<()> {
    let text = state.set_checked(item_index(number)?, checked)?.text.clone();
    save_state(paths, state)?;

    let mark = if checked { "x" } else { " " };
    println!("[{}] {}", mark, text);
    Ok(())
}

/// Save a recipe from a JSON file: id 0 creates, any other id updates.
fn cmd_edit_recipe(paths: &DataPaths, state: &mut AppState, file: &Path) -> Result<()> {
    let content = fs::read_to_string(file)?;
    let recipe: Recipe = serde_json::from_str(&content)?;

    if recipe.id == 0 {
        let id = state.add_recipe(recipe)?;
        save_state(paths, state)?;
        println!("Created recipe #{}.", id);
    } else {
        let id = recipe.id;
        let updated = state.update_recipe(id, recipe)?;
        save_state(paths, state)?;
        println!("Saved recipe #{} ({} planned meal(s) updated).", id, updated);
    }
    Ok(())
}
