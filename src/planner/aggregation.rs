use std::collections::HashMap;

use crate::models::{Ingredient, PlannedRecipe, ShoppingListItem};
use crate::planner::constants::QUANTITY_SEPARATOR;
use crate::planner::quantity::{
    capitalize_first, format_quantity, normalize_key, parse_quantity, render_literal,
};

/// Entries grouped by key, in order of first occurrence.
struct OrderedGroups<'a> {
    index: HashMap<String, usize>,
    groups: Vec<(String, Vec<&'a Ingredient>)>,
}

impl<'a> OrderedGroups<'a> {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            groups: Vec::new(),
        }
    }

    fn push(&mut self, key: String, ingredient: &'a Ingredient) {
        match self.index.get(&key) {
            Some(&i) => self.groups[i].1.push(ingredient),
            None => {
                self.index.insert(key.clone(), self.groups.len());
                self.groups.push((key, vec![ingredient]));
            }
        }
    }

    fn group_by<I, F>(ingredients: I, key: F) -> Vec<(String, Vec<&'a Ingredient>)>
    where
        I: IntoIterator<Item = &'a Ingredient>,
        F: Fn(&Ingredient) -> String,
    {
        let mut grouped = Self::new();
        for ingredient in ingredients {
            grouped.push(key(ingredient), ingredient);
        }
        grouped.groups
    }
}

/// Combine the entries of one (name, unit) group into a display string.
///
/// All-numeric groups are summed and shown with the first entry's unit.
/// If any quantity is not a number nothing is summed: each entry is listed
/// as written (trimmed) so no information is lost.
fn combine_unit_group(entries: &[&Ingredient]) -> String {
    let parsed: Option<Vec<f64>> = entries
        .iter()
        .map(|ingredient| parse_quantity(&ingredient.quantity))
        .collect();

    match parsed {
        Some(values) => {
            let sum: f64 = values.iter().sum();
            let unit = entries.first().map(|i| i.unit.trim()).unwrap_or_default();
            render_literal(&format_quantity(sum), unit)
        }
        None => entries
            .iter()
            .map(|ingredient| render_literal(ingredient.quantity.trim(), ingredient.unit.trim()))
            .collect::<Vec<_>>()
            .join(QUANTITY_SEPARATOR),
    }
}

/// Render every ingredient of the planned recipes as shopping-list lines.
///
/// One line per case-insensitive ingredient name, in order of first
/// appearance, e.g. `"Flour: 150 g, 2 cup"`. Every line is unchecked and
/// not custom.
pub fn aggregate_ingredients(planned: &[PlannedRecipe]) -> Vec<ShoppingListItem> {
    let all_ingredients = planned.iter().flat_map(|p| p.recipe.ingredients.iter());
    let by_name = OrderedGroups::group_by(all_ingredients, |i| normalize_key(&i.name));

    by_name
        .into_iter()
        .map(|(name, entries)| {
            let quantities = OrderedGroups::group_by(entries, |i| normalize_key(&i.unit))
                .iter()
                .map(|(_, unit_entries)| combine_unit_group(unit_entries))
                .collect::<Vec<_>>()
                .join(QUANTITY_SEPARATOR);

            ShoppingListItem::derived(format!("{}: {}", capitalize_first(&name), quantities))
        })
        .collect()
}

/// Rebuild the shopping list for the current meal plan.
///
/// Derived items are regenerated from scratch (and therefore unchecked);
/// custom items from `existing` follow them untouched, in their original
/// order. Pure and total: never fails, touches no storage.
pub fn recompute_shopping_list(
    planned: &[PlannedRecipe],
    existing: &[ShoppingListItem],
) -> Vec<ShoppingListItem> {
    let mut items = aggregate_ingredients(planned);
    items.extend(existing.iter().filter(|item| item.is_custom).cloned());
    items
}
