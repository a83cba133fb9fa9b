/// Separator between quantities on one shopping-list line.
pub const QUANTITY_SEPARATOR: &str = ", ";

/// Minimum Jaro-Winkler similarity for a fuzzy recipe title match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum fuzzy candidates offered in a selection prompt.
pub const FUZZY_MAX_CANDIDATES: usize = 5;

/// Days shown by the calendar view when none are requested.
pub const DEFAULT_CALENDAR_DAYS: u32 = 7;

// ─────────────────────────────────────────────────────────────────────────────
// Storage file names inside the data directory
// ─────────────────────────────────────────────────────────────────────────────

pub const RECIPES_FILE: &str = "recipes.json";
pub const PLANNED_RECIPES_FILE: &str = "planned_recipes.json";
pub const SHOPPING_LIST_FILE: &str = "shopping_list.json";
