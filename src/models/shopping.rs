use serde::{Deserialize, Serialize};

/// A line in the shopping list.
///
/// Derived items (`is_custom == false`) are regenerated from the meal plan on
/// every recompute; custom items are added by hand and survive recomputes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListItem {
    pub text: String,

    #[serde(default)]
    pub is_checked: bool,

    #[serde(default)]
    pub is_custom: bool,
}

impl ShoppingListItem {
    /// An item produced by ingredient aggregation.
    pub fn derived(text: String) -> Self {
        Self {
            text,
            is_checked: false,
            is_custom: false,
        }
    }

    /// An item added by hand.
    pub fn custom(text: String) -> Self {
        Self {
            text,
            is_checked: false,
            is_custom: true,
        }
    }
}
