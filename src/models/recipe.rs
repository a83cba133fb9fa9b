use serde::{Deserialize, Serialize};

/// A single recipe's use of a foodstuff.
///
/// `quantity` is free text: "300", "1.5", "1/2" and "a pinch" are all valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(rename = "ingredientName", alias = "name")]
    pub name: String,

    #[serde(default)]
    pub quantity: String,

    #[serde(default)]
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: &str, quantity: &str, unit: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity: quantity.to_string(),
            unit: unit.to_string(),
        }
    }
}

/// A recipe as handed out by the recipe source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,

    pub title: String,

    #[serde(default)]
    pub ingredients: Vec<Ingredient>,

    #[serde(default)]
    pub steps: Vec<String>,
}

impl Recipe {
    pub fn new(id: u32, title: &str, ingredients: Vec<Ingredient>) -> Self {
        Self {
            id,
            title: title.to_string(),
            ingredients,
            steps: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_uses_backend_field_names() {
        let json = serde_json::to_value(Ingredient::new("Flour", "100", "g")).unwrap();
        assert_eq!(json["ingredientName"], "Flour");
        assert_eq!(json["quantity"], "100");
        assert_eq!(json["unit"], "g");
    }

    #[test]
    fn test_recipe_deserializes_with_missing_lists() {
        let json = r#"{"id": 4, "title": "Toast", "ingredients": [{"name": "Bread", "quantity": "2"}]}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.id, 4);
        assert_eq!(recipe.ingredients[0].name, "Bread");
        assert_eq!(recipe.ingredients[0].unit, "");
        assert!(recipe.steps.is_empty());
    }
}
