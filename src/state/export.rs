use std::path::Path;

use crate::error::Result;
use crate::models::ShoppingListItem;

/// Write the shopping list to a CSV file.
pub fn write_shopping_list_csv<P: AsRef<Path>>(items: &[ShoppingListItem], path: P) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["item", "checked", "custom"])?;
    for item in items {
        wtr.write_record([
            item.text.as_str(),
            if item.is_checked { "true" } else { "false" },
            if item.is_custom { "true" } else { "false" },
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_csv_quotes_commas() {
        let items = vec![
            ShoppingListItem::derived("Milk: 2 cup, 100 ml".to_string()),
            ShoppingListItem::custom("Napkins".to_string()),
        ];

        let file = NamedTempFile::new().unwrap();
        write_shopping_list_csv(&items, file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "item,checked,custom");
        assert_eq!(lines[1], "\"Milk: 2 cup, 100 ml\",false,false");
        assert_eq!(lines[2], "Napkins,false,true");
    }
}
