/// Parse a free-text quantity as a number.
///
/// Only finite decimal literals count ("300", "1.5", " 2 "). Fractions like
/// "1/2" and phrases like "a pinch" are treated as non-numeric.
pub fn parse_quantity(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Format a summed quantity: "3" for 3.0, "2.5" for 2.5.
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        (value as i64).to_string()
    } else {
        value.to_string()
    }
}

/// Grouping key for ingredient names and units.
///
/// Unicode lower-casing is locale independent, so the same input groups the
/// same way on every machine.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Title-case form of one character.
///
/// Differs from upper case for the Latin digraphs (ǆ -> ǅ) and for characters
/// whose upper case expands, where only the first letter stays capital
/// (ß -> Ss, ﬁ -> Fi).
fn titlecase_char(c: char) -> String {
    match c {
        'Ǆ' | 'ǅ' | 'ǆ' => "ǅ".to_string(),
        'Ǉ' | 'ǈ' | 'ǉ' => "ǈ".to_string(),
        'Ǌ' | 'ǋ' | 'ǌ' => "ǋ".to_string(),
        'Ǳ' | 'ǲ' | 'ǳ' => "ǲ".to_string(),
        _ => {
            let mut upper = c.to_uppercase();
            match upper.next() {
                Some(first) => std::iter::once(first)
                    .chain(upper.flat_map(char::to_lowercase))
                    .collect(),
                None => c.to_string(),
            }
        }
    }
}

/// Title-case the first character only.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = titlecase_char(first);
            out.extend(chars);
            out
        }
        None => String::new(),
    }
}

/// Render one literal `quantity unit` entry, skipping the unit when empty.
pub fn render_literal(quantity: &str, unit: &str) -> String {
    if unit.is_empty() {
        quantity.to_string()
    } else {
        format!("{} {}", quantity, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::*;

    #[test]
    fn test_parse_quantity_numeric() {
        assert_float_absolute_eq!(parse_quantity("300").unwrap(), 300.0, 1e-9);
        assert_float_absolute_eq!(parse_quantity("1.5").unwrap(), 1.5, 1e-9);
        assert_float_absolute_eq!(parse_quantity(" 2 ").unwrap(), 2.0, 1e-9);
    }

    #[test]
    fn test_parse_quantity_non_numeric() {
        assert!(parse_quantity("a pinch").is_none());
        assert!(parse_quantity("1/2").is_none());
        assert!(parse_quantity("").is_none());
        assert!(parse_quantity("NaN").is_none());
        assert!(parse_quantity("inf").is_none());
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(3.0), "3");
        assert_eq!(format_quantity(150.0), "150");
        assert_eq!(format_quantity(2.5), "2.5");
        assert_eq!(format_quantity(-0.0), "0");
    }

    #[test]
    fn test_normalize_and_capitalize() {
        assert_eq!(normalize_key("  Salt "), "salt");
        assert_eq!(normalize_key("ÉCLAIR"), "éclair");
        assert_eq!(capitalize_first("olive oil"), "Olive oil");
        assert_eq!(capitalize_first("ñame"), "Ñame");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_capitalize_uses_titlecase() {
        assert_eq!(capitalize_first("ßalz"), "Ssalz");
        assert_eq!(capitalize_first("ǆem"), "ǅem");
        assert_eq!(capitalize_first("ǉubljana"), "ǈubljana");
        assert_eq!(capitalize_first("ﬁg"), "Fig");
        assert_eq!(capitalize_first("1 egg"), "1 egg");
    }

    #[test]
    fn test_render_literal() {
        assert_eq!(render_literal("a pinch", "cup"), "a pinch cup");
        assert_eq!(render_literal("to taste", ""), "to taste");
    }
}
