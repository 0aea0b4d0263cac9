//! Query-string parameter parsing.

use std::collections::HashMap;

/// Integer query parameter with a default.
///
/// Absent or non-numeric values fall back to `default`; malformed input is
/// never an error.
pub fn int_param(params: &HashMap<String, String>, key: &str, default: i64) -> i64 {
    params
        .get(key)
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn absent_key_uses_default() {
        assert_eq!(int_param(&params(&[]), "page", 1), 1);
    }

    #[test]
    fn numeric_value_is_parsed() {
        assert_eq!(int_param(&params(&[("page", "3")]), "page", 1), 3);
    }

    #[test]
    fn non_numeric_value_uses_default() {
        assert_eq!(int_param(&params(&[("page", "abc")]), "page", 1), 1);
        assert_eq!(int_param(&params(&[("limit", "1.5")]), "limit", 10), 10);
    }

    #[test]
    fn negative_values_parse_through() {
        // Range checks belong to the handler, not the parser.
        assert_eq!(int_param(&params(&[("page", "-2")]), "page", 1), -2);
    }
}
