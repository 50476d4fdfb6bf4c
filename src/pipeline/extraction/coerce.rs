use std::sync::LazyLock;

use regex::Regex;

/// Value printed for "less than 1" amounts. A labeling convention, not a
/// measurement.
pub const LESS_THAN_ONE_SENTINEL: &str = "0.5";

static RE_TRAILING_UNIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:mcg|mg|g|iu)$").unwrap());
static RE_LESS_THAN_ONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^<1$").unwrap());
static RE_DECIMAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").unwrap());

/// Coerce a matched label token ("0.5g", "< 1 g", "1,200mg") into a plain
/// decimal string. Anything that does not contain a number becomes empty.
pub fn coerce_value(token: &str) -> String {
    let compact: String = token.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return String::new();
    }

    let without_unit = RE_TRAILING_UNIT.replace(&compact, "");
    if RE_LESS_THAN_ONE.is_match(&without_unit) {
        return LESS_THAN_ONE_SENTINEL.to_string();
    }

    let ungrouped = without_unit.replace(',', "");
    RE_DECIMAL
        .find(&ungrouped)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_unit_suffix() {
        assert_eq!(coerce_value("0.5g"), "0.5");
        assert_eq!(coerce_value("400mg"), "400");
        assert_eq!(coerce_value("2 mcg"), "2");
        assert_eq!(coerce_value("400IU"), "400");
        assert_eq!(coerce_value("12G"), "12");
    }

    #[test]
    fn less_than_one_is_sentinel() {
        assert_eq!(coerce_value("<1"), "0.5");
        assert_eq!(coerce_value("< 1"), "0.5");
        assert_eq!(coerce_value("<1g"), "0.5");
        assert_eq!(coerce_value("< 1 mg"), "0.5");
    }

    #[test]
    fn other_less_than_values_keep_their_number() {
        assert_eq!(coerce_value("<5mg"), "5");
        assert_eq!(coerce_value("<10"), "10");
    }

    #[test]
    fn plain_numbers_pass_through() {
        assert_eq!(coerce_value("110"), "110");
        assert_eq!(coerce_value("3.25"), "3.25");
    }

    #[test]
    fn thousands_separator_is_dropped() {
        assert_eq!(coerce_value("1,200mg"), "1200");
    }

    #[test]
    fn empty_and_non_numeric_become_empty() {
        assert_eq!(coerce_value(""), "");
        assert_eq!(coerce_value("   "), "");
        assert_eq!(coerce_value("mg"), "");
        assert_eq!(coerce_value("n/a"), "");
    }
}
