//! Label-to-value association for nutrition panels.
//!
//! Printed panels list the per-serving amount before any per-container
//! amount, so the first number after a nutrient's name approximates its
//! per-serving value without rebuilding the table. A label whose own text
//! contains an earlier number will associate the wrong value; that is a
//! known limitation of the heuristic.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::NutrientKey;

/// How to find one nutrient on a panel.
#[derive(Debug, Clone, Copy)]
pub struct NutrientLabel {
    pub key: NutrientKey,
    /// Case-insensitive pattern; may be an alternation.
    pub pattern: &'static str,
    /// Unit suffixes allowed to trail the number.
    pub units: &'static [&'static str],
}

pub const NUTRIENT_LABELS: &[NutrientLabel] = &[
    NutrientLabel { key: NutrientKey::Calories, pattern: "Calories", units: &[] },
    NutrientLabel { key: NutrientKey::Fat, pattern: "Total Fat", units: &["g"] },
    NutrientLabel {
        key: NutrientKey::SaturatedFat,
        pattern: r"Saturated Fat|Sat\.? Fat",
        units: &["g"],
    },
    NutrientLabel { key: NutrientKey::TransFat, pattern: "Trans Fat", units: &["g"] },
    NutrientLabel {
        key: NutrientKey::MonounsaturatedFat,
        pattern: "Monounsaturated Fat",
        units: &["g"],
    },
    NutrientLabel {
        key: NutrientKey::PolyunsaturatedFat,
        pattern: "Polyunsaturated Fat",
        units: &["g"],
    },
    NutrientLabel { key: NutrientKey::Cholesterol, pattern: "Cholesterol", units: &["mg"] },
    NutrientLabel { key: NutrientKey::Sodium, pattern: "Sodium", units: &["mg"] },
    NutrientLabel {
        key: NutrientKey::Carbohydrate,
        pattern: "Total Carbohydrate",
        units: &["g"],
    },
    NutrientLabel { key: NutrientKey::Fiber, pattern: "Dietary Fiber|Fiber", units: &["g"] },
    NutrientLabel { key: NutrientKey::Sugar, pattern: "Total Sugars|Sugars", units: &["g"] },
    NutrientLabel { key: NutrientKey::AddedSugars, pattern: "Added Sugars", units: &["g"] },
    NutrientLabel { key: NutrientKey::Protein, pattern: "Protein", units: &["g"] },
    NutrientLabel { key: NutrientKey::VitaminD, pattern: "Vitamin D", units: &["mcg", "IU"] },
    NutrientLabel { key: NutrientKey::Calcium, pattern: "Calcium", units: &["mg"] },
    NutrientLabel { key: NutrientKey::Iron, pattern: "Iron", units: &["mg"] },
    NutrientLabel { key: NutrientKey::Potassium, pattern: "Potassium", units: &["mg"] },
];

/// "Includes 10g Added Sugars": the amount precedes the label on current
/// US panels, and the number after it is the %DV.
static RE_INCLUDES_ADDED_SUGARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\bincludes[^\S\n]+((?:<[^\S\n]*)?\d+(?:\.\d+)?)[^\S\n]*(g\b)?[^\S\n]*added[^\S\n]+sugars\b",
    )
    .unwrap()
});

/// A decimal number, optionally with thousands groups, optionally behind a
/// less-than sign ("<1", "< 1", "<10").
const NUMBER_PATTERN: &str = r"(?:<[^\S\n]*)?(?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d+)?";

/// Compiled form of one `NutrientLabel`.
struct LabelMatcher {
    key: NutrientKey,
    label: Regex,
    value: Regex,
}

/// `NUTRIENT_LABELS` compiled once. Every table pattern is covered by
/// `every_nutrient_pattern_compiles`.
static LABEL_MATCHERS: LazyLock<Vec<LabelMatcher>> = LazyLock::new(|| {
    NUTRIENT_LABELS
        .iter()
        .map(|l| LabelMatcher {
            key: l.key,
            label: label_regex(l.pattern).unwrap(),
            value: value_regex(l.units).unwrap(),
        })
        .collect()
});

fn label_regex(label: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?i)\b(?:{label})\b"))
}

fn value_regex(units: &[&str]) -> Result<Regex, regex::Error> {
    if units.is_empty() {
        return Regex::new(&format!("(?i)(?:{NUMBER_PATTERN})"));
    }
    let alternatives = units
        .iter()
        .map(|u| regex::escape(u))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(
        r"(?i)(?:{NUMBER_PATTERN})(?:[^\S\n]*(?:{alternatives})\b)?"
    ))
}

fn first_value_after(text: &str, label: &Regex, value: &Regex) -> String {
    label
        .find(text)
        .and_then(|m| value.find(&text[m.end()..]))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Value token for a nutrient from the built-in table.
pub fn extract_nutrient_value(text: &str, key: NutrientKey) -> String {
    LABEL_MATCHERS
        .iter()
        .find(|m| m.key == key)
        .map(|m| first_value_after(text, &m.label, &m.value))
        .unwrap_or_default()
}

/// Find a caller-supplied `label` in normalized text and return the first
/// numeric token after it, including a trailing unit from `units` when one
/// is attached. Returns an empty string when the label or a following
/// number is absent. Table nutrients go through `extract_nutrient_value`,
/// which reuses compiled patterns.
pub fn extract_label_value(text: &str, label: &str, units: &[&str]) -> String {
    let label_re = match label_regex(label) {
        Ok(re) => re,
        Err(e) => {
            tracing::warn!(label, error = %e, "Invalid label pattern");
            return String::new();
        }
    };
    let value_re = match value_regex(units) {
        Ok(re) => re,
        Err(e) => {
            tracing::warn!(label, error = %e, "Invalid unit pattern");
            return String::new();
        }
    };
    first_value_after(text, &label_re, &value_re)
}

/// Added sugars, preferring the "Includes Xg Added Sugars" form.
pub fn extract_added_sugars(text: &str) -> String {
    if let Some(caps) = RE_INCLUDES_ADDED_SUGARS.captures(text) {
        let amount = caps.get(1).map_or("", |m| m.as_str());
        let unit = caps.get(2).map_or("", |m| m.as_str());
        return format!("{amount}{unit}");
    }
    extract_nutrient_value(text, NutrientKey::AddedSugars)
}
