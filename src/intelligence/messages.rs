use crate::models::{ComparisonReason, MatchedBy, NutrientKey, Unit};

use super::helpers::{format_amount, format_percent};

/// Summary line builder. One line per reason, short and factual.
pub struct MessageTemplates;

impl MessageTemplates {
    /// "Allergen: milk (via warning)" / "Allergen: milk (via alias: \"whey\")".
    pub fn allergen(term: &str, matched_by: MatchedBy, snippet: &str) -> String {
        format!("Allergen: {} ({})", term, Self::provenance(matched_by, snippet))
    }

    pub fn intolerance(term: &str, matched_by: MatchedBy, snippet: &str) -> String {
        format!("Intolerance: {} ({})", term, Self::provenance(matched_by, snippet))
    }

    /// "Dietary: high-sodium — sodium 820mg ≈ 36% DV (≥ 20%)".
    pub fn dietary(
        term: &str,
        field: NutrientKey,
        value: f64,
        unit: Unit,
        percent_of_dv: f64,
        threshold: f64,
    ) -> String {
        format!(
            "Dietary: {} \u{2014} {} {}{} \u{2248} {}% DV (\u{2265} {}%)",
            term,
            field,
            format_amount(value),
            unit,
            format_percent(percent_of_dv),
            format_percent(threshold),
        )
    }

    fn provenance(matched_by: MatchedBy, snippet: &str) -> String {
        match matched_by {
            MatchedBy::Warning => "via warning".to_string(),
            MatchedBy::Alias => format!("via alias: \"{}\"", snippet),
        }
    }

    pub fn render(reason: &ComparisonReason) -> String {
        match reason {
            ComparisonReason::Allergen {
                term,
                matched_by,
                snippet,
            } => Self::allergen(term, *matched_by, snippet),
            ComparisonReason::Intolerance {
                term,
                matched_by,
                snippet,
            } => Self::intolerance(term, *matched_by, snippet),
            ComparisonReason::Dietary {
                term,
                field,
                value,
                unit,
                percent_of_dv,
                threshold,
                ..
            } => Self::dietary(term, *field, *value, *unit, *percent_of_dv, *threshold),
        }
    }
}
