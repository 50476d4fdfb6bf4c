use serde::{Deserialize, Serialize};

use super::enums::{MatchedBy, NutrientKey, Unit};

/// Why a product was judged unsafe for a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ComparisonReason {
    Allergen {
        term: String,
        matched_by: MatchedBy,
        /// Alias text that hit, or the declared warning entry.
        snippet: String,
    },
    Intolerance {
        term: String,
        matched_by: MatchedBy,
        snippet: String,
    },
    Dietary {
        term: String,
        field: NutrientKey,
        /// Amount converted to the Daily Value unit.
        value: f64,
        unit: Unit,
        daily_value: f64,
        #[serde(rename = "percentOfDV")]
        percent_of_dv: f64,
        threshold: f64,
    },
}

impl ComparisonReason {
    pub fn term(&self) -> &str {
        match self {
            Self::Allergen { term, .. }
            | Self::Intolerance { term, .. }
            | Self::Dietary { term, .. } => term,
        }
    }
}

/// Rendered reasons grouped by category, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub allergens: Vec<String>,
    pub intolerances: Vec<String>,
    pub dietary: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub harmful: bool,
    pub reasons: Vec<ComparisonReason>,
    pub summary: ComparisonSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allergen_reason_wire_shape() {
        let reason = ComparisonReason::Allergen {
            term: "milk".into(),
            matched_by: MatchedBy::Alias,
            snippet: "whey".into(),
        };
        let json = serde_json::to_value(&reason).unwrap();
        assert_eq!(json["kind"], "allergen");
        assert_eq!(json["term"], "milk");
        assert_eq!(json["matchedBy"], "alias");
        assert_eq!(json["snippet"], "whey");
    }

    #[test]
    fn dietary_reason_wire_shape() {
        let reason = ComparisonReason::Dietary {
            term: "high-sodium".into(),
            field: NutrientKey::Sodium,
            value: 820.0,
            unit: Unit::Milligram,
            daily_value: 2300.0,
            percent_of_dv: 0.3565,
            threshold: 0.2,
        };
        let json = serde_json::to_value(&reason).unwrap();
        assert_eq!(json["kind"], "dietary");
        assert_eq!(json["field"], "sodium");
        assert_eq!(json["unit"], "mg");
        assert_eq!(json["dailyValue"], 2300.0);
        assert_eq!(json["percentOfDV"], 0.3565);
        assert_eq!(reason.term(), "high-sodium");
    }
}
