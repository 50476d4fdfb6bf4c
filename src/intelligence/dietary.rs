use crate::models::{ComparisonReason, NutrientKey, NutrientPanel, Unit};

use super::helpers::convert_amount;
use super::reference::ReferenceTables;

/// A nutrient amount expressed against its Daily Value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DvMeasure {
    pub field: NutrientKey,
    pub value: f64,
    pub unit: Unit,
    pub daily_value: f64,
    pub percent_of_dv: f64,
}

/// Measure the first candidate field that carries a number.
/// `None` when no candidate has a value or units are incompatible.
pub fn measure_against_dv(
    nutrients: &NutrientPanel,
    fields: &[NutrientKey],
    tables: &ReferenceTables,
) -> Option<DvMeasure> {
    let (field, raw) = fields
        .iter()
        .find_map(|field| nutrients.numeric(*field).map(|v| (*field, v)))?;

    let dv = tables.daily_value(field)?;
    let source = tables.source_unit(field)?;
    let value = convert_amount(raw, source, dv.unit)?;

    Some(DvMeasure {
        field,
        value,
        unit: dv.unit,
        daily_value: dv.amount,
        percent_of_dv: value / dv.amount,
    })
}

/// One reason per tag whose percent of DV reaches `threshold`.
/// Unknown tags and tags without data are skipped.
pub fn evaluate_dietary(
    nutrients: &NutrientPanel,
    tags: &[String],
    threshold: f64,
    tables: &ReferenceTables,
) -> Vec<ComparisonReason> {
    let mut reasons = Vec::new();

    for tag in tags {
        let Some(fields) = tables.dietary_fields(tag) else {
            tracing::debug!(tag = %tag, "Unknown dietary tag, skipping");
            continue;
        };
        let Some(measure) = measure_against_dv(nutrients, fields, tables) else {
            tracing::debug!(tag = %tag, "No numeric value for dietary tag, skipping");
            continue;
        };
        if measure.percent_of_dv >= threshold {
            reasons.push(ComparisonReason::Dietary {
                term: tag.clone(),
                field: measure.field,
                value: measure.value,
                unit: measure.unit,
                daily_value: measure.daily_value,
                percent_of_dv: measure.percent_of_dv,
                threshold,
            });
        }
    }

    reasons
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> &'static ReferenceTables {
        ReferenceTables::standard()
    }

    fn tags(t: &[&str]) -> Vec<String> {
        t.iter().map(|s| s.to_string()).collect()
    }

    fn sodium(value: &str) -> NutrientPanel {
        NutrientPanel {
            sodium: value.into(),
            ..Default::default()
        }
    }

    #[test]
    fn sodium_percent_of_dv() {
        let m = measure_against_dv(&sodium("820"), &[NutrientKey::Sodium], tables()).unwrap();
        assert_eq!(m.field, NutrientKey::Sodium);
        assert_eq!(m.unit, Unit::Milligram);
        assert_eq!(m.daily_value, 2300.0);
        assert!((m.percent_of_dv - 0.3565).abs() < 0.001);
    }

    #[test]
    fn sodium_trips_at_low_threshold_only() {
        let panel = sodium("820");
        let at_20 = evaluate_dietary(&panel, &tags(&["high-sodium"]), 0.20, tables());
        assert_eq!(at_20.len(), 1);
        assert!(matches!(
            &at_20[0],
            ComparisonReason::Dietary { field: NutrientKey::Sodium, threshold, .. } if *threshold == 0.20
        ));

        let at_40 = evaluate_dietary(&panel, &tags(&["high-sodium"]), 0.40, tables());
        assert!(at_40.is_empty());
    }

    #[test]
    fn threshold_is_inclusive() {
        // 460 / 2300 = 0.2 exactly
        let reasons = evaluate_dietary(&sodium("460"), &tags(&["high-sodium"]), 0.2, tables());
        assert_eq!(reasons.len(), 1);
    }

    #[test]
    fn high_sugar_prefers_added_sugars() {
        let panel = NutrientPanel {
            sugar: "30".into(),
            added_sugars: "12".into(),
            ..Default::default()
        };
        let m = measure_against_dv(
            &panel,
            &[NutrientKey::AddedSugars, NutrientKey::Sugar],
            tables(),
        )
        .unwrap();
        assert_eq!(m.field, NutrientKey::AddedSugars);
        assert_eq!(m.value, 12.0);
    }

    #[test]
    fn high_sugar_falls_back_to_total_sugar() {
        let panel = NutrientPanel {
            sugar: "30".into(),
            ..Default::default()
        };
        let reasons = evaluate_dietary(&panel, &tags(&["high-sugar"]), 0.2, tables());
        assert!(matches!(
            &reasons[0],
            ComparisonReason::Dietary { field: NutrientKey::Sugar, value, .. } if *value == 30.0
        ));
    }

    #[test]
    fn missing_value_is_skipped() {
        let reasons = evaluate_dietary(
            &NutrientPanel::default(),
            &tags(&["high-sodium", "high-fat"]),
            0.01,
            tables(),
        );
        assert!(reasons.is_empty());
    }

    #[test]
    fn unknown_tag_is_skipped() {
        let reasons = evaluate_dietary(&sodium("2000"), &tags(&["vegan"]), 0.2, tables());
        assert!(reasons.is_empty());
    }

    #[test]
    fn calories_use_kcal_reference() {
        let panel = NutrientPanel {
            calories: "500".into(),
            ..Default::default()
        };
        let reasons = evaluate_dietary(&panel, &tags(&["high-calorie"]), 0.2, tables());
        assert!(matches!(
            &reasons[0],
            ComparisonReason::Dietary { unit: Unit::Kilocalorie, percent_of_dv, .. } if *percent_of_dv == 0.25
        ));
    }

    #[test]
    fn reasons_follow_tag_order() {
        let panel = NutrientPanel {
            sodium: "1200".into(),
            fat: "40".into(),
            ..Default::default()
        };
        let reasons = evaluate_dietary(
            &panel,
            &tags(&["high-fat", "high-sodium"]),
            0.2,
            tables(),
        );
        let terms: Vec<&str> = reasons.iter().map(|r| r.term()).collect();
        assert_eq!(terms, vec!["high-fat", "high-sodium"]);
    }
}
