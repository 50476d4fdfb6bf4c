use std::time::Instant;

use crate::models::{
    ComparisonReason, ComparisonResult, ComparisonSummary, ProductRecord, UserProfile,
};

use super::allergens::{resolve_allergens, resolve_intolerances};
use super::dietary::evaluate_dietary;
use super::helpers::{canonical_dietary_tag, canonical_key, canonical_list};
use super::messages::MessageTemplates;
use super::reference::ReferenceTables;

/// Canonical form of a profile: keys the tables understand, deduplicated.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalProfile {
    pub allergens: Vec<String>,
    pub intolerances: Vec<String>,
    pub dietary: Vec<String>,
    pub strictness: f64,
}

/// Screens products against user profiles.
/// Runs allergen, intolerance and dietary checks in that order.
pub struct ComparisonEngine<'a> {
    tables: &'a ReferenceTables,
}

impl Default for ComparisonEngine<'static> {
    fn default() -> Self {
        Self::new(ReferenceTables::standard())
    }
}

impl<'a> ComparisonEngine<'a> {
    pub fn new(tables: &'a ReferenceTables) -> Self {
        Self { tables }
    }

    pub fn canonicalize(&self, profile: &UserProfile) -> CanonicalProfile {
        let tables = self.tables;
        CanonicalProfile {
            allergens: canonical_list(&profile.allergens, |t| {
                canonical_key(tables.allergen_vocabulary, t)
            }),
            intolerances: canonical_list(&profile.intolerances, |t| {
                canonical_key(tables.intolerance_vocabulary, t)
            }),
            dietary: canonical_list(&profile.dietary, |t| {
                canonical_dietary_tag(tables.dietary_vocabulary, t)
            }),
            strictness: profile.effective_strictness(),
        }
    }

    pub fn compare(&self, product: &ProductRecord, profile: &UserProfile) -> ComparisonResult {
        let start = Instant::now();
        let canonical = self.canonicalize(profile);

        let allergens = resolve_allergens(product, &canonical.allergens, self.tables);
        let intolerances = resolve_intolerances(product, &canonical.intolerances, self.tables);
        let dietary = evaluate_dietary(
            &product.nutrients,
            &canonical.dietary,
            canonical.strictness,
            self.tables,
        );

        let counts = (allergens.len(), intolerances.len(), dietary.len());
        let reasons: Vec<ComparisonReason> = allergens
            .into_iter()
            .chain(intolerances)
            .chain(dietary)
            .collect();
        let summary = summarize(&reasons);

        tracing::info!(
            allergens = counts.0,
            intolerances = counts.1,
            dietary = counts.2,
            strictness = canonical.strictness,
            processing_ms = start.elapsed().as_millis() as u64,
            "Product comparison complete"
        );

        ComparisonResult {
            harmful: !reasons.is_empty(),
            reasons,
            summary,
        }
    }
}

/// Compare with the bundled reference tables.
pub fn compare_product(product: &ProductRecord, profile: &UserProfile) -> ComparisonResult {
    ComparisonEngine::default().compare(product, profile)
}

/// Render each reason into its category, preserving discovery order.
pub fn summarize(reasons: &[ComparisonReason]) -> ComparisonSummary {
    let mut summary = ComparisonSummary::default();
    for reason in reasons {
        let line = MessageTemplates::render(reason);
        match reason {
            ComparisonReason::Allergen { .. } => summary.allergens.push(line),
            ComparisonReason::Intolerance { .. } => summary.intolerances.push(line),
            ComparisonReason::Dietary { .. } => summary.dietary.push(line),
        }
    }
    summary
}
