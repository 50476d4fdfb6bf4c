use serde::{Deserialize, Serialize};

use super::nutrition::{ExtractedFields, NutrientPanel};

/// A stored product as handed to the comparison engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductRecord {
    pub name: String,
    pub brand: String,
    pub ingredients: String,
    /// Comma-delimited allergen declarations, e.g. "Milk, Soy".
    pub warning: String,
    #[serde(flatten)]
    pub nutrients: NutrientPanel,
}

impl ProductRecord {
    /// Build a record from a label scan plus the user-supplied identity.
    pub fn from_scan(name: &str, brand: &str, fields: &ExtractedFields) -> Self {
        Self {
            name: name.trim().to_string(),
            brand: brand.trim().to_string(),
            ingredients: fields.ingredients.clone(),
            warning: fields.warning.clone(),
            nutrients: fields.nutrients.clone(),
        }
    }

    /// Declared warnings split into trimmed, non-empty entries.
    pub fn warning_entries(&self) -> Vec<&str> {
        self.warning
            .split(',')
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .collect()
    }
}
