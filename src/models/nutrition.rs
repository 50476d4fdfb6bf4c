use serde::{Deserialize, Serialize};

use super::enums::NutrientKey;

/// Per-serving nutrient values as canonical decimal strings.
/// An empty string means "no data" for that nutrient.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutrientPanel {
    pub calories: String,
    pub fat: String,
    pub saturated_fat: String,
    pub trans_fat: String,
    pub monounsaturated_fat: String,
    pub polyunsaturated_fat: String,
    pub cholesterol: String,
    pub sodium: String,
    pub carbohydrate: String,
    pub fiber: String,
    pub sugar: String,
    pub added_sugars: String,
    pub protein: String,
    pub vitamin_d: String,
    pub calcium: String,
    pub iron: String,
    pub potassium: String,
}

impl NutrientPanel {
    pub fn get(&self, key: NutrientKey) -> &str {
        self.slot(key)
    }

    pub fn set(&mut self, key: NutrientKey, value: String) {
        *self.slot_mut(key) = value;
    }

    /// Parse a nutrient as a number. Empty or non-numeric values yield `None`.
    pub fn numeric(&self, key: NutrientKey) -> Option<f64> {
        let raw = self.get(key).trim();
        if raw.is_empty() {
            return None;
        }
        raw.parse::<f64>().ok().filter(|v| v.is_finite())
    }

    fn slot(&self, key: NutrientKey) -> &String {
        match key {
            NutrientKey::Calories => &self.calories,
            NutrientKey::Fat => &self.fat,
            NutrientKey::SaturatedFat => &self.saturated_fat,
            NutrientKey::TransFat => &self.trans_fat,
            NutrientKey::MonounsaturatedFat => &self.monounsaturated_fat,
            NutrientKey::PolyunsaturatedFat => &self.polyunsaturated_fat,
            NutrientKey::Cholesterol => &self.cholesterol,
            NutrientKey::Sodium => &self.sodium,
            NutrientKey::Carbohydrate => &self.carbohydrate,
            NutrientKey::Fiber => &self.fiber,
            NutrientKey::Sugar => &self.sugar,
            NutrientKey::AddedSugars => &self.added_sugars,
            NutrientKey::Protein => &self.protein,
            NutrientKey::VitaminD => &self.vitamin_d,
            NutrientKey::Calcium => &self.calcium,
            NutrientKey::Iron => &self.iron,
            NutrientKey::Potassium => &self.potassium,
        }
    }

    fn slot_mut(&mut self, key: NutrientKey) -> &mut String {
        match key {
            NutrientKey::Calories => &mut self.calories,
            NutrientKey::Fat => &mut self.fat,
            NutrientKey::SaturatedFat => &mut self.saturated_fat,
            NutrientKey::TransFat => &mut self.trans_fat,
            NutrientKey::MonounsaturatedFat => &mut self.monounsaturated_fat,
            NutrientKey::PolyunsaturatedFat => &mut self.polyunsaturated_fat,
            NutrientKey::Cholesterol => &mut self.cholesterol,
            NutrientKey::Sodium => &mut self.sodium,
            NutrientKey::Carbohydrate => &mut self.carbohydrate,
            NutrientKey::Fiber => &mut self.fiber,
            NutrientKey::Sugar => &mut self.sugar,
            NutrientKey::AddedSugars => &mut self.added_sugars,
            NutrientKey::Protein => &mut self.protein,
            NutrientKey::VitaminD => &mut self.vitamin_d,
            NutrientKey::Calcium => &mut self.calcium,
            NutrientKey::Iron => &mut self.iron,
            NutrientKey::Potassium => &mut self.potassium,
        }
    }
}

/// Everything pulled out of one label scan.
///
/// Every key is always present. A field the label did not yield is the
/// empty string, so "label not found" and "label printed blank" look the
/// same to callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractedFields {
    #[serde(flatten)]
    pub nutrients: NutrientPanel,
    pub serving: String,
    pub serving_amount: String,
    pub ingredients: String,
    pub warning: String,
}

impl ExtractedFields {
    /// Look up any field by its wire key (nutrients plus metadata).
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "serving" => Some(&self.serving),
            "serving_amount" => Some(&self.serving_amount),
            "ingredients" => Some(&self.ingredients),
            "warning" => Some(&self.warning),
            other => other
                .parse::<NutrientKey>()
                .ok()
                .map(|k| self.nutrients.get(k)),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
