use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid {field} value: {value}")]
    InvalidEnum { field: String, value: String },
}

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The string form doubles as the serde name.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(NutrientKey {
    Calories => "calories",
    Fat => "fat",
    SaturatedFat => "saturated_fat",
    TransFat => "trans_fat",
    MonounsaturatedFat => "monounsaturated_fat",
    PolyunsaturatedFat => "polyunsaturated_fat",
    Cholesterol => "cholesterol",
    Sodium => "sodium",
    Carbohydrate => "carbohydrate",
    Fiber => "fiber",
    Sugar => "sugar",
    AddedSugars => "added_sugars",
    Protein => "protein",
    VitaminD => "vitamin_d",
    Calcium => "calcium",
    Iron => "iron",
    Potassium => "potassium",
});

str_enum!(MatchedBy {
    Warning => "warning",
    Alias => "alias",
});

str_enum!(Unit {
    Gram => "g",
    Milligram => "mg",
    Microgram => "mcg",
    Kilocalorie => "kcal",
});
