use serde::{Deserialize, Serialize};

/// Strictness applied when the profile does not set one.
pub const DEFAULT_STRICTNESS: f64 = 0.20;

fn default_strictness() -> f64 {
    DEFAULT_STRICTNESS
}

/// A user's restrictions, in the vocabulary the profile screen uses
/// ("Nuts", "Peanuts", "High Sodium").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub intolerances: Vec<String>,
    #[serde(default)]
    pub dietary: Vec<String>,
    /// Fraction of the Daily Value at which a dietary tag trips.
    #[serde(default = "default_strictness")]
    pub strictness: f64,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            allergens: Vec::new(),
            intolerances: Vec::new(),
            dietary: Vec::new(),
            strictness: DEFAULT_STRICTNESS,
        }
    }
}

impl UserProfile {
    /// Strictness if it lies in (0, 1], otherwise the default.
    pub fn effective_strictness(&self) -> f64 {
        if self.strictness.is_finite() && self.strictness > 0.0 && self.strictness <= 1.0 {
            self.strictness
        } else {
            tracing::warn!(
                strictness = self.strictness,
                fallback = DEFAULT_STRICTNESS,
                "Profile strictness out of range, using default"
            );
            DEFAULT_STRICTNESS
        }
    }
}
