pub mod comparison;
pub mod enums;
pub mod nutrition;
pub mod product;
pub mod profile;

pub use comparison::{ComparisonReason, ComparisonResult, ComparisonSummary};
pub use enums::{MatchedBy, ModelError, NutrientKey, Unit};
pub use nutrition::{ExtractedFields, NutrientPanel};
pub use product::ProductRecord;
pub use profile::{UserProfile, DEFAULT_STRICTNESS};
