pub mod allergens;
pub mod dietary;
pub mod engine;
pub mod helpers;
pub mod messages;
pub mod reference;

pub use allergens::{resolve_allergens, resolve_intolerances};
pub use dietary::{evaluate_dietary, measure_against_dv, DvMeasure};
pub use engine::{compare_product, summarize, CanonicalProfile, ComparisonEngine};
pub use messages::MessageTemplates;
pub use reference::ReferenceTables;
