//! Reference tables for product screening: allergen and intolerance alias
//! dictionaries, Daily Values, stored field units, and dietary tag rules.
//!
//! Everything here is immutable `static` data; callers receive it through
//! `&ReferenceTables` so tests can swap in their own tables.

use crate::models::{NutrientKey, Unit};

/// Canonical allergen/intolerance key with the ingredient words that imply it.
#[derive(Debug, Clone, Copy)]
pub struct AliasEntry {
    pub key: &'static str,
    /// Checked in order; the first hit is reported.
    pub aliases: &'static [&'static str],
    /// Phrases masked out before matching this key ("peanut butter" is not
    /// dairy butter).
    pub false_friends: &'static [&'static str],
}

/// Daily Value reference amount for one nutrient.
#[derive(Debug, Clone, Copy)]
pub struct DailyValue {
    pub key: NutrientKey,
    pub amount: f64,
    pub unit: Unit,
}

/// Dietary tag and the fields it is judged on, in preference order.
#[derive(Debug, Clone, Copy)]
pub struct DietaryRule {
    pub tag: &'static str,
    pub fields: &'static [NutrientKey],
}

pub struct ReferenceTables {
    pub allergens: &'static [AliasEntry],
    pub intolerances: &'static [AliasEntry],
    pub allergen_vocabulary: &'static [(&'static str, &'static str)],
    pub intolerance_vocabulary: &'static [(&'static str, &'static str)],
    pub dietary_vocabulary: &'static [(&'static str, &'static str)],
    pub daily_values: &'static [DailyValue],
    pub field_units: &'static [(NutrientKey, Unit)],
    pub dietary_rules: &'static [DietaryRule],
}

// ---------------------------------------------------------------------------
// Alias dictionaries
// ---------------------------------------------------------------------------

pub const MILK_ALIASES: &[&str] = &[
    "milk", "cream", "butter", "ghee", "cheese", "yogurt", "whey", "casein", "milkfat",
    "skim milk", "buttermilk", "caseinate", "lactose", "lactalbumin", "curds", "milk solids",
    "nonfat dry milk", "yoghurt",
];

const MILK_FALSE_FRIENDS: &[&str] = &[
    "peanut butter", "cocoa butter", "shea butter", "nut butter", "almond butter",
    "apple butter", "coconut milk", "almond milk", "oat milk", "soy milk", "rice milk",
    "coconut cream", "cream of tartar", "butternut",
];

const EGG_ALIASES: &[&str] = &[
    "egg", "eggs", "egg white", "egg yolk", "albumin", "albumen", "mayonnaise", "meringue",
    "ovalbumin", "lysozyme",
];

const EGG_FALSE_FRIENDS: &[&str] = &["eggplant", "veggie"];

const SOY_ALIASES: &[&str] = &[
    "soy", "soya", "soybean", "soybeans", "soy lecithin", "soy protein", "tofu", "edamame",
    "miso", "tempeh", "tamari", "shoyu",
];

const WHEAT_ALIASES: &[&str] = &[
    "wheat", "wheat flour", "whole wheat", "enriched flour", "bleached flour",
    "all-purpose flour", "durum", "semolina", "spelt", "farina", "bulgur", "couscous",
    "seitan", "einkorn", "emmer", "kamut",
];

const WHEAT_FALSE_FRIENDS: &[&str] = &["buckwheat"];

pub const GLUTEN_ALIASES: &[&str] = &[
    "gluten", "wheat", "barley", "rye", "malt", "malt extract", "malt vinegar", "spelt",
    "triticale", "semolina", "durum", "seitan", "farina", "bulgur", "couscous",
    "brewer's yeast", "enriched flour",
];

const GLUTEN_FALSE_FRIENDS: &[&str] =
    &["buckwheat", "maltodextrin", "maltitol", "maltose", "isomalt"];

const PEANUT_ALIASES: &[&str] = &[
    "peanut", "peanuts", "peanut butter", "peanut oil", "groundnut", "groundnuts",
    "arachis oil", "monkey nuts",
];

const TREE_NUT_ALIASES: &[&str] = &[
    "almond", "almonds", "cashew", "cashews", "walnut", "walnuts", "pecan", "pecans",
    "pistachio", "pistachios", "hazelnut", "hazelnuts", "macadamia", "brazil nut",
    "brazil nuts", "pine nut", "pine nuts", "filbert", "filberts", "praline", "marzipan",
    "tree nuts",
];

const SESAME_ALIASES: &[&str] = &[
    "sesame", "sesame seed", "sesame seeds", "sesame oil", "tahini", "benne", "gingelly",
];

const FISH_ALIASES: &[&str] = &[
    "fish", "anchovy", "anchovies", "cod", "salmon", "tuna", "tilapia", "pollock", "haddock",
    "trout", "sardine", "sardines", "halibut", "mackerel", "fish sauce", "fish oil",
    "surimi",
];

const SHELLFISH_ALIASES: &[&str] = &[
    "shellfish", "shrimp", "prawn", "prawns", "crab", "lobster", "crayfish", "crawfish",
    "clam", "clams", "oyster", "oysters", "mussel", "mussels", "scallop", "scallops",
    "squid", "octopus", "krill", "langoustine",
];

const HISTAMINE_ALIASES: &[&str] = &[
    "aged cheese", "parmesan", "cheddar", "salami", "pepperoni", "sauerkraut", "kimchi",
    "soy sauce", "vinegar", "wine", "beer", "fermented", "smoked", "anchovy", "anchovies",
    "tuna", "mackerel", "sardine", "sardines", "spinach", "tomato", "tomatoes", "eggplant",
    "yeast extract",
];

const SALICYLATE_ALIASES: &[&str] = &[
    "strawberry", "strawberries", "raspberry", "raspberries", "blueberry", "blueberries",
    "cherry", "cherries", "grape", "grapes", "raisin", "raisins", "orange", "pineapple",
    "tomato", "tomatoes", "honey", "mint", "peppermint", "cinnamon", "curry", "paprika",
    "almond", "almonds", "tea",
];

const CORN_ALIASES: &[&str] = &[
    "corn", "maize", "cornstarch", "corn starch", "corn syrup", "high fructose corn syrup",
    "cornmeal", "corn flour", "dextrose", "maltodextrin", "polenta", "hominy", "grits",
];

const CORN_FALSE_FRIENDS: &[&str] = &["peppercorn", "peppercorns"];

const CAFFEINE_ALIASES: &[&str] = &[
    "caffeine", "coffee", "espresso", "tea", "green tea", "black tea", "matcha", "guarana",
    "yerba mate", "cola", "kola nut", "cocoa", "chocolate",
];

/// "tea" inside stearate and friends.
const TEA_FALSE_FRIENDS: &[&str] = &["stearate", "stearic", "steamed", "steak"];

const SULFITE_ALIASES: &[&str] = &[
    "sulfite", "sulfites", "sulphite", "sulphites", "sulfur dioxide", "sulphur dioxide",
    "bisulfite", "metabisulfite", "sodium bisulfite", "sodium metabisulfite",
    "potassium metabisulfite", "sodium sulfite",
];

pub const ALLERGEN_ALIASES: &[AliasEntry] = &[
    AliasEntry { key: "milk", aliases: MILK_ALIASES, false_friends: MILK_FALSE_FRIENDS },
    AliasEntry { key: "egg", aliases: EGG_ALIASES, false_friends: EGG_FALSE_FRIENDS },
    AliasEntry { key: "soy", aliases: SOY_ALIASES, false_friends: &[] },
    AliasEntry { key: "wheat", aliases: WHEAT_ALIASES, false_friends: WHEAT_FALSE_FRIENDS },
    AliasEntry { key: "gluten", aliases: GLUTEN_ALIASES, false_friends: GLUTEN_FALSE_FRIENDS },
    AliasEntry { key: "peanut", aliases: PEANUT_ALIASES, false_friends: &[] },
    AliasEntry { key: "tree_nut", aliases: TREE_NUT_ALIASES, false_friends: &[] },
    AliasEntry { key: "sesame", aliases: SESAME_ALIASES, false_friends: &[] },
    AliasEntry { key: "fish", aliases: FISH_ALIASES, false_friends: &[] },
    AliasEntry { key: "shellfish", aliases: SHELLFISH_ALIASES, false_friends: &[] },
];

pub const INTOLERANCE_ALIASES: &[AliasEntry] = &[
    AliasEntry { key: "lactose", aliases: MILK_ALIASES, false_friends: MILK_FALSE_FRIENDS },
    AliasEntry { key: "gluten", aliases: GLUTEN_ALIASES, false_friends: GLUTEN_FALSE_FRIENDS },
    AliasEntry { key: "histamine", aliases: HISTAMINE_ALIASES, false_friends: &[] },
    AliasEntry { key: "salicylate", aliases: SALICYLATE_ALIASES, false_friends: TEA_FALSE_FRIENDS },
    AliasEntry { key: "soy", aliases: SOY_ALIASES, false_friends: &[] },
    AliasEntry { key: "corn", aliases: CORN_ALIASES, false_friends: CORN_FALSE_FRIENDS },
    AliasEntry { key: "caffeine", aliases: CAFFEINE_ALIASES, false_friends: TEA_FALSE_FRIENDS },
    AliasEntry { key: "sulfite", aliases: SULFITE_ALIASES, false_friends: &[] },
];

// ---------------------------------------------------------------------------
// Profile vocabulary (UI text, lowercased → canonical key)
// ---------------------------------------------------------------------------

const ALLERGEN_VOCABULARY: &[(&str, &str)] = &[
    ("nuts", "tree_nut"),
    ("tree nuts", "tree_nut"),
    ("tree nut", "tree_nut"),
    ("tree_nuts", "tree_nut"),
    ("peanuts", "peanut"),
    ("eggs", "egg"),
    ("dairy", "milk"),
    ("soya", "soy"),
    ("sesame seeds", "sesame"),
];

const INTOLERANCE_VOCABULARY: &[(&str, &str)] = &[
    ("sulfites", "sulfite"),
    ("sulphites", "sulfite"),
    ("sulphite", "sulfite"),
    ("salicylates", "salicylate"),
    ("dairy", "lactose"),
];

const DIETARY_VOCABULARY: &[(&str, &str)] = &[
    ("low-sugar", "high-sugar"),
    ("low-fat", "high-fat"),
    ("low-saturated-fat", "high-saturated-fat"),
    ("low-sodium", "high-sodium"),
    ("low-salt", "high-sodium"),
    ("low-cholesterol", "high-cholesterol"),
    ("low-carb", "high-carb"),
    ("keto", "high-carb"),
    ("low-calorie", "high-calorie"),
];

// ---------------------------------------------------------------------------
// Daily Values and units
// ---------------------------------------------------------------------------

/// US Daily Values for adults and children 4+ (2020 labeling rule).
/// Sugar has no official DV; the added-sugars amount stands in.
const DAILY_VALUES: &[DailyValue] = &[
    DailyValue { key: NutrientKey::Calories, amount: 2000.0, unit: Unit::Kilocalorie },
    DailyValue { key: NutrientKey::Fat, amount: 78.0, unit: Unit::Gram },
    DailyValue { key: NutrientKey::SaturatedFat, amount: 20.0, unit: Unit::Gram },
    DailyValue { key: NutrientKey::Cholesterol, amount: 300.0, unit: Unit::Milligram },
    DailyValue { key: NutrientKey::Sodium, amount: 2300.0, unit: Unit::Milligram },
    DailyValue { key: NutrientKey::Carbohydrate, amount: 275.0, unit: Unit::Gram },
    DailyValue { key: NutrientKey::Fiber, amount: 28.0, unit: Unit::Gram },
    DailyValue { key: NutrientKey::Sugar, amount: 50.0, unit: Unit::Gram },
    DailyValue { key: NutrientKey::AddedSugars, amount: 50.0, unit: Unit::Gram },
    DailyValue { key: NutrientKey::Protein, amount: 50.0, unit: Unit::Gram },
    DailyValue { key: NutrientKey::VitaminD, amount: 20.0, unit: Unit::Microgram },
    DailyValue { key: NutrientKey::Calcium, amount: 1300.0, unit: Unit::Milligram },
    DailyValue { key: NutrientKey::Iron, amount: 18.0, unit: Unit::Milligram },
    DailyValue { key: NutrientKey::Potassium, amount: 4700.0, unit: Unit::Milligram },
];

/// Unit each nutrient is stored in on a `ProductRecord`.
const FIELD_UNITS: &[(NutrientKey, Unit)] = &[
    (NutrientKey::Calories, Unit::Kilocalorie),
    (NutrientKey::Fat, Unit::Gram),
    (NutrientKey::SaturatedFat, Unit::Gram),
    (NutrientKey::TransFat, Unit::Gram),
    (NutrientKey::MonounsaturatedFat, Unit::Gram),
    (NutrientKey::PolyunsaturatedFat, Unit::Gram),
    (NutrientKey::Cholesterol, Unit::Milligram),
    (NutrientKey::Sodium, Unit::Milligram),
    (NutrientKey::Carbohydrate, Unit::Gram),
    (NutrientKey::Fiber, Unit::Gram),
    (NutrientKey::Sugar, Unit::Gram),
    (NutrientKey::AddedSugars, Unit::Gram),
    (NutrientKey::Protein, Unit::Gram),
    (NutrientKey::VitaminD, Unit::Microgram),
    (NutrientKey::Calcium, Unit::Milligram),
    (NutrientKey::Iron, Unit::Milligram),
    (NutrientKey::Potassium, Unit::Milligram),
];

const DIETARY_RULES: &[DietaryRule] = &[
    DietaryRule { tag: "high-sugar", fields: &[NutrientKey::AddedSugars, NutrientKey::Sugar] },
    DietaryRule { tag: "high-fat", fields: &[NutrientKey::Fat] },
    DietaryRule { tag: "high-saturated-fat", fields: &[NutrientKey::SaturatedFat] },
    DietaryRule { tag: "high-sodium", fields: &[NutrientKey::Sodium] },
    DietaryRule { tag: "high-cholesterol", fields: &[NutrientKey::Cholesterol] },
    DietaryRule { tag: "high-carb", fields: &[NutrientKey::Carbohydrate] },
    DietaryRule { tag: "high-calorie", fields: &[NutrientKey::Calories] },
];

static STANDARD: ReferenceTables = ReferenceTables {
    allergens: ALLERGEN_ALIASES,
    intolerances: INTOLERANCE_ALIASES,
    allergen_vocabulary: ALLERGEN_VOCABULARY,
    intolerance_vocabulary: INTOLERANCE_VOCABULARY,
    dietary_vocabulary: DIETARY_VOCABULARY,
    daily_values: DAILY_VALUES,
    field_units: FIELD_UNITS,
    dietary_rules: DIETARY_RULES,
};

impl ReferenceTables {
    /// The bundled tables.
    pub fn standard() -> &'static ReferenceTables {
        &STANDARD
    }

    pub fn allergen(&self, key: &str) -> Option<&AliasEntry> {
        self.allergens.iter().find(|e| e.key == key)
    }

    pub fn intolerance(&self, key: &str) -> Option<&AliasEntry> {
        self.intolerances.iter().find(|e| e.key == key)
    }

    pub fn daily_value(&self, key: NutrientKey) -> Option<&DailyValue> {
        self.daily_values.iter().find(|dv| dv.key == key)
    }

    pub fn source_unit(&self, key: NutrientKey) -> Option<Unit> {
        self.field_units
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, unit)| *unit)
    }

    pub fn dietary_fields(&self, tag: &str) -> Option<&'static [NutrientKey]> {
        self.dietary_rules
            .iter()
            .find(|r| r.tag == tag)
            .map(|r| r.fields)
    }
}
