use crate::models::{ComparisonReason, MatchedBy, ProductRecord};

use super::helpers::{canonical_key, contains_phrase, ingredient_items, item_text, mask_phrase};
use super::reference::{AliasEntry, ReferenceTables};

/// Where an allergen or intolerance was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasHit {
    pub matched_by: MatchedBy,
    pub snippet: String,
}

/// Check declared allergens first, then ingredient aliases.
/// One reason per key; a warning hit short-circuits the alias scan.
pub fn resolve_allergens(
    product: &ProductRecord,
    keys: &[String],
    tables: &ReferenceTables,
) -> Vec<ComparisonReason> {
    let items = ingredient_items(&product.ingredients);
    let warnings = product.warning_entries();

    keys.iter()
        .filter_map(|key| {
            let hit = match_warning(&warnings, key, tables)
                .or_else(|| match_alias(&items, key, tables.allergen(key)))?;
            Some(ComparisonReason::Allergen {
                term: key.clone(),
                matched_by: hit.matched_by,
                snippet: hit.snippet,
            })
        })
        .collect()
}

/// Intolerances are never declared on labels; only ingredient aliases count.
pub fn resolve_intolerances(
    product: &ProductRecord,
    keys: &[String],
    tables: &ReferenceTables,
) -> Vec<ComparisonReason> {
    let items = ingredient_items(&product.ingredients);

    keys.iter()
        .filter_map(|key| {
            let hit = match_alias(&items, key, tables.intolerance(key))?;
            Some(ComparisonReason::Intolerance {
                term: key.clone(),
                matched_by: hit.matched_by,
                snippet: hit.snippet,
            })
        })
        .collect()
}

/// A warning entry matches when it canonicalizes to the key ("Peanuts" →
/// peanut) or names it as a phrase ("Tree Nuts (Almonds)" → tree_nut).
/// The key's false friends are masked first, so "Coconut Milk" is not milk.
fn match_warning(warnings: &[&str], key: &str, tables: &ReferenceTables) -> Option<AliasHit> {
    let key_words: Vec<&str> = key.split('_').collect();
    let plural_key = format!("{}s", key.replace('_', " "));
    let plural_words: Vec<&str> = plural_key.split(' ').collect();
    let false_friends = tables
        .allergen(key)
        .map(|e| e.false_friends)
        .unwrap_or_default();

    warnings
        .iter()
        .find(|entry| {
            if canonical_key(tables.allergen_vocabulary, entry) == key {
                return true;
            }
            mask_items(&ingredient_items(entry), false_friends)
                .iter()
                .any(|words| {
                    contains_phrase(words, &key_words) || contains_phrase(words, &plural_words)
                })
        })
        .map(|entry| AliasHit {
            matched_by: MatchedBy::Warning,
            snippet: entry.to_string(),
        })
}

/// First alias in table order present in the ingredients, after masking
/// the entry's false friends. Unknown keys match on their own name.
///
/// Whole-word hits are tried for every alias before any substring hit, so
/// "Sodium Metabisulfite" reports "metabisulfite" and "Peanut-Based
/// Spread" still reports "peanut".
fn match_alias(items: &[Vec<String>], key: &str, entry: Option<&AliasEntry>) -> Option<AliasHit> {
    let fallback = key.replace('_', " ");
    let (aliases, false_friends): (Vec<&str>, &[&str]) = match entry {
        Some(entry) => (entry.aliases.to_vec(), entry.false_friends),
        None => (vec![fallback.as_str()], &[]),
    };

    let masked = mask_items(items, false_friends);
    let whole_word = aliases.iter().find(|alias| {
        let alias_words: Vec<&str> = alias.split_whitespace().collect();
        masked.iter().any(|words| contains_phrase(words, &alias_words))
    });

    let hit = whole_word.or_else(|| {
        let texts: Vec<String> = items
            .iter()
            .map(|words| {
                false_friends
                    .iter()
                    .fold(item_text(words), |text, phrase| text.replace(phrase, " "))
            })
            .collect();
        aliases.iter().find(|alias| {
            let alias = alias.replace('-', " ");
            texts.iter().any(|text| text.contains(alias.as_str()))
        })
    })?;

    Some(AliasHit {
        matched_by: MatchedBy::Alias,
        snippet: hit.to_string(),
    })
}

fn mask_items(items: &[Vec<String>], false_friends: &[&str]) -> Vec<Vec<String>> {
    let mut masked = items.to_vec();
    for phrase in false_friends {
        let phrase_words: Vec<&str> = phrase.split_whitespace().collect();
        for words in &mut masked {
            mask_phrase(words, &phrase_words);
        }
    }
    masked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(ingredients: &str, warning: &str) -> ProductRecord {
        ProductRecord {
            name: "Test".into(),
            ingredients: ingredients.into(),
            warning: warning.into(),
            ..Default::default()
        }
    }

    fn keys(k: &[&str]) -> Vec<String> {
        k.iter().map(|s| s.to_string()).collect()
    }

    fn tables() -> &'static ReferenceTables {
        ReferenceTables::standard()
    }

    #[test]
    fn warning_takes_priority_over_alias() {
        let p = product("Whey, Sugar", "Milk");
        let reasons = resolve_allergens(&p, &keys(&["milk"]), tables());
        assert_eq!(
            reasons,
            vec![ComparisonReason::Allergen {
                term: "milk".into(),
                matched_by: MatchedBy::Warning,
                snippet: "Milk".into(),
            }]
        );
    }

    #[test]
    fn alias_hit_reports_alias_text() {
        let p = product("Sugar, Whey Protein Concentrate, Salt", "");
        let reasons = resolve_allergens(&p, &keys(&["milk"]), tables());
        assert_eq!(
            reasons,
            vec![ComparisonReason::Allergen {
                term: "milk".into(),
                matched_by: MatchedBy::Alias,
                snippet: "whey".into(),
            }]
        );
    }

    #[test]
    fn plural_warning_matches_singular_key() {
        let p = product("", "Peanuts");
        let reasons = resolve_allergens(&p, &keys(&["peanut"]), tables());
        assert_eq!(reasons.len(), 1);
        assert!(matches!(
            &reasons[0],
            ComparisonReason::Allergen { matched_by: MatchedBy::Warning, .. }
        ));
    }

    #[test]
    fn tree_nut_warning_with_detail() {
        let p = product("", "Soy, Tree Nuts (Almonds)");
        let reasons = resolve_allergens(&p, &keys(&["tree_nut", "soy"]), tables());
        assert_eq!(reasons.len(), 2);
        assert_eq!(reasons[0].term(), "tree_nut");
        assert_eq!(reasons[1].term(), "soy");
    }

    #[test]
    fn false_friends_do_not_trigger_milk() {
        let p = product("Peanut Butter, Cocoa Butter, Coconut Milk", "");
        assert!(resolve_allergens(&p, &keys(&["milk"]), tables()).is_empty());

        let peanut = resolve_allergens(&p, &keys(&["peanut"]), tables());
        assert_eq!(peanut.len(), 1);
    }

    #[test]
    fn real_butter_still_matches_next_to_false_friend() {
        let p = product("Cocoa Butter, Butter, Sugar", "");
        let reasons = resolve_allergens(&p, &keys(&["milk"]), tables());
        assert!(matches!(
            &reasons[0],
            ComparisonReason::Allergen { snippet, .. } if snippet == "butter"
        ));
    }

    #[test]
    fn false_friends_block_word_lookalikes() {
        // "buckwheat" is not wheat, "eggplant" is not egg
        let p = product("Buckwheat Flour, Eggplant, Veggie Broth", "");
        assert!(resolve_allergens(&p, &keys(&["wheat", "egg"]), tables()).is_empty());

        let hyphenated = product("Buckwheat-Flour, Peanut-Butter Cups", "");
        assert!(resolve_allergens(&hyphenated, &keys(&["wheat", "milk"]), tables()).is_empty());
    }

    fn alias_snippet(ingredients: &str, key: &str) -> Option<String> {
        let p = product(ingredients, "");
        resolve_allergens(&p, &keys(&[key]), tables())
            .into_iter()
            .next()
            .map(|reason| match reason {
                ComparisonReason::Allergen { matched_by, snippet, .. } => {
                    assert_eq!(matched_by, MatchedBy::Alias);
                    snippet
                }
                other => panic!("unexpected reason {other:?}"),
            })
    }

    #[test]
    fn hyphenated_and_compound_forms_match_by_substring() {
        assert_eq!(alias_snippet("Peanut-Based Spread", "peanut").as_deref(), Some("peanut"));
        assert_eq!(
            alias_snippet("Milk-Derived Protein Blend, Sugar", "milk").as_deref(),
            Some("milk")
        );
        assert_eq!(alias_snippet("Cheesecake Pieces", "milk").as_deref(), Some("cheese"));
        assert_eq!(alias_snippet("Wholewheat Flour", "wheat").as_deref(), Some("wheat"));
        assert_eq!(alias_snippet("Soy-Based Creamer", "soy").as_deref(), Some("soy"));
    }

    #[test]
    fn whole_word_hit_beats_earlier_substring_alias() {
        // "milk" only occurs inside "buttermilk"; "whey" is a whole word
        assert_eq!(alias_snippet("Buttermilk Powder, Whey", "milk").as_deref(), Some("whey"));
    }

    #[test]
    fn declared_false_friend_is_not_a_warning_hit() {
        let p = product("Water, Sugar", "Coconut Milk");
        assert!(resolve_allergens(&p, &keys(&["milk"]), tables()).is_empty());

        let both = product("", "Coconut Milk, Milk");
        let reasons = resolve_allergens(&both, &keys(&["milk"]), tables());
        assert!(matches!(
            &reasons[0],
            ComparisonReason::Allergen { matched_by: MatchedBy::Warning, snippet, .. }
                if snippet == "Milk"
        ));
    }

    #[test]
    fn multi_word_alias_within_one_item() {
        let p = product("Rice, Soy Sauce (Water, Soybeans)", "");
        let reasons = resolve_intolerances(&p, &keys(&["histamine"]), tables());
        assert!(matches!(
            &reasons[0],
            ComparisonReason::Intolerance { snippet, .. } if snippet == "soy sauce"
        ));

        // split across items, the phrase no longer matches
        let split = product("Soy, Sauce Base", "");
        assert!(resolve_intolerances(&split, &keys(&["histamine"]), tables()).is_empty());
    }

    #[test]
    fn first_alias_in_table_order_wins() {
        let p = product("Grapes, Sodium Metabisulfite (preservative)", "");
        let reasons = resolve_intolerances(&p, &keys(&["sulfite"]), tables());
        assert!(matches!(
            &reasons[0],
            ComparisonReason::Intolerance { snippet, .. } if snippet == "metabisulfite"
        ));
    }

    #[test]
    fn intolerances_ignore_warnings() {
        let p = product("Water, Salt", "Milk");
        assert!(resolve_intolerances(&p, &keys(&["lactose"]), tables()).is_empty());
    }

    #[test]
    fn lactose_uses_milk_aliases() {
        let p = product("Skim Milk, Sugar", "");
        let reasons = resolve_intolerances(&p, &keys(&["lactose"]), tables());
        assert_eq!(
            reasons,
            vec![ComparisonReason::Intolerance {
                term: "lactose".into(),
                matched_by: MatchedBy::Alias,
                snippet: "milk".into(),
            }]
        );
    }

    #[test]
    fn unknown_key_matches_its_own_name() {
        let p = product("Lupin Flour, Water", "");
        let reasons = resolve_allergens(&p, &keys(&["lupin"]), tables());
        assert_eq!(reasons.len(), 1);
        assert!(resolve_allergens(&p, &keys(&["mustard"]), tables()).is_empty());
    }

    #[test]
    fn no_ingredients_no_reasons() {
        let p = product("", "");
        assert!(resolve_allergens(&p, &keys(&["milk", "egg"]), tables()).is_empty());
        assert!(resolve_intolerances(&p, &keys(&["gluten"]), tables()).is_empty());
    }
}
