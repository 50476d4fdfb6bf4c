use crate::models::Unit;

// ---------------------------------------------------------------------------
// Profile vocabulary
// ---------------------------------------------------------------------------

fn squash(term: &str) -> String {
    term.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn lookup(vocabulary: &[(&str, &'static str)], term: &str) -> Option<&'static str> {
    vocabulary
        .iter()
        .find(|(from, _)| *from == term)
        .map(|(_, to)| *to)
}

/// Map a UI allergen/intolerance name to its canonical key.
/// "Tree Nuts" → "tree_nut" via the vocabulary; "Sesame" → "sesame".
pub fn canonical_key(vocabulary: &[(&str, &'static str)], term: &str) -> String {
    let squashed = squash(term);
    match lookup(vocabulary, &squashed) {
        Some(key) => key.to_string(),
        None => squashed.replace(' ', "_"),
    }
}

/// Map a UI dietary tag ("High Sodium", "low_sodium") to its canonical tag.
pub fn canonical_dietary_tag(vocabulary: &[(&str, &'static str)], term: &str) -> String {
    let tag = squash(term).replace([' ', '_'], "-");
    match lookup(vocabulary, &tag) {
        Some(canonical) => canonical.to_string(),
        None => tag,
    }
}

/// Canonicalize a list, dropping blanks and duplicates but keeping order.
pub fn canonical_list(terms: &[String], canon: impl Fn(&str) -> String) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(terms.len());
    for term in terms {
        let key = canon(term);
        if !key.is_empty() && !out.contains(&key) {
            out.push(key);
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Ingredient tokenization
// ---------------------------------------------------------------------------

/// Split ingredient text into items (on `, / ;`) and items into lowercase
/// words. Punctuation outside `' & -` becomes a space, so
/// "Whey (Milk), Soy Lecithin." → [["whey", "milk"], ["soy", "lecithin"]].
pub fn ingredient_items(text: &str) -> Vec<Vec<String>> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '\u{2019}' | '\u{2018}' => '\'',
            c if c.is_alphanumeric() || c.is_whitespace() => c,
            '\'' | '&' | '/' | '-' | ',' | ';' => c,
            _ => ' ',
        })
        .collect();

    cleaned
        .split([',', '/', ';'])
        .map(|item| item.split_whitespace().map(str::to_string).collect::<Vec<_>>())
        .filter(|words| !words.is_empty())
        .collect()
}

/// True when `phrase` occurs as a contiguous run of whole words in `words`.
pub fn contains_phrase(words: &[String], phrase: &[&str]) -> bool {
    if phrase.is_empty() || phrase.len() > words.len() {
        return false;
    }
    words
        .windows(phrase.len())
        .any(|window| window.iter().zip(phrase).all(|(w, p)| w == p))
}

/// Blank out every occurrence of `phrase` in `words`. Blanked words never
/// match an alias.
pub fn mask_phrase(words: &mut [String], phrase: &[&str]) {
    if phrase.is_empty() || phrase.len() > words.len() {
        return;
    }
    let mut i = 0;
    while i + phrase.len() <= words.len() {
        if words[i..i + phrase.len()]
            .iter()
            .zip(phrase)
            .all(|(w, p)| w == p)
        {
            for w in &mut words[i..i + phrase.len()] {
                w.clear();
            }
            i += phrase.len();
        } else {
            i += 1;
        }
    }
}

/// One item as flat text for substring search, hyphens opened to spaces:
/// ["milk-derived", "protein"] → "milk derived protein".
pub fn item_text(words: &[String]) -> String {
    words.join(" ").replace('-', " ")
}

// ---------------------------------------------------------------------------
// Units and numbers
// ---------------------------------------------------------------------------

fn mass_exponent(unit: Unit) -> Option<i32> {
    match unit {
        Unit::Gram => Some(0),
        Unit::Milligram => Some(3),
        Unit::Microgram => Some(6),
        Unit::Kilocalorie => None,
    }
}

/// Convert between label units. Mass units step by 1000; energy only
/// converts to itself. `None` for mass↔energy.
pub fn convert_amount(value: f64, from: Unit, to: Unit) -> Option<f64> {
    if from == to {
        return Some(value);
    }
    let (from_exp, to_exp) = (mass_exponent(from)?, mass_exponent(to)?);
    let diff = to_exp - from_exp;
    if diff >= 0 {
        Some(value * 10f64.powi(diff))
    } else {
        Some(value / 10f64.powi(-diff))
    }
}

/// Render an amount without trailing zeros: 820.0 → "820", 2.50 → "2.5".
pub fn format_amount(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        return format!("{}", value.round() as i64);
    }
    let fixed = format!("{value:.2}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Fraction as a whole percent: 0.3565 → "36".
pub fn format_percent(fraction: f64) -> String {
    format!("{:.0}", fraction * 100.0)
}
