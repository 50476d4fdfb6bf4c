//! Free-text panel sections: serving size, servings per container,
//! ingredients, and the allergen statement.

use std::sync::LazyLock;

use regex::Regex;

static RE_SERVING_SIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bserving[^\S\n]*size\b[^\S\n]*:?([^\n]*)").unwrap());

static RE_SERVINGS_LABELED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bservings[^\S\n]+per[^\S\n]+container\b[^\S\n]*:?([^\n]*)").unwrap()
});

static RE_SERVINGS_BARE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)[^\S\n]*servings?[^\S\n]+per[^\S\n]+container\b").unwrap()
});

static RE_INGREDIENTS_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bingredients?\b[^\S\n]*:?\s*").unwrap());

/// Where an ingredient list ends: a blank line, or a warnings marker that
/// opens a line or a sentence.
static RE_INGREDIENTS_STOP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)\n[^\S\n]*\n|(?:^|[.;])[^\S\n]*(?:may[^\S\n]+contain|contains|allergens?)\b")
        .unwrap()
});

/// "Contains"/"May contain" opening a line or sentence, or an "Allergens"
/// heading. A heading may carry a word like "Information" and be followed
/// by its own "Contains"; both are dropped.
static RE_WARNING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)(?:(?:^|[.;])[^\S\n]*(?:may[^\S\n]+contain|contains)\b|\ballergens?\b(?:[^\S\n]+(?:information|info|statement|declaration)\b)?(?:[^\S\n]*:?[^\S\n]*(?:may[^\S\n]+contain|contains)\b)?)[^\S\n]*:?[^\S\n]*([^\n]*)",
    )
    .unwrap()
});

static RE_ANY_WS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Text after "Serving size" to the end of that line. When the size wraps
/// onto the next line, the next non-empty line is used instead.
pub fn extract_serving_size(text: &str) -> String {
    let Some(caps) = RE_SERVING_SIZE.captures(text) else {
        return String::new();
    };
    let same_line = caps.get(1).map_or("", |m| m.as_str()).trim();
    if !same_line.is_empty() {
        return same_line.to_string();
    }

    let after = caps.get(0).map_or(text.len(), |m| m.end());
    text[after..]
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// Number of servings per container, digits and dots only.
pub fn extract_servings_per_container(text: &str) -> String {
    let labeled = RE_SERVINGS_LABELED
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|v| !v.is_empty());

    let raw = match labeled {
        Some(v) => v,
        None => RE_SERVINGS_BARE
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map_or("", |m| m.as_str()),
    };

    raw.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect()
}

/// The ingredient list, whitespace collapsed.
pub fn extract_ingredients(text: &str) -> String {
    let Some(marker) = RE_INGREDIENTS_MARKER.find(text) else {
        return String::new();
    };
    let rest = &text[marker.end()..];
    let end = RE_INGREDIENTS_STOP
        .find(rest)
        .map_or(rest.len(), |m| m.start());

    RE_ANY_WS.replace_all(&rest[..end], " ").trim().to_string()
}

/// The allergen statement with its leading marker removed,
/// e.g. "Contains: Milk, Soy." becomes "Milk, Soy".
pub fn extract_warning(text: &str) -> String {
    RE_WARNING
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().trim_end_matches('.').trim_end().to_string())
        .unwrap_or_default()
}
