//! Canonicalizes raw OCR text from a nutrition panel before field search.
//!
//! Rules run in a fixed order:
//! 1. Letter O misread for a zero before `%` or a mass unit becomes `0`
//! 2. "Total Carb." style abbreviations become "Total Carbohydrate"
//! 3. Runs of non-newline whitespace collapse to one space
//! 4. Leading/trailing whitespace is trimmed
//!
//! Newlines always survive: the serving-size and warning extractors search
//! "to end of line" and depend on the label's row structure.
//! The whole transform is idempotent.

use std::sync::LazyLock;

use regex::Regex;

/// `O` (or `o`) followed by optional same-line whitespace and a percent sign.
static RE_O_BEFORE_PERCENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[Oo][^\S\n]*%").unwrap());

/// Standalone `O` glued to a unit suffix: "Og", "Omg", "Omcg", "OIU".
static RE_O_BEFORE_UNIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[Oo]((?i:mcg|mg|g|iu))\b").unwrap());

/// An abbreviation dot is dropped only when a non-word character or the end
/// of text follows it; that character is kept in group 1. "Carb.." and
/// "Carb.s" keep their dots so a second pass sees the same text.
static RE_TOTAL_CARB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\btot(?:al|\.)[^\S\n]*carb(?:ohydrates?|s)?(?:\.([^\w.]|$)|\b)").unwrap()
});

static RE_INLINE_WS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\S\n]+").unwrap());

/// Normalize raw OCR text into the canonical form used by field extraction.
pub fn normalize_label_text(raw: &str) -> String {
    let text = fix_zero_confusions(raw);
    let text = RE_TOTAL_CARB.replace_all(&text, "Total Carbohydrate${1}");
    let text = RE_INLINE_WS.replace_all(&text, " ");
    text.trim().to_string()
}

/// Replace letter-O zero misreads. An O before `%` is only rewritten when the
/// character before it is not a letter, so words like "INFO%" stay intact
/// while "1O%" and "O%" become "10%" and "0%".
fn fix_zero_confusions(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for m in RE_O_BEFORE_PERCENT.find_iter(text) {
        let preceded_by_letter = text[..m.start()]
            .chars()
            .next_back()
            .is_some_and(char::is_alphabetic);
        if preceded_by_letter {
            continue;
        }
        out.push_str(&text[last..m.start()]);
        out.push('0');
        // Keep the whitespace and percent sign after the O untouched.
        out.push_str(&text[m.start() + 1..m.end()]);
        last = m.end();
    }
    out.push_str(&text[last..]);

    RE_O_BEFORE_UNIT.replace_all(&out, "0$1").into_owned()
}
