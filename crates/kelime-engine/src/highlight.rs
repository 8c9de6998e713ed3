//! Fail-soft headword highlighting for example sentences.
//!
//! Example sentences are rendered with every occurrence of the card's
//! headword emphasized. Highlighting is cosmetic, never load-bearing: any
//! failure degrades to the original text instead of propagating.

use regex::Regex;

/// Wrap every whole-word, case-insensitive occurrence of `word` in `text`
/// with `<strong>` markup.
///
/// - Empty `text` or `word` returns `text` unchanged.
/// - `word` is matched as literal text; regex metacharacters in headwords
///   (e.g. `ne?`) are escaped before the pattern is built.
/// - Word boundaries are Unicode-aware, so `nasıl` does not match inside
///   `Nasılsın` and headwords ending in non-ASCII letters still match as
///   whole words.
/// - If the pattern cannot be built, the original text is returned as-is.
///
/// # Example
///
/// ```
/// use kelime_engine::highlight::highlight_word;
///
/// assert_eq!(
///     highlight_word("Elma kırmızı, elma tatlı.", "elma"),
///     "<strong>Elma</strong> kırmızı, <strong>elma</strong> tatlı."
/// );
/// ```
pub fn highlight_word(text: &str, word: &str) -> String {
    if text.is_empty() || word.is_empty() {
        return text.to_string();
    }

    let pattern = format!(r"(?i)\b({})\b", regex::escape(word));
    match Regex::new(&pattern) {
        Ok(re) => re
            .replace_all(text, |caps: &regex::Captures<'_>| {
                format!("<strong>{}</strong>", &caps[0])
            })
            .into_owned(),
        Err(_) => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_all_occurrences_case_insensitive() {
        assert_eq!(
            highlight_word("Su iç. SU soğuk. Bir su daha.", "su"),
            "<strong>Su</strong> iç. <strong>SU</strong> soğuk. Bir <strong>su</strong> daha."
        );
    }

    #[test]
    fn test_empty_inputs_are_noops() {
        assert_eq!(highlight_word("", "su"), "");
        assert_eq!(highlight_word("Su iç.", ""), "Su iç.");
    }

    #[test]
    fn test_no_partial_word_match() {
        // "nasıl" is a prefix of "Nasılsın" but not a boundary-delimited token.
        assert_eq!(highlight_word("Nasılsın?", "nasıl"), "Nasılsın?");
    }

    #[test]
    fn test_unicode_boundary_at_word_end() {
        // Headword ends in a non-ASCII letter; the trailing boundary must
        // still be recognized.
        assert_eq!(
            highlight_word("Kapı açık.", "kapı"),
            "<strong>Kapı</strong> açık."
        );
    }

    #[test]
    fn test_metacharacters_are_escaped() {
        // A hyphenated headword contains a regex metacharacter but still
        // matches as a literal whole word.
        assert_eq!(
            highlight_word("O yarı-zamanlı çalışıyor.", "yarı-zamanlı"),
            "O <strong>yarı-zamanlı</strong> çalışıyor."
        );
        // An escaped '?' must not turn into a wildcard: "nex" is not "ne?".
        assert_eq!(highlight_word("nex dedi", "ne?"), "nex dedi");
    }

    #[test]
    fn test_pathological_word_never_panics() {
        // None of these are matchable as whole words; the contract is only
        // that the text comes back unharmed.
        for word in ["ne?", "(bir)", "a|b", "[c]", "\\", "^$", "*+"] {
            assert_eq!(highlight_word("Bir şey de.", word), "Bir şey de.");
        }
    }

    #[test]
    fn test_unmatched_word_leaves_text_alone() {
        assert_eq!(highlight_word("Elma kırmızı.", "armut"), "Elma kırmızı.");
    }
}
