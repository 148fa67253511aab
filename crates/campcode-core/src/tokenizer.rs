use std::sync::LazyLock;

use regex::Regex;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z0-9]+").expect("token pattern"));

static HINT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{2,5}\b").expect("hint pattern"));

/// Extracts maximal alphanumeric runs from `text`, upper-cased.
///
/// Order matters downstream: word-initial acronyms are built from the
/// token sequence as it appears in the input.
pub fn tokenize(text: &str) -> Vec<String> {
    let upper = text.to_uppercase();
    TOKEN_RE
        .find_iter(&upper)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extracts whole-word runs of 2-5 consecutive uppercase letters from the
/// original-case text, first-seen order, deduplicated.
///
/// Case is significant here: "NASA" is a hint, "nasa" is not, even though
/// both tokenize identically after case folding.
pub fn acronym_hints(text: &str) -> Vec<String> {
    let mut hints = Vec::new();
    for m in HINT_RE.find_iter(text) {
        let hint = m.as_str();
        if !hints.iter().any(|seen| seen == hint) {
            hints.push(hint.to_string());
        }
    }
    hints
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_mixed_case_and_punctuation() {
        assert_eq!(
            tokenize("Summer Sale 2024"),
            vec!["SUMMER", "SALE", "2024"]
        );
        assert_eq!(tokenize("black-friday_24!"), vec!["BLACK", "FRIDAY", "24"]);
    }

    #[test]
    fn empty_and_symbol_only_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   --- !!!").is_empty());
    }

    #[test]
    fn hints_require_literal_uppercase_words() {
        assert_eq!(acronym_hints("NASA Mission 2025"), vec!["NASA"]);
        assert!(acronym_hints("nasa mission 2025").is_empty());
        // Six letters exceeds the 2-5 window.
        assert!(acronym_hints("SUMMER sale").is_empty());
    }

    #[test]
    fn hints_keep_first_seen_order_and_dedupe() {
        assert_eq!(
            acronym_hints("EU and NASA and EU again"),
            vec!["EU", "NASA"]
        );
    }

    #[test]
    fn digits_break_hint_word_boundaries() {
        // "NASA2025" has no word boundary between the letters and digits.
        assert!(acronym_hints("NASA2025").is_empty());
    }
}
