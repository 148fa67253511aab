//! Feature extraction over the token sequence: year suffix and
//! letters-only words.

/// Returns the last 4-digit token, scanning the sequence from the end.
pub fn extract_year(tokens: &[String]) -> String {
    tokens
        .iter()
        .rev()
        .find(|token| token.len() == 4 && token.chars().all(|ch| ch.is_ascii_digit()))
        .cloned()
        .unwrap_or_default()
}

/// Maps each token to its letters-only residue, dropping tokens that
/// become empty (pure-digit tokens such as the year itself).
pub fn letter_words(tokens: &[String]) -> Vec<String> {
    tokens
        .iter()
        .map(|token| {
            token
                .chars()
                .filter(|ch| ch.is_ascii_uppercase())
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn year_is_last_four_digit_token() {
        assert_eq!(extract_year(&tokens(&["SALE", "2023", "X", "2025"])), "2025");
        assert_eq!(extract_year(&tokens(&["SUMMER", "SALE", "2024"])), "2024");
    }

    #[test]
    fn no_year_when_absent_or_wrong_width() {
        assert_eq!(extract_year(&tokens(&["SUMMER", "SALE"])), "");
        assert_eq!(extract_year(&tokens(&["SALE", "24", "20256"])), "");
    }

    #[test]
    fn words_strip_digits_and_drop_empties() {
        assert_eq!(
            letter_words(&tokens(&["SUMMER", "2024", "Q3SALE"])),
            vec!["SUMMER", "QSALE"]
        );
        assert!(letter_words(&tokens(&["2024", "99"])).is_empty());
    }
}
