//! Composite scoring used to rank normalized candidates. Scores are
//! relative only; no absolute threshold rejects a candidate.

const WEIGHT_PRONOUNCE: f64 = 0.45;
const WEIGHT_READABLE: f64 = 0.35;
const WEIGHT_LENGTH: f64 = 0.20;

/// Vowel density at which pronounceability peaks.
const VOWEL_SWEET_SPOT: f64 = 0.45;

/// Adjacent pairs that read ambiguously (O/0 and I/1 confusion, doubled
/// filler digits).
const AMBIGUOUS_PAIRS: &[&str] = &["00", "11", "O0", "0O", "I1", "1I"];

/// Weighted composite score for a normalized code. Pure function of
/// `(code, min_len, max_len)`.
pub fn score(code: &str, min_len: usize, max_len: usize) -> f64 {
    WEIGHT_PRONOUNCE * pronounceability(code)
        + WEIGHT_READABLE * readability(code)
        + WEIGHT_LENGTH * length_fit(code, min_len, max_len)
}

/// Peaks at a 45% vowel ratio over the letters-only residue, falling
/// linearly to 0 at 0% or >=90%. A code with no letters scores 0.
pub fn pronounceability(code: &str) -> f64 {
    let letters: Vec<char> = code.chars().filter(|ch| ch.is_ascii_alphabetic()).collect();
    if letters.is_empty() {
        return 0.0;
    }
    let vowels = letters
        .iter()
        .filter(|ch| matches!(ch, 'A' | 'E' | 'I' | 'O' | 'U'))
        .count();
    let ratio = vowels as f64 / letters.len() as f64;
    1.0 - (ratio - VOWEL_SWEET_SPOT).abs().min(VOWEL_SWEET_SPOT) / VOWEL_SWEET_SPOT
}

/// Mixed letter/digit codes start at 1.0, pure-letter or pure-digit at
/// 0.6; each ambiguous pair present subtracts 0.2. Floored at 0.
pub fn readability(code: &str) -> f64 {
    let penalty = AMBIGUOUS_PAIRS
        .iter()
        .filter(|pair| code.contains(*pair))
        .count() as f64
        * 0.2;
    let mixed = code.chars().any(|ch| ch.is_ascii_alphabetic())
        && code.chars().any(|ch| ch.is_ascii_digit());
    let base = if mixed { 1.0 } else { 0.6 };
    (base - penalty).max(0.0)
}

/// Distance of the code length from the window midpoint, floored at 0.
pub fn length_fit(code: &str, min_len: usize, max_len: usize) -> f64 {
    let ideal = (min_len + max_len) as f64 / 2.0;
    (1.0 - (code.len() as f64 - ideal).abs() / ideal.max(1.0)).max(0.0)
}
