use rand::Rng;

/// Padding digits exclude 0 and 1, which read as O and I.
const PAD_DIGITS: &[u8] = b"23456789";

/// Forces a candidate into the `[min_len, max_len]` window: uppercase,
/// strip everything outside `[A-Z0-9]`, truncate from the end, then
/// right-pad with random digits until `min_len`.
pub fn fit(candidate: &str, min_len: usize, max_len: usize, rng: &mut impl Rng) -> String {
    let mut code: String = candidate
        .to_uppercase()
        .chars()
        .filter(|ch| ch.is_ascii_uppercase() || ch.is_ascii_digit())
        .collect();
    code.truncate(max_len);
    while code.len() < min_len {
        code.push(PAD_DIGITS[rng.random_range(0..PAD_DIGITS.len())] as char);
    }
    code
}
