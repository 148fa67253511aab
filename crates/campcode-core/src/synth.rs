//! Candidate synthesis: a small set of deterministic, linguistically
//! motivated heuristics plus a bounded number of randomized fragment
//! blends for diversity. The randomized rounds may duplicate deterministic
//! candidates or produce low-scoring noise; duplicates collapse in the
//! ordered set and noise ranks low, so both are harmless.

use std::collections::HashSet;

use rand::Rng;

/// Randomized fragment-sampling rounds per generation call.
pub const RANDOM_ROUNDS: usize = 24;

/// A set that iterates in insertion order.
///
/// Ranking ties break by first-seen order, so candidate order must be a
/// guarantee of the container rather than an accident of hashing.
#[derive(Debug, Default)]
pub struct CandidateSet {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `candidate`, returning false if it was already present.
    pub fn insert(&mut self, candidate: String) -> bool {
        if self.seen.contains(&candidate) {
            return false;
        }
        self.seen.insert(candidate.clone());
        self.items.push(candidate);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

/// Builds the priority pool: one group of codes per acronym hint, in hint
/// order. These bypass scoring and surface ahead of ranked candidates.
pub fn priority_candidates(
    hints: &[String],
    year: &str,
    year2: &str,
    rng: &mut impl Rng,
) -> Vec<String> {
    let mut pool = Vec::new();
    for hint in hints {
        if !year.is_empty() {
            pool.push(format!("{hint}{year}"));
        }
        if !year2.is_empty() {
            pool.push(format!("{hint}{year2}"));
        }
        pool.push(format!("{hint}{}", rng.random_range(20..=99)));
    }
    pool
}

/// Adds the deterministic heuristic candidates for `words` to `set`.
///
/// Reproducible across calls with identical input; the randomized blends
/// live in [`random_candidates`].
pub fn heuristic_candidates(words: &[String], year: &str, year2: &str, set: &mut CandidateSet) {
    let Some(first) = words.first() else {
        return;
    };

    let acronym: String = words.iter().filter_map(|w| w.chars().next()).collect();
    set.insert(format!("{acronym}{year}"));
    set.insert(format!("{acronym}{year2}"));

    if words.len() >= 2 {
        let last = &words[words.len() - 1];
        set.insert(format!("{}{}{year2}", prefix(first, 2), prefix(&words[1], 2)));
        set.insert(format!("{}{}{year2}", prefix(first, 3), prefix(last, 2)));
        set.insert(format!("{}{}{year}", prefix(first, 2), prefix(last, 2)));
    }

    set.insert(format!("{}{year2}", prefix(first, 4)));
    let second = words.get(1).map(|w| prefix(w, 2)).unwrap_or_default();
    set.insert(format!("{}{second}{year2}", prefix(first, 3)));

    if words.len() >= 3 {
        set.insert(format!(
            "{}{}{}{year2}",
            prefix(first, 2),
            prefix(&words[1], 2),
            prefix(&words[2], 2)
        ));
        set.insert(format!(
            "{}{}{}{year}",
            prefix(first, 1),
            prefix(&words[1], 2),
            prefix(&words[2], 2)
        ));
    }
}

/// Adds [`RANDOM_ROUNDS`] randomized fragment blends to `set`: 1-3 words
/// sampled without replacement, a 1-3 letter prefix of each, and a year or
/// random-number suffix.
pub fn random_candidates(
    words: &[String],
    year: &str,
    year2: &str,
    rng: &mut impl Rng,
    set: &mut CandidateSet,
) {
    for _ in 0..RANDOM_ROUNDS {
        let pick_count = words.len().min(rng.random_range(1..=3));
        let frag: String = sample(words, pick_count, rng)
            .iter()
            .map(|word| prefix(word, rng.random_range(1..=3)))
            .collect();

        let rand2 = rng.random_range(20..=99).to_string();
        let rand4 = rng.random_range(2000..=2099).to_string();
        let choices: Vec<&str> = [year, year2, rand2.as_str(), rand4.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        let suffix = if choices.is_empty() {
            rand2.as_str()
        } else {
            choices[rng.random_range(0..choices.len())]
        };

        set.insert(format!("{frag}{suffix}"));
    }
}

/// First `n` letters of `word`, capped by its length. Words are ASCII by
/// construction, so byte slicing is safe.
fn prefix(word: &str, n: usize) -> &str {
    &word[..n.min(word.len())]
}

/// Uniform sample of `k` entries without replacement, in selection order.
fn sample<'a>(words: &'a [String], k: usize, rng: &mut impl Rng) -> Vec<&'a str> {
    let mut remaining: Vec<&str> = words.iter().map(String::as_str).collect();
    let mut picked = Vec::with_capacity(k);
    while !remaining.is_empty() && picked.len() < k {
        let index = rng.random_range(0..remaining.len());
        picked.push(remaining.swap_remove(index));
    }
    picked
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn words(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn candidate_set_keeps_insertion_order() {
        let mut set = CandidateSet::new();
        assert!(set.insert("B".to_string()));
        assert!(set.insert("A".to_string()));
        assert!(!set.insert("B".to_string()));
        assert_eq!(set.into_vec(), vec!["B", "A"]);
    }

    #[test]
    fn priority_pool_skips_empty_year_forms() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let hints = words(&["NASA"]);

        let with_year = priority_candidates(&hints, "2025", "25", &mut rng);
        assert_eq!(with_year[0], "NASA2025");
        assert_eq!(with_year[1], "NASA25");
        assert_eq!(with_year.len(), 3);

        let without_year = priority_candidates(&hints, "", "", &mut rng);
        assert_eq!(without_year.len(), 1);
        assert!(without_year[0].starts_with("NASA"));
    }

    #[test]
    fn heuristics_cover_the_fixed_fragment_forms() {
        let mut set = CandidateSet::new();
        heuristic_candidates(&words(&["SUMMER", "SALE"]), "2024", "24", &mut set);
        let all: Vec<&str> = set.iter().collect();

        assert!(all.contains(&"SS2024")); // acronym + year
        assert!(all.contains(&"SS24")); // acronym + year2
        assert!(all.contains(&"SUSA24")); // first2 + first2 + year2
        assert!(all.contains(&"SUMSA24")); // first3 + last2 + year2
        assert!(all.contains(&"SUSA2024")); // first2 + last2 + year
        assert!(all.contains(&"SUMM24")); // first4 + year2
        assert!(all.contains(&"SUMSA24")); // first3 + second2 + year2
    }

    #[test]
    fn heuristics_are_deterministic_across_calls() {
        let input = words(&["BLACK", "FRIDAY", "DEALS"]);
        let mut first = CandidateSet::new();
        let mut second = CandidateSet::new();
        heuristic_candidates(&input, "2024", "24", &mut first);
        heuristic_candidates(&input, "2024", "24", &mut second);
        assert_eq!(first.into_vec(), second.into_vec());
    }

    #[test]
    fn heuristics_skip_when_no_words() {
        let mut set = CandidateSet::new();
        heuristic_candidates(&[], "2024", "24", &mut set);
        assert!(set.is_empty());
    }

    #[test]
    fn random_rounds_produce_bounded_nonempty_pool() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut set = CandidateSet::new();
        random_candidates(&words(&["SPRING", "LAUNCH"]), "", "", &mut rng, &mut set);
        assert!(!set.is_empty());
        assert!(set.len() <= RANDOM_ROUNDS);
    }
}
