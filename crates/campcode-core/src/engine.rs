//! Generation pipeline: validate, tokenize, synthesize, normalize, rank.

use std::collections::HashSet;

use rand::Rng;
use tracing::debug;

use crate::errors::GenerateError;
use crate::features::{extract_year, letter_words};
use crate::model::GenerateOptions;
use crate::normalize::fit;
use crate::score::score;
use crate::synth::{CandidateSet, heuristic_candidates, priority_candidates, random_candidates};
use crate::tokenizer::{acronym_hints, tokenize};

/// Generates ranked campaign codes using the process-wide random source.
pub fn generate(text: &str, options: &GenerateOptions) -> Result<Vec<String>, GenerateError> {
    generate_with_rng(text, options, &mut rand::rng())
}

/// Generates ranked campaign codes with a caller-supplied random source.
///
/// The RNG only feeds randomized fragment sampling and padding digits;
/// the heuristic candidate pool and scoring are deterministic, so a
/// seeded RNG reproduces the full output exactly.
pub fn generate_with_rng(
    text: &str,
    options: &GenerateOptions,
    rng: &mut impl Rng,
) -> Result<Vec<String>, GenerateError> {
    options.validate()?;

    let tokens = tokenize(text);
    if tokens.is_empty() {
        return Err(GenerateError::EmptyInput);
    }

    let hints = acronym_hints(text);
    let year = if options.include_year {
        extract_year(&tokens)
    } else {
        String::new()
    };
    let year2 = year
        .get(year.len().saturating_sub(2)..)
        .unwrap_or_default()
        .to_string();
    let words = letter_words(&tokens);

    debug!(
        tokens = tokens.len(),
        hints = hints.len(),
        words = words.len(),
        year = %year,
        "input tokenized"
    );

    let priority = priority_candidates(&hints, &year, &year2, rng);
    let mut candidates = CandidateSet::new();
    heuristic_candidates(&words, &year, &year2, &mut candidates);
    random_candidates(&words, &year, &year2, rng, &mut candidates);

    debug!(
        priority = priority.len(),
        candidates = candidates.len(),
        "candidate pools built"
    );

    // Normalize the heuristic pool, keeping first-seen order for the
    // stable sort below so equal-score ties stay deterministic.
    let mut normalized = CandidateSet::new();
    for candidate in candidates.iter() {
        let code = fit(candidate, options.min_len, options.max_len, rng);
        if (options.min_len..=options.max_len).contains(&code.len()) {
            normalized.insert(code);
        }
    }

    let mut ranked: Vec<(String, f64)> = normalized
        .into_vec()
        .into_iter()
        .map(|code| {
            let value = score(&code, options.min_len, options.max_len);
            (code, value)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut ordered = Vec::new();
    let mut seen = HashSet::new();
    for candidate in priority {
        let code = fit(&candidate, options.min_len, options.max_len, rng);
        if (options.min_len..=options.max_len).contains(&code.len()) && seen.insert(code.clone()) {
            ordered.push(code);
        }
    }
    for (code, _) in ranked {
        if seen.insert(code.clone()) {
            ordered.push(code);
        }
    }
    ordered.truncate(options.count);

    debug!(returned = ordered.len(), "codes ranked");
    Ok(ordered)
}
