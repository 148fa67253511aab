//! Campaign code generation engine.
//!
//! Turns a free-text campaign name into short, memorable `[A-Z0-9]` codes:
//! tokenize the input, synthesize candidate codes from acronyms, word
//! fragments, and year suffixes, normalize each into the caller's length
//! window, and rank them by a weighted pronounceability/readability/length
//! score. Priority candidates built from literal all-caps acronyms in the
//! input always surface first.

pub mod engine;
pub mod errors;
pub mod features;
pub mod model;
pub mod normalize;
pub mod score;
pub mod synth;
pub mod tokenizer;

pub use engine::{generate, generate_with_rng};
pub use errors::GenerateError;
pub use model::{GenerateOptions, LEN_CEIL, LEN_FLOOR};
