use thiserror::Error;

/// Errors emitted by the code generation engine.
///
/// Both variants are caller-input failures; the engine performs no I/O and
/// has no transient-failure class. Generation is all-or-nothing per call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("length bounds must be within 6-12 and min <= max (got {min_len}..{max_len})")]
    InvalidBounds { min_len: usize, max_len: usize },
    #[error("input must contain letters or digits")]
    EmptyInput,
}
