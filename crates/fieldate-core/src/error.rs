use thiserror::Error;

/// The single failure value returned by the flexible date parser.
///
/// Malformed shapes, impossible calendar values and empty input all collapse
/// into this one value; callers map it to a fixed display fallback.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("Unrecognised date")]
pub struct ParseFailure;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("{0}")]
    InvalidTimezone(String),
}
