//! Failure type shared by all shape validators.

use std::fmt;

/// A parameter set that does not describe a well-formed shape.
///
/// Carries a human-readable reason naming the ordering or range constraint
/// that failed. Every shape signals failure this way; none report validity
/// as a boolean.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidParameters {
    reason: String,
}

impl InvalidParameters {
    pub(crate) fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The violated constraint, as human-readable text.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for InvalidParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid shape parameters: {}", self.reason)
    }
}

impl std::error::Error for InvalidParameters {}
