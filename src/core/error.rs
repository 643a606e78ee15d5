//! Error types for dataset loading

use thiserror::Error;

/// Terminal failure of a dataset load attempt.
///
/// Row-level defects are never reported through this type: bad rows are
/// normalized or dropped by the loader.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The dataset resource could not be fetched
    #[error("dataset unreachable at {location}: {reason}")]
    Unreachable {
        /// Path or URL that was requested
        location: String,
        /// Underlying failure description
        reason: String,
    },

    /// The fetched text could not be tokenized as a table
    #[error("malformed dataset: {reason}")]
    Malformed {
        /// What was wrong with the text
        reason: String,
    },
}

impl LoadError {
    /// Build an `Unreachable` error for a location
    pub fn unreachable(location: impl Into<String>, reason: impl ToString) -> Self {
        Self::Unreachable {
            location: location.into(),
            reason: reason.to_string(),
        }
    }

    /// Build a `Malformed` error
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }

    /// Returns true when the source could not be fetched
    #[must_use]
    pub const fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable { .. })
    }

    /// Returns true when the text could not be tokenized
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}
