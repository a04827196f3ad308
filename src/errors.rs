//! Error types for crawlability scoring and comparison.
//!
//! Missing page signals are never errors: the scorers resolve them to
//! documented defaults and report lost points as issues. Errors are
//! reserved for structural misuse of the API:
//!
//! - `InvalidWeightTable`: a profile or rule table that cannot be used
//! - `ComparisonPrecondition`: snapshots or breakdowns that violate the
//!   data-model invariants
//! - `Configuration`: a configuration file that does not describe a valid setup

use thiserror::Error;

/// Main error type for crawlability operations
#[derive(Debug, Error)]
pub enum Error {
    /// A scoring profile or rule table failed its consistency check
    #[error("Invalid weight table for {profile}: {message}")]
    InvalidWeightTable { profile: String, message: String },

    /// Inputs handed to a comparator violate snapshot or breakdown invariants
    #[error("Comparison precondition failed: {0}")]
    ComparisonPrecondition(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a weight table error for the named profile
    pub fn invalid_weights(profile: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidWeightTable {
            profile: profile.into(),
            message: message.into(),
        }
    }

    /// Create a comparison precondition error
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::ComparisonPrecondition(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Whether this error was raised while validating a weight or rule table
    pub fn is_weight_table(&self) -> bool {
        matches!(self, Self::InvalidWeightTable { .. })
    }

    /// Whether this error was raised by a comparator precondition check
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::ComparisonPrecondition(_))
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
