//! Unified error system for lattice construction and queries
//!
//! A single error type covers every failure the engine can report. Errors are
//! local to the call that raised them; nothing is retried and no partial
//! result is returned alongside an error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which bound a join/meet style query was looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoundKind {
    /// Least upper bound
    Join,
    /// Greatest lower bound
    Meet,
}

impl fmt::Display for BoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundKind::Join => write!(f, "join"),
            BoundKind::Meet => write!(f, "meet"),
        }
    }
}

/// Unified error type for all lattice operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum LatticeError {
    /// The element collection or relation cannot produce a partial order
    #[error("Construction error: {message}")]
    Construction {
        /// Error message describing why construction failed
        message: String,
    },

    /// A query referred to an element that is not part of the lattice
    #[error("Unknown element: {message}")]
    UnknownElement {
        /// Debug rendering of the missing element
        message: String,
    },

    /// No common bound survived filtering
    #[error("No satisfying {kind}: no common bound remains after filtering")]
    NoBound {
        /// The bound that was requested
        kind: BoundKind,
    },

    /// More than one minimal (join) or maximal (meet) candidate remained
    #[error("Ambiguous {kind}: {} incomparable candidates {candidates:?}", candidates.len())]
    AmbiguousBound {
        /// The bound that was requested
        kind: BoundKind,
        /// Debug renderings of the competing candidates
        candidates: Vec<String>,
    },

    /// The constructed order fails the lattice property
    #[error("Not a lattice: {message}")]
    NotALattice {
        /// Error message naming the offending pair
        message: String,
    },

    /// Configuration could not be loaded or is invalid
    #[error("Invalid configuration: {message}")]
    Config {
        /// Error message describing the configuration issue
        message: String,
    },
}

impl LatticeError {
    /// Create a construction error
    pub fn construction(message: impl Into<String>) -> Self {
        Self::Construction {
            message: message.into(),
        }
    }

    /// Create an unknown element error
    pub fn unknown_element(message: impl Into<String>) -> Self {
        Self::UnknownElement {
            message: message.into(),
        }
    }

    /// Create a missing bound error
    pub fn no_bound(kind: BoundKind) -> Self {
        Self::NoBound { kind }
    }

    /// Create an ambiguous bound error
    pub fn ambiguous_bound(kind: BoundKind, candidates: Vec<String>) -> Self {
        Self::AmbiguousBound { kind, candidates }
    }

    /// Create a not-a-lattice error
    pub fn not_a_lattice(message: impl Into<String>) -> Self {
        Self::NotALattice {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// True for the join/meet failures (no bound, or several competing bounds)
    pub fn is_bound_error(&self) -> bool {
        matches!(self, Self::NoBound { .. } | Self::AmbiguousBound { .. })
    }
}

/// Standard Result type for lattice operations
pub type Result<T> = std::result::Result<T, LatticeError>;

impl From<std::io::Error> for LatticeError {
    fn from(err: std::io::Error) -> Self {
        Self::config(err.to_string())
    }
}

impl From<toml::de::Error> for LatticeError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(format!("Invalid TOML: {err}"))
    }
}
