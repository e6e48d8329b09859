//! # Lattices Core
//!
//! Foundation types shared by the lattice engine and its callers:
//!
//! - [`Element`] and [`Order`]: what a lattice is built over, and the
//!   single-method "less than or equal" capability that orders it
//! - Named orders for families of sets: [`SubsetOrder`], [`AntichainOrder`],
//!   [`RefinementOrder`]
//! - Predicates for filtering candidate families: antichain, cover,
//!   partition, connectivity
//! - [`powerset`] and [`antichains`] enumeration
//! - [`Label`]: deterministic rendering of nested sets
//! - [`LatticeConfig`] and the unified [`LatticeError`]
//!
//! Nothing here builds a lattice; see `lattices-engine`.

#![forbid(unsafe_code)]

/// Layered configuration (defaults, TOML file, environment)
pub mod config;

/// Unified error handling
pub mod errors;

/// Rendering of (nested) sets as labels
pub mod label;

/// Element bound and order relations
pub mod order;

/// Subset and antichain enumeration
pub mod powerset;

/// Antichain, cover, partition and connectivity tests
pub mod predicates;

pub use config::LatticeConfig;
pub use errors::{BoundKind, LatticeError, Result as LatticeResult};
pub use label::{stringify, Label};
pub use order::{
    AntichainOrder, Element, Order, RefinementOrder, Reversed, SharedOrder, SubsetOrder,
};
pub use powerset::{antichains, powerset};
pub use predicates::{is_antichain, is_connected, is_cover, is_partition, is_subset_antichain};
