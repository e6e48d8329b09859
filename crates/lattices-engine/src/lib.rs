#![deny(clippy::dbg_macro)]
#![deny(clippy::todo)]
//! # Lattices Engine
//!
//! Builds finite lattices from an element collection and a caller-supplied
//! order relation, and answers order-theoretic queries against them:
//! - Construction: comparability graph, transitive reduction to the covering
//!   (Hasse) graph, topological order, top and bottom
//! - Order queries: ascendants, descendants, covers
//! - Bounds: join and meet, optionally restricted by a predicate
//! - Derived properties: complements, irreducibles, lattice validity, the
//!   distributive and modular laws, and the dual (inverse) lattice
//! - A catalogue of named lattices
//!
//! ## Design Principles
//!
//! - **Index arena**: each distinct element gets a stable index; every graph
//!   and matrix is over indices
//! - **Immutable**: all work happens at construction; queries are pure reads
//! - **Explicit failure**: a missing or ambiguous bound is an error, never a
//!   silent pick

mod bounds;
mod hasse;
mod properties;
mod reachability;

pub mod catalog;
pub mod lattice;

pub use catalog::{
    dependency_antichain_lattice, dependency_lattice, free_distributive_lattice, m3, n5,
    partition_antichain_lattice, partition_lattice, powerset_lattice, Family,
};
pub use lattice::Lattice;

// Re-export the foundation types callers need alongside the engine
pub use lattices_core::{
    BoundKind, Element, Label, LatticeConfig, LatticeError, LatticeResult, Order,
};
