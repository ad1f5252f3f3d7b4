//! Paired bad/good examples, one module per SOLID principle.
//!
//! # Responsibility
//! - Keep every example self-contained under its own `bad`/`good` namespace.
//! - Expose the capability traits each good variant is built around.
//!
//! # Invariants
//! - No example module depends on another.
//! - Every operation is total and deterministic.

pub mod dependency_inversion;
pub mod interface_segregation;
pub mod liskov_substitution;
pub mod open_closed;
pub mod single_responsibility;
