//! core
//!
//! Document model and validation engine for cfbs.json manifests.
//!
//! # Modules
//!
//! - [`document`] - The parsed manifest, recognized key registries, and
//!   the unknown-key warning pass
//! - [`refs`] - Reference-shaped string predicates (versions, commits)
//! - [`validate`] - The schema validation engine
//!
//! # Design Principles
//!
//! - The schema is fixed and hand-coded; rule data (required-field sets,
//!   per-field checks) is kept in tables, separate from control flow
//! - Cross-reference resolution happens against an explicit read-only
//!   collection, never implicit state
//! - All validation is deterministic

pub mod document;
pub mod refs;
pub mod validate;
