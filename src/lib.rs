//! cfbs-check - A validator for cfbs.json module manifests
//!
//! cfbs-check reads a `cfbs.json` manifest (the file that drives module
//! build and download pipelines) and checks it against the fixed cfbs
//! schema: required fields, per-field value constraints, and referential
//! integrity between modules (aliases and dependencies).
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to core)
//! - [`core`] - Document model, key registries, and the validation engine
//! - [`ui`] - User-facing output utilities
//!
//! # Correctness Invariants
//!
//! 1. The validator sees the raw parsed manifest, never a coerced or
//!    translated view of it
//! 2. Validation is a pure function of its inputs and never mutates them
//! 3. The first violation found aborts validation (fail-fast, no
//!    aggregation)

pub mod cli;
pub mod core;
pub mod ui;
