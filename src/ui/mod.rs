//! ui
//!
//! User interaction utilities.

pub mod output;
