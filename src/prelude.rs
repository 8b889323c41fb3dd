//! Prelude module for weekday_names.
//!
//! Re-exports the derive macros used across the crate.

pub use derive_more::Display;
