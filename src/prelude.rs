//! Prelude module for lka_nic crate.
//!
//! Re-exports the derive_more macros used across the crate.

pub use derive_more::Display;
