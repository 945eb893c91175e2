//! Provide shared, pure helpers and canonical vocabulary for the enumatic code generator.
//!
//! This crate is intentionally small and dependency-light. It contains deterministic helpers that both:
//! - the generator core can use for normalization and template-transform decisions, and
//! - external tooling (template authors, driver integrations) can use to predict the same behavior.
//!
//! ## Notes
//!
//! - This is a “semantic core” crate: **no IO**, no global state, and no generator-specific types.
//! - Current scope: identifier-casing policy (camel-case word splitting) and canonical vocabulary
//!   (well-known generic names, qualifier keywords, transform names).

pub mod conventions;
pub mod strings;
