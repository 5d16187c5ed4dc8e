//! Provide shared, pure helpers and canonical vocabulary for the snippets library and CLI.
//!
//! This crate is intentionally small and dependency-free. It contains deterministic helpers that the
//! user-facing `snippets` crate builds on.
//!
//! ## Notes
//!
//! - This is a "semantic core" crate: **no IO**, no global state, and no logging.
//! - Current scope: the error vocabulary, the resource locator grammar, raw string literal rules, and the
//!   number text helpers used by the default number formatter (digit grouping, spelled-out words,
//!   ordinal suffixes, scientific notation).

pub mod errors;
pub mod literals;
pub mod locators;
pub mod numbers;

pub use errors::ErrorKind;
