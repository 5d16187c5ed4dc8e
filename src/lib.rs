#![forbid(unsafe_code)]
//! Result, raw string literal, and formatting snippets
//!
//! Three independent snippet families, each a handful of pure functions:
//!
//! - [`fetch`]: a stub that validates a resource locator and reports a simulated unread count as a
//!   `Result<u32, FetchError>`. [`capture`] builds the same kind of outcome by capturing a fallible
//!   file read.
//! - [`exhibits`]: raw string literal exhibits (rules in `snippets_core::literals`).
//! - [`format`]: person and number formatters with `Display` counterparts for `format!` templates.
//!
//! [`tour`] runs all three top to bottom and [`cli`] exposes them as the `snippets` binary.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod capture;
pub mod cli;
pub mod exhibits;
pub mod fetch;
pub mod format;
pub mod tour;
pub mod version;

pub use capture::{ReadError, describe_read, read_snippet};
pub use fetch::{
    FetchError, Locator, SIMULATED_UNREAD_COUNT, describe_outcome, fetch_unread_count, fetch_unread_count_then,
    parse_locator, unread_count,
};
pub use format::{FormatConfig, NumberStyle, User, format_number, format_person, styled};
pub use tour::tour;
