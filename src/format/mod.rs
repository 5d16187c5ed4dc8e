//! Structured-to-text formatters
//!
//! This module turns structured values into display text:
//! - [`format_person`]: a [`User`] as `My name is {name} and I'm {age}`
//! - [`format_number`]: an integer in a named [`NumberStyle`], via the default [`NumberFormatter`]
//!
//! Both have `Display` counterparts ([`User`] itself, and [`styled`]) so they drop straight into
//! `format!` templates.

mod config;
mod number;
mod person;

use std::sync::LazyLock;

pub use config::FormatConfig;
pub use number::{LocaleNumberFormatter, NumberFormatter, NumberStyle, Styled, UnknownStyle};
pub use person::{User, format_person};

static DEFAULT_FORMATTER: LazyLock<LocaleNumberFormatter> = LazyLock::new(LocaleNumberFormatter::default);

/// Render `value` in `style` with default settings.
///
/// Returns `None` when the style cannot render the value (for example, a percentage that overflows).
pub fn format_number(value: i64, style: NumberStyle) -> Option<String> {
    DEFAULT_FORMATTER.format(value, style)
}

/// Pair `value` with `style` for use in `format!` with default settings.
pub fn styled(value: i64, style: NumberStyle) -> Styled<'static> {
    DEFAULT_FORMATTER.styled(value, style)
}
