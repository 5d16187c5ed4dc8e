//! Number rendering by named style.
//!
//! [`NumberFormatter`] is the seam between callers and whatever renders numbers. The default
//! implementation, [`LocaleNumberFormatter`], renders every [`NumberStyle`] from a [`FormatConfig`]
//! using the pure helpers in `snippets_core::numbers`.

use std::fmt;
use std::str::FromStr;

use snippets_core::numbers::{group_digits, ordinal_suffix, scientific, spell_out};
use thiserror::Error;

use super::config::FormatConfig;

/// Named number styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberStyle {
    /// Plain digits, no grouping (`1234567`)
    None,
    /// Grouped digits (`1,234,567`)
    Decimal,
    /// Currency symbol with fraction digits (`$1,234,567.00`)
    Currency,
    /// Value times one hundred with a percent sign (`500%`)
    Percent,
    /// Mantissa and exponent (`1.234567E6`)
    Scientific,
    /// English words (`twenty-nine`)
    SpellOut,
    /// Grouped digits with an ordinal suffix (`29th`)
    Ordinal,
    /// ISO currency code (`USD 5.00`)
    CurrencyIsoCode,
    /// Plural currency name (`5.00 US dollars`)
    CurrencyPlural,
    /// Currency with negatives in parentheses (`($5.00)`)
    CurrencyAccounting,
}

impl NumberStyle {
    /// Every style, in declaration order.
    pub const ALL: [NumberStyle; 10] = [
        NumberStyle::None,
        NumberStyle::Decimal,
        NumberStyle::Currency,
        NumberStyle::Percent,
        NumberStyle::Scientific,
        NumberStyle::SpellOut,
        NumberStyle::Ordinal,
        NumberStyle::CurrencyIsoCode,
        NumberStyle::CurrencyPlural,
        NumberStyle::CurrencyAccounting,
    ];

    /// Return the kebab-case name used on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            NumberStyle::None => "none",
            NumberStyle::Decimal => "decimal",
            NumberStyle::Currency => "currency",
            NumberStyle::Percent => "percent",
            NumberStyle::Scientific => "scientific",
            NumberStyle::SpellOut => "spell-out",
            NumberStyle::Ordinal => "ordinal",
            NumberStyle::CurrencyIsoCode => "currency-iso-code",
            NumberStyle::CurrencyPlural => "currency-plural",
            NumberStyle::CurrencyAccounting => "currency-accounting",
        }
    }
}

impl fmt::Display for NumberStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a style name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown number style `{0}` (expected one of: none, decimal, currency, percent, scientific, spell-out, ordinal, currency-iso-code, currency-plural, currency-accounting)")]
pub struct UnknownStyle(pub String);

impl FromStr for NumberStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase().replace('_', "-");
        NumberStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == needle)
            .ok_or_else(|| UnknownStyle(s.to_string()))
    }
}

/// Render integers in a named style.
pub trait NumberFormatter {
    /// Render `value` in `style`, or `None` when this formatter cannot render that pair.
    fn format(&self, value: i64, style: NumberStyle) -> Option<String>;
}

/// The default formatter, driven by a [`FormatConfig`].
#[derive(Debug, Clone, Default)]
pub struct LocaleNumberFormatter {
    config: FormatConfig,
}

impl LocaleNumberFormatter {
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Wrap `value` for use in `format!` / `write!` with this formatter.
    pub fn styled(&self, value: i64, style: NumberStyle) -> Styled<'_> {
        Styled {
            value,
            style,
            formatter: self,
        }
    }

    fn integer_digits(&self, magnitude: u64) -> String {
        let digits = magnitude.to_string();
        if self.config.uses_grouping {
            group_digits(&digits, self.config.grouping_separator)
        } else {
            digits
        }
    }

    fn currency_amount(&self, magnitude: u64) -> String {
        let mut amount = self.integer_digits(magnitude);
        if self.config.currency_fraction_digits > 0 {
            amount.push(self.config.decimal_separator);
            amount.push_str(&"0".repeat(self.config.currency_fraction_digits));
        }
        amount
    }

    fn render(&self, value: i64, style: NumberStyle) -> Option<String> {
        let sign = if value < 0 { "-" } else { "" };
        let magnitude = value.unsigned_abs();
        let symbol = &self.config.currency_symbol;

        let text = match style {
            NumberStyle::None => value.to_string(),
            NumberStyle::Decimal => format!("{sign}{}", self.integer_digits(magnitude)),
            NumberStyle::Currency => format!("{sign}{symbol}{}", self.currency_amount(magnitude)),
            NumberStyle::Percent => {
                let scaled = value.checked_mul(100)?;
                let sign = if scaled < 0 { "-" } else { "" };
                format!("{sign}{}%", self.integer_digits(scaled.unsigned_abs()))
            }
            NumberStyle::Scientific => scientific(value, self.config.decimal_separator),
            NumberStyle::SpellOut => spell_out(value),
            NumberStyle::Ordinal => {
                format!("{sign}{}{}", self.integer_digits(magnitude), ordinal_suffix(value))
            }
            NumberStyle::CurrencyIsoCode => {
                format!("{sign}{} {}", self.config.currency_code, self.currency_amount(magnitude))
            }
            NumberStyle::CurrencyPlural => {
                format!("{sign}{} {}", self.currency_amount(magnitude), self.config.currency_plural_name)
            }
            NumberStyle::CurrencyAccounting if value < 0 => {
                format!("({symbol}{})", self.currency_amount(magnitude))
            }
            NumberStyle::CurrencyAccounting => format!("{symbol}{}", self.currency_amount(magnitude)),
        };
        Some(text)
    }
}

impl NumberFormatter for LocaleNumberFormatter {
    #[tracing::instrument(level = "trace", skip(self))]
    fn format(&self, value: i64, style: NumberStyle) -> Option<String> {
        let rendered = self.render(value, style);
        if rendered.is_none() {
            tracing::debug!(value, style = %style, "style cannot render value");
        }
        rendered
    }
}

/// A value paired with a style, rendered through a formatter when displayed.
///
/// Writes nothing when the formatter cannot render the pair.
#[derive(Clone, Copy)]
pub struct Styled<'a> {
    value: i64,
    style: NumberStyle,
    formatter: &'a dyn NumberFormatter,
}

impl<'a> Styled<'a> {
    pub fn new(value: i64, style: NumberStyle, formatter: &'a dyn NumberFormatter) -> Self {
        Self {
            value,
            style,
            formatter,
        }
    }
}

impl fmt::Display for Styled<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format(self.value, self.style) {
            Some(text) => f.write_str(&text),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Styled<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Styled")
            .field("value", &self.value)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}
