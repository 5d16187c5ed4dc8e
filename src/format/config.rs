//! Number formatting configuration
//!
//! Defaults follow US English conventions.

/// Locale-like settings for the default number formatter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Separator between groups of three integer digits
    pub grouping_separator: char,
    /// Separator between integer and fraction digits
    pub decimal_separator: char,
    /// Whether integer digits are grouped at all
    pub uses_grouping: bool,
    /// Symbol for currency and accounting styles
    pub currency_symbol: String,
    /// ISO 4217 code for the ISO-code style
    pub currency_code: String,
    /// Plural display name for the plural currency style
    pub currency_plural_name: String,
    /// Number of fraction digits in currency renderings
    pub currency_fraction_digits: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            grouping_separator: ',',
            decimal_separator: '.',
            uses_grouping: true,
            currency_symbol: "$".to_string(),
            currency_code: "USD".to_string(),
            currency_plural_name: "US dollars".to_string(),
            currency_fraction_digits: 2,
        }
    }
}

impl FormatConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grouping separator
    pub fn with_grouping_separator(mut self, separator: char) -> Self {
        self.grouping_separator = separator;
        self
    }

    /// Set the decimal separator
    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    /// Turn digit grouping on or off
    pub fn with_grouping(mut self, uses_grouping: bool) -> Self {
        self.uses_grouping = uses_grouping;
        self
    }

    /// Set the currency symbol
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Set the ISO currency code
    pub fn with_currency_code(mut self, code: impl Into<String>) -> Self {
        self.currency_code = code.into();
        self
    }

    /// Set the plural currency name
    pub fn with_currency_plural_name(mut self, name: impl Into<String>) -> Self {
        self.currency_plural_name = name.into();
        self
    }

    /// Set the number of currency fraction digits
    pub fn with_currency_fraction_digits(mut self, digits: usize) -> Self {
        self.currency_fraction_digits = digits;
        self
    }
}
