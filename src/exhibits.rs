//! Raw string literal exhibits.
//!
//! Each constant is written the way it reads best; the tests pin down the exact text each literal
//! produces. The delimiter and escaping rules themselves live in `snippets_core::literals`.

use snippets_core::literals::{escaped_literal, escapes_saved, hashes_required, raw_literal};

/// Quotes inside a raw literal need no escaping.
pub const RAIN: &str = r#"The "rain" in "Spain" falls mainly on the spaniards."#;

/// A backslash inside a raw literal is an ordinary character.
pub const KEYPATHS: &str = r"Key paths such as \Person.name hold uninvoked references to properties.";

/// A regular expression written with escapes.
pub const REGEX_ESCAPED: &str = "\\\\[A-Z]+[A-Za-z]+\\.[a-z]+";

/// The same regular expression written raw.
pub const REGEX_RAW: &str = r"\\[A-Z]+[A-Za-z]+\.[a-z]+";

/// Interpolate into a raw template: the delimiter does not change the `{answer}` marker.
pub fn interpolate_raw_answer(answer: i64) -> String {
    format!(r#"The answer is {answer}."#)
}

/// Interpolate into a template whose text contains `"#`, which needs a two-mark delimiter.
///
/// The `{name}` marker is substituted even inside the `#` marks: a raw literal only changes how
/// quotes and backslashes are read, not how `format!` reads braces. See
/// [`interpolate_escaped_marker`] for a marker that stays literal.
pub fn interpolate_hashed_name(name: &str) -> String {
    format!(r##"My name is "#{name}"# ####."##)
}

/// Keep one marker literal with doubled braces and substitute the other.
pub fn interpolate_escaped_marker(name: &str) -> String {
    format!(r#"My name is {{name}}, not {name}."#)
}

/// Interpolate into a raw template that also wants literal braces.
pub fn interpolate_braced(key: &str) -> String {
    format!(r#"{{"key": "{key}"}}"#)
}

/// A named exhibit and the literal forms of its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exhibit {
    pub name: &'static str,
    pub text: String,
}

impl Exhibit {
    fn new(name: &'static str, text: impl Into<String>) -> Self {
        Self {
            name,
            text: text.into(),
        }
    }

    /// The text as a raw literal with the fewest delimiter marks.
    pub fn raw_source(&self) -> String {
        raw_literal(&self.text)
    }

    /// The text as an ordinary escaped literal.
    pub fn escaped_source(&self) -> String {
        escaped_literal(&self.text)
    }

    /// Number of `#` marks the raw delimiter needs for this text.
    pub fn hashes(&self) -> usize {
        hashes_required(&self.text)
    }

    /// Backslashes the escaped form adds over the raw form.
    pub fn escapes_saved(&self) -> usize {
        escapes_saved(&self.text)
    }
}

/// Every exhibit, with interpolated ones evaluated for `answer = 10` and `name = "Kirti"`.
pub fn all() -> Vec<Exhibit> {
    vec![
        Exhibit::new("rain", RAIN),
        Exhibit::new("keypaths", KEYPATHS),
        Exhibit::new("raw-answer", interpolate_raw_answer(10)),
        Exhibit::new("hashed-name", interpolate_hashed_name("Kirti")),
        Exhibit::new("escaped-marker", interpolate_escaped_marker("Kirti")),
        Exhibit::new("braced", interpolate_braced("Kirti")),
        Exhibit::new("regex", REGEX_RAW),
    ]
}
