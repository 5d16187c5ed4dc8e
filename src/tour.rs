//! Top-to-bottom walk through every snippet.
//!
//! The tour returns its output as lines so the CLI can print them and tests can compare them.

use crate::capture::{TOUR_FILE, describe_read, read_snippet};
use crate::exhibits;
use crate::fetch::{describe_outcome, fetch_unread_count, unread_count};
use crate::format::{FormatConfig, LocaleNumberFormatter, NumberStyle, User};

/// Locator the tour fetches after the empty one.
pub const TOUR_URL: &str = "https://example.com/inbox";
/// Value the tour renders in every number style.
pub const TOUR_VALUE: i64 = 1_234;

/// Run the tour with `config` driving number formatting.
pub fn tour(config: &FormatConfig) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("== Result".to_string());
    for locator in ["", TOUR_URL] {
        let outcome = fetch_unread_count(locator);
        lines.push(format!("fetch({locator:?}) -> {}", describe_outcome(&outcome)));
        match unread_count(&outcome) {
            Some(count) => lines.push(format!("  optional access: {count}")),
            None => lines.push("  optional access: none".to_string()),
        }
    }
    let read = read_snippet(TOUR_FILE);
    lines.push(format!("read({TOUR_FILE:?}) -> {}", describe_read(&read)));

    lines.push("== Raw strings".to_string());
    for exhibit in exhibits::all() {
        lines.push(format!("{}: {}", exhibit.name, exhibit.text));
    }

    lines.push("== Interpolation".to_string());
    let user = User::new("Kirti", 29);
    lines.push(format!("User details: {user}"));
    let formatter = LocaleNumberFormatter::new(config.clone());
    for style in NumberStyle::ALL {
        lines.push(format!("{style}: {}", formatter.styled(TOUR_VALUE, style)));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_sections_in_order() {
        let lines = tour(&FormatConfig::default());
        let headers: Vec<&str> = lines
            .iter()
            .filter(|line| line.starts_with("== "))
            .map(String::as_str)
            .collect();
        assert_eq!(headers, vec!["== Result", "== Raw strings", "== Interpolation"]);
    }

    #[test]
    fn test_tour_reports_both_outcomes() {
        let lines = tour(&FormatConfig::default());
        assert!(lines.iter().any(|l| l.starts_with("fetch(\"\") -> bad URL")));
        assert!(lines.contains(&format!("fetch({TOUR_URL:?}) -> 5 unread messages.")));
        assert!(lines.contains(&"  optional access: none".to_string()));
        assert!(lines.contains(&"  optional access: 5".to_string()));
    }

    #[test]
    fn test_tour_reports_captured_read() {
        let lines = tour(&FormatConfig::default());
        let result_section: Vec<&String> = lines.iter().take_while(|l| *l != "== Raw strings").collect();
        assert_eq!(
            result_section.last().map(|l| l.as_str()),
            Some("read(\"someFile\") -> cannot read snippet file `someFile`")
        );
    }

    #[test]
    fn test_tour_uses_config() {
        let config = FormatConfig::new().with_currency_symbol("€");
        let lines = tour(&config);
        assert!(lines.contains(&"currency: €1,234.00".to_string()));
    }
}
