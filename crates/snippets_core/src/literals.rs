//! Raw string literal rules.
//!
//! A raw literal's text is exactly the characters written between its delimiters: a backslash is an
//! ordinary character, never an escape introducer. The only thing that can end a raw literal early is a
//! `"` followed by as many `#` marks as the opening delimiter carries, so the delimiter must carry more
//! marks than the longest `"#...` run inside the text.
//!
//! ## Notes
//! - Interpolation (`format!`'s `{name}` marker) is independent of the delimiter: a raw template still
//!   interpolates, and a literal brace is still written `{{`.

/// Return the minimum number of `#` marks a raw literal needs to hold `text` verbatim.
///
/// ## Parameters
/// - `text`: the literal text.
///
/// ## Returns
/// - (`usize`): `0` when `text` has no `"`; otherwise one more than the longest run of `#` that directly
///   follows a `"`.
///
/// ## Examples
/// ```rust
/// use snippets_core::literals::hashes_required;
/// assert_eq!(hashes_required(r"C:\temp"), 0);
/// assert_eq!(hashes_required(r#"the "rain""#), 1);
/// assert_eq!(hashes_required(r##"a "#b"##), 2);
/// ```
pub fn hashes_required(text: &str) -> usize {
    let mut required = 0;
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '"' {
            continue;
        }
        let mut run = 0;
        while chars.peek() == Some(&'#') {
            chars.next();
            run += 1;
        }
        required = required.max(run + 1);
    }
    required
}

/// Render `text` as a raw literal with the fewest `#` marks that keep it verbatim.
///
/// ## Examples
/// ```rust
/// use snippets_core::literals::raw_literal;
/// assert_eq!(raw_literal(r"\d+"), r#"r"\d+""#);
/// assert_eq!(raw_literal(r#"say "hi""#), r##"r#"say "hi""#"##);
/// ```
pub fn raw_literal(text: &str) -> String {
    let hashes = "#".repeat(hashes_required(text));
    let mut out = String::with_capacity(text.len() + 3 + 2 * hashes.len());
    out.push('r');
    out.push_str(&hashes);
    out.push('"');
    out.push_str(text);
    out.push('"');
    out.push_str(&hashes);
    out
}

/// Render `text` as an ordinary (escaped) string literal.
///
/// Backslashes and quotes are escaped, as are newlines, carriage returns, and tabs. Every other
/// character is written as-is.
pub fn escaped_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str(r"\\"),
            '"' => out.push_str(r#"\""#),
            '\n' => out.push_str(r"\n"),
            '\r' => out.push_str(r"\r"),
            '\t' => out.push_str(r"\t"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

/// Count the escape introducers an ordinary literal needs that a raw literal does not.
pub fn escapes_saved(text: &str) -> usize {
    escaped_literal(text).len() - text.len() - 2
}
