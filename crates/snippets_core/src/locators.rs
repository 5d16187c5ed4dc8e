//! Resource locator grammar.
//!
//! A locator is well-formed when it is a non-empty URI reference (RFC 3986): either an absolute URI
//! (`https://example.com/inbox`, `http://`) or a relative reference (`inbox/unread`, `/inbox`,
//! `someFile`).
//!
//! ## Notes
//! - Only the character-level grammar is checked: allowed characters, `%XX` escapes, at most one `#`,
//!   and a valid scheme wherever a `:` appears in the first path segment.
//! - Whitespace, non-ASCII text, quotes, angle brackets, backslashes, carets, backticks, braces, and
//!   pipes are never allowed unescaped.

/// Characters allowed unescaped anywhere in a URI reference.
fn is_uri_char(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(
            byte,
            // unreserved
            b'-' | b'.' | b'_' | b'~'
            // gen-delims
            | b':' | b'/' | b'?' | b'#' | b'[' | b']' | b'@'
            // sub-delims
            | b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
        )
}

/// Check `scheme` against `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
pub fn is_scheme(scheme: &str) -> bool {
    let mut bytes = scheme.bytes();
    match bytes.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
}

/// Check whether `text` is a well-formed, non-empty URI reference.
///
/// ## Examples
/// ```rust
/// use snippets_core::locators::is_uri_reference;
/// assert!(is_uri_reference("https://example.com/inbox"));
/// assert!(is_uri_reference("inbox/unread"));
/// assert!(is_uri_reference("http://"));
/// assert!(!is_uri_reference(""));
/// assert!(!is_uri_reference("two words"));
/// ```
pub fn is_uri_reference(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }

    let bytes = text.as_bytes();
    let mut i = 0;
    let mut fragments = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let escaped = bytes.get(i + 1..i + 3);
                if !escaped.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
                    return false;
                }
                i += 3;
                continue;
            }
            b'#' => fragments += 1,
            byte if !is_uri_char(byte) => return false,
            _ => {}
        }
        i += 1;
    }
    if fragments > 1 {
        return false;
    }

    // A `:` before the first `/`, `?`, or `#` ends a scheme.
    let head_end = text.find(['/', '?', '#']).unwrap_or(text.len());
    match text[..head_end].find(':') {
        Some(colon) => is_scheme(&text[..colon]),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_references() {
        assert!(is_uri_reference("https://www.apple.com"));
        assert!(is_uri_reference("http://localhost:8080/inbox?unread=1#top"));
        assert!(is_uri_reference("mailto:someone@example.com"));
        assert!(is_uri_reference("http://"));
    }

    #[test]
    fn test_relative_references() {
        assert!(is_uri_reference("inbox/unread"));
        assert!(is_uri_reference("someFile"));
        assert!(is_uri_reference("/inbox"));
        assert!(is_uri_reference("?page=2"));
        assert!(is_uri_reference("./a:b"));
        assert!(is_uri_reference("caf%C3%A9"));
    }

    #[test]
    fn test_rejected_references() {
        assert!(!is_uri_reference(""));
        assert!(!is_uri_reference(" "));
        assert!(!is_uri_reference("two words"));
        assert!(!is_uri_reference(r"bad\path"));
        assert!(!is_uri_reference("café"));
        assert!(!is_uri_reference("a#b#c"));
        assert!(!is_uri_reference("%zz"));
        assert!(!is_uri_reference("50%"));
        assert!(!is_uri_reference("1x:y"));
        assert!(!is_uri_reference(":inbox"));
    }

    #[test]
    fn test_scheme_grammar() {
        assert!(is_scheme("https"));
        assert!(is_scheme("svn+ssh"));
        assert!(!is_scheme(""));
        assert!(!is_scheme("1http"));
        assert!(!is_scheme("ht tp"));
    }
}
