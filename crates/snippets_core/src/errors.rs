//! Canonical error vocabulary.
//!
//! Names and messages live here so the library error types, CLI reports, and tests stay aligned.

/// Describe the bad-URL error message.
pub const BAD_URL_MSG: &str = "bad URL: the identifier is not a well-formed resource locator";

/// Enumerate the error kinds the snippets can produce.
///
/// There is exactly one: a textual identifier that cannot be parsed into a resource locator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BadUrl,
}

/// Every error kind, in declaration order.
pub const ALL_KINDS: &[ErrorKind] = &[ErrorKind::BadUrl];

impl ErrorKind {
    /// Return the stable spelling of this kind (used in diagnostics codes and logs).
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::BadUrl => "BadUrl",
        }
    }

    /// Return the canonical user-facing message for this kind.
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::BadUrl => BAD_URL_MSG,
        }
    }
}

/// Resolve a kind from its stable spelling.
pub fn from_str(name: &str) -> Option<ErrorKind> {
    ALL_KINDS.iter().copied().find(|kind| kind.as_str() == name)
}
