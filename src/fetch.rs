//! Unread-count fetch stub.
//!
//! The fetcher validates a textual resource locator and reports a fixed, simulated unread count. It
//! never performs network I/O.
//!
//! ## Outcome
//!
//! The outcome is a plain `Result<u32, FetchError>`:
//! - `Ok(count)`: the locator is a well-formed URI reference, absolute (`https://example.com`) or
//!   relative (`inbox/unread`); `count` is always [`SIMULATED_UNREAD_COUNT`].
//! - `Err(FetchError::BadUrl)`: the locator is empty or breaks the URI reference grammar. Nothing else
//!   happens.
//!
//! Callers consume it the usual ways: an exhaustive `match` (see [`describe_outcome`]) or optional
//! access via `.ok()` (see [`unread_count`]).

use std::fmt;

use miette::Diagnostic;
use snippets_core::ErrorKind;
use snippets_core::errors::BAD_URL_MSG;
use snippets_core::locators::is_uri_reference;
use thiserror::Error;
use url::Url;

/// The unread count every successful fetch reports.
pub const SIMULATED_UNREAD_COUNT: u32 = 5;

/// Errors produced by the fetch stub.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum FetchError {
    #[error("{}", BAD_URL_MSG)]
    #[diagnostic(
        code(snippets::fetch::bad_url),
        help("pass a URL or a relative reference without spaces, for example `https://example.com/inbox`")
    )]
    BadUrl,
}

impl FetchError {
    /// Return the canonical kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::BadUrl => ErrorKind::BadUrl,
        }
    }
}

/// A validated resource locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// An absolute URL, normalized by the `url` crate.
    Absolute(Url),
    /// A relative reference (or an absolute one `url` cannot normalize), kept as written.
    Reference(String),
}

impl Locator {
    pub fn as_str(&self) -> &str {
        match self {
            Locator::Absolute(url) => url.as_str(),
            Locator::Reference(text) => text,
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse `locator` as a URI reference.
///
/// Anything outside the reference grammar (including empty and whitespace-only input) is
/// `FetchError::BadUrl`.
pub fn parse_locator(locator: &str) -> Result<Locator, FetchError> {
    if !is_uri_reference(locator) {
        return Err(FetchError::BadUrl);
    }
    Ok(match Url::parse(locator) {
        Ok(url) => Locator::Absolute(url),
        Err(_) => Locator::Reference(locator.to_string()),
    })
}

/// Fetch the unread count for `locator`.
///
/// ## Returns
///
/// - `Ok(SIMULATED_UNREAD_COUNT)` when `locator` is a well-formed URI reference.
/// - `Err(FetchError::BadUrl)` otherwise, detected before any other work.
#[tracing::instrument(skip_all, fields(locator_len = locator.len()))]
pub fn fetch_unread_count(locator: &str) -> Result<u32, FetchError> {
    let locator = parse_locator(locator)?;

    // Retrieval is simulated.
    tracing::info!(locator = %locator, "Fetching {locator}...");
    Ok(SIMULATED_UNREAD_COUNT)
}

/// Completion-style form of [`fetch_unread_count`].
///
/// `completion` is invoked exactly once, before this function returns, with the same outcome
/// [`fetch_unread_count`] would return.
pub fn fetch_unread_count_then<F>(locator: &str, completion: F)
where
    F: FnOnce(Result<u32, FetchError>),
{
    completion(fetch_unread_count(locator));
}

/// Describe an outcome for display by matching every variant.
pub fn describe_outcome(outcome: &Result<u32, FetchError>) -> String {
    match outcome {
        Ok(count) => format!("{count} unread messages."),
        Err(err) => err.to_string(),
    }
}

/// Return the unread count of a successful outcome, or `None` for a failure.
pub fn unread_count(outcome: &Result<u32, FetchError>) -> Option<u32> {
    outcome.as_ref().ok().copied()
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Log sink shared between the subscriber and the test.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Run `f` under a thread-local fmt subscriber and return everything it logged.
    fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let sink = Captured::default();
        let writer = sink.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        let value = tracing::subscriber::with_default(subscriber, f);
        let bytes = sink.0.lock().unwrap().clone();
        (value, String::from_utf8(bytes).unwrap())
    }

    #[test]
    fn test_empty_locator_is_bad_url() {
        assert_eq!(fetch_unread_count(""), Err(FetchError::BadUrl));
        assert_eq!(fetch_unread_count("   "), Err(FetchError::BadUrl));
    }

    #[test]
    fn test_relative_references_report_simulated_count() {
        assert_eq!(fetch_unread_count("inbox/unread"), Ok(5));
        assert_eq!(fetch_unread_count("someFile"), Ok(5));
        assert_eq!(fetch_unread_count("/inbox"), Ok(5));
        assert_eq!(fetch_unread_count("http://"), Ok(5));
    }

    #[test]
    fn test_malformed_references_are_bad_url() {
        assert_eq!(fetch_unread_count("two words"), Err(FetchError::BadUrl));
        assert_eq!(fetch_unread_count(r"bad\path"), Err(FetchError::BadUrl));
        assert_eq!(fetch_unread_count("1x:y"), Err(FetchError::BadUrl));
    }

    #[test]
    fn test_parse_locator_normalizes_absolute_only() {
        let absolute = parse_locator("HTTPS://Example.com").unwrap();
        assert!(matches!(absolute, Locator::Absolute(_)));
        assert_eq!(absolute.to_string(), "https://example.com/");

        let relative = parse_locator("inbox/unread").unwrap();
        assert_eq!(relative, Locator::Reference("inbox/unread".to_string()));
        assert_eq!(parse_locator("http://").unwrap().as_str(), "http://");
    }

    #[test]
    fn test_absolute_locator_reports_simulated_count() {
        assert_eq!(fetch_unread_count("https://www.apple.com"), Ok(5));
        assert_eq!(fetch_unread_count("http://localhost:8080/inbox?unread=1"), Ok(5));
    }

    #[test]
    fn test_completion_runs_exactly_once() {
        let mut calls = Vec::new();
        fetch_unread_count_then("https://example.com", |outcome| calls.push(outcome));
        fetch_unread_count_then("", |outcome| calls.push(outcome));
        assert_eq!(calls, vec![Ok(5), Err(FetchError::BadUrl)]);
    }

    #[test]
    fn test_describe_outcome_both_variants() {
        assert_eq!(describe_outcome(&Ok(5)), "5 unread messages.");
        assert_eq!(describe_outcome(&Err(FetchError::BadUrl)), BAD_URL_MSG);
    }

    #[test]
    fn test_unread_count_is_optional_access() {
        assert_eq!(unread_count(&Ok(5)), Some(5));
        assert_eq!(unread_count(&Err(FetchError::BadUrl)), None);
    }

    #[test]
    fn test_error_kind_and_diagnostic_code() {
        let err = FetchError::BadUrl;
        assert_eq!(err.kind(), ErrorKind::BadUrl);
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("snippets::fetch::bad_url"));
    }

    #[test]
    fn test_success_logs_fetching_line() {
        let (outcome, logs) = capture_logs(|| fetch_unread_count("https://example.com"));
        assert_eq!(outcome, Ok(5));
        assert!(logs.contains("Fetching https://example.com/..."), "logs: {logs}");
        assert!(logs.contains("INFO"), "logs: {logs}");
    }

    #[test]
    fn test_relative_reference_logs_as_written() {
        let (_, logs) = capture_logs(|| fetch_unread_count("inbox/unread"));
        assert!(logs.contains("Fetching inbox/unread..."), "logs: {logs}");
    }

    #[test]
    fn test_bad_url_logs_nothing() {
        let (outcome, logs) = capture_logs(|| fetch_unread_count(""));
        assert_eq!(outcome, Err(FetchError::BadUrl));
        assert_eq!(logs, "");
    }
}
