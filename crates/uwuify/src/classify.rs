//! Token classification predicates.
//!
//! These predicates decide which space-delimited tokens the passes may
//! touch. Handles and URIs are protected from mutation; whitespace-only
//! tokens never receive embellishments.
//!
//! # URI acceptance rules
//!
//! - Only characters from the RFC 3986 unreserved, reserved, and `%` sets
//! - Every `%` starts a complete two-digit hex escape
//! - A scheme matching `[A-Za-z][A-Za-z0-9+.-]*` is present
//! - With an authority, the path is empty or starts with `/`
//! - Without an authority, the path does not start with `//`

/// Returns `true` if the token is a handle such as `@someone`.
///
/// # Examples
///
/// ```
/// use uwuify::is_handle;
///
/// assert!(is_handle("@username"));
/// assert!(!is_handle("hello@world"));
/// assert!(!is_handle(""));
/// ```
#[must_use]
pub fn is_handle(word: &str) -> bool {
    word.starts_with('@')
}

/// Returns `true` if the token is empty or whitespace-only.
#[must_use]
pub fn is_break(word: &str) -> bool {
    word.trim().is_empty()
}

/// Returns the fraction of letters in `word` that are uppercase.
///
/// Characters that are not letters count towards neither side. A word with
/// no letters yields `0.0`.
///
/// # Examples
///
/// ```
/// use uwuify::capital_ratio;
///
/// assert_eq!(capital_ratio("HeLLo"), 0.6);
/// assert_eq!(capital_ratio("H3LL0"), 1.0);
/// assert_eq!(capital_ratio("123"), 0.0);
/// ```
#[must_use]
pub fn capital_ratio(word: &str) -> f64 {
    let (letters, upper) = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .fold((0_u32, 0_u32), |(letters, upper), c| {
            (letters + 1, upper + u32::from(c.is_uppercase()))
        });

    if letters == 0 {
        return 0.0;
    }
    f64::from(upper) / f64::from(letters)
}

/// Returns `true` if the token looks like a URI that must not be mangled.
///
/// This is a conservative filter rather than a full validator: exotic but
/// technically valid URIs may be rejected.
///
/// # Examples
///
/// ```
/// use uwuify::is_uri;
///
/// assert!(is_uri("https://example.com:8080/path?query=value#fragment"));
/// assert!(is_uri("mailto:user@example.com"));
/// assert!(!is_uri("://example.com"));
/// assert!(!is_uri("hello"));
/// ```
#[must_use]
pub fn is_uri(word: &str) -> bool {
    if word.is_empty() || !word.chars().all(is_uri_char) || !has_valid_escapes(word) {
        return false;
    }

    let parts = UriParts::parse(word);
    let Some(scheme) = parts.scheme else {
        return false;
    };

    let path_ok = match parts.authority {
        Some(_) => parts.path.is_empty() || parts.path.starts_with('/'),
        None => !parts.path.starts_with("//"),
    };

    path_ok && is_valid_scheme(scheme)
}

/// The five components of a URI reference, borrowed from the source text.
///
/// Components are split with the generic grammar of RFC 3986 appendix B.
/// An empty scheme or authority is reported as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UriParts<'a> {
    /// Text before the first `:`, when no `/`, `?`, or `#` precedes it.
    pub scheme: Option<&'a str>,
    /// Text after a leading `//`, up to the next `/`, `?`, or `#`.
    pub authority: Option<&'a str>,
    /// Text up to the first `?` or `#`.
    pub path: &'a str,
    /// Text after `?`, up to the first `#`.
    pub query: Option<&'a str>,
    /// Text after the first `#`.
    pub fragment: Option<&'a str>,
}

impl<'a> UriParts<'a> {
    /// Splits `text` into its components. Every string splits successfully.
    ///
    /// # Examples
    ///
    /// ```
    /// use uwuify::UriParts;
    ///
    /// let parts = UriParts::parse("https://example.com/a?b=c#d");
    /// assert_eq!(parts.scheme, Some("https"));
    /// assert_eq!(parts.authority, Some("example.com"));
    /// assert_eq!(parts.path, "/a");
    /// assert_eq!(parts.query, Some("b=c"));
    /// assert_eq!(parts.fragment, Some("d"));
    /// ```
    #[must_use]
    pub fn parse(text: &'a str) -> Self {
        let (scheme, after_scheme) = match text.find([':', '/', '?', '#']) {
            Some(end) if end > 0 => {
                let (head, tail) = text.split_at(end);
                tail.strip_prefix(':').map_or((None, text), |after| (Some(head), after))
            }
            _ => (None, text),
        };

        let (authority, rest) = after_scheme
            .strip_prefix("//")
            .map_or((None, after_scheme), |after| {
                let end = after.find(['/', '?', '#']).unwrap_or(after.len());
                let (host, tail) = after.split_at(end);
                (Some(host), tail)
            });

        let (before_fragment, fragment) = rest
            .split_once('#')
            .map_or((rest, None), |(head, tail)| (head, Some(tail)));
        let (path, query) = before_fragment
            .split_once('?')
            .map_or((before_fragment, None), |(head, tail)| (head, Some(tail)));

        Self {
            scheme,
            authority: authority.filter(|value| !value.is_empty()),
            path,
            query,
            fragment,
        }
    }
}

const fn is_uri_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            ':' | '/'
                | '?'
                | '#'
                | '['
                | ']'
                | '@'
                | '!'
                | '$'
                | '&'
                | '\''
                | '('
                | ')'
                | '*'
                | '+'
                | ','
                | ';'
                | '='
                | '.'
                | '-'
                | '_'
                | '~'
                | '%'
        )
}

/// Every `%` must be followed by exactly two hex digits.
fn has_valid_escapes(word: &str) -> bool {
    let bytes = word.as_bytes();
    bytes.iter().enumerate().all(|(index, byte)| {
        *byte != b'%'
            || matches!(
                (bytes.get(index + 1), bytes.get(index + 2)),
                (Some(high), Some(low)) if high.is_ascii_hexdigit() && low.is_ascii_hexdigit()
            )
    })
}

fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
