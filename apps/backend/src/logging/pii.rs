use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\b([A-Za-z0-9._%+-])[A-Za-z0-9._%+-]*(@[A-Za-z0-9.-]+\.[A-Za-z]+)\b").unwrap()
});

/// Bearer tokens and their segments: base64url runs of 16+ chars,
/// optionally dot-joined.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"[A-Za-z0-9_-]{16,}(?:\.[A-Za-z0-9_-]+){0,2}").unwrap()
});

/// Mask emails (first char of the local part kept) and opaque tokens.
/// Emails are handled first so their domains are not mistaken for tokens.
pub fn redact(input: &str) -> String {
    let masked_emails = EMAIL.replace_all(input, "$1***$2");
    TOKEN
        .replace_all(&masked_emails, "[REDACTED_TOKEN]")
        .into_owned()
}

/// Display wrapper that redacts its contents.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}
