use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
});

/// Three base64url segments joined by dots, i.e. a compact JWS.
static JWT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]{8,}").unwrap()
});

/// PHC-formatted argon2 hashes.
static ARGON2_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\$argon2(?:id|i|d)\$[A-Za-z0-9$=,+/.-]+").unwrap()
});

/// Masks emails (first character of the local part survives), bearer tokens
/// and password hashes.
pub fn redact(input: &str) -> String {
    let emails = EMAIL_REGEX.replace_all(input, |caps: &regex::Captures| {
        let full_match = &caps[0];
        match full_match.split_once('@') {
            Some((local, domain)) if !local.is_empty() => {
                format!("{}***@{domain}", &local[..1])
            }
            _ => full_match.to_string(),
        }
    });

    let tokens = JWT_REGEX.replace_all(&emails, "[REDACTED_TOKEN]");

    ARGON2_REGEX
        .replace_all(&tokens, "[REDACTED_HASH]")
        .to_string()
}

/// Display wrapper that runs [`redact`] when formatted, for use in
/// `tracing` fields: `email = %Redacted(&email)`.
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
