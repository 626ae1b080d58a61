//! ULID-suffixed fixture values so tests sharing a database never collide.

use ulid::Ulid;

/// `{prefix}-{ulid}`
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("user");
/// assert!(a.starts_with("user-"));
/// assert_ne!(a, unique_str("user"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{prefix}-{}", Ulid::new())
}

/// `{prefix}-{ulid}@example.test`, lowercased so it round-trips through
/// case-sensitive unique indexes unchanged.
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@example.test", Ulid::new()).to_lowercase()
}

/// A colon-separated MAC-style string whose last three octets come from a
/// fresh ULID.
pub fn unique_mac() -> String {
    let bytes = Ulid::new().to_bytes();
    format!(
        "AA:BB:CC:{:02X}:{:02X}:{:02X}",
        bytes[13], bytes[14], bytes[15]
    )
}
