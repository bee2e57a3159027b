/// Normalize a tag-style version string for comparison.
///
/// The input is trimmed, then each prefix is stripped at most once, in the
/// given order. A strip may expose the next prefix, so `stubs-v1.2.3` with
/// `["stubs-", "v"]` becomes `1.2.3`.
pub fn normalize_version<P: AsRef<str>>(version: &str, prefixes: &[P]) -> String {
    let mut normalized = version.trim();
    for prefix in prefixes {
        if let Some(rest) = normalized.strip_prefix(prefix.as_ref()) {
            normalized = rest;
        }
    }
    normalized.to_string()
}
