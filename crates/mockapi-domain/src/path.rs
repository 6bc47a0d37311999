//! URL path normalization.

/// Canonicalize a URL path for comparison.
///
/// Backslashes become forward slashes and a trailing `/` is appended when
/// missing. Used for both stored route keys and incoming request paths.
pub fn normalize(path: &str) -> String {
    let mut normalized = path.replace('\\', "/");
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    normalized
}
