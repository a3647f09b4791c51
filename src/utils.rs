//! Common utility functions shared across the codebase.

use std::path::Path;

use deunicode::deunicode;

/// Turns a path-like name into a filesystem-safe identifier.
///
/// Non-ASCII text is transliterated first, then letters and digits are
/// lowercased; every run of other characters becomes a single `-`, and
/// leading or trailing separators are dropped. An empty result becomes `root`.
///
/// # Examples
///
/// ```
/// use trans_collect::utils::slug;
///
/// assert_eq!(slug("resources/views"), "resources-views");
/// assert_eq!(slug("App/Http Controllers/"), "app-http-controllers");
/// assert_eq!(slug("Ünïcode Dir/Vues"), "unicode-dir-vues");
/// assert_eq!(slug(""), "root");
/// ```
pub fn slug(name: &str) -> String {
    let ascii = deunicode(name);
    let mut out = String::with_capacity(ascii.len());
    let mut pending_separator = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('-');
            }
            pending_separator = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    if out.is_empty() {
        "root".to_string()
    } else {
        out
    }
}

/// Displays `path` relative to `base` with `/` separators.
///
/// Paths outside `base` are displayed in full.
pub fn relative_path(path: &Path, base: &Path) -> String {
    let relative = path.strip_prefix(base).unwrap_or(path);
    relative.to_string_lossy().replace('\\', "/")
}
