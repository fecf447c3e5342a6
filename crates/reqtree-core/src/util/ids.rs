//! Identifier utilities for documents and items.
//!
//! Item UIDs come from file stems (`REQ001.yml` → `REQ001`). Document
//! prefixes and UIDs keep their case; only surrounding whitespace is
//! removed.

use std::path::Path;

/// Normalize a document prefix or parent reference.
///
/// Trims whitespace and returns `None` when nothing is left, so that an
/// empty `parent:` entry is treated like a missing one.
///
/// # Examples
///
/// ```
/// use reqtree_core::util::ids::normalize_prefix;
///
/// assert_eq!(normalize_prefix(" SRD "), Some("SRD".to_string()));
/// assert_eq!(normalize_prefix("   "), None);
/// ```
pub fn normalize_prefix(prefix: &str) -> Option<String> {
    let trimmed = prefix.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Compute an item UID from a file path's stem.
///
/// Returns `None` if the path has no usable stem.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use reqtree_core::util::ids::uid_from_path;
///
/// assert_eq!(
///     uid_from_path(Path::new("/project/reqs/REQ001.yml")),
///     Some("REQ001".to_string())
/// );
/// assert_eq!(uid_from_path(Path::new("/")), None);
/// ```
pub fn uid_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .and_then(normalize_prefix)
}

/// Split a UID into its document prefix and number.
///
/// The number is the trailing run of digits; an optional separator between
/// prefix and number (`-`, `_`, `.`) is dropped.
///
/// # Examples
///
/// ```
/// use reqtree_core::util::ids::split_uid;
///
/// assert_eq!(split_uid("REQ001"), Some(("REQ", 1)));
/// assert_eq!(split_uid("HLR-012"), Some(("HLR", 12)));
/// assert_eq!(split_uid("README"), None);
/// ```
pub fn split_uid(uid: &str) -> Option<(&str, u32)> {
    let digits_start = uid
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)?;
    let number = uid[digits_start..].parse().ok()?;
    let prefix = uid[..digits_start].trim_end_matches(['-', '_', '.']);
    Some((prefix, number))
}
