//! On-disk YAML shapes for documents and items.
//!
//! A document directory holds a settings file:
//!
//! ```yaml
//! settings:
//!   prefix: HLR
//!   parent: SYS
//!   digits: 3
//!   sep: ''
//! ```
//!
//! and one YAML file per item, named after its UID (`HLR001.yml`):
//!
//! ```yaml
//! active: true
//! level: 1.2
//! text: |
//!   The system shall boot within two seconds.
//! links:
//! - SYS004: 3dc1a9d0
//! ```
//!
//! `level` may be written as a number (`1.2`) or a string (`'1.10'`); the
//! latter is needed when a segment ends in zero.

use std::path::Path;

use reqtree_core::{Error, Level, Result};
use serde::Deserialize;
use serde_yaml::Value;

use crate::model::Item;

// ============================================================================
// Document settings
// ============================================================================

/// Top-level shape of a document settings file.
#[derive(Debug, Deserialize)]
pub(crate) struct SettingsFile {
    pub settings: DocumentSettings,
}

/// The `settings:` block of a document.
#[derive(Debug, Deserialize)]
pub(crate) struct DocumentSettings {
    pub prefix: String,
    #[serde(default)]
    pub parent: Option<String>,
}

/// Parse a document settings file.
pub(crate) fn parse_settings(content: &str, path: &Path) -> Result<DocumentSettings> {
    let file: SettingsFile = serde_yaml::from_str(content)
        .map_err(|e| Error::parse(format!("Invalid document settings {}: {e}", path.display())))?;
    Ok(file.settings)
}

// ============================================================================
// Item records
// ============================================================================

/// One entry of an item's `links:` list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LinkEntry {
    /// `- SYS004`
    Uid(String),
    /// `- SYS004: 3dc1a9d0` (UID with review stamp)
    Stamped(std::collections::BTreeMap<String, Value>),
}

/// Raw item file contents before validation.
#[derive(Debug, Deserialize)]
struct ItemRecord {
    #[serde(default)]
    level: Option<Value>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    header: Option<String>,
    #[serde(default = "default_true")]
    active: bool,
    #[serde(default = "default_true")]
    normative: bool,
    #[serde(default)]
    derived: bool,
    #[serde(default)]
    links: Vec<LinkEntry>,
}

fn default_true() -> bool {
    true
}

/// Render a YAML `level:` value as dotted text.
fn level_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

/// Parse an item file into an [`Item`] with the given UID.
///
/// A missing `level` defaults to `1`.
pub(crate) fn parse_item(uid: &str, content: &str, path: &Path) -> Result<Item> {
    let record: ItemRecord = serde_yaml::from_str(content)
        .map_err(|e| Error::parse(format!("Invalid item {}: {e}", path.display())))?;

    let level = match &record.level {
        None => Level::parse("1")?,
        Some(value) => {
            let text = level_text(value).ok_or_else(|| {
                Error::parse(format!(
                    "Invalid item {}: level must be a number or string",
                    path.display()
                ))
            })?;
            Level::parse(&text).map_err(|e| match e {
                Error::InvalidIndex { index, reason } => {
                    Error::invalid_index(index, format!("{reason} in {}", path.display()))
                }
                other => other,
            })?
        }
    };

    let links = record
        .links
        .into_iter()
        .flat_map(|entry| match entry {
            LinkEntry::Uid(uid) => vec![uid],
            LinkEntry::Stamped(map) => map.into_keys().collect(),
        })
        .collect();

    Ok(Item {
        uid: uid.to_string(),
        level,
        text: record.text.unwrap_or_default().trim_end().to_string(),
        header: record.header.unwrap_or_default().trim().to_string(),
        active: record.active,
        normative: record.normative,
        derived: record.derived,
        links,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> &'static Path {
        Path::new("reqs/REQ001.yml")
    }

    // ------------------------------------------------------------------------
    // Settings
    // ------------------------------------------------------------------------

    #[test]
    fn test_parse_settings_root() {
        let settings = parse_settings("settings:\n  prefix: SYS\n  digits: 3\n", path()).unwrap();
        assert_eq!(settings.prefix, "SYS");
        assert_eq!(settings.parent, None);
    }

    #[test]
    fn test_parse_settings_child() {
        let yaml = "settings:\n  prefix: HLR\n  parent: SYS\n  sep: '-'\n";
        let settings = parse_settings(yaml, path()).unwrap();
        assert_eq!(settings.parent.as_deref(), Some("SYS"));
    }

    #[test]
    fn test_parse_settings_missing_prefix() {
        let err = parse_settings("settings:\n  digits: 3\n", path()).unwrap_err();
        assert!(err.to_string().contains("reqs/REQ001.yml"));
    }

    // ------------------------------------------------------------------------
    // Items
    // ------------------------------------------------------------------------

    #[test]
    fn test_parse_item_numeric_level() {
        let item = parse_item("REQ001", "level: 1.2\ntext: Boot fast\n", path()).unwrap();
        assert_eq!(item.level.segments(), &[1, 2]);
        assert_eq!(item.text, "Boot fast");
        assert!(item.active);
        assert!(item.normative);
    }

    #[test]
    fn test_parse_item_integer_level() {
        let item = parse_item("REQ002", "level: 3\ntext: x\n", path()).unwrap();
        assert_eq!(item.level.segments(), &[3]);
    }

    #[test]
    fn test_parse_item_string_level_keeps_trailing_zero_segment() {
        let item = parse_item("REQ003", "level: '1.10'\ntext: x\n", path()).unwrap();
        assert_eq!(item.level.segments(), &[1, 10]);
    }

    #[test]
    fn test_parse_item_heading_level() {
        let item = parse_item("REQ004", "level: 2.0\nheader: Software\nnormative: false\n", path())
            .unwrap();
        assert_eq!(item.level.segments(), &[2]);
        assert!(item.is_heading());
        assert_eq!(item.header, "Software");
        assert!(!item.normative);
    }

    #[test]
    fn test_parse_item_default_level() {
        let item = parse_item("REQ005", "text: no level\n", path()).unwrap();
        assert_eq!(item.level.segments(), &[1]);
    }

    #[test]
    fn test_parse_item_links_both_forms() {
        let yaml = "level: 1\nlinks:\n- SYS001: abc123\n- SYS002\n";
        let item = parse_item("HLR001", yaml, path()).unwrap();
        assert_eq!(item.links, vec!["SYS001", "SYS002"]);
    }

    #[test]
    fn test_parse_item_inactive() {
        let item = parse_item("REQ006", "level: 1\nactive: false\n", path()).unwrap();
        assert!(!item.active);
    }

    #[test]
    fn test_parse_item_multiline_text_trimmed() {
        let yaml = "level: 1\ntext: |\n  First line\n  Second line\n";
        let item = parse_item("REQ007", yaml, path()).unwrap();
        assert_eq!(item.text, "First line\nSecond line");
    }

    #[test]
    fn test_parse_item_bad_level_type() {
        let err = parse_item("REQ008", "level: [1, 2]\n", path()).unwrap_err();
        assert!(err.to_string().contains("level must be"));
    }

    #[test]
    fn test_parse_item_empty_level_string() {
        let err = parse_item("REQ009", "level: ''\n", path()).unwrap_err();
        assert!(err.is_invalid_index());
        assert!(err.to_string().contains("reqs/REQ001.yml"));
    }

    #[test]
    fn test_parse_item_bad_level_names_file() {
        let err = parse_item("REQ011", "level: 1.a\n", path()).unwrap_err();
        assert!(err.is_invalid_index());
        assert_eq!(
            err.to_string(),
            "Invalid item index '1.a': segment 'a' is not a number in reqs/REQ001.yml"
        );
    }

    #[test]
    fn test_parse_item_invalid_yaml() {
        let err = parse_item("REQ010", "level: [unclosed\n", path()).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
