//! Documents discovered before their parent.

use reqtree_cli::commands::{ShowOptions, open, show};
use reqtree_cli::{OutputFormat, ReqtreeConfig};

use crate::common::ProjectFixture;

/// `a_hlr` sorts before `b_sys`, so HLR is discovered before SYS.
fn out_of_order_project() -> ProjectFixture {
    ProjectFixture::new()
        .document("a_hlr", "HLR", Some("SYS"))
        .item("a_hlr", "HLR001", "1", "Boot")
        .document("b_sys", "SYS", None)
        .item("b_sys", "SYS001", "1", "Hardware")
}

#[test]
fn test_strict_assembly_rejects_child_first() {
    let fixture = out_of_order_project();
    let err = open(
        &ReqtreeConfig::default(),
        Some(fixture.root()),
        OutputFormat::Text,
        false,
    )
    .unwrap_err();
    assert!(err.to_string().contains("Parent 'SYS' not found for 'HLR'"));
}

#[test]
fn test_deferred_assembly_accepts_child_first() {
    let fixture = out_of_order_project();
    let out = open(
        &ReqtreeConfig::default(),
        Some(fixture.root()),
        OutputFormat::Text,
        true,
    )
    .unwrap();
    assert_eq!(out, "▾ SYS (1 items)\n  HLR (1 items)\n");
}

#[test]
fn test_deferred_assembly_from_config() {
    let fixture = out_of_order_project();
    let mut config = ReqtreeConfig::default();
    config.view.deferred_documents = true;

    let out = open(&config, Some(fixture.root()), OutputFormat::Text, false).unwrap();
    assert!(out.starts_with("▾ SYS"));
}

#[test]
fn test_show_with_deferred_flag() {
    let fixture = out_of_order_project();
    let config = ReqtreeConfig::default();

    let strict = show(&config, Some(fixture.root()), "HLR", ShowOptions::default());
    assert!(strict.is_err());

    let options = ShowOptions {
        deferred: true,
        ..ShowOptions::default()
    };
    let out = show(&config, Some(fixture.root()), "HLR", options).unwrap();
    assert_eq!(out, "1 Boot\n");
}
