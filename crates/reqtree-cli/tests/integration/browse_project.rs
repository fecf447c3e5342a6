//! Opening a project from disk and browsing its documents.

use reqtree_cli::commands::{ShowOptions, open, show};
use reqtree_cli::config::StoreSection;
use reqtree_cli::{NO_REQUIREMENTS_LOADED, OutputFormat, ReqtreeConfig, Session};
use reqtree_store::FileStore;
use reqtree_tree::ViewMode;

use crate::common::{ProjectFixture, sample_project};

#[test]
fn test_session_loads_sample_project() {
    let fixture = sample_project();
    let mut session = Session::default();

    assert!(session
        .open_project(&FileStore::new(), Some(fixture.root()))
        .unwrap());

    assert_eq!(session.documents().prefixes(), vec!["SYS", "HLR"]);
    let project = session.project().unwrap();
    assert_eq!(project.document("SYS").unwrap().items.len(), 4);
    assert_eq!(project.item_count(), 6);
    assert_eq!(session.status(), NO_REQUIREMENTS_LOADED);
}

#[test]
fn test_item_tree_follows_levels() {
    let fixture = sample_project();
    let mut session = Session::default();
    session
        .open_project(&FileStore::new(), Some(fixture.root()))
        .unwrap();

    let tree = session.select_document("SYS").unwrap().as_tree().unwrap();
    assert_eq!(tree.roots().len(), 2);

    let hardware = tree.roots()[0];
    assert_eq!(tree.label(hardware), Some("1 Hardware"));
    let children: Vec<_> = tree
        .children(hardware)
        .iter()
        .filter_map(|&id| tree.label(id))
        .collect();
    assert_eq!(children, vec!["1.1 AXI", "1.2 Memory map"]);
}

#[test]
fn test_open_text_output() {
    let fixture = sample_project();
    let out = open(
        &ReqtreeConfig::default(),
        Some(fixture.root()),
        OutputFormat::Text,
        false,
    )
    .unwrap();
    assert_eq!(out, "▾ SYS (4 items)\n  HLR (2 items)\n");
}

#[test]
fn test_show_tree_and_table() {
    let fixture = sample_project();
    let config = ReqtreeConfig::default();

    let tree = show(&config, Some(fixture.root()), "HLR", ShowOptions::default()).unwrap();
    assert_eq!(tree, "1 Boot\n  1.1 Boot ROM\n");

    let table_options = ShowOptions {
        mode: Some(ViewMode::Table),
        ..ShowOptions::default()
    };
    let table = show(&config, Some(fixture.root()), "HLR", table_options).unwrap();
    assert_eq!(
        table,
        "UID     LEVEL  TEXT\nHLR001  1      Boot\nHLR002  1.1    Boot ROM\n"
    );
}

#[test]
fn test_show_json_tree() {
    let fixture = sample_project();
    let options = ShowOptions {
        format: OutputFormat::Json,
        ..ShowOptions::default()
    };
    let out = show(&ReqtreeConfig::default(), Some(fixture.root()), "SYS", options).unwrap();

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value[0]["label"], "1 Hardware");
    assert_eq!(value[0]["children"][1]["label"], "1.2 Memory map");
    assert_eq!(value[1]["label"], "2 Software");
}

#[test]
fn test_include_inactive_items() {
    let fixture = sample_project();
    let config = ReqtreeConfig {
        store: StoreSection {
            include_inactive: true,
            ..StoreSection::default()
        },
        ..ReqtreeConfig::default()
    };

    let out = show(&config, Some(fixture.root()), "SYS", ShowOptions::default()).unwrap();
    assert!(out.ends_with("3 Retired\n"));
}

#[test]
fn test_missing_parent_in_items_fails_open() {
    let fixture = sample_project().item("reqs", "SYS006", "4.1", "Orphan");
    let mut session = Session::default();

    let err = session
        .open_project(&FileStore::new(), Some(fixture.root()))
        .unwrap_err();
    assert!(err.is_parent_not_found());
    assert!(err.to_string().contains("SYS:4.1"));
    assert!(session.project().is_none());
}

#[test]
fn test_sparse_numbering_opens() {
    let fixture = ProjectFixture::new()
        .document("reqs", "SYS", None)
        .item("reqs", "SYS001", "2", "Software")
        .item("reqs", "SYS002", "2.1", "Scheduler")
        .item("reqs", "SYS003", "2.3", "Drivers")
        .item("reqs", "SYS004", "2.3.1", "UART");

    let out = show(
        &ReqtreeConfig::default(),
        Some(fixture.root()),
        "SYS",
        ShowOptions::default(),
    )
    .unwrap();
    assert_eq!(out, "2 Software\n  2.1 Scheduler\n  2.3 Drivers\n    2.3.1 UART\n");
}
