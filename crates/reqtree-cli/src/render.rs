//! Text and JSON rendering of document trees and item views.

use reqtree_tree::{DocumentTree, ItemTable, ItemTree, ItemView, TreeSnapshot};

use crate::error::Result;

/// Marker for a document node with children shown below it.
const EXPANDED: &str = "▾ ";
/// Indent per tree depth.
const INDENT: &str = "  ";

/// One line per document, indented by depth; expanded nodes are marked.
pub fn documents_text(tree: &DocumentTree) -> String {
    let mut out = String::new();
    for (depth, id) in tree.depth_first() {
        let Some(node) = tree.node(id) else {
            continue;
        };
        let marker = if tree.is_expanded(id) { EXPANDED } else { "" };
        out.push_str(&INDENT.repeat(depth));
        out.push_str(marker);
        out.push_str(&format!("{} ({} items)\n", node.prefix, node.item_count));
    }
    out
}

/// One line per item, indented by depth, using the first line of each label.
pub fn item_tree_text(tree: &ItemTree) -> String {
    let mut out = String::new();
    for (depth, id) in tree.depth_first() {
        let label = tree.label(id).unwrap_or_default();
        out.push_str(&INDENT.repeat(depth));
        out.push_str(first_line(label));
        out.push('\n');
    }
    out
}

/// Aligned `UID  LEVEL  TEXT` columns.
pub fn item_table_text(table: &ItemTable) -> String {
    let uid_width = column_width("UID", table.rows.iter().map(|r| r.uid.as_str()));
    let level_width = column_width("LEVEL", table.rows.iter().map(|r| r.level.as_str()));

    let mut out = format!("{:<uid_width$}  {:<level_width$}  TEXT\n", "UID", "LEVEL");
    for row in &table.rows {
        out.push_str(&format!(
            "{:<uid_width$}  {:<level_width$}  {}\n",
            row.uid,
            row.level,
            first_line(&row.text)
        ));
    }
    out
}

/// Render an item view as text.
pub fn item_view_text(view: &ItemView) -> String {
    match view {
        ItemView::Tree(tree) => item_tree_text(tree),
        ItemView::Table(table) => item_table_text(table),
    }
}

/// Document tree as pretty JSON.
pub fn documents_json(tree: &DocumentTree) -> Result<String> {
    let forest = TreeSnapshot::forest(tree.arena(), |node| node.prefix.clone());
    Ok(serde_json::to_string_pretty(&forest)?)
}

/// Item view as pretty JSON: nested nodes for trees, rows for tables.
pub fn item_view_json(view: &ItemView) -> Result<String> {
    let json = match view {
        ItemView::Tree(tree) => {
            let forest = TreeSnapshot::forest(tree.arena(), |node| node.label.clone());
            serde_json::to_string_pretty(&forest)?
        }
        ItemView::Table(table) => serde_json::to_string_pretty(&table.rows)?,
    };
    Ok(json)
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default()
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or_default()
}
