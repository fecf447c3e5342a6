//! Common test utilities for reqtree-cli integration tests.

use std::path::Path;

use tempfile::TempDir;

/// A requirements project written to a temporary directory.
pub struct ProjectFixture {
    dir: TempDir,
}

impl ProjectFixture {
    /// Creates an empty project directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Root of the project.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Adds a document under `subdir`.
    pub fn document(self, subdir: &str, prefix: &str, parent: Option<&str>) -> Self {
        let mut settings = format!("settings:\n  prefix: {prefix}\n  sep: ''\n  digits: 3\n");
        if let Some(parent) = parent {
            settings.push_str(&format!("  parent: {parent}\n"));
        }
        self.write(&format!("{subdir}/.doorstop.yml"), &settings)
    }

    /// Adds an active item to the document under `subdir`.
    pub fn item(self, subdir: &str, uid: &str, level: &str, text: &str) -> Self {
        let content = format!("active: true\nlevel: {level}\nnormative: true\ntext: |\n  {text}\n");
        self.write(&format!("{subdir}/{uid}.yml"), &content)
    }

    /// Writes a raw file relative to the root.
    pub fn write(self, relative: &str, content: &str) -> Self {
        let path = self.dir.path().join(relative);
        std::fs::create_dir_all(path.parent().expect("file has a parent")).expect("create dirs");
        std::fs::write(&path, content).expect("write file");
        self
    }
}

impl Default for ProjectFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// The sample project: a system document with a nested high-level one.
pub fn sample_project() -> ProjectFixture {
    ProjectFixture::new()
        .document("reqs", "SYS", None)
        .item("reqs", "SYS001", "1", "Hardware")
        .item("reqs", "SYS002", "1.1", "AXI")
        .item("reqs", "SYS003", "1.2", "Memory map")
        .item("reqs", "SYS004", "2", "Software")
        .write(
            "reqs/SYS005.yml",
            "active: false\nlevel: 3\ntext: Retired\n",
        )
        .document("reqs/hlr", "HLR", Some("SYS"))
        .item("reqs/hlr", "HLR001", "1", "Boot")
        .item("reqs/hlr", "HLR002", "1.1", "Boot ROM")
}
