use std::path::PathBuf;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use crate::data::MOCK_PEPPER_STR;

/// A throwaway root with the layout the daemon expects:
/// `etc/notekeeper/private/pepper.b64` and an empty `var/notekeeper`.
pub struct MockHierarchy {
    pub root: TempDir,
}

impl MockHierarchy {
    pub fn new() -> Self {
        let root = TempDir::new().unwrap();
        root.child("etc/notekeeper/private").create_dir_all().unwrap();
        root.child("var/notekeeper").create_dir_all().unwrap();
        root.child("etc/notekeeper/private/pepper.b64")
            .write_str(&format!("{MOCK_PEPPER_STR}\n"))
            .unwrap();
        MockHierarchy { root }
    }

    pub fn pepper_path(&self) -> PathBuf {
        self.root.child("etc/notekeeper/private/pepper.b64").to_path_buf()
    }

    pub fn database_path(&self) -> PathBuf {
        self.root.child("var/notekeeper/notekeeper.db").to_path_buf()
    }

    pub fn notes_file(&self) -> PathBuf {
        self.root.child("var/notekeeper/notes.json").to_path_buf()
    }

    pub fn log_directory(&self) -> PathBuf {
        self.root.child("var/log/notekeeper").to_path_buf()
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.child("etc/notekeeper/notekeeper.toml").to_path_buf()
    }

    pub fn write_config(&self, contents: &str) -> PathBuf {
        let file = self.root.child("etc/notekeeper/notekeeper.toml");
        file.write_str(contents).unwrap();
        file.to_path_buf()
    }
}

impl Default for MockHierarchy {
    fn default() -> Self {
        Self::new()
    }
}
