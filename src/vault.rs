use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use log::debug;
use walkdir::WalkDir;

/// File-system primitives the resolver needs from its host.
pub trait VaultFs {
    /// Root folder a bookmark name points at, if the bookmark is known.
    fn bookmarked_path(&self, bookmark: &str) -> Option<PathBuf>;
    fn is_directory(&self, path: &Path) -> bool;
    /// `Ok(None)` when the file does not exist.
    fn read_string(&self, path: &Path) -> io::Result<Option<String>>;
    /// Names of the immediate entries of `path`.
    fn list_contents(&self, path: &Path) -> io::Result<Vec<String>>;
}

/// Joins a vault-relative path onto the vault root. Leading separators on
/// `relative` are ignored so `/Projects` stays inside the vault.
pub fn vault_path(root: &Path, relative: &str) -> PathBuf {
    root.join(relative.trim_start_matches(['/', '\\']))
}

pub struct LocalVault {
    bookmarks: HashMap<String, PathBuf>,
}

impl LocalVault {
    pub fn new(bookmarks: HashMap<String, PathBuf>) -> Self {
        Self { bookmarks }
    }
}

impl VaultFs for LocalVault {
    fn bookmarked_path(&self, bookmark: &str) -> Option<PathBuf> {
        let root = self.bookmarks.get(bookmark)?;
        if root.is_dir() {
            Some(root.clone())
        } else {
            debug!("Bookmark {:?} points at {:?}, which is not a directory", bookmark, root);
            None
        }
    }

    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_string(&self, path: &Path) -> io::Result<Option<String>> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn list_contents(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in WalkDir::new(path).min_depth(1).max_depth(1) {
            let entry = entry.map_err(io::Error::from)?;
            names.push(entry.file_name().to_string_lossy().to_string());
        }
        Ok(names)
    }
}
