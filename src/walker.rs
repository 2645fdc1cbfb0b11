//! Directory walking for consistent, reproducible file discovery.

use crate::config::CheckConfig;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Recursive walker filtered to a single file extension.
///
/// Results are sorted by full relative path so that every run over an
/// unchanged tree visits files in the same order regardless of platform
/// traversal order.
pub struct TreeWalker {
    extension: String,
    follow_symlinks: bool,
}

impl TreeWalker {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            follow_symlinks: false,
        }
    }

    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.extension)
    }

    /// Walk `root` and return all matching files, sorted.
    ///
    /// Unreadable entries are skipped with a warning; the walk itself never
    /// fails. Callers are expected to verify the root exists beforehand.
    pub fn walk(&self, root: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(root)
            .follow_links(self.follow_symlinks)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable entry");
                    eprintln!("Warning: skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.matches_extension(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        files
    }
}

/// Directory of `path` relative to `root`, as a `/`-joined string.
///
/// Files sitting directly in `root` report `.`, matching what a find-based
/// tool prints for the scan root.
pub fn relative_dir(root: &Path, path: &Path) -> String {
    let parent = path.parent().unwrap_or(root);
    let rel = parent.strip_prefix(root).unwrap_or(parent);

    let joined = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// Bare filename of `path` as a string.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// All source files under `root` as (directory, filename, path), sorted by
/// (directory, filename) so checking order is reproducible.
pub fn source_files(root: &Path, config: &CheckConfig) -> Vec<(String, String, PathBuf)> {
    let mut sources: Vec<(String, String, PathBuf)> =
        TreeWalker::new(config.source_ext.clone())
            .walk(root)
            .into_iter()
            .map(|path| (relative_dir(root, &path), file_name(&path), path))
            .collect();

    sources.sort_by(|a, b| (&a.0, &a.1).cmp(&(&b.0, &b.1)));
    sources
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_tree() -> TempDir {
        let dir = TempDir::new().unwrap();

        let a = dir.path().join("a");
        fs::create_dir_all(&a).unwrap();
        fs::write(a.join("zmap_x_I.h"), "").unwrap();
        fs::write(a.join("zmap_z.c"), "").unwrap();

        let b = dir.path().join("b");
        fs::create_dir_all(&b).unwrap();
        fs::write(b.join("zmap_y.c"), "").unwrap();
        fs::write(b.join("notes.txt"), "").unwrap();

        fs::write(dir.path().join("zmap.h"), "").unwrap();

        dir
    }

    #[test]
    fn test_walk_filters_by_extension() {
        let dir = create_test_tree();
        let headers = TreeWalker::new("h").walk(dir.path());

        assert_eq!(headers.len(), 2);
        assert!(headers.iter().all(|p| p.extension().unwrap() == "h"));
    }

    #[test]
    fn test_walk_is_sorted() {
        let dir = create_test_tree();
        let files = TreeWalker::new("c").walk(dir.path());

        let mut sorted = files.clone();
        sorted.sort();
        assert_eq!(files, sorted);
    }

    #[test]
    fn test_walk_empty_for_missing_extension() {
        let dir = create_test_tree();
        let files = TreeWalker::new("hpp").walk(dir.path());
        assert!(files.is_empty());
    }

    #[test]
    fn test_relative_dir_nested() {
        let dir = create_test_tree();
        let path = dir.path().join("a").join("zmap_x_I.h");
        assert_eq!(relative_dir(dir.path(), &path), "a");
    }

    #[test]
    fn test_relative_dir_at_root() {
        let dir = create_test_tree();
        let path = dir.path().join("zmap.h");
        assert_eq!(relative_dir(dir.path(), &path), ".");
    }

    #[test]
    fn test_relative_dir_deeply_nested() {
        let root = Path::new("/tree");
        let path = Path::new("/tree/src/zmapApp/zmapApp_P.h");
        assert_eq!(relative_dir(root, path), "src/zmapApp");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(Path::new("a/b/zmap_x_I.h")), "zmap_x_I.h");
    }

    #[test]
    fn test_source_files_sorted_by_dir_then_name() {
        let dir = create_test_tree();
        let sources = source_files(dir.path(), &CheckConfig::default());

        let keys: Vec<(&str, &str)> = sources
            .iter()
            .map(|(d, n, _)| (d.as_str(), n.as_str()))
            .collect();
        assert_eq!(keys, vec![("a", "zmap_z.c"), ("b", "zmap_y.c")]);
    }
}
