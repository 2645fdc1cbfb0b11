//! Header indexing: owning directory and include set per project header.

use crate::config::CheckConfig;
use crate::extract::extract_includes;
use crate::walker::{TreeWalker, file_name, relative_dir};
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

/// One indexed project header. Created during indexing, never mutated after.
#[derive(Debug, Clone)]
pub struct HeaderRecord {
    /// Bare filename, no path.
    pub name: String,
    /// Owning directory, relative to the scan root.
    pub dir: String,
    /// Project headers this header angle-bracket includes.
    pub includes: BTreeSet<String>,
}

/// Two headers with the same basename in different directories.
///
/// The index keys on basename alone, so the later record replaces the
/// earlier one; the collision is reported rather than silently absorbed.
#[derive(Debug, Clone)]
pub struct Collision {
    pub name: String,
    pub first_dir: String,
    pub second_dir: String,
}

/// Immutable-after-build map of header basename to record.
#[derive(Debug, Default)]
pub struct HeaderIndex {
    records: FxHashMap<String, HeaderRecord>,
    collisions: Vec<Collision>,
}

impl HeaderIndex {
    pub fn get(&self, name: &str) -> Option<&HeaderRecord> {
        self.records.get(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    /// Records sorted by (directory, name), the canonical checking order.
    pub fn sorted_records(&self) -> Vec<&HeaderRecord> {
        let mut records: Vec<&HeaderRecord> = self.records.values().collect();
        records.sort_by(|a, b| (&a.dir, &a.name).cmp(&(&b.dir, &b.name)));
        records
    }

    fn insert(&mut self, record: HeaderRecord) {
        let name = record.name.clone();
        let dir = record.dir.clone();
        if let Some(previous) = self.records.insert(name.clone(), record) {
            self.collisions.push(Collision {
                name,
                first_dir: previous.dir,
                second_dir: dir,
            });
        }
    }
}

/// Walk `root` for header files and index every project header found.
///
/// Headers whose name does not start with the project prefix are skipped.
/// Unreadable headers are skipped with a warning. An empty tree yields an
/// empty index, not an error.
pub fn build_index(root: &Path, config: &CheckConfig) -> HeaderIndex {
    let mut index = HeaderIndex::default();

    for path in TreeWalker::new(config.header_ext.clone()).walk(root) {
        let name = file_name(&path);
        if !config.is_project_header(&name) {
            continue;
        }

        let includes = match extract_includes(&path, config) {
            Ok(includes) => includes,
            Err(e) => {
                eprintln!("Warning: {}, skipping", e);
                continue;
            }
        };

        index.insert(HeaderRecord {
            name,
            dir: relative_dir(root, &path),
            includes,
        });
    }

    debug!(
        headers = index.len(),
        collisions = index.collisions().len(),
        "Header index built"
    );

    index
}
