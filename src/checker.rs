use crate::config::CheckConfig;
use crate::index::HeaderIndex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A private header included from outside its owning directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub including_dir: String,
    pub including_file: String,
    pub header_dir: String,
    pub header: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} includes {}/{}",
            self.including_dir, self.including_file, self.header_dir, self.header
        )
    }
}

/// A private-looking include whose header was never indexed, e.g. it lives
/// outside the scanned tree. Not a modularity violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownRef {
    pub including_dir: String,
    pub including_file: String,
    pub header: String,
}

impl std::fmt::Display for UnknownRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} includes unknown header {}",
            self.including_dir, self.including_file, self.header
        )
    }
}

/// Check one file's include set against the header index.
///
/// Stateless over its inputs: the same file, directory, include set, and
/// index always produce the same reports, in include-name order.
pub fn check_file(
    file: &str,
    dir: &str,
    includes: &BTreeSet<String>,
    index: &HeaderIndex,
    config: &CheckConfig,
) -> (Vec<Violation>, Vec<UnknownRef>) {
    let mut violations = Vec::new();
    let mut unknown = Vec::new();

    for name in includes {
        if !config.is_private(name) {
            continue;
        }

        match index.get(name) {
            Some(record) => {
                if record.dir != dir {
                    violations.push(Violation {
                        including_dir: dir.to_string(),
                        including_file: file.to_string(),
                        header_dir: record.dir.clone(),
                        header: name.clone(),
                    });
                }
            }
            None => unknown.push(UnknownRef {
                including_dir: dir.to_string(),
                including_file: file.to_string(),
                header: name.clone(),
            }),
        }
    }

    (violations, unknown)
}
