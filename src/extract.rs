//! Include extraction: angle-bracket `#include` lines to bare header names.

use crate::config::CheckConfig;
use crate::error::{ModlintError, Result};
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Angle-bracket include directive. Quoted includes (`#include "x.h"`) are
/// deliberately not matched, and a line without a well-formed `<name>` token
/// simply fails the match and is skipped.
static INCLUDE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\s*include\s*<([^<>]+)>").unwrap());

/// Extract the set of project headers a file includes.
///
/// Reads the file leniently (lossy UTF-8, C trees routinely carry latin-1
/// comment bytes) and returns the bare filenames of every angle-bracket
/// include that starts with the project prefix. Duplicates collapse.
pub fn extract_includes(path: &Path, config: &CheckConfig) -> Result<BTreeSet<String>> {
    let bytes = fs::read(path).map_err(|source| ModlintError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(extract_from_content(
        &String::from_utf8_lossy(&bytes),
        config,
    ))
}

/// Extraction over raw content, shared by file scanning and tests.
pub fn extract_from_content(content: &str, config: &CheckConfig) -> BTreeSet<String> {
    let mut includes = BTreeSet::new();

    for line in content.lines() {
        let Some(caps) = INCLUDE_RE.captures(line) else {
            continue;
        };

        // Strip a namespace folder: <ZMap/zmapUtils.h> refers to zmapUtils.h.
        let operand = caps[1].trim();
        let name = operand.rsplit('/').next().unwrap_or(operand);

        if config.is_project_header(name) {
            includes.insert(name.to_string());
        }
    }

    includes
}
