//! Scan execution and orchestration.
//!
//! Runs the two passes in order: the header index is built and frozen, then
//! every indexed header and every source file is checked against it. All
//! diagnostics that are not violations go to stderr so default stdout stays
//! reserved for the violation lines.

use crate::checker::{UnknownRef, Violation, check_file};
use crate::cli::{Cli, OutputFormat};
use crate::error::{ModlintError, Result};
use crate::extract::extract_includes;
use crate::index::build_index;
use crate::reporter::{Reporter, ScanReport, Summary, json::JsonReporter, terminal::TerminalReporter};
use crate::walker::source_files;
use chrono::Utc;
use std::process::ExitCode;
use tracing::{debug, info};

/// Run a full tree scan using CLI settings.
pub fn run_scan(cli: &Cli) -> Result<ScanReport> {
    let root = cli.root.as_path();
    if !root.exists() {
        return Err(ModlintError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ModlintError::NotADirectory(root.to_path_buf()));
    }

    let config = cli.check_config();
    info!(root = %root.display(), prefix = %config.prefix, "Starting scan");

    let index = build_index(root, &config);

    if !cli.quiet {
        for collision in index.collisions() {
            eprintln!(
                "Warning: duplicate header basename {} in {} and {} (keeping {})",
                collision.name, collision.first_dir, collision.second_dir, collision.second_dir
            );
        }
    }

    let mut violations: Vec<Violation> = Vec::new();
    let mut unknown_refs: Vec<UnknownRef> = Vec::new();

    // Headers first, in index order; their include sets were recorded during
    // indexing.
    for record in index.sorted_records() {
        let (v, u) = check_file(&record.name, &record.dir, &record.includes, &index, &config);
        violations.extend(v);
        unknown_refs.extend(u);
    }

    // Then source files, with freshly extracted include sets.
    let mut sources_scanned = 0usize;
    for (dir, name, path) in &source_files(root, &config) {
        let includes = match extract_includes(path, &config) {
            Ok(includes) => includes,
            Err(e) => {
                eprintln!("Warning: {}, skipping", e);
                continue;
            }
        };
        sources_scanned += 1;

        let (v, u) = check_file(name, dir, &includes, &index, &config);
        violations.extend(v);
        unknown_refs.extend(u);
    }

    if !cli.quiet {
        for unknown in &unknown_refs {
            eprintln!("Warning: {}", unknown);
        }
    }

    debug!(
        violations = violations.len(),
        unknown_refs = unknown_refs.len(),
        "Scan completed"
    );

    let summary = Summary::new(index.len(), sources_scanned, &violations, &unknown_refs);
    Ok(ScanReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        scanned_at: Utc::now().to_rfc3339(),
        root: root.display().to_string(),
        summary,
        violations,
        unknown_refs,
    })
}

/// Render a report in the format the CLI asked for.
pub fn format_report(cli: &Cli, report: &ScanReport) -> String {
    match cli.format {
        OutputFormat::Terminal => TerminalReporter::new(cli.verbose).report(report),
        OutputFormat::Json => JsonReporter::new().report(report),
    }
}

/// Exit-code policy: violations are advisory unless --strict.
pub fn exit_code(cli: &Cli, report: &ScanReport) -> ExitCode {
    if cli.strict && !report.summary.passed {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
