pub mod json;
pub mod terminal;

use crate::checker::{UnknownRef, Violation};
use serde::{Deserialize, Serialize};

pub trait Reporter {
    fn report(&self, report: &ScanReport) -> String;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub headers_indexed: usize,
    pub sources_scanned: usize,
    pub violations: usize,
    pub unknown_refs: usize,
    pub passed: bool,
}

impl Summary {
    pub fn new(
        headers_indexed: usize,
        sources_scanned: usize,
        violations: &[Violation],
        unknown_refs: &[UnknownRef],
    ) -> Self {
        Self {
            headers_indexed,
            sources_scanned,
            violations: violations.len(),
            unknown_refs: unknown_refs.len(),
            passed: violations.is_empty(),
        }
    }
}

/// The full outcome of one tree scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub version: String,
    pub scanned_at: String,
    pub root: String,
    pub summary: Summary,
    pub violations: Vec<Violation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unknown_refs: Vec<UnknownRef>,
}
