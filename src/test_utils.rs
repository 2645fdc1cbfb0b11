#[cfg(test)]
pub mod fixtures {
    use crate::checker::{UnknownRef, Violation};
    use crate::reporter::{ScanReport, Summary};

    pub fn create_violation(
        including_dir: &str,
        including_file: &str,
        header_dir: &str,
        header: &str,
    ) -> Violation {
        Violation {
            including_dir: including_dir.to_string(),
            including_file: including_file.to_string(),
            header_dir: header_dir.to_string(),
            header: header.to_string(),
        }
    }

    pub fn create_unknown_ref(
        including_dir: &str,
        including_file: &str,
        header: &str,
    ) -> UnknownRef {
        UnknownRef {
            including_dir: including_dir.to_string(),
            including_file: including_file.to_string(),
            header: header.to_string(),
        }
    }

    pub fn create_report(violations: Vec<Violation>, unknown_refs: Vec<UnknownRef>) -> ScanReport {
        let summary = Summary::new(2, 3, &violations, &unknown_refs);
        ScanReport {
            version: "0.1.0".to_string(),
            scanned_at: "2026-08-07T12:00:00Z".to_string(),
            root: ".".to_string(),
            summary,
            violations,
            unknown_refs,
        }
    }
}
