use crate::reporter::{Reporter, ScanReport};
use colored::Colorize;

/// Default reporter: one plain line per violation, byte-compatible with the
/// original tool so output can be diffed against golden files. The verbose
/// footer is opt-in and never emitted by default.
pub struct TerminalReporter {
    verbose: bool,
}

impl TerminalReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn format_footer(&self, report: &ScanReport) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", "━".repeat(50)));
        output.push_str(&format!(
            "Indexed {} header(s), scanned {} source file(s)\n",
            report.summary.headers_indexed, report.summary.sources_scanned
        ));

        let violations = if report.summary.violations > 0 {
            report.summary.violations.to_string().red().bold()
        } else {
            report.summary.violations.to_string().green()
        };
        output.push_str(&format!(
            "Summary: {} violation(s), {} unknown reference(s)\n",
            violations,
            report.summary.unknown_refs.to_string().yellow()
        ));

        let result_text = if report.summary.passed {
            "PASS".green().bold()
        } else {
            "FAIL".red().bold()
        };
        output.push_str(&format!("Result: {}\n", result_text));

        output
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, report: &ScanReport) -> String {
        let mut output = String::new();

        for violation in &report.violations {
            output.push_str(&format!("{}\n", violation));
        }

        if self.verbose {
            output.push_str(&self.format_footer(report));
        }

        output
    }
}
