pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod index;
pub mod reporter;
pub mod run;
pub mod walker;

#[cfg(test)]
pub mod test_utils;

pub use checker::{UnknownRef, Violation, check_file};
pub use cli::{Cli, OutputFormat};
pub use config::{CheckConfig, PrivateMatch};
pub use error::{ModlintError, Result};
pub use extract::{extract_from_content, extract_includes};
pub use index::{HeaderIndex, HeaderRecord, build_index};
pub use reporter::{
    Reporter, ScanReport, Summary, json::JsonReporter, terminal::TerminalReporter,
};
pub use run::{exit_code, format_report, run_scan};
pub use walker::{TreeWalker, source_files};
