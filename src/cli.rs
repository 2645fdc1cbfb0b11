use crate::config::{CheckConfig, PrivateMatch};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "modlint",
    version,
    about = "Modularity checker for C codebases",
    long_about = "modlint scans a C source tree for private headers (marked _I or _P) \
included from outside the directory that owns them."
)]
pub struct Cli {
    /// Root of the source tree to audit
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Strict mode: exit non-zero when violations are found
    #[arg(short, long)]
    pub strict: bool,

    /// Project filename prefix identifying in-scope headers
    #[arg(short, long, default_value = "zmap")]
    pub prefix: String,

    /// Private-header marker; repeatable (default: _I and _P)
    #[arg(long = "marker", value_name = "MARKER")]
    pub markers: Vec<String>,

    /// How a marker classifies a header as private
    #[arg(long, value_enum, default_value_t = PrivateMatch::Substring)]
    pub private_match: PrivateMatch,

    /// Header file extension
    #[arg(long, value_name = "EXT", default_value = "h")]
    pub header_ext: String,

    /// Source file extension
    #[arg(long, value_name = "EXT", default_value = "c")]
    pub source_ext: String,

    /// Suppress unknown-reference and collision warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Append a summary after the violation lines
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Named check options from the command line; an empty `--marker` list
    /// falls back to the default markers.
    pub fn check_config(&self) -> CheckConfig {
        let mut config = CheckConfig::new()
            .with_prefix(self.prefix.clone())
            .with_extensions(self.header_ext.clone(), self.source_ext.clone())
            .with_private_match(self.private_match);

        if !self.markers.is_empty() {
            config = config.with_markers(self.markers.clone());
        }

        config
    }
}
