use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Policy for deciding whether a header name marks it as private.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrivateMatch {
    /// Marker may appear anywhere in the filename. This reproduces the
    /// original tool exactly, including its misclassification of names that
    /// merely contain `_I`/`_P` inside an unrelated word.
    #[default]
    Substring,
    /// Marker must end the file stem (`zmapApp_P.h` matches, `zmap_Input.h`
    /// does not).
    Suffix,
}

impl PrivateMatch {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrivateMatch::Substring => "substring",
            PrivateMatch::Suffix => "suffix",
        }
    }
}

impl std::fmt::Display for PrivateMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Named configuration constants for a check run.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Project filename prefix; headers not starting with it are ignored.
    pub prefix: String,
    /// Marker substrings identifying a private header.
    pub markers: Vec<String>,
    /// Header file extension.
    pub header_ext: String,
    /// Source file extension.
    pub source_ext: String,
    /// Privacy predicate policy.
    pub private_match: PrivateMatch,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            prefix: "zmap".to_string(),
            markers: vec!["_I".to_string(), "_P".to_string()],
            header_ext: "h".to_string(),
            source_ext: "c".to_string(),
            private_match: PrivateMatch::Substring,
        }
    }
}

impl CheckConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_markers(mut self, markers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.markers = markers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_extensions(
        mut self,
        header_ext: impl Into<String>,
        source_ext: impl Into<String>,
    ) -> Self {
        self.header_ext = header_ext.into();
        self.source_ext = source_ext.into();
        self
    }

    pub fn with_private_match(mut self, policy: PrivateMatch) -> Self {
        self.private_match = policy;
        self
    }

    /// Case-sensitive project prefix test.
    pub fn is_project_header(&self, name: &str) -> bool {
        name.starts_with(&self.prefix)
    }

    /// Whether `name` is a private header under the configured policy.
    pub fn is_private(&self, name: &str) -> bool {
        match self.private_match {
            PrivateMatch::Substring => self.markers.iter().any(|m| name.contains(m.as_str())),
            PrivateMatch::Suffix => {
                let stem = name.rsplit_once('.').map_or(name, |(stem, _)| stem);
                self.markers.iter().any(|m| stem.ends_with(m.as_str()))
            }
        }
    }
}
