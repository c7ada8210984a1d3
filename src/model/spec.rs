//! Summaries of the analyzed document, produced by the indexer

use serde::{Deserialize, Serialize};

/// What kind of document was analyzed
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecInfo {
    #[serde(default)]
    pub spec_type: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl SpecInfo {
    pub fn summary(&self) -> String {
        let kind = if self.spec_type.is_empty() {
            "unknown"
        } else {
            self.spec_type.as_str()
        };
        let mut out = format!("{} {}", kind, self.version).trim_end().to_string();
        if !self.format.is_empty() {
            out.push_str(&format!(" ({})", self.format));
        }
        out
    }
}

/// Counts gathered while indexing the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpecIndex {
    pub paths: u64,
    pub operations: u64,
    pub parameters: u64,
    pub schemas: u64,
    pub tags: u64,
    pub references: u64,
    pub examples: u64,
    pub security_schemes: u64,
}

impl SpecIndex {
    /// Label/value pairs for the stats chart, in display order.
    pub fn stats(&self) -> [(&'static str, u64); 8] {
        [
            ("paths", self.paths),
            ("ops", self.operations),
            ("params", self.parameters),
            ("schemas", self.schemas),
            ("tags", self.tags),
            ("refs", self.references),
            ("examples", self.examples),
            ("security", self.security_schemes),
        ]
    }
}

/// The analyzed document's text, split into lines for snippets
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceDocument {
    lines: Vec<String>,
}

impl SourceDocument {
    pub fn new(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}
