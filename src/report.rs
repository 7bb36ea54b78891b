//! Human-readable reports and JSON output for scan results

use crate::error::Result;
use crate::scan::ScanResult;
use serde::Deserialize;
use serde_json::Value;
use std::{fs, path::Path};

/// Read-only view of one engine finding. Missing fields are left empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Finding {
    pub id: String,
    pub impact: Option<String>,
    pub description: String,
    pub help: String,
    pub help_url: Option<String>,
    pub nodes: Vec<FindingNode>,
}

/// One page node a finding applies to
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FindingNode {
    /// Selector path, one entry per frame
    pub target: Vec<Value>,
    pub html: String,
}

impl Finding {
    /// Read a finding record, falling back to an empty view for unexpected shapes
    pub fn from_value(value: &Value) -> Self {
        Finding::deserialize(value).unwrap_or_default()
    }
}

impl FindingNode {
    /// Target selectors joined for display
    pub fn target_display(&self) -> String {
        self.target
            .iter()
            .map(|t| match t {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" >> ")
    }
}

/// Render violations as a numbered plain-text report. Empty input gives an empty string.
pub fn report(violations: &[Value]) -> String {
    if violations.is_empty() {
        return String::new();
    }

    let mut out = format!("Found {} accessibility violations:", violations.len());

    for (i, value) in violations.iter().enumerate() {
        let finding = Finding::from_value(value);
        let title = if finding.help.is_empty() { &finding.id } else { &finding.help };

        out.push_str(&format!("\n{}) {}", i + 1, title));
        if let Some(impact) = &finding.impact {
            out.push_str(&format!(" [{}]", impact));
        }
        if let Some(url) = &finding.help_url {
            out.push_str(&format!(": {}", url));
        }

        for (j, node) in finding.nodes.iter().enumerate() {
            out.push_str(&format!("\n  {}) {}", ordinal(j + 1), node.target_display()));
            if !node.html.is_empty() {
                out.push_str(&format!("\n      {}", node.html));
            }
        }
    }

    out
}

/// Write a scan result to `path` as pretty JSON
pub fn write_results(path: impl AsRef<Path>, result: &ScanResult) -> Result<()> {
    fs::write(path, result.to_json()?)?;
    Ok(())
}

fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}
