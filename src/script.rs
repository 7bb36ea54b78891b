//! Provisioning of the scan engine script

use crate::error::{A11yError, Result};
use std::{fs, path::PathBuf};

/// Where the scan engine script comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptSource {
    /// Script text already in memory
    Inline(String),

    /// Script file on disk, read at construction time
    File(PathBuf),
}

impl ScriptSource {
    /// Script text held in memory
    pub fn inline(source: impl Into<String>) -> Self {
        ScriptSource::Inline(source.into())
    }

    /// Script read from `path`
    pub fn file(path: impl Into<PathBuf>) -> Self {
        ScriptSource::File(path.into())
    }

    /// Load the script text. Empty scripts are rejected.
    pub fn load(&self) -> Result<String> {
        let source = match self {
            ScriptSource::Inline(source) => source.clone(),
            ScriptSource::File(path) => fs::read_to_string(path)
                .map_err(|e| A11yError::ScriptSource(format!("{}: {}", path.display(), e)))?,
        };

        if source.trim().is_empty() {
            return Err(A11yError::InvalidConstruction("scan script is empty".to_string()));
        }

        Ok(source)
    }
}
