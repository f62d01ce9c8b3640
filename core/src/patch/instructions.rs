use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PatchError;

/// A batch instruction file:
/// `{"file": "...", "edits": [{"old": "...", "new": "...", "required": true}]}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Instructions {
    pub file: PathBuf,
    #[serde(default)]
    pub edits: Vec<Edit>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Edit {
    pub old: String,
    pub new: String,
    /// A required edit that does not apply aborts the whole batch.
    #[serde(default)]
    pub required: bool,
}

impl Edit {
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

impl Instructions {
    pub fn load(path: &Path) -> Result<Self, PatchError> {
        let raw = std::fs::read_to_string(path).map_err(|source| PatchError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| PatchError::Instructions {
            path: path.to_path_buf(),
            source,
        })
    }
}
