//! Project manifest (pxtraits.yaml) parsing.
//!
//! The manifest supplies default paths for the workspace input and the two
//! output artifacts. Every field is optional; a missing manifest file means
//! all defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PxError, Result};

/// Default manifest file name looked up in the working directory.
pub const MANIFEST_FILE: &str = "pxtraits.yaml";

/// Project manifest loaded from pxtraits.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Workspace document to convert.
    pub input: PathBuf,

    /// Output path for the fills stylesheet.
    pub fills: PathBuf,

    /// Output path for the trait manifest.
    pub traits: PathBuf,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            input: PathBuf::from("workspace.pixil"),
            fills: PathBuf::from("fills.txt"),
            traits: PathBuf::from("traits.json"),
        }
    }
}

impl Manifest {
    /// Load a manifest from a pxtraits.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PxError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a manifest from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| PxError::Input {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check pxtraits.yaml syntax".to_string()),
        })
    }

    /// Load `pxtraits.yaml` from the working directory if it exists,
    /// defaults otherwise.
    pub fn discover() -> Result<Self> {
        let path = Path::new(MANIFEST_FILE);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
