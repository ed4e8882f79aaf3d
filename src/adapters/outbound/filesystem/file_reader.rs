use crate::application::dto::Scenario;
use crate::ports::outbound::ScenarioReader;
use crate::shared::error::ReplayError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Scenario encodings, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScenarioEncoding {
    Yaml,
    Toml,
}

impl ScenarioEncoding {
    fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "yml" | "yaml" => Some(ScenarioEncoding::Yaml),
            "toml" => Some(ScenarioEncoding::Toml),
            _ => None,
        }
    }
}

/// FileSystemReader adapter for reading scenario files
///
/// Implements the ScenarioReader port; YAML and TOML scenarios are supported.
#[derive(Debug, Default)]
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads a file after rejecting symlinks, non-regular files and oversized files
    fn safe_read_file(&self, path: &Path, file_type: &str) -> Result<String> {
        validate_regular_file(path, file_type)?;

        let metadata = fs::metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_type, e))?;
        validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

        fs::read_to_string(path).map_err(|e| {
            ReplayError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl ScenarioReader for FileSystemReader {
    fn read_scenario(&self, path: &Path) -> Result<Scenario> {
        if !path.exists() {
            return Err(ReplayError::ScenarioNotFound {
                path: path.to_path_buf(),
                suggestion: "Pass an existing scenario with --scenario, or run from a directory containing deptree.scenario.yml".to_string(),
            }
            .into());
        }

        let Some(encoding) = ScenarioEncoding::from_path(path) else {
            return Err(ReplayError::ScenarioParseError {
                path: path.to_path_buf(),
                details: "unsupported file extension (expected .yml, .yaml or .toml)".to_string(),
            }
            .into());
        };

        let content = self.safe_read_file(path, "scenario")?;
        let parsed = match encoding {
            ScenarioEncoding::Yaml => serde_yaml_ng::from_str(&content).map_err(|e| e.to_string()),
            ScenarioEncoding::Toml => toml::from_str(&content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|details| {
            ReplayError::ScenarioParseError {
                path: path.to_path_buf(),
                details,
            }
            .into()
        })
    }
}
