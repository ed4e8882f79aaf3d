use crate::application::dto::Scenario;
use crate::shared::Result;
use std::path::Path;

/// ScenarioReader port for loading a replay scenario
///
/// Implementations decide the on-disk format; the use case only sees the
/// parsed `Scenario`.
pub trait ScenarioReader {
    /// Reads and parses the scenario at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or is rejected by the file-system guards
    /// - The content is not a valid scenario document
    fn read_scenario(&self, path: &Path) -> Result<Scenario>;
}
