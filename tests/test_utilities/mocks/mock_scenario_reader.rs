use deptree::prelude::*;
use std::path::Path;

/// Mock ScenarioReader for testing
///
/// Hands out a fixed scenario, or fails like a missing file would.
pub struct MockScenarioReader {
    scenario: Option<Scenario>,
}

impl MockScenarioReader {
    pub fn new(scenario: Scenario) -> Self {
        Self {
            scenario: Some(scenario),
        }
    }

    pub fn with_failure() -> Self {
        Self { scenario: None }
    }
}

impl ScenarioReader for MockScenarioReader {
    fn read_scenario(&self, path: &Path) -> Result<Scenario> {
        match &self.scenario {
            Some(scenario) => Ok(scenario.clone()),
            None => Err(ReplayError::ScenarioNotFound {
                path: path.to_path_buf(),
                suggestion: "Mock scenario reader configured to fail".to_string(),
            }
            .into()),
        }
    }
}
