use std::path::PathBuf;

/// Request for replaying one scenario
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayRequest {
    /// Scenario file to replay
    pub scenario_path: PathBuf,
    /// Ordered filter names; `None` selects the default chain, an empty list disables filtering
    pub filter_names: Option<Vec<String>>,
}

impl ReplayRequest {
    pub fn new(scenario_path: PathBuf, filter_names: Option<Vec<String>>) -> Self {
        Self {
            scenario_path,
            filter_names,
        }
    }
}
