use crate::dependency_tree::domain::DependenciesSnapshot;
use std::sync::Arc;

/// Result of a replay: the final snapshot plus counters for reporting
#[derive(Debug, Clone)]
pub struct ReplayResponse {
    pub snapshot: Arc<DependenciesSnapshot>,
    /// Steps that published a new snapshot
    pub steps_applied: usize,
    /// Steps whose merge returned the previous snapshot unchanged
    pub unchanged_steps: usize,
}

impl ReplayResponse {
    pub fn new(snapshot: Arc<DependenciesSnapshot>, steps_applied: usize, unchanged_steps: usize) -> Self {
        Self {
            snapshot,
            steps_applied,
            unchanged_steps,
        }
    }

    pub fn total_steps(&self) -> usize {
        self.steps_applied + self.unchanged_steps
    }
}
