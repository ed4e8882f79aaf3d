use crate::dependency_tree::domain::DependenciesSnapshot;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::trace;

/// The current dependencies snapshot of a project
///
/// Merges run off to the side and publish their result here; readers take a
/// cheap `Arc` clone and never observe a snapshot being built.
#[derive(Debug)]
pub struct SnapshotStore {
    current: RwLock<Arc<DependenciesSnapshot>>,
}

impl SnapshotStore {
    pub fn new(initial: Arc<DependenciesSnapshot>) -> Self {
        Self {
            current: RwLock::new(initial),
        }
    }

    pub fn current(&self) -> Arc<DependenciesSnapshot> {
        Arc::clone(&self.current.read())
    }

    /// Replaces the current snapshot; returns false when `snapshot` already is the current one
    pub fn publish(&self, snapshot: Arc<DependenciesSnapshot>) -> bool {
        let mut current = self.current.write();
        if Arc::ptr_eq(&current, &snapshot) {
            return false;
        }
        *current = snapshot;
        true
    }

    /// Publishes `snapshot` only if `expected` is still the current snapshot
    ///
    /// On failure the snapshot that won is returned so the caller can re-merge.
    pub fn compare_and_publish(
        &self,
        expected: &Arc<DependenciesSnapshot>,
        snapshot: Arc<DependenciesSnapshot>,
    ) -> Result<(), Arc<DependenciesSnapshot>> {
        let mut current = self.current.write();
        if !Arc::ptr_eq(&current, expected) {
            trace!("snapshot publish lost to a concurrent writer");
            return Err(Arc::clone(&current));
        }
        *current = snapshot;
        Ok(())
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new(DependenciesSnapshot::empty())
    }
}
