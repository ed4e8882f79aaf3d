use super::{DependencyModel, RemovedDependency};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Model key inside one change batch: (provider type, model id)
type ModelKey = (String, String);

/// Immutable set of additions and removals for one target framework
#[derive(Clone, Default)]
pub struct DependenciesChanges {
    added_nodes: Vec<Arc<dyn DependencyModel>>,
    removed_nodes: Vec<RemovedDependency>,
}

impl DependenciesChanges {
    pub fn added_nodes(&self) -> &[Arc<dyn DependencyModel>] {
        &self.added_nodes
    }

    pub fn removed_nodes(&self) -> &[RemovedDependency] {
        &self.removed_nodes
    }

    pub fn is_empty(&self) -> bool {
        self.added_nodes.is_empty() && self.removed_nodes.is_empty()
    }
}

impl fmt::Debug for DependenciesChanges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesChanges")
            .field(
                "added_nodes",
                &self.added_nodes.iter().map(|m| m.id()).collect::<Vec<_>>(),
            )
            .field("removed_nodes", &self.removed_nodes)
            .finish()
    }
}

/// Collects the changes of one merge pass
///
/// Adding a model with the same provider type and id as an earlier one
/// replaces it; removals are deduplicated.
#[derive(Default)]
pub struct DependenciesChangesBuilder {
    added: Option<BTreeMap<ModelKey, Arc<dyn DependencyModel>>>,
    removed: Option<BTreeMap<ModelKey, RemovedDependency>>,
}

impl DependenciesChangesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn added(&mut self, model: Arc<dyn DependencyModel>) {
        let key = (model.provider_type().to_string(), model.id().to_string());
        self.added.get_or_insert_with(BTreeMap::new).insert(key, model);
    }

    pub fn removed(&mut self, provider_type: &str, model_id: &str) {
        let key = (provider_type.to_string(), model_id.to_string());
        self.removed
            .get_or_insert_with(BTreeMap::new)
            .insert(key, RemovedDependency::new(provider_type, model_id));
    }

    /// Returns `None` when nothing was recorded
    pub fn try_build_changes(&self) -> Option<DependenciesChanges> {
        if self.added.is_none() && self.removed.is_none() {
            return None;
        }

        Some(DependenciesChanges {
            added_nodes: self
                .added
                .as_ref()
                .map(|added| added.values().cloned().collect())
                .unwrap_or_default(),
            removed_nodes: self
                .removed
                .as_ref()
                .map(|removed| removed.values().cloned().collect())
                .unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_tree::domain::models::PackageDependencyModel;
    use crate::dependency_tree::domain::Properties;

    fn package(name: &str, version: &str) -> Arc<dyn DependencyModel> {
        let mut properties = Properties::new();
        properties.insert("Version".to_string(), version.to_string());
        Arc::new(PackageDependencyModel::new(name, None, true, false, properties))
    }

    #[test]
    fn test_empty_builder_builds_nothing() {
        assert!(DependenciesChangesBuilder::new().try_build_changes().is_none());
    }

    #[test]
    fn test_added_replaces_same_id() {
        let mut builder = DependenciesChangesBuilder::new();
        builder.added(package("Serilog", "2.0.0"));
        builder.added(package("Serilog", "3.0.0"));
        builder.added(package("Polly", "8.0.0"));

        let changes = builder.try_build_changes().unwrap();
        assert_eq!(changes.added_nodes().len(), 2);
        let serilog = changes
            .added_nodes()
            .iter()
            .find(|m| m.id() == "Serilog")
            .unwrap();
        assert_eq!(serilog.version(), Some("3.0.0"));
        assert!(changes.removed_nodes().is_empty());
    }

    #[test]
    fn test_removed_deduplicates() {
        let mut builder = DependenciesChangesBuilder::new();
        builder.removed("NuGetDependency", "Serilog");
        builder.removed("NuGetDependency", "Serilog");

        let changes = builder.try_build_changes().unwrap();
        assert_eq!(changes.removed_nodes().len(), 1);
        assert_eq!(changes.removed_nodes()[0].model_id(), "Serilog");
        assert!(!changes.is_empty());
    }
}
