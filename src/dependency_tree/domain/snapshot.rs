use super::{
    Dependency, DependenciesChanges, ProjectCatalogSnapshot, TargetFramework,
    TargetedDependenciesSnapshot,
};
use crate::dependency_tree::filters::MergeContext;
use crate::shared::error::DependenciesError;
use imbl::OrdMap;
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// Targeted snapshots keyed by target framework
pub type TargetedSnapshotMap = OrdMap<TargetFramework, Arc<TargetedDependenciesSnapshot>>;

/// Immutable view of a project's dependencies across all its target frameworks
///
/// Every operation returns a snapshot; when nothing changes it is the very
/// same `Arc` that was passed in, and untouched target frameworks are shared
/// by reference between versions.
#[derive(Debug, Clone)]
pub struct DependenciesSnapshot {
    active_target_framework: TargetFramework,
    dependencies_by_target_framework: TargetedSnapshotMap,
}

impl DependenciesSnapshot {
    /// Fails unless the active framework is a sentinel or a key of the map
    pub fn new(
        active_target_framework: TargetFramework,
        dependencies_by_target_framework: TargetedSnapshotMap,
    ) -> Result<Self, DependenciesError> {
        if !active_target_framework.is_empty_or_unsupported()
            && !dependencies_by_target_framework.contains_key(&active_target_framework)
        {
            return Err(DependenciesError::invalid_argument(
                "activeTargetFramework",
                format!(
                    "Must contain activeTargetFramework ({}).",
                    active_target_framework
                ),
            ));
        }

        Ok(Self {
            active_target_framework,
            dependencies_by_target_framework,
        })
    }

    /// The shared empty snapshot
    pub fn empty() -> Arc<Self> {
        static EMPTY: OnceLock<Arc<DependenciesSnapshot>> = OnceLock::new();
        Arc::clone(EMPTY.get_or_init(|| {
            Arc::new(Self {
                active_target_framework: TargetFramework::Empty,
                dependencies_by_target_framework: OrdMap::new(),
            })
        }))
    }

    pub fn active_target_framework(&self) -> &TargetFramework {
        &self.active_target_framework
    }

    pub fn dependencies_by_target_framework(&self) -> &TargetedSnapshotMap {
        &self.dependencies_by_target_framework
    }

    pub fn targeted(&self, target_framework: &TargetFramework) -> Option<&Arc<TargetedDependenciesSnapshot>> {
        self.dependencies_by_target_framework.get(target_framework)
    }

    /// The targeted snapshot of the active framework, if it has one
    pub fn active_targeted(&self) -> Option<&Arc<TargetedDependenciesSnapshot>> {
        self.targeted(&self.active_target_framework)
    }

    pub fn has_visible_unresolved_dependency(&self) -> bool {
        self.dependencies_by_target_framework
            .values()
            .any(|targeted| targeted.has_visible_unresolved_dependency())
    }

    /// Searches every target framework for a dependency with the given rendered id
    pub fn find_dependency(&self, id: &str) -> Option<&Arc<Dependency>> {
        self.dependencies_by_target_framework
            .values()
            .find_map(|targeted| targeted.find(id))
    }

    /// Reconciles the set of target frameworks and the active one
    ///
    /// Existing targeted snapshots are kept by reference; new frameworks start
    /// empty and frameworks missing from `target_frameworks` are dropped.
    /// Fails when the active framework is neither a sentinel nor listed.
    pub fn set_targets(
        self: &Arc<Self>,
        target_frameworks: &[TargetFramework],
        active_target_framework: TargetFramework,
    ) -> Result<Arc<Self>, DependenciesError> {
        let map = sync_target_frameworks(&self.dependencies_by_target_framework, target_frameworks, None);

        if map.ptr_eq(&self.dependencies_by_target_framework)
            && active_target_framework == self.active_target_framework
        {
            return Ok(Arc::clone(self));
        }

        Self::new(active_target_framework, map).map(Arc::new)
    }

    /// Merges the changes of one target framework into `previous`
    ///
    /// `target_frameworks` is the full ordered framework list when known;
    /// `active_target_framework` of `None` keeps the previous active framework.
    /// Returns `previous` itself when the result would be identical, and an
    /// error when the resulting active framework has no targeted snapshot.
    pub fn from_changes(
        previous: &Arc<Self>,
        target_framework: &TargetFramework,
        changes: Option<&DependenciesChanges>,
        catalogs: Option<&ProjectCatalogSnapshot>,
        target_frameworks: Option<&[TargetFramework]>,
        active_target_framework: Option<TargetFramework>,
        context: &MergeContext<'_>,
    ) -> Result<Arc<Self>, DependenciesError> {
        let mut map = previous.dependencies_by_target_framework.clone();

        let previous_targeted = map.get(target_framework).cloned().unwrap_or_else(|| {
            Arc::new(TargetedDependenciesSnapshot::empty(
                target_framework.clone(),
                catalogs.cloned(),
            ))
        });

        let updated = TargetedDependenciesSnapshot::from_changes(&previous_targeted, changes, catalogs, context);
        if !Arc::ptr_eq(&previous_targeted, &updated) {
            map.insert(target_framework.clone(), updated);
        }

        if let Some(target_frameworks) = target_frameworks {
            map = sync_target_frameworks(&map, target_frameworks, catalogs);
        }

        let active_target_framework =
            active_target_framework.unwrap_or_else(|| previous.active_target_framework.clone());

        let map_changed = !map.ptr_eq(&previous.dependencies_by_target_framework);
        if !map_changed && active_target_framework == previous.active_target_framework {
            return Ok(Arc::clone(previous));
        }

        let snapshot = Self::new(active_target_framework, map)?;
        debug!(
            target_framework = %target_framework,
            active = %snapshot.active_target_framework,
            frameworks = snapshot.dependencies_by_target_framework.len(),
            map_changed,
            "published dependencies snapshot"
        );

        Ok(Arc::new(snapshot))
    }
}

/// Adds empty snapshots for new frameworks and drops the ones no longer listed
///
/// Returns `map` itself (sharing its root) when it already matches.
fn sync_target_frameworks(
    map: &TargetedSnapshotMap,
    target_frameworks: &[TargetFramework],
    catalogs: Option<&ProjectCatalogSnapshot>,
) -> TargetedSnapshotMap {
    let mut synced = map.clone();

    for target_framework in target_frameworks {
        if !synced.contains_key(target_framework) {
            synced.insert(
                target_framework.clone(),
                Arc::new(TargetedDependenciesSnapshot::empty(
                    target_framework.clone(),
                    catalogs.cloned(),
                )),
            );
        }
    }

    let stale: Vec<TargetFramework> = synced
        .keys()
        .filter(|tfm| !target_frameworks.contains(tfm))
        .cloned()
        .collect();
    for target_framework in stale {
        synced.remove(&target_framework);
    }

    synced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_tree::services::SubTreeProviderRegistry;

    fn tfm(name: &str) -> TargetFramework {
        TargetFramework::new(name)
    }

    fn map_with(catalogs: &ProjectCatalogSnapshot, frameworks: &[&str]) -> TargetedSnapshotMap {
        frameworks
            .iter()
            .map(|name| {
                (
                    tfm(name),
                    Arc::new(TargetedDependenciesSnapshot::empty(tfm(name), Some(catalogs.clone()))),
                )
            })
            .collect()
    }

    #[test]
    fn test_new_requires_active_in_map() {
        let err = DependenciesSnapshot::new(tfm("tfm1"), OrdMap::new()).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Must contain activeTargetFramework (tfm1)."));
        assert!(matches!(err, DependenciesError::InvalidArgument { ref argument, .. } if argument == "activeTargetFramework"));
    }

    #[test]
    fn test_new_accepts_sentinels() {
        assert!(DependenciesSnapshot::new(TargetFramework::Empty, OrdMap::new()).is_ok());
        assert!(DependenciesSnapshot::new(TargetFramework::Unsupported, OrdMap::new()).is_ok());
    }

    #[test]
    fn test_new_stores_map_by_reference() {
        let catalogs = ProjectCatalogSnapshot::builtin();
        let map = map_with(&catalogs, &["tfm1"]);
        let snapshot = DependenciesSnapshot::new(tfm("tfm1"), map.clone()).unwrap();

        assert_eq!(snapshot.active_target_framework(), &tfm("tfm1"));
        assert!(snapshot.dependencies_by_target_framework().ptr_eq(&map));
        assert!(!snapshot.has_visible_unresolved_dependency());
        assert!(snapshot.find_dependency("foo").is_none());
    }

    #[test]
    fn test_empty_is_singleton() {
        let empty = DependenciesSnapshot::empty();
        assert!(Arc::ptr_eq(&empty, &DependenciesSnapshot::empty()));
        assert_eq!(empty.active_target_framework(), &TargetFramework::Empty);
        assert!(empty.dependencies_by_target_framework().is_empty());
        assert!(!empty.has_visible_unresolved_dependency());
        assert!(empty.find_dependency("foo").is_none());
    }

    #[test]
    fn test_from_changes_rejects_unknown_active() {
        let providers = SubTreeProviderRegistry::with_defaults();
        let context = MergeContext::new(&[], &providers);
        let previous = DependenciesSnapshot::empty();

        let err = DependenciesSnapshot::from_changes(
            &previous,
            &tfm("tfm1"),
            None,
            None,
            Some(&[tfm("tfm1")][..]),
            Some(tfm("tfm9")),
            &context,
        )
        .unwrap_err();

        assert!(matches!(err, DependenciesError::InvalidArgument { ref argument, .. } if argument == "activeTargetFramework"));
        assert!(err.to_string().starts_with("Must contain activeTargetFramework (tfm9)."));
    }

    #[test]
    fn test_from_changes_rejects_active_dropped_by_framework_list() {
        let providers = SubTreeProviderRegistry::with_defaults();
        let context = MergeContext::new(&[], &providers);
        let catalogs = ProjectCatalogSnapshot::builtin();
        let previous = Arc::new(
            DependenciesSnapshot::new(tfm("tfm1"), map_with(&catalogs, &["tfm1", "tfm2"])).unwrap(),
        );

        let result = DependenciesSnapshot::from_changes(
            &previous,
            &tfm("tfm2"),
            None,
            None,
            Some(&[tfm("tfm2")][..]),
            None,
            &context,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_sync_target_frameworks_keeps_matching_map() {
        let catalogs = ProjectCatalogSnapshot::builtin();
        let map = map_with(&catalogs, &["tfm1", "tfm2"]);
        let synced = sync_target_frameworks(&map, &[tfm("tfm2"), tfm("tfm1")], None);
        assert!(synced.ptr_eq(&map));
    }
}
