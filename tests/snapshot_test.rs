/// Integration tests for DependenciesSnapshot merging and target reconciliation
mod test_utilities;

use deptree::dependency_tree::domain::TargetedSnapshotMap;
use deptree::prelude::*;
use proptest::prelude::*;
use std::sync::Arc;
use test_utilities::mocks::TestDependencyModel;

fn tfm(name: &str) -> TargetFramework {
    TargetFramework::new(name)
}

fn targeted(name: &str, catalogs: &ProjectCatalogSnapshot) -> Arc<TargetedDependenciesSnapshot> {
    Arc::new(TargetedDependenciesSnapshot::empty(tfm(name), Some(catalogs.clone())))
}

fn snapshot_with(
    active: &str,
    frameworks: &[&str],
    catalogs: &ProjectCatalogSnapshot,
) -> Arc<DependenciesSnapshot> {
    let map: TargetedSnapshotMap = frameworks
        .iter()
        .map(|name| (tfm(name), targeted(name, catalogs)))
        .collect();
    Arc::new(DependenciesSnapshot::new(tfm(active), map).unwrap())
}

fn changes(models: Vec<Arc<dyn DependencyModel>>) -> DependenciesChanges {
    let mut builder = DependenciesChangesBuilder::new();
    for model in models {
        builder.added(model);
    }
    builder.try_build_changes().unwrap()
}

mod construction_tests {
    use super::*;

    #[test]
    fn test_unknown_active_target_framework_is_rejected() {
        let catalogs = ProjectCatalogSnapshot::builtin();
        let map: TargetedSnapshotMap = [(tfm("tfm1"), targeted("tfm1", &catalogs))]
            .into_iter()
            .collect();

        let error = DependenciesSnapshot::new(tfm("tfm2"), map).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Must contain activeTargetFramework (tfm2). (Parameter 'activeTargetFramework')"
        );
    }

    #[test]
    fn test_constructor_keeps_arguments() {
        let catalogs = ProjectCatalogSnapshot::builtin();
        let snapshot = snapshot_with("tfm1", &["tfm1", "tfm2"], &catalogs);

        assert_eq!(snapshot.active_target_framework(), &tfm("tfm1"));
        assert_eq!(snapshot.dependencies_by_target_framework().len(), 2);
        assert!(snapshot.active_targeted().unwrap().is_empty());
        assert!(!snapshot.has_visible_unresolved_dependency());
    }

    #[test]
    fn test_empty_snapshot() {
        let empty = DependenciesSnapshot::empty();
        assert_eq!(empty.active_target_framework(), &TargetFramework::Empty);
        assert!(empty.dependencies_by_target_framework().is_empty());
        assert!(!empty.has_visible_unresolved_dependency());
        assert!(empty.find_dependency(r"tfm1\Xxx\dependency1").is_none());
        assert!(Arc::ptr_eq(&empty, &DependenciesSnapshot::empty()));
    }
}

mod from_changes_tests {
    use super::*;

    #[test]
    fn test_no_changes_returns_previous() {
        let catalogs = ProjectCatalogSnapshot::builtin();
        let previous = snapshot_with("tfm1", &["tfm1"], &catalogs);
        let providers = SubTreeProviderRegistry::with_defaults();
        let filters = default_filters();
        let context = MergeContext::new(&filters, &providers);

        let snapshot = DependenciesSnapshot::from_changes(
            &previous,
            &tfm("tfm1"),
            None,
            Some(&catalogs),
            None,
            None,
            &context,
        )
        .unwrap();

        assert!(Arc::ptr_eq(&previous, &snapshot));
    }

    #[test]
    fn test_catalogs_changed_rebuilds_only_that_framework() {
        let catalogs = ProjectCatalogSnapshot::builtin();
        let previous = snapshot_with("tfm1", &["tfm1", "tfm2"], &catalogs);
        let updated_catalogs = ProjectCatalogSnapshot::builtin();
        let providers = SubTreeProviderRegistry::with_defaults();
        let filters: Vec<SnapshotFilter> = Vec::new();
        let context = MergeContext::new(&filters, &providers);

        let snapshot = DependenciesSnapshot::from_changes(
            &previous,
            &tfm("tfm1"),
            None,
            Some(&updated_catalogs),
            None,
            None,
            &context,
        )
        .unwrap();

        assert!(!Arc::ptr_eq(&previous, &snapshot));
        assert_eq!(snapshot.active_target_framework(), &tfm("tfm1"));

        let tfm1 = snapshot.targeted(&tfm("tfm1")).unwrap();
        assert!(!Arc::ptr_eq(previous.targeted(&tfm("tfm1")).unwrap(), tfm1));
        assert!(tfm1.catalogs().unwrap().ptr_eq(&updated_catalogs));

        assert!(Arc::ptr_eq(
            previous.targeted(&tfm("tfm2")).unwrap(),
            snapshot.targeted(&tfm("tfm2")).unwrap()
        ));
    }

    #[test]
    fn test_added_dependency_is_keyed_by_framework_and_provider() {
        let catalogs = ProjectCatalogSnapshot::builtin();
        let previous = snapshot_with("tfm1", &["tfm1", "tfm2"], &catalogs);
        let providers = SubTreeProviderRegistry::with_defaults();
        let filters: Vec<SnapshotFilter> = Vec::new();
        let context = MergeContext::new(&filters, &providers);
        let changes = changes(vec![TestDependencyModel::shared("Xxx", "dependency1", true)]);

        let snapshot = DependenciesSnapshot::from_changes(
            &previous,
            &tfm("tfm1"),
            Some(&changes),
            Some(&catalogs),
            None,
            None,
            &context,
        )
        .unwrap();

        assert!(!Arc::ptr_eq(&previous, &snapshot));
        let tfm1 = snapshot.targeted(&tfm("tfm1")).unwrap();
        assert_eq!(tfm1.len(), 1);
        let dependency = tfm1.find(r"tfm1\Xxx\dependency1").unwrap();
        assert_eq!(dependency.id().as_str(), r"tfm1\Xxx\dependency1");
        assert_eq!(dependency.provider_type(), "Xxx");
        assert_eq!(dependency.caption(), "dependency1");

        assert!(Arc::ptr_eq(
            previous.targeted(&tfm("tfm2")).unwrap(),
            snapshot.targeted(&tfm("tfm2")).unwrap()
        ));
    }

    #[test]
    fn test_unknown_removal_is_tolerated() {
        let catalogs = ProjectCatalogSnapshot::builtin();
        let previous = snapshot_with("tfm1", &["tfm1"], &catalogs);
        let providers = SubTreeProviderRegistry::with_defaults();
        let filters = default_filters();
        let context = MergeContext::new(&filters, &providers);

        let mut builder = DependenciesChangesBuilder::new();
        builder.removed("Xxx", "never-added");
        let changes = builder.try_build_changes().unwrap();

        let snapshot = DependenciesSnapshot::from_changes(
            &previous,
            &tfm("tfm1"),
            Some(&changes),
            Some(&catalogs),
            None,
            None,
            &context,
        )
        .unwrap();

        assert!(Arc::ptr_eq(&previous, &snapshot));
    }

    #[test]
    fn test_unresolved_visible_dependency_is_reported() {
        let catalogs = ProjectCatalogSnapshot::builtin();
        let previous = snapshot_with("tfm1", &["tfm1"], &catalogs);
        let providers = SubTreeProviderRegistry::with_defaults();
        let filters = default_filters();
        let context = MergeContext::new(&filters, &providers);
        let changes = changes(vec![TestDependencyModel::shared("Xxx", "dependency1", false)]);

        let snapshot = DependenciesSnapshot::from_changes(
            &previous,
            &tfm("tfm1"),
            Some(&changes),
            Some(&catalogs),
            None,
            None,
            &context,
        )
        .unwrap();

        assert!(snapshot.has_visible_unresolved_dependency());
        assert!(snapshot.active_targeted().unwrap().has_unresolved_dependency());
    }

    #[test]
    fn test_framework_list_and_active_override() {
        let catalogs = ProjectCatalogSnapshot::builtin();
        let previous = snapshot_with("tfm1", &["tfm1", "tfm2"], &catalogs);
        let providers = SubTreeProviderRegistry::with_defaults();
        let filters: Vec<SnapshotFilter> = Vec::new();
        let context = MergeContext::new(&filters, &providers);
        let changes = changes(vec![TestDependencyModel::shared("Xxx", "dependency1", true)]);

        let snapshot = DependenciesSnapshot::from_changes(
            &previous,
            &tfm("tfm3"),
            Some(&changes),
            Some(&catalogs),
            Some(&[tfm("tfm1"), tfm("tfm3")][..]),
            Some(tfm("tfm3")),
            &context,
        )
        .unwrap();

        assert_eq!(snapshot.active_target_framework(), &tfm("tfm3"));
        assert!(snapshot.targeted(&tfm("tfm2")).is_none());
        assert!(snapshot.find_dependency(r"tfm3\Xxx\dependency1").is_some());
        assert!(Arc::ptr_eq(
            previous.targeted(&tfm("tfm1")).unwrap(),
            snapshot.targeted(&tfm("tfm1")).unwrap()
        ));
    }
}

mod set_targets_tests {
    use super::*;

    #[test]
    fn test_same_targets_return_same_snapshot() {
        let catalogs = ProjectCatalogSnapshot::builtin();
        let snapshot = snapshot_with("tfm1", &["tfm1", "tfm2"], &catalogs);

        let updated = snapshot.set_targets(&[tfm("tfm1"), tfm("tfm2")], tfm("tfm1")).unwrap();
        assert!(Arc::ptr_eq(&snapshot, &updated));
    }

    #[test]
    fn test_active_change_keeps_targeted_snapshots() {
        let catalogs = ProjectCatalogSnapshot::builtin();
        let snapshot = snapshot_with("tfm1", &["tfm1", "tfm2"], &catalogs);

        let updated = snapshot.set_targets(&[tfm("tfm1"), tfm("tfm2")], tfm("tfm2")).unwrap();
        assert!(!Arc::ptr_eq(&snapshot, &updated));
        assert_eq!(updated.active_target_framework(), &tfm("tfm2"));
        assert!(updated
            .dependencies_by_target_framework()
            .ptr_eq(snapshot.dependencies_by_target_framework()));
    }

    #[test]
    fn test_new_and_removed_targets() {
        let catalogs = ProjectCatalogSnapshot::builtin();
        let snapshot = snapshot_with("tfm1", &["tfm1", "tfm2"], &catalogs);

        let updated = snapshot.set_targets(&[tfm("tfm1"), tfm("tfm3")], tfm("tfm3")).unwrap();

        assert_eq!(updated.active_target_framework(), &tfm("tfm3"));
        assert_eq!(updated.dependencies_by_target_framework().len(), 2);
        assert!(updated.targeted(&tfm("tfm2")).is_none());
        assert!(updated.targeted(&tfm("tfm3")).unwrap().is_empty());
        assert!(Arc::ptr_eq(
            snapshot.targeted(&tfm("tfm1")).unwrap(),
            updated.targeted(&tfm("tfm1")).unwrap()
        ));
    }

    #[test]
    fn test_unknown_active_target_framework_is_rejected() {
        let catalogs = ProjectCatalogSnapshot::builtin();
        let snapshot = snapshot_with("tfm1", &["tfm1"], &catalogs);

        let error = snapshot.set_targets(&[tfm("tfm1")], tfm("tfm9")).unwrap_err();
        assert!(matches!(
            error,
            DependenciesError::InvalidArgument { ref argument, .. } if argument == "activeTargetFramework"
        ));
    }

    #[test]
    fn test_active_dropped_from_targets_is_rejected() {
        let catalogs = ProjectCatalogSnapshot::builtin();
        let snapshot = snapshot_with("tfm1", &["tfm1", "tfm2"], &catalogs);

        assert!(snapshot.set_targets(&[tfm("tfm2")], tfm("tfm1")).is_err());
        assert!(snapshot
            .set_targets(&[tfm("tfm2")], TargetFramework::Unsupported)
            .is_ok());
    }
}

const NAMES: [&str; 5] = ["net48", "net6.0", "net8.0", "netstandard2.0", "net9.0"];

proptest! {
    /// Frameworks present before and after keep their targeted snapshot by reference
    #[test]
    fn prop_set_targets_reuses_existing_snapshots(
        before in proptest::sample::subsequence(NAMES.to_vec(), 1..=NAMES.len()),
        after in proptest::sample::subsequence(NAMES.to_vec(), 1..=NAMES.len()),
    ) {
        let catalogs = ProjectCatalogSnapshot::builtin();
        let snapshot = snapshot_with(before[0], &before, &catalogs);
        let targets: Vec<TargetFramework> = after.iter().map(|name| tfm(name)).collect();

        let updated = snapshot.set_targets(&targets, targets[0].clone()).unwrap();

        prop_assert_eq!(updated.dependencies_by_target_framework().len(), after.len());
        prop_assert_eq!(updated.active_target_framework(), &targets[0]);
        for name in &after {
            let current = updated.targeted(&tfm(name)).unwrap();
            match snapshot.targeted(&tfm(name)) {
                Some(existing) => prop_assert!(Arc::ptr_eq(existing, current)),
                None => prop_assert!(current.is_empty()),
            }
        }

        if before == after {
            prop_assert!(Arc::ptr_eq(&snapshot, &updated));
        }
    }
}
