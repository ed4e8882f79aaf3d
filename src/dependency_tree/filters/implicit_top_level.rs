use super::{DependenciesSnapshotFilter, FilterContext, FilterDecision};
use crate::dependency_tree::domain::{Dependency, DependencyTreeFlags, TargetFramework};

/// Marks resolved dependencies the project file does not declare as implicit
///
/// Such dependencies come from SDKs or targets rather than from the user,
/// so they get the provider's implicit icon and cannot be removed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImplicitTopLevelDependenciesSnapshotFilter;

impl ImplicitTopLevelDependenciesSnapshotFilter {
    pub const NAME: &'static str = "implicit-top-level";
}

fn is_candidate(dependency: &Dependency) -> bool {
    let flags = dependency.flags();
    !dependency.is_implicit()
        && dependency.is_resolved()
        && flags.contains(DependencyTreeFlags::GENERIC_DEPENDENCY)
        && !flags.contains(DependencyTreeFlags::SHARED_PROJECT_DEPENDENCY)
}

impl DependenciesSnapshotFilter for ImplicitTopLevelDependenciesSnapshotFilter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn before_add(
        &self,
        _target_framework: &TargetFramework,
        dependency: Dependency,
        context: &mut FilterContext<'_>,
    ) -> FilterDecision {
        let Some(project_item_specs) = context.project_item_specs() else {
            return FilterDecision::Accept(dependency);
        };

        if !is_candidate(&dependency) || project_item_specs.contains(dependency.original_item_spec())
        {
            return FilterDecision::Accept(dependency);
        }

        let implicit_icon = context
            .sub_tree_providers()
            .get(dependency.provider_type())
            .and_then(|provider| provider.implicit_icon());

        match implicit_icon {
            Some(icon) => {
                let icon_set = dependency.icon_set().with_resolved_icons(icon, icon);
                FilterDecision::Accept(dependency.with_icon_set(icon_set).with_implicit())
            }
            None => FilterDecision::Accept(dependency),
        }
    }
}
