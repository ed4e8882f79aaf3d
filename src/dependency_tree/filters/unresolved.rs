use super::{DependenciesSnapshotFilter, FilterContext, FilterDecision};
use crate::dependency_tree::domain::{Dependency, TargetFramework};
use tracing::trace;

/// Keeps a resolved dependency from being replaced by its unresolved form
///
/// Evaluation data (unresolved) can arrive after design-time build data
/// (resolved) for the same item; the resolved one wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnresolvedDependenciesSnapshotFilter;

impl UnresolvedDependenciesSnapshotFilter {
    pub const NAME: &'static str = "unresolved";
}

impl DependenciesSnapshotFilter for UnresolvedDependenciesSnapshotFilter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn before_add(
        &self,
        _target_framework: &TargetFramework,
        dependency: Dependency,
        context: &mut FilterContext<'_>,
    ) -> FilterDecision {
        if !dependency.is_resolved()
            && context
                .get(dependency.id())
                .is_some_and(|existing| existing.is_resolved())
        {
            trace!(id = %dependency.id(), "keeping resolved dependency over unresolved update");
            return FilterDecision::Reject;
        }

        FilterDecision::Accept(dependency)
    }
}
