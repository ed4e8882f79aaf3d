use super::{DependenciesSnapshotFilter, FilterContext, FilterDecision, RemoveDecision};
use crate::dependency_tree::domain::models::{provider_types, schema_names};
use crate::dependency_tree::domain::{
    Dependency, DependencyId, DependencyTreeFlags, TargetFramework,
};
use tracing::trace;

/// Ties the resolution state of an SDK to the package that delivers it
///
/// An SDK has no design-time data of its own. It shows as resolved exactly
/// while a resolved package with the same name is present.
#[derive(Debug, Clone, Copy, Default)]
pub struct SdkAndPackagesDependenciesSnapshotFilter;

impl SdkAndPackagesDependenciesSnapshotFilter {
    pub const NAME: &'static str = "sdk-and-packages";
}

fn is_resolved_package(dependency: &Dependency) -> bool {
    dependency.is_resolved()
        && dependency
            .flags()
            .contains(DependencyTreeFlags::PACKAGE_DEPENDENCY)
}

impl DependenciesSnapshotFilter for SdkAndPackagesDependenciesSnapshotFilter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn before_add(
        &self,
        target_framework: &TargetFramework,
        dependency: Dependency,
        context: &mut FilterContext<'_>,
    ) -> FilterDecision {
        if dependency.flags().contains(DependencyTreeFlags::SDK_DEPENDENCY) {
            let package_id =
                DependencyId::new(target_framework, provider_types::PACKAGE, dependency.model_id());
            if context.get(&package_id).is_some_and(|p| p.is_resolved()) {
                trace!(id = %dependency.id(), "resolving sdk from its package");
                return FilterDecision::Accept(
                    dependency.to_resolved(schema_names::RESOLVED_SDK_REFERENCE),
                );
            }
        } else if is_resolved_package(&dependency) {
            let sdk_id =
                DependencyId::new(target_framework, provider_types::SDK, dependency.model_id());
            if let Some(sdk) = context.get(&sdk_id).cloned() {
                trace!(id = %sdk_id, "resolving sdk for added package");
                context.add_or_update(
                    sdk.as_ref()
                        .clone()
                        .to_resolved(schema_names::RESOLVED_SDK_REFERENCE),
                );
            }
        }

        FilterDecision::Accept(dependency)
    }

    fn before_remove(
        &self,
        target_framework: &TargetFramework,
        dependency: &Dependency,
        context: &mut FilterContext<'_>,
    ) -> RemoveDecision {
        if is_resolved_package(dependency) {
            let sdk_id =
                DependencyId::new(target_framework, provider_types::SDK, dependency.model_id());
            if let Some(sdk) = context.get(&sdk_id).cloned() {
                trace!(id = %sdk_id, "unresolving sdk for removed package");
                context.add_or_update(sdk.as_ref().clone().to_unresolved(schema_names::SDK_REFERENCE));
            }
        }

        RemoveDecision::Accept
    }
}
