use super::{
    Dependency, DependenciesChanges, DependencyId, ProjectCatalogSnapshot, TargetFramework,
};
use crate::dependency_tree::filters::{FilterDecision, MergeContext, RemoveDecision};
use crate::shared::error::DependenciesError;
use imbl::OrdMap;
use std::sync::Arc;
use tracing::{debug, trace};

/// Dependencies of one target framework, keyed by id
pub type DependencyMap = OrdMap<DependencyId, Arc<Dependency>>;

/// Immutable view of the dependencies of one target framework
///
/// The aggregate flags are computed once at construction.
#[derive(Debug, Clone)]
pub struct TargetedDependenciesSnapshot {
    target_framework: TargetFramework,
    catalogs: Option<ProjectCatalogSnapshot>,
    dependencies: DependencyMap,
    has_unresolved_dependency: bool,
    has_visible_unresolved_dependency: bool,
}

impl TargetedDependenciesSnapshot {
    /// Fails when a dependency's id belongs to another target framework
    pub fn new(
        target_framework: TargetFramework,
        catalogs: Option<ProjectCatalogSnapshot>,
        dependencies: DependencyMap,
    ) -> Result<Self, DependenciesError> {
        if let Some(foreign) = dependencies
            .keys()
            .find(|id| id.target_framework() != &target_framework)
        {
            return Err(DependenciesError::invalid_argument(
                "dependencies",
                format!(
                    "Dependency {} does not belong to target framework ({}).",
                    foreign, target_framework
                ),
            ));
        }

        Ok(Self::from_parts(target_framework, catalogs, dependencies))
    }

    pub fn empty(target_framework: TargetFramework, catalogs: Option<ProjectCatalogSnapshot>) -> Self {
        Self::from_parts(target_framework, catalogs, OrdMap::new())
    }

    fn from_parts(
        target_framework: TargetFramework,
        catalogs: Option<ProjectCatalogSnapshot>,
        dependencies: DependencyMap,
    ) -> Self {
        let has_unresolved_dependency = dependencies.values().any(|d| !d.is_resolved());
        let has_visible_unresolved_dependency = dependencies
            .values()
            .any(|d| !d.is_resolved() && d.is_visible());

        Self {
            target_framework,
            catalogs,
            dependencies,
            has_unresolved_dependency,
            has_visible_unresolved_dependency,
        }
    }

    pub fn target_framework(&self) -> &TargetFramework {
        &self.target_framework
    }

    pub fn catalogs(&self) -> Option<&ProjectCatalogSnapshot> {
        self.catalogs.as_ref()
    }

    pub fn dependencies(&self) -> &DependencyMap {
        &self.dependencies
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    pub fn has_unresolved_dependency(&self) -> bool {
        self.has_unresolved_dependency
    }

    pub fn has_visible_unresolved_dependency(&self) -> bool {
        self.has_visible_unresolved_dependency
    }

    /// Looks a dependency up by its rendered id
    pub fn find(&self, id: &str) -> Option<&Arc<Dependency>> {
        self.dependencies
            .iter()
            .find(|(key, _)| key.as_str() == id)
            .map(|(_, dependency)| dependency)
    }

    /// Merges one batch of changes into `previous`
    ///
    /// Removals run before additions. Returns `previous` itself when neither
    /// the dependencies nor the catalogs changed.
    pub fn from_changes(
        previous: &Arc<Self>,
        changes: Option<&DependenciesChanges>,
        catalogs: Option<&ProjectCatalogSnapshot>,
        context: &MergeContext<'_>,
    ) -> Arc<Self> {
        let target_framework = &previous.target_framework;
        let mut filter_context = context.filter_context(previous.dependencies.clone());
        let mut any_changes = false;

        if let Some(changes) = changes {
            for removed in changes.removed_nodes() {
                let id = DependencyId::new(target_framework, removed.provider_type(), removed.model_id());
                let Some(dependency) = filter_context.get(&id).cloned() else {
                    trace!(%id, "ignoring removal of unknown dependency");
                    continue;
                };

                let vetoed = context.filters.iter().any(|filter| {
                    filter.before_remove(target_framework, &dependency, &mut filter_context)
                        == RemoveDecision::Reject
                });
                if vetoed {
                    trace!(%id, "removal vetoed by filter");
                    continue;
                }

                filter_context.remove(&id);
                any_changes = true;
            }

            for model in changes.added_nodes() {
                let mut candidate = Some(Dependency::new(model.as_ref(), target_framework));
                for filter in context.filters {
                    let Some(dependency) = candidate.take() else {
                        break;
                    };
                    candidate = match filter.before_add(target_framework, dependency, &mut filter_context) {
                        FilterDecision::Accept(dependency) => Some(dependency),
                        FilterDecision::Reject => None,
                    };
                }

                match candidate {
                    Some(dependency) => {
                        filter_context.add_or_update(dependency);
                        any_changes = true;
                    }
                    None => {
                        trace!(model_id = model.id(), "dependency rejected by filter");
                    }
                }
            }
        }

        // Sibling updates made by filters count even when their candidate was rejected
        any_changes |= filter_context.changed();

        let same_catalogs = ProjectCatalogSnapshot::same(previous.catalogs.as_ref(), catalogs);
        if !any_changes && same_catalogs {
            return Arc::clone(previous);
        }

        let dependencies = filter_context.into_dependencies();
        debug!(
            target_framework = %target_framework,
            count = dependencies.len(),
            catalogs_changed = !same_catalogs,
            "rebuilt targeted dependencies snapshot"
        );

        Arc::new(Self::from_parts(
            target_framework.clone(),
            catalogs.cloned(),
            dependencies,
        ))
    }
}
