use super::SnapshotFilter;
use crate::dependency_tree::domain::{Dependency, DependencyId};
use crate::dependency_tree::services::SubTreeProviderRegistry;
use imbl::OrdMap;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// Item specs declared directly in the project file, compared case-insensitively
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectItemSpecs {
    specs: BTreeSet<String>,
}

impl ProjectItemSpecs {
    pub fn new<I, S>(specs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            specs: specs
                .into_iter()
                .map(|spec| spec.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn contains(&self, item_spec: &str) -> bool {
        self.specs.contains(&item_spec.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

/// Collaborators of one merge: the filter chain and the lookups filters consult
#[derive(Clone, Copy)]
pub struct MergeContext<'a> {
    pub filters: &'a [SnapshotFilter],
    pub sub_tree_providers: &'a SubTreeProviderRegistry,
    pub project_item_specs: Option<&'a ProjectItemSpecs>,
}

impl<'a> MergeContext<'a> {
    pub fn new(filters: &'a [SnapshotFilter], sub_tree_providers: &'a SubTreeProviderRegistry) -> Self {
        Self {
            filters,
            sub_tree_providers,
            project_item_specs: None,
        }
    }

    pub fn with_project_item_specs(mut self, project_item_specs: Option<&'a ProjectItemSpecs>) -> Self {
        self.project_item_specs = project_item_specs;
        self
    }

    /// Fresh filter state over `dependencies` for one targeted merge
    pub fn filter_context(&self, dependencies: OrdMap<DependencyId, Arc<Dependency>>) -> FilterContext<'a> {
        FilterContext::new(dependencies, self.sub_tree_providers, self.project_item_specs)
    }
}

impl fmt::Debug for MergeContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MergeContext")
            .field("filters", &self.filters.iter().map(|x| x.name()).collect::<Vec<_>>())
            .field("sub_tree_providers", self.sub_tree_providers)
            .field("project_item_specs", &self.project_item_specs)
            .finish()
    }
}

/// Mutable state shared by all filters during one merge pass
///
/// Owns the in-progress dependency map. Filters may read it and update
/// siblings; the merge engine stores accepted candidates through it as well.
pub struct FilterContext<'a> {
    dependencies: OrdMap<DependencyId, Arc<Dependency>>,
    changed: bool,
    sub_tree_providers: &'a SubTreeProviderRegistry,
    project_item_specs: Option<&'a ProjectItemSpecs>,
}

impl<'a> FilterContext<'a> {
    pub fn new(
        dependencies: OrdMap<DependencyId, Arc<Dependency>>,
        sub_tree_providers: &'a SubTreeProviderRegistry,
        project_item_specs: Option<&'a ProjectItemSpecs>,
    ) -> Self {
        Self {
            dependencies,
            changed: false,
            sub_tree_providers,
            project_item_specs,
        }
    }

    pub fn get(&self, id: &DependencyId) -> Option<&Arc<Dependency>> {
        self.dependencies.get(id)
    }

    pub fn contains(&self, id: &DependencyId) -> bool {
        self.dependencies.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Dependency>> {
        self.dependencies.values()
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    /// Stores a dependency under its id, replacing any previous value
    pub fn add_or_update(&mut self, dependency: Dependency) {
        self.dependencies
            .insert(dependency.id().clone(), Arc::new(dependency));
        self.changed = true;
    }

    /// Removes a dependency; returns false if it was not present
    pub fn remove(&mut self, id: &DependencyId) -> bool {
        let removed = self.dependencies.remove(id).is_some();
        self.changed |= removed;
        removed
    }

    pub fn changed(&self) -> bool {
        self.changed
    }

    pub fn sub_tree_providers(&self) -> &'a SubTreeProviderRegistry {
        self.sub_tree_providers
    }

    /// `None` when the project file's item list is not known
    pub fn project_item_specs(&self) -> Option<&'a ProjectItemSpecs> {
        self.project_item_specs
    }

    pub(crate) fn into_dependencies(self) -> OrdMap<DependencyId, Arc<Dependency>> {
        self.dependencies
    }
}
