//! Builder for constructing DependencyTreeReadModel from a snapshot

use super::dependency_node_view::DependencyNodeView;
use super::tree_read_model::{DependencyTreeReadModel, ProviderGroupView, TargetFrameworkView};
use crate::dependency_tree::domain::{
    DependenciesSnapshot, Dependency, ImageMoniker, ProjectCatalogSnapshot,
    TargetedDependenciesSnapshot,
};
use crate::dependency_tree::services::SubTreeProviderRegistry;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Builds the tree as the solution explorer would show it
///
/// Dependencies are grouped under their provider's root node and sorted by
/// caption. Hidden dependencies are left out unless `show_hidden` is set.
pub struct DependencyTreeReadModelBuilder<'a> {
    sub_tree_providers: &'a SubTreeProviderRegistry,
    show_hidden: bool,
}

impl<'a> DependencyTreeReadModelBuilder<'a> {
    pub fn new(sub_tree_providers: &'a SubTreeProviderRegistry) -> Self {
        Self {
            sub_tree_providers,
            show_hidden: false,
        }
    }

    pub fn with_show_hidden(mut self, show_hidden: bool) -> Self {
        self.show_hidden = show_hidden;
        self
    }

    pub fn build(&self, snapshot: &DependenciesSnapshot) -> DependencyTreeReadModel {
        let active = snapshot.active_target_framework();
        let target_frameworks = snapshot
            .dependencies_by_target_framework()
            .values()
            .map(|targeted| self.build_target_framework(targeted, targeted.target_framework() == active))
            .collect();

        DependencyTreeReadModel {
            active_target_framework: active.to_string(),
            has_visible_unresolved_dependency: snapshot.has_visible_unresolved_dependency(),
            target_frameworks,
        }
    }

    fn build_target_framework(&self, targeted: &TargetedDependenciesSnapshot, is_active: bool) -> TargetFrameworkView {
        let mut by_provider: HashMap<&str, Vec<&Arc<Dependency>>> = HashMap::new();
        for dependency in targeted.dependencies().values() {
            if dependency.is_visible() || self.show_hidden {
                by_provider
                    .entry(dependency.provider_type())
                    .or_default()
                    .push(dependency);
            }
        }

        let mut groups: Vec<ProviderGroupView> = by_provider
            .into_iter()
            .map(|(provider_type, dependencies)| {
                self.build_group(provider_type, dependencies, targeted.catalogs())
            })
            .collect();
        groups.sort_by(|a, b| a.caption.cmp(&b.caption));

        TargetFrameworkView {
            name: targeted.target_framework().to_string(),
            is_active,
            has_unresolved_dependency: targeted.has_unresolved_dependency(),
            groups,
        }
    }

    fn build_group(
        &self,
        provider_type: &str,
        mut dependencies: Vec<&Arc<Dependency>>,
        catalogs: Option<&ProjectCatalogSnapshot>,
    ) -> ProviderGroupView {
        dependencies.sort_by(|a, b| {
            a.caption()
                .to_lowercase()
                .cmp(&b.caption().to_lowercase())
                .then_with(|| a.id().cmp(b.id()))
        });

        // Unknown providers still get a node so nothing silently disappears
        let (caption, icon) = match self.sub_tree_providers.get(provider_type) {
            Some(provider) => (provider.root_caption().to_string(), provider.root_icon()),
            None => (provider_type.to_string(), ImageMoniker::ReferenceGroup),
        };

        ProviderGroupView {
            provider_type: provider_type.to_string(),
            caption,
            icon: icon.to_string(),
            dependencies: dependencies
                .into_iter()
                .map(|dependency| build_node(dependency, catalogs))
                .collect(),
        }
    }
}

fn build_node(dependency: &Dependency, catalogs: Option<&ProjectCatalogSnapshot>) -> DependencyNodeView {
    DependencyNodeView {
        id: dependency.id().to_string(),
        caption: dependency.caption().to_string(),
        icon: dependency.icon().to_string(),
        resolved: dependency.is_resolved(),
        implicit: dependency.is_implicit(),
        visible: dependency.is_visible(),
        version: dependency.version().map(str::to_string),
        flags: dependency
            .flags()
            .names()
            .into_iter()
            .map(str::to_string)
            .collect(),
        properties: displayed_properties(dependency, catalogs),
    }
}

/// Without catalogs every property is shown
fn displayed_properties(
    dependency: &Dependency,
    catalogs: Option<&ProjectCatalogSnapshot>,
) -> BTreeMap<String, String> {
    let visible = match (catalogs, dependency.schema_name()) {
        (Some(catalogs), Some(schema_name)) => Some(catalogs.rules().visible_properties(schema_name)),
        _ => None,
    };

    dependency
        .properties()
        .iter()
        .filter(|(name, _)| {
            visible
                .as_ref()
                .map_or(true, |names| names.contains(&name.as_str()))
        })
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}
