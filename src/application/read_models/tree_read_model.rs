use super::dependency_node_view::DependencyNodeView;
use serde::Serialize;

/// Rendered form of a whole `DependenciesSnapshot`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyTreeReadModel {
    pub active_target_framework: String,
    pub has_visible_unresolved_dependency: bool,
    pub target_frameworks: Vec<TargetFrameworkView>,
}

impl DependencyTreeReadModel {
    pub fn target_framework(&self, name: &str) -> Option<&TargetFrameworkView> {
        self.target_frameworks.iter().find(|tfm| tfm.name == name)
    }

    pub fn dependency_count(&self) -> usize {
        self.target_frameworks
            .iter()
            .map(TargetFrameworkView::dependency_count)
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetFrameworkView {
    pub name: String,
    pub is_active: bool,
    pub has_unresolved_dependency: bool,
    pub groups: Vec<ProviderGroupView>,
}

impl TargetFrameworkView {
    pub fn group(&self, provider_type: &str) -> Option<&ProviderGroupView> {
        self.groups.iter().find(|g| g.provider_type == provider_type)
    }

    pub fn dependency_count(&self) -> usize {
        self.groups.iter().map(|g| g.dependencies.len()).sum()
    }
}

/// Top-level node of one provider ("Packages", "Projects", ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderGroupView {
    pub provider_type: String,
    pub caption: String,
    pub icon: String,
    pub dependencies: Vec<DependencyNodeView>,
}
