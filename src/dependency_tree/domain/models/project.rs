use super::{item_types, provider_types, schema_names};
use crate::dependency_tree::domain::dependency_model::file_stem;
use crate::dependency_tree::domain::{
    DependencyFlagCache, DependencyIconSet, DependencyModel, DependencyTreeFlags, ImageMoniker,
    ModelBase, Properties,
};

static FLAG_CACHE: DependencyFlagCache = DependencyFlagCache::new(
    DependencyTreeFlags::PROJECT_DEPENDENCY,
    DependencyTreeFlags::empty(),
);

static ICON_SET: DependencyIconSet = DependencyIconSet::new(
    ImageMoniker::Application,
    ImageMoniker::Application,
    ImageMoniker::ApplicationWarning,
    ImageMoniker::ApplicationWarning,
);

static IMPLICIT_ICON_SET: DependencyIconSet = DependencyIconSet::new(
    ImageMoniker::ApplicationPrivate,
    ImageMoniker::ApplicationPrivate,
    ImageMoniker::ApplicationWarning,
    ImageMoniker::ApplicationWarning,
);

/// Reference to another buildable project
#[derive(Debug, Clone)]
pub struct ProjectDependencyModel {
    base: ModelBase,
}

impl ProjectDependencyModel {
    pub fn new(
        path: &str,
        original_item_spec: Option<&str>,
        is_resolved: bool,
        is_implicit: bool,
        properties: Properties,
    ) -> Self {
        let base = ModelBase::new(
            path,
            original_item_spec,
            FLAG_CACHE.get(is_resolved, is_implicit),
            is_resolved,
            is_implicit,
            properties,
        )
        .with_caption(file_stem(path));

        Self { base }
    }
}

impl DependencyModel for ProjectDependencyModel {
    fn base(&self) -> &ModelBase {
        &self.base
    }

    fn provider_type(&self) -> &str {
        provider_types::PROJECT
    }

    fn icon_set(&self) -> DependencyIconSet {
        if self.is_implicit() {
            IMPLICIT_ICON_SET
        } else {
            ICON_SET
        }
    }

    fn schema_name(&self) -> Option<&str> {
        if self.is_resolved() {
            Some(schema_names::RESOLVED_PROJECT_REFERENCE)
        } else {
            Some(schema_names::PROJECT_REFERENCE)
        }
    }

    fn schema_item_type(&self) -> Option<&str> {
        Some(item_types::PROJECT_REFERENCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_project() {
        let model = ProjectDependencyModel::new(
            "../Lib/Lib.csproj",
            None,
            true,
            false,
            Properties::new(),
        );

        assert_eq!(model.id(), "../Lib/Lib.csproj");
        assert_eq!(model.caption(), "Lib");
        assert_eq!(model.schema_name(), Some("ResolvedProjectReference"));
        assert!(model.flags().contains(DependencyTreeFlags::PROJECT_DEPENDENCY));
        assert!(model.flags().contains(DependencyTreeFlags::SUPPORTS_RULE_PROPERTIES));
        assert!(!model.flags().contains(DependencyTreeFlags::SHARED_PROJECT_DEPENDENCY));
        assert_eq!(model.icon_set().icon, ImageMoniker::Application);
    }

    #[test]
    fn test_implicit_unresolved_project() {
        let model = ProjectDependencyModel::new("Lib.csproj", None, false, true, Properties::new());

        assert_eq!(model.schema_name(), Some("ProjectReference"));
        assert_eq!(model.icon_set(), IMPLICIT_ICON_SET);
        assert!(!model.flags().contains(DependencyTreeFlags::SUPPORTS_REMOVE));
    }
}
