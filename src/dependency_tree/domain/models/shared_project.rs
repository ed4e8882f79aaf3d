use super::{item_types, provider_types, schema_names};
use crate::dependency_tree::domain::dependency_model::file_stem;
use crate::dependency_tree::domain::{
    DependencyFlagCache, DependencyIconSet, DependencyModel, DependencyTreeFlags, ImageMoniker,
    ModelBase, Properties,
};

static FLAG_CACHE: DependencyFlagCache = DependencyFlagCache::new(
    DependencyTreeFlags::PROJECT_DEPENDENCY.union(DependencyTreeFlags::SHARED_PROJECT_DEPENDENCY),
    DependencyTreeFlags::SUPPORTS_RULE_PROPERTIES,
);

static ICON_SET: DependencyIconSet = DependencyIconSet::new(
    ImageMoniker::SharedProject,
    ImageMoniker::SharedProject,
    ImageMoniker::SharedProjectWarning,
    ImageMoniker::SharedProjectWarning,
);

static IMPLICIT_ICON_SET: DependencyIconSet = DependencyIconSet::new(
    ImageMoniker::SharedProjectPrivate,
    ImageMoniker::SharedProjectPrivate,
    ImageMoniker::SharedProjectWarning,
    ImageMoniker::SharedProjectWarning,
);

/// Reference to a shared (`.shproj`) project
///
/// Shared projects are listed under the project provider but carry no rule
/// properties of their own.
#[derive(Debug, Clone)]
pub struct SharedProjectDependencyModel {
    base: ModelBase,
}

impl SharedProjectDependencyModel {
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

impl DependencyModel for SharedProjectDependencyModel {
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
