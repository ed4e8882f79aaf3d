use super::{item_types, provider_types, schema_names};
use crate::dependency_tree::domain::dependency_model::caption_with_version;
use crate::dependency_tree::domain::{
    DependencyFlagCache, DependencyIconSet, DependencyModel, DependencyTreeFlags, ImageMoniker,
    ModelBase, Properties, VERSION_PROPERTY,
};

static FLAG_CACHE: DependencyFlagCache = DependencyFlagCache::new(
    DependencyTreeFlags::PACKAGE_DEPENDENCY,
    DependencyTreeFlags::empty(),
);

static ICON_SET: DependencyIconSet = DependencyIconSet::new(
    ImageMoniker::NuGetNoColor,
    ImageMoniker::NuGetNoColor,
    ImageMoniker::NuGetNoColorWarning,
    ImageMoniker::NuGetNoColorWarning,
);

static IMPLICIT_ICON_SET: DependencyIconSet = DependencyIconSet::new(
    ImageMoniker::NuGetNoColorPrivate,
    ImageMoniker::NuGetNoColorPrivate,
    ImageMoniker::NuGetNoColorWarning,
    ImageMoniker::NuGetNoColorWarning,
);

/// Package reference; the caption carries the version when one is known
#[derive(Debug, Clone)]
pub struct PackageDependencyModel {
    base: ModelBase,
}

impl PackageDependencyModel {
    pub fn new(
        path: &str,
        original_item_spec: Option<&str>,
        is_resolved: bool,
        is_implicit: bool,
        properties: Properties,
    ) -> Self {
        let caption = caption_with_version(
            original_item_spec.filter(|s| !s.is_empty()).unwrap_or(path),
            properties.get(VERSION_PROPERTY).map(String::as_str),
        );
        let base = ModelBase::new(
            path,
            original_item_spec,
            FLAG_CACHE.get(is_resolved, is_implicit),
            is_resolved,
            is_implicit,
            properties,
        )
        .with_caption(caption);

        Self { base }
    }
}

impl DependencyModel for PackageDependencyModel {
    fn base(&self) -> &ModelBase {
        &self.base
    }

    fn provider_type(&self) -> &str {
        provider_types::PACKAGE
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
            Some(schema_names::RESOLVED_PACKAGE_REFERENCE)
        } else {
            Some(schema_names::PACKAGE_REFERENCE)
        }
    }

    fn schema_item_type(&self) -> Option<&str> {
        Some(item_types::PACKAGE_REFERENCE)
    }
}
