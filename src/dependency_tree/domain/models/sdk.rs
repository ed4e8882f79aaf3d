use super::{item_types, provider_types, schema_names};
use crate::dependency_tree::domain::dependency_model::caption_with_version;
use crate::dependency_tree::domain::{
    DependencyFlagCache, DependencyIconSet, DependencyModel, DependencyTreeFlags, ImageMoniker,
    ModelBase, Properties, VERSION_PROPERTY,
};

static FLAG_CACHE: DependencyFlagCache = DependencyFlagCache::new(
    DependencyTreeFlags::SDK_DEPENDENCY,
    DependencyTreeFlags::SUPPORTS_REMOVE,
);

static ICON_SET: DependencyIconSet = DependencyIconSet::new(
    ImageMoniker::Sdk,
    ImageMoniker::Sdk,
    ImageMoniker::SdkWarning,
    ImageMoniker::SdkWarning,
);

static IMPLICIT_ICON_SET: DependencyIconSet = DependencyIconSet::new(
    ImageMoniker::SdkPrivate,
    ImageMoniker::SdkPrivate,
    ImageMoniker::SdkWarning,
    ImageMoniker::SdkWarning,
);

/// SDK reference
///
/// SDKs are delivered as packages: the snapshot filters resolve an SDK when a
/// resolved package of the same name is present. SDKs are never removable.
#[derive(Debug, Clone)]
pub struct SdkDependencyModel {
    base: ModelBase,
}

impl SdkDependencyModel {
    pub fn new(
        path: &str,
        original_item_spec: Option<&str>,
        is_resolved: bool,
        is_implicit: bool,
        properties: Properties,
    ) -> Self {
        let caption = caption_with_version(
            path.split(',').next().unwrap_or(path).trim(),
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

impl DependencyModel for SdkDependencyModel {
    fn base(&self) -> &ModelBase {
        &self.base
    }

    fn provider_type(&self) -> &str {
        provider_types::SDK
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
            Some(schema_names::RESOLVED_SDK_REFERENCE)
        } else {
            Some(schema_names::SDK_REFERENCE)
        }
    }

    fn schema_item_type(&self) -> Option<&str> {
        Some(item_types::SDK_REFERENCE)
    }
}
