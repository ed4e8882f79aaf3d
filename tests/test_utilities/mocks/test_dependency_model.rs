use deptree::dependency_tree::domain::{DependencyIconSet, ImageMoniker, ModelBase};
use deptree::prelude::*;
use std::sync::Arc;

const ICONS: DependencyIconSet = DependencyIconSet::new(
    ImageMoniker::Reference,
    ImageMoniker::Reference,
    ImageMoniker::ReferenceWarning,
    ImageMoniker::ReferenceWarning,
);

/// Dependency model with a free-form provider type
///
/// Lets tests drive the snapshot engine without going through a registered provider.
#[derive(Debug, Clone)]
pub struct TestDependencyModel {
    base: ModelBase,
    provider_type: String,
}

impl TestDependencyModel {
    pub fn new(provider_type: &str, id: &str, resolved: bool) -> Self {
        let flags = if resolved {
            DependencyTreeFlags::GENERIC_RESOLVED
        } else {
            DependencyTreeFlags::GENERIC_UNRESOLVED
        };

        Self {
            base: ModelBase::new(id, None, flags, resolved, false, Properties::new()),
            provider_type: provider_type.to_string(),
        }
    }

    pub fn shared(provider_type: &str, id: &str, resolved: bool) -> Arc<dyn DependencyModel> {
        Arc::new(Self::new(provider_type, id, resolved))
    }
}

impl DependencyModel for TestDependencyModel {
    fn base(&self) -> &ModelBase {
        &self.base
    }

    fn provider_type(&self) -> &str {
        &self.provider_type
    }

    fn icon_set(&self) -> DependencyIconSet {
        ICONS
    }

    fn schema_name(&self) -> Option<&str> {
        None
    }

    fn schema_item_type(&self) -> Option<&str> {
        None
    }
}
