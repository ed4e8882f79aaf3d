use super::{item_types, provider_types, schema_names};
use crate::dependency_tree::domain::dependency_model::file_stem;
use crate::dependency_tree::domain::{
    DependencyFlagCache, DependencyIconSet, DependencyModel, DependencyTreeFlags, ImageMoniker,
    ModelBase, Properties,
};

static FLAG_CACHE: DependencyFlagCache = DependencyFlagCache::new(
    DependencyTreeFlags::ASSEMBLY_DEPENDENCY,
    DependencyTreeFlags::empty(),
);

static ICON_SET: DependencyIconSet = DependencyIconSet::new(
    ImageMoniker::Reference,
    ImageMoniker::Reference,
    ImageMoniker::ReferenceWarning,
    ImageMoniker::ReferenceWarning,
);

static IMPLICIT_ICON_SET: DependencyIconSet = DependencyIconSet::new(
    ImageMoniker::ReferencePrivate,
    ImageMoniker::ReferencePrivate,
    ImageMoniker::ReferenceWarning,
    ImageMoniker::ReferenceWarning,
);

/// Plain assembly reference
///
/// Resolved assemblies are captioned by file name; unresolved ones keep the
/// item spec the user wrote, which may be a full assembly name.
#[derive(Debug, Clone)]
pub struct AssemblyDependencyModel {
    base: ModelBase,
}

impl AssemblyDependencyModel {
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
        );
        let caption = if is_resolved {
            file_stem(path).to_string()
        } else {
            base.original_item_spec().to_string()
        };

        Self {
            base: base.with_caption(caption),
        }
    }
}

impl DependencyModel for AssemblyDependencyModel {
    fn base(&self) -> &ModelBase {
        &self.base
    }

    fn provider_type(&self) -> &str {
        provider_types::ASSEMBLY
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
            Some(schema_names::RESOLVED_ASSEMBLY_REFERENCE)
        } else {
            Some(schema_names::ASSEMBLY_REFERENCE)
        }
    }

    fn schema_item_type(&self) -> Option<&str> {
        Some(item_types::REFERENCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_caption_is_file_stem() {
        let model = AssemblyDependencyModel::new(
            r"c:\refs\System.Xml.dll",
            Some("System.Xml"),
            true,
            false,
            Properties::new(),
        );

        assert_eq!(model.id(), "System.Xml");
        assert_eq!(model.caption(), "System.Xml");
        assert_eq!(model.schema_name(), Some("ResolvedAssemblyReference"));
        assert_eq!(model.schema_item_type(), Some("Reference"));
    }

    #[test]
    fn test_unresolved_caption_is_item_spec() {
        let model = AssemblyDependencyModel::new(
            "",
            Some("Contoso, Version=1.0.0.0"),
            false,
            false,
            Properties::new(),
        );

        assert_eq!(model.caption(), "Contoso, Version=1.0.0.0");
        assert!(model.flags().contains(DependencyTreeFlags::ASSEMBLY_DEPENDENCY));
        assert!(model.flags().contains(DependencyTreeFlags::UNRESOLVED));
    }
}
