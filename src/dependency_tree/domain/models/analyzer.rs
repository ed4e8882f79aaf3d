use super::{item_types, provider_types, schema_names};
use crate::dependency_tree::domain::dependency_model::file_stem;
use crate::dependency_tree::domain::{
    DependencyFlagCache, DependencyIconSet, DependencyModel, DependencyTreeFlags, ImageMoniker,
    ModelBase, Properties,
};

static FLAG_CACHE: DependencyFlagCache = DependencyFlagCache::new(
    DependencyTreeFlags::ANALYZER_DEPENDENCY,
    DependencyTreeFlags::SUPPORTS_BROWSE,
);

static ICON_SET: DependencyIconSet = DependencyIconSet::new(
    ImageMoniker::CodeInformation,
    ImageMoniker::CodeInformation,
    ImageMoniker::CodeInformationWarning,
    ImageMoniker::CodeInformationWarning,
);

static IMPLICIT_ICON_SET: DependencyIconSet = DependencyIconSet::new(
    ImageMoniker::CodeInformationPrivate,
    ImageMoniker::CodeInformationPrivate,
    ImageMoniker::CodeInformationWarning,
    ImageMoniker::CodeInformationWarning,
);

/// Roslyn analyzer assembly
#[derive(Debug, Clone)]
pub struct AnalyzerDependencyModel {
    base: ModelBase,
}

impl AnalyzerDependencyModel {
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
            file_stem(base.original_item_spec()).to_string()
        };

        Self {
            base: base.with_caption(caption),
        }
    }
}

impl DependencyModel for AnalyzerDependencyModel {
    fn base(&self) -> &ModelBase {
        &self.base
    }

    fn provider_type(&self) -> &str {
        provider_types::ANALYZER
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
            Some(schema_names::RESOLVED_ANALYZER_REFERENCE)
        } else {
            Some(schema_names::ANALYZER_REFERENCE)
        }
    }

    fn schema_item_type(&self) -> Option<&str> {
        Some(item_types::ANALYZER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyzer() {
        let model = AnalyzerDependencyModel::new(
            "/nuget/xunit.analyzers/analyzers/xunit.analyzers.dll",
            None,
            true,
            true,
            Properties::new(),
        );

        assert_eq!(model.caption(), "xunit.analyzers");
        assert_eq!(model.schema_name(), Some("ResolvedAnalyzerReference"));
        assert_eq!(model.icon_set().icon, ImageMoniker::CodeInformationPrivate);
        assert!(!model.flags().contains(DependencyTreeFlags::SUPPORTS_BROWSE));
    }

    #[test]
    fn test_unresolved_analyzer() {
        let model = AnalyzerDependencyModel::new("", Some("Analyzers/Foo.dll"), false, false, Properties::new());
        assert_eq!(model.caption(), "Foo");
        assert_eq!(model.schema_name(), Some("AnalyzerReference"));
    }
}
