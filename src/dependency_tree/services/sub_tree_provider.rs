use crate::dependency_tree::domain::models::{
    provider_types, AnalyzerDependencyModel, AssemblyDependencyModel, PackageDependencyModel,
    ProjectDependencyModel, SdkDependencyModel, SharedProjectDependencyModel,
};
use crate::dependency_tree::domain::{DependencyModel, ImageMoniker, Properties};
use crate::shared::error::DependenciesError;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Builds a model from evaluation data: (path, original item spec, resolved, implicit, properties)
pub type ModelFactory =
    fn(&str, Option<&str>, bool, bool, Properties) -> Arc<dyn DependencyModel>;

/// One top-level group of the dependencies tree ("Packages", "Projects", ...)
///
/// Providers own the models for their provider type and describe how their
/// group node is displayed.
pub trait ProjectDependenciesSubTreeProvider: Send + Sync {
    fn provider_type(&self) -> &str;

    fn root_caption(&self) -> &str;

    fn root_icon(&self) -> ImageMoniker;

    /// Icon for dependencies brought in implicitly, if the provider distinguishes them
    fn implicit_icon(&self) -> Option<ImageMoniker>;

    fn create_model(
        &self,
        path: &str,
        original_item_spec: Option<&str>,
        is_resolved: bool,
        is_implicit: bool,
        properties: Properties,
    ) -> Arc<dyn DependencyModel>;
}

/// Provider whose behaviour is fully described by static data and a constructor
pub struct RuleBasedSubTreeProvider {
    provider_type: &'static str,
    root_caption: &'static str,
    root_icon: ImageMoniker,
    implicit_icon: Option<ImageMoniker>,
    factory: ModelFactory,
}

impl RuleBasedSubTreeProvider {
    pub const fn new(
        provider_type: &'static str,
        root_caption: &'static str,
        root_icon: ImageMoniker,
        implicit_icon: Option<ImageMoniker>,
        factory: ModelFactory,
    ) -> Self {
        Self {
            provider_type,
            root_caption,
            root_icon,
            implicit_icon,
            factory,
        }
    }
}

impl ProjectDependenciesSubTreeProvider for RuleBasedSubTreeProvider {
    fn provider_type(&self) -> &str {
        self.provider_type
    }

    fn root_caption(&self) -> &str {
        self.root_caption
    }

    fn root_icon(&self) -> ImageMoniker {
        self.root_icon
    }

    fn implicit_icon(&self) -> Option<ImageMoniker> {
        self.implicit_icon
    }

    fn create_model(
        &self,
        path: &str,
        original_item_spec: Option<&str>,
        is_resolved: bool,
        is_implicit: bool,
        properties: Properties,
    ) -> Arc<dyn DependencyModel> {
        (self.factory)(path, original_item_spec, is_resolved, is_implicit, properties)
    }
}

impl fmt::Debug for RuleBasedSubTreeProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleBasedSubTreeProvider")
            .field("provider_type", &self.provider_type)
            .field("root_caption", &self.root_caption)
            .finish()
    }
}

/// Shared projects arrive through the project provider; they are told apart by extension
fn project_model(
    path: &str,
    original_item_spec: Option<&str>,
    is_resolved: bool,
    is_implicit: bool,
    properties: Properties,
) -> Arc<dyn DependencyModel> {
    if path.to_ascii_lowercase().ends_with(".shproj") {
        Arc::new(SharedProjectDependencyModel::new(
            path,
            original_item_spec,
            is_resolved,
            is_implicit,
            properties,
        ))
    } else {
        Arc::new(ProjectDependencyModel::new(
            path,
            original_item_spec,
            is_resolved,
            is_implicit,
            properties,
        ))
    }
}

fn package_model(
    path: &str,
    original_item_spec: Option<&str>,
    is_resolved: bool,
    is_implicit: bool,
    properties: Properties,
) -> Arc<dyn DependencyModel> {
    Arc::new(PackageDependencyModel::new(
        path,
        original_item_spec,
        is_resolved,
        is_implicit,
        properties,
    ))
}

fn assembly_model(
    path: &str,
    original_item_spec: Option<&str>,
    is_resolved: bool,
    is_implicit: bool,
    properties: Properties,
) -> Arc<dyn DependencyModel> {
    Arc::new(AssemblyDependencyModel::new(
        path,
        original_item_spec,
        is_resolved,
        is_implicit,
        properties,
    ))
}

fn analyzer_model(
    path: &str,
    original_item_spec: Option<&str>,
    is_resolved: bool,
    is_implicit: bool,
    properties: Properties,
) -> Arc<dyn DependencyModel> {
    Arc::new(AnalyzerDependencyModel::new(
        path,
        original_item_spec,
        is_resolved,
        is_implicit,
        properties,
    ))
}

fn sdk_model(
    path: &str,
    original_item_spec: Option<&str>,
    is_resolved: bool,
    is_implicit: bool,
    properties: Properties,
) -> Arc<dyn DependencyModel> {
    Arc::new(SdkDependencyModel::new(
        path,
        original_item_spec,
        is_resolved,
        is_implicit,
        properties,
    ))
}

/// Sub-tree providers keyed by provider type
#[derive(Clone, Default)]
pub struct SubTreeProviderRegistry {
    providers: BTreeMap<String, Arc<dyn ProjectDependenciesSubTreeProvider>>,
}

impl SubTreeProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in providers, in tree order
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(RuleBasedSubTreeProvider::new(
            provider_types::ANALYZER,
            "Analyzers",
            ImageMoniker::CodeInformation,
            Some(ImageMoniker::CodeInformationPrivate),
            analyzer_model,
        )));
        registry.register(Arc::new(RuleBasedSubTreeProvider::new(
            provider_types::ASSEMBLY,
            "Assemblies",
            ImageMoniker::Reference,
            Some(ImageMoniker::ReferencePrivate),
            assembly_model,
        )));
        registry.register(Arc::new(RuleBasedSubTreeProvider::new(
            provider_types::SDK,
            "SDK",
            ImageMoniker::Sdk,
            Some(ImageMoniker::SdkPrivate),
            sdk_model,
        )));
        registry.register(Arc::new(RuleBasedSubTreeProvider::new(
            provider_types::PACKAGE,
            "Packages",
            ImageMoniker::NuGetNoColor,
            Some(ImageMoniker::NuGetNoColorPrivate),
            package_model,
        )));
        registry.register(Arc::new(RuleBasedSubTreeProvider::new(
            provider_types::PROJECT,
            "Projects",
            ImageMoniker::Application,
            Some(ImageMoniker::ApplicationPrivate),
            project_model,
        )));
        registry
    }

    /// Adds a provider, replacing any previous one with the same provider type
    pub fn register(&mut self, provider: Arc<dyn ProjectDependenciesSubTreeProvider>) {
        self.providers
            .insert(provider.provider_type().to_string(), provider);
    }

    pub fn get(&self, provider_type: &str) -> Option<&dyn ProjectDependenciesSubTreeProvider> {
        self.providers.get(provider_type).map(|p| p.as_ref())
    }

    pub fn provider_types(&self) -> impl Iterator<Item = &str> {
        self.providers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Creates a model through the provider registered for `provider_type`
    pub fn create_model(
        &self,
        provider_type: &str,
        path: &str,
        original_item_spec: Option<&str>,
        is_resolved: bool,
        is_implicit: bool,
        properties: Properties,
    ) -> Result<Arc<dyn DependencyModel>, DependenciesError> {
        let provider =
            self.get(provider_type)
                .ok_or_else(|| DependenciesError::UnknownProviderType {
                    provider_type: provider_type.to_string(),
                    known: self.provider_types().collect::<Vec<_>>().join(", "),
                })?;

        Ok(provider.create_model(path, original_item_spec, is_resolved, is_implicit, properties))
    }
}

impl fmt::Debug for SubTreeProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.providers.keys()).finish()
    }
}
