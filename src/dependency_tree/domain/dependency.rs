use super::{
    DependencyIconSet, DependencyId, DependencyModel, DependencyTreeFlags, ImageMoniker,
    Properties, TargetFramework,
};
use std::sync::Arc;

/// A dependency as it appears in a targeted snapshot
///
/// Created from a [`DependencyModel`] for one target framework, then possibly
/// transformed by the snapshot filters. Every transform returns a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    id: DependencyId,
    caption: Arc<str>,
    model_caption: Arc<str>,
    alias: Arc<str>,
    original_item_spec: Arc<str>,
    path: Arc<str>,
    schema_name: Option<Arc<str>>,
    schema_item_type: Option<Arc<str>>,
    version: Option<Arc<str>>,
    is_resolved: bool,
    is_implicit: bool,
    is_visible: bool,
    icon_set: DependencyIconSet,
    flags: DependencyTreeFlags,
    properties: Properties,
}

impl Dependency {
    pub fn new(model: &dyn DependencyModel, target_framework: &TargetFramework) -> Self {
        Self {
            id: DependencyId::new(target_framework, model.provider_type(), model.id()),
            caption: Arc::from(model.caption()),
            model_caption: Arc::from(model.caption()),
            alias: Arc::from(alias_of(model)),
            original_item_spec: Arc::from(model.original_item_spec()),
            path: Arc::from(model.path()),
            schema_name: model.schema_name().map(Arc::from),
            schema_item_type: model.schema_item_type().map(Arc::from),
            version: model.version().map(Arc::from),
            is_resolved: model.is_resolved(),
            is_implicit: model.is_implicit(),
            is_visible: model.is_visible(),
            icon_set: model.icon_set(),
            flags: model.flags(),
            properties: model.properties().clone(),
        }
    }

    pub fn id(&self) -> &DependencyId {
        &self.id
    }

    pub fn provider_type(&self) -> &str {
        self.id.provider_type()
    }

    /// Identity of the underlying item within its provider
    pub fn model_id(&self) -> &str {
        self.id.model_id()
    }

    pub fn target_framework(&self) -> &TargetFramework {
        self.id.target_framework()
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Caption the model was created with, before any filter renamed it
    pub fn model_caption(&self) -> &str {
        &self.model_caption
    }

    pub fn original_item_spec(&self) -> &str {
        &self.original_item_spec
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn schema_name(&self) -> Option<&str> {
        self.schema_name.as_deref()
    }

    pub fn schema_item_type(&self) -> Option<&str> {
        self.schema_item_type.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn is_resolved(&self) -> bool {
        self.is_resolved
    }

    pub fn is_implicit(&self) -> bool {
        self.is_implicit
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    pub fn icon_set(&self) -> DependencyIconSet {
        self.icon_set
    }

    pub fn flags(&self) -> DependencyTreeFlags {
        self.flags
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Image for the collapsed node in the current resolution state
    pub fn icon(&self) -> ImageMoniker {
        self.icon_set.icon_for(self.is_resolved)
    }

    pub fn expanded_icon(&self) -> ImageMoniker {
        self.icon_set.expanded_icon_for(self.is_resolved)
    }

    /// `"Caption (ItemSpec)"`, fixed at creation; used to tell apart equal captions
    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn with_caption(mut self, caption: &str) -> Self {
        self.caption = Arc::from(caption);
        self
    }

    pub fn with_icon_set(mut self, icon_set: DependencyIconSet) -> Self {
        self.icon_set = icon_set;
        self
    }

    pub fn with_flags(mut self, flags: DependencyTreeFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Marks the dependency implicit; implicit dependencies cannot be removed
    pub fn with_implicit(mut self) -> Self {
        self.is_implicit = true;
        self.flags.remove(DependencyTreeFlags::SUPPORTS_REMOVE);
        self
    }

    pub fn to_resolved(mut self, schema_name: &str) -> Self {
        self.is_resolved = true;
        self.flags = self.flags.with_resolution(true);
        self.schema_name = Some(Arc::from(schema_name));
        self
    }

    pub fn to_unresolved(mut self, schema_name: &str) -> Self {
        self.is_resolved = false;
        self.flags = self.flags.with_resolution(false);
        self.schema_name = Some(Arc::from(schema_name));
        self
    }
}

fn alias_of(model: &dyn DependencyModel) -> String {
    let caption = model.caption();
    let spec = if model.original_item_spec().is_empty() {
        model.path()
    } else {
        model.original_item_spec()
    };

    if spec.is_empty() || spec == caption {
        caption.to_string()
    } else {
        format!("{} ({})", caption, spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_tree::domain::models::{PackageDependencyModel, SdkDependencyModel};

    fn package(name: &str, version: &str, resolved: bool) -> Dependency {
        let mut properties = Properties::new();
        properties.insert("Version".to_string(), version.to_string());
        let model = PackageDependencyModel::new(name, None, resolved, false, properties);
        Dependency::new(&model, &TargetFramework::new("net8.0"))
    }

    #[test]
    fn test_new_copies_model() {
        let dependency = package("Newtonsoft.Json", "13.0.3", true);

        assert_eq!(dependency.id().as_str(), r"net8.0\NuGetDependency\Newtonsoft.Json");
        assert_eq!(dependency.provider_type(), "NuGetDependency");
        assert_eq!(dependency.model_id(), "Newtonsoft.Json");
        assert_eq!(dependency.caption(), "Newtonsoft.Json (13.0.3)");
        assert_eq!(dependency.version(), Some("13.0.3"));
        assert_eq!(dependency.icon(), ImageMoniker::NuGetNoColor);
        assert!(dependency.is_visible());
    }

    #[test]
    fn test_icon_follows_resolution() {
        let dependency = package("Serilog", "3.1.0", false);
        assert_eq!(dependency.icon(), ImageMoniker::NuGetNoColorWarning);
        assert_eq!(dependency.expanded_icon(), ImageMoniker::NuGetNoColorWarning);
    }

    #[test]
    fn test_alias() {
        let dependency = package("Serilog", "3.1.0", true);
        assert_eq!(dependency.alias(), "Serilog (3.1.0) (Serilog)");

        let renamed = dependency.clone().with_caption("Logging");
        assert_eq!(renamed.caption(), "Logging");
        assert_eq!(renamed.model_caption(), "Serilog (3.1.0)");
        assert_eq!(renamed.alias(), "Serilog (3.1.0) (Serilog)");

        let model = PackageDependencyModel::new("Serilog", None, true, false, Properties::new());
        let plain = Dependency::new(&model, &TargetFramework::new("net8.0"));
        assert_eq!(plain.alias(), "Serilog");
    }

    #[test]
    fn test_to_resolved_and_back() {
        let model = SdkDependencyModel::new("Contoso.Sdk", None, false, false, Properties::new());
        let sdk = Dependency::new(&model, &TargetFramework::new("net8.0"));

        let resolved = sdk.clone().to_resolved("ResolvedSdkReference");
        assert!(resolved.is_resolved());
        assert!(resolved.flags().contains(DependencyTreeFlags::RESOLVED));
        assert_eq!(resolved.schema_name(), Some("ResolvedSdkReference"));
        assert_eq!(resolved.icon(), ImageMoniker::Sdk);

        let unresolved = resolved.to_unresolved("SdkReference");
        assert_eq!(unresolved, sdk);
    }

    #[test]
    fn test_with_implicit() {
        let dependency = package("Serilog", "3.1.0", true).with_implicit();
        assert!(dependency.is_implicit());
        assert!(!dependency.flags().contains(DependencyTreeFlags::SUPPORTS_REMOVE));
    }
}
