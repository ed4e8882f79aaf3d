use super::{DependencyIconSet, DependencyTreeFlags};
use imbl::OrdMap;
use std::fmt;
use std::path::Path;

/// Evaluation metadata of an item, ordered by name
///
/// A persistent map: cloning shares the underlying tree.
pub type Properties = OrdMap<String, String>;

/// Metadata name controlling whether the dependency shows in the tree
pub const VISIBLE_PROPERTY: &str = "Visible";

/// Metadata name carrying a package or SDK version
pub const VERSION_PROPERTY: &str = "Version";

/// Fields every provider-specific model shares
///
/// Variant structs own one of these and hand it out through
/// [`DependencyModel::base`]; the trait's default methods read from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelBase {
    path: String,
    original_item_spec: String,
    caption: String,
    flags: DependencyTreeFlags,
    is_resolved: bool,
    is_implicit: bool,
    is_visible: bool,
    properties: Properties,
}

impl ModelBase {
    pub fn new(
        path: &str,
        original_item_spec: Option<&str>,
        flags: DependencyTreeFlags,
        is_resolved: bool,
        is_implicit: bool,
        properties: Properties,
    ) -> Self {
        let original_item_spec = original_item_spec
            .filter(|spec| !spec.is_empty())
            .unwrap_or(path)
            .to_string();
        let is_visible = properties
            .get(VISIBLE_PROPERTY)
            .map(|value| !value.trim().eq_ignore_ascii_case("false"))
            .unwrap_or(true);

        Self {
            path: path.to_string(),
            caption: original_item_spec.clone(),
            original_item_spec,
            flags,
            is_resolved,
            is_implicit,
            is_visible,
            properties,
        }
    }

    /// Overrides the default caption (the original item spec)
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn original_item_spec(&self) -> &str {
        &self.original_item_spec
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn flags(&self) -> DependencyTreeFlags {
        self.flags
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

    pub fn properties(&self) -> &Properties {
        &self.properties
    }
}

/// Capability interface over provider-specific dependency models
///
/// A model is an immutable description of one discovered dependency before
/// tree-presentation processing. Variants only decide identity-independent
/// presentation data: provider type, icon set and rule schema names.
pub trait DependencyModel: fmt::Debug + Send + Sync {
    fn base(&self) -> &ModelBase;

    /// Names the sub-tree provider that produced this model
    fn provider_type(&self) -> &str;

    fn icon_set(&self) -> DependencyIconSet;

    fn schema_name(&self) -> Option<&str>;

    fn schema_item_type(&self) -> Option<&str>;

    /// Identity within the provider: the original item spec, falling back to the path
    fn id(&self) -> &str {
        self.base().original_item_spec()
    }

    fn path(&self) -> &str {
        self.base().path()
    }

    fn original_item_spec(&self) -> &str {
        self.base().original_item_spec()
    }

    fn caption(&self) -> &str {
        self.base().caption()
    }

    fn flags(&self) -> DependencyTreeFlags {
        self.base().flags()
    }

    fn is_resolved(&self) -> bool {
        self.base().is_resolved()
    }

    fn is_implicit(&self) -> bool {
        self.base().is_implicit()
    }

    fn is_visible(&self) -> bool {
        self.base().is_visible()
    }

    fn properties(&self) -> &Properties {
        self.base().properties()
    }

    fn version(&self) -> Option<&str> {
        self.properties()
            .get(VERSION_PROPERTY)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

/// A removal notification: which provider's item disappeared
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RemovedDependency {
    provider_type: String,
    model_id: String,
}

impl RemovedDependency {
    pub fn new(provider_type: &str, model_id: &str) -> Self {
        Self {
            provider_type: provider_type.to_string(),
            model_id: model_id.to_string(),
        }
    }

    pub fn provider_type(&self) -> &str {
        &self.provider_type
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

/// File name without extension, as shown for project-like references
pub(crate) fn file_stem(path: &str) -> &str {
    let normalized = path.rsplit(['\\', '/']).next().unwrap_or(path);
    Path::new(normalized)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(normalized)
}

/// `"name (version)"`, or just the name when no version is known
pub(crate) fn caption_with_version(name: &str, version: Option<&str>) -> String {
    match version {
        Some(version) if !version.is_empty() => format!("{} ({})", name, version),
        _ => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn properties(pairs: &[(&str, &str)]) -> Properties {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_original_item_spec_falls_back_to_path() {
        let base = ModelBase::new(
            "c:\\proj\\Lib.csproj",
            None,
            DependencyTreeFlags::GENERIC_RESOLVED,
            true,
            false,
            Properties::new(),
        );
        assert_eq!(base.original_item_spec(), "c:\\proj\\Lib.csproj");
        assert_eq!(base.caption(), "c:\\proj\\Lib.csproj");

        let base = ModelBase::new("path", Some(""), DependencyTreeFlags::empty(), true, false, Properties::new());
        assert_eq!(base.original_item_spec(), "path");
    }

    #[test]
    fn test_visible_property() {
        let hidden = ModelBase::new(
            "a",
            None,
            DependencyTreeFlags::empty(),
            true,
            false,
            properties(&[("Visible", "False")]),
        );
        assert!(!hidden.is_visible());

        let shown = ModelBase::new("a", None, DependencyTreeFlags::empty(), true, false, Properties::new());
        assert!(shown.is_visible());
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem(r"..\Shared\Shared.shproj"), "Shared");
        assert_eq!(file_stem("../Lib/Lib.csproj"), "Lib");
        assert_eq!(file_stem("NoExtension"), "NoExtension");
    }

    #[test]
    fn test_caption_with_version() {
        assert_eq!(caption_with_version("Newtonsoft.Json", Some("13.0.3")), "Newtonsoft.Json (13.0.3)");
        assert_eq!(caption_with_version("Newtonsoft.Json", Some("")), "Newtonsoft.Json");
        assert_eq!(caption_with_version("Newtonsoft.Json", None), "Newtonsoft.Json");
    }
}
