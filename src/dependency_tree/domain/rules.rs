//! Query surface of the dependency rule schemas
//!
//! Each dependency kind has an unresolved rule (evaluation data) and a
//! resolved rule (design-time build data). The rules describe which
//! properties a dependency exposes and where edits are persisted.

use super::models::{item_types, schema_names};
use std::collections::BTreeMap;

/// Kind of value a rule property holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    String,
    Bool,
    Enum,
}

/// Where a property's value is stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSource {
    pub persistence: String,
    pub item_type: Option<String>,
    pub has_configuration_condition: bool,
    pub source_of_default_value: Option<String>,
}

impl DataSource {
    /// Project-file storage for an item's metadata, as editable resolved properties require
    pub fn project_file(item_type: &str) -> Self {
        Self {
            persistence: "ProjectFile".to_string(),
            item_type: Some(item_type.to_string()),
            has_configuration_condition: false,
            source_of_default_value: Some("AfterContext".to_string()),
        }
    }

    /// Read-only data produced by the design-time build
    pub fn resolved_reference(item_type: &str) -> Self {
        Self {
            persistence: "ResolvedReference".to_string(),
            item_type: Some(item_type.to_string()),
            has_configuration_condition: false,
            source_of_default_value: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySchema {
    pub name: String,
    pub kind: PropertyKind,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub visible: bool,
    pub read_only: bool,
    pub data_source: Option<DataSource>,
}

impl PropertySchema {
    pub fn new(name: &str, kind: PropertyKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            display_name: None,
            description: None,
            visible: true,
            read_only: false,
            data_source: None,
        }
    }

    /// A property the tree reads but never shows or edits
    pub fn hidden(name: &str, kind: PropertyKind) -> Self {
        Self {
            visible: false,
            read_only: true,
            ..Self::new(name, kind)
        }
    }

    pub fn displayed(mut self, display_name: &str, description: &str) -> Self {
        self.display_name = Some(display_name.to_string());
        self.description = Some(description.to_string());
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn with_data_source(mut self, data_source: DataSource) -> Self {
        self.data_source = Some(data_source);
        self
    }

    /// Visible and editable: the properties pane writes this back
    pub fn is_editable(&self) -> bool {
        self.visible && !self.read_only
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSchema {
    pub name: String,
    pub display_name: String,
    pub description: String,
    /// Item type of the rule-level data source
    pub data_source_item_type: Option<String>,
    pub properties: Vec<PropertySchema>,
}

impl RuleSchema {
    /// Resolved rules are named `Resolved{UnresolvedName}`
    pub fn is_resolved(&self) -> bool {
        self.name.contains("Resolved")
    }

    pub fn property(&self, name: &str) -> Option<&PropertySchema> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn visible_properties(&self) -> impl Iterator<Item = &PropertySchema> {
        self.properties.iter().filter(|p| p.visible)
    }
}

/// All dependency rule schemas, keyed by rule name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleCatalog {
    rules: BTreeMap<String, RuleSchema>,
}

impl RuleCatalog {
    pub fn new(rules: impl IntoIterator<Item = RuleSchema>) -> Self {
        Self {
            rules: rules.into_iter().map(|r| (r.name.clone(), r)).collect(),
        }
    }

    /// The resolved/unresolved rule pairs for every built-in dependency kind
    pub fn builtin() -> Self {
        Self::new([
            unresolved_rule(schema_names::PROJECT_REFERENCE, "Project", item_types::PROJECT_REFERENCE, &[]),
            resolved_rule(schema_names::RESOLVED_PROJECT_REFERENCE, "Project", item_types::PROJECT_REFERENCE, &[]),
            unresolved_rule(schema_names::PACKAGE_REFERENCE, "Package", item_types::PACKAGE_REFERENCE, &["Version"]),
            resolved_rule(schema_names::RESOLVED_PACKAGE_REFERENCE, "Package", item_types::PACKAGE_REFERENCE, &["Version"]),
            unresolved_rule(schema_names::ASSEMBLY_REFERENCE, "Assembly", item_types::REFERENCE, &["HintPath"]),
            resolved_rule(schema_names::RESOLVED_ASSEMBLY_REFERENCE, "Assembly", item_types::REFERENCE, &["HintPath"]),
            unresolved_rule(schema_names::ANALYZER_REFERENCE, "Analyzer", item_types::ANALYZER, &[]),
            resolved_rule(schema_names::RESOLVED_ANALYZER_REFERENCE, "Analyzer", item_types::ANALYZER, &[]),
            unresolved_rule(schema_names::SDK_REFERENCE, "SDK", item_types::SDK_REFERENCE, &["Version"]),
            resolved_rule(schema_names::RESOLVED_SDK_REFERENCE, "SDK", item_types::SDK_REFERENCE, &["Version"]),
        ])
    }

    pub fn rule(&self, name: &str) -> Option<&RuleSchema> {
        self.rules.get(name)
    }

    pub fn rules(&self) -> impl Iterator<Item = &RuleSchema> {
        self.rules.values()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Names of the properties a schema shows in the properties pane
    pub fn visible_properties(&self, schema_name: &str) -> Vec<&str> {
        self.rule(schema_name)
            .map(|rule| rule.visible_properties().map(|p| p.name.as_str()).collect())
            .unwrap_or_default()
    }
}

/// Properties every dependency rule carries, hidden from the user
fn common_hidden_properties() -> Vec<PropertySchema> {
    vec![
        PropertySchema::hidden("Visible", PropertyKind::Bool),
        PropertySchema::hidden("IsImplicitlyDefined", PropertyKind::String),
    ]
}

fn unresolved_rule(name: &str, kind: &str, item_type: &str, editable: &[&str]) -> RuleSchema {
    let mut properties = common_hidden_properties();
    properties.push(
        PropertySchema::new("Identity", PropertyKind::String)
            .displayed("Identity", "Security-sensitive identity of the reference.")
            .read_only(),
    );
    for property in editable {
        properties.push(
            PropertySchema::new(property, PropertyKind::String)
                .displayed(property, &format!("{} of the referenced {}.", property, kind.to_lowercase())),
        );
    }

    RuleSchema {
        name: name.to_string(),
        display_name: format!("{} Reference", kind),
        description: format!("{} Reference Properties", kind),
        data_source_item_type: Some(item_type.to_string()),
        properties,
    }
}

fn resolved_rule(name: &str, kind: &str, item_type: &str, editable: &[&str]) -> RuleSchema {
    let mut properties = common_hidden_properties();
    properties.push(PropertySchema::hidden("OriginalItemSpec", PropertyKind::String));
    properties.push(
        PropertySchema::new("Identity", PropertyKind::String)
            .displayed("Identity", "Security-sensitive identity of the reference.")
            .read_only()
            .with_data_source(DataSource::resolved_reference(item_type)),
    );
    for property in editable {
        properties.push(
            PropertySchema::new(property, PropertyKind::String)
                .displayed(property, &format!("{} of the referenced {}.", property, kind.to_lowercase()))
                .with_data_source(DataSource::project_file(item_type)),
        );
    }

    RuleSchema {
        name: name.to_string(),
        display_name: format!("{} Reference", kind),
        description: format!("{} Reference Properties", kind),
        data_source_item_type: Some(item_type.to_string()),
        properties,
    }
}
