use crate::dependency_tree::domain::{PropertyKind, RuleCatalog, RuleSchema};
use std::collections::BTreeMap;
use std::fmt;

const RESOLVED_PREFIX: &str = "Resolved";
const DISPLAY_NAME_SUFFIX: &str = " Reference";
const DESCRIPTION_SUFFIX: &str = " Reference Properties";

/// One broken consistency rule in a rule catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleViolation {
    pub rule: String,
    pub message: String,
}

impl RuleViolation {
    fn new(rule: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.rule, self.message)
    }
}

/// Checks that dependency rule schemas fit what the tree and properties pane expect
///
/// Resolved rules read design-time build data but must write edits back to
/// the project file; both forms of a rule must look the same to the user.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleValidator;

impl RuleValidator {
    pub fn validate(&self, catalog: &RuleCatalog) -> Vec<RuleViolation> {
        let mut violations = Vec::new();

        for rule in catalog.rules() {
            check_common(rule, &mut violations);
            if rule.is_resolved() {
                check_resolved(rule, &mut violations);
            } else {
                check_unresolved(rule, &mut violations);
                match catalog.rule(&format!("{}{}", RESOLVED_PREFIX, rule.name)) {
                    Some(resolved) => check_pair(rule, resolved, &mut violations),
                    None => violations.push(RuleViolation::new(
                        &rule.name,
                        format!("has no resolved counterpart {}{}", RESOLVED_PREFIX, rule.name),
                    )),
                }
            }
        }

        violations
    }
}

/// Requires a hidden, read-only property of the given name and kind
fn check_hidden_property(rule: &RuleSchema, name: &str, kind: PropertyKind, violations: &mut Vec<RuleViolation>) {
    match rule.property(name) {
        Some(property) if property.kind == kind && !property.visible && property.read_only => {}
        Some(_) => violations.push(RuleViolation::new(
            &rule.name,
            format!("property {} must be a hidden, read-only {:?} property", name, kind),
        )),
        None => violations.push(RuleViolation::new(
            &rule.name,
            format!("missing hidden property {}", name),
        )),
    }
}

fn check_common(rule: &RuleSchema, violations: &mut Vec<RuleViolation>) {
    check_hidden_property(rule, "Visible", PropertyKind::Bool, violations);
    check_hidden_property(rule, "IsImplicitlyDefined", PropertyKind::String, violations);

    if !rule.description.ends_with(DESCRIPTION_SUFFIX) {
        violations.push(RuleViolation::new(
            &rule.name,
            format!("description must end with '{}'", DESCRIPTION_SUFFIX),
        ));
    }
    if !rule.display_name.ends_with(DISPLAY_NAME_SUFFIX) {
        violations.push(RuleViolation::new(
            &rule.name,
            format!("display name must end with '{}'", DISPLAY_NAME_SUFFIX),
        ));
    }
}

fn check_resolved(rule: &RuleSchema, violations: &mut Vec<RuleViolation>) {
    check_hidden_property(rule, "OriginalItemSpec", PropertyKind::String, violations);

    let Some(item_type) = rule.data_source_item_type.as_deref() else {
        violations.push(RuleViolation::new(&rule.name, "resolved rule has no data source item type"));
        return;
    };

    for property in rule.properties.iter().filter(|p| p.is_editable()) {
        let Some(data_source) = property.data_source.as_ref() else {
            violations.push(RuleViolation::new(
                &rule.name,
                format!("visible, non-readonly property {} has no data source", property.name),
            ));
            continue;
        };

        let valid = !data_source.has_configuration_condition
            && data_source.persistence == "ProjectFile"
            && data_source.source_of_default_value.as_deref() == Some("AfterContext")
            && data_source.item_type.as_deref() == Some(item_type);
        if !valid {
            violations.push(RuleViolation::new(
                &rule.name,
                format!(
                    "property {} must persist to the project file as {} metadata",
                    property.name, item_type
                ),
            ));
        }
    }
}

fn check_unresolved(rule: &RuleSchema, violations: &mut Vec<RuleViolation>) {
    if rule.property("OriginalItemSpec").is_some() {
        violations.push(RuleViolation::new(
            &rule.name,
            "unresolved rule must not declare OriginalItemSpec",
        ));
    }
}

fn check_pair(unresolved: &RuleSchema, resolved: &RuleSchema, violations: &mut Vec<RuleViolation>) {
    if unresolved.display_name != resolved.display_name {
        violations.push(RuleViolation::new(
            &resolved.name,
            format!("display name differs from {}", unresolved.name),
        ));
    }
    if unresolved.description != resolved.description {
        violations.push(RuleViolation::new(
            &resolved.name,
            format!("description differs from {}", unresolved.name),
        ));
    }

    let unresolved_visible: BTreeMap<_, _> = unresolved
        .visible_properties()
        .map(|p| (p.name.as_str(), p))
        .collect();
    let resolved_visible: BTreeMap<_, _> = resolved
        .visible_properties()
        .map(|p| (p.name.as_str(), p))
        .collect();

    for name in resolved_visible.keys().filter(|n| !unresolved_visible.contains_key(*n)) {
        violations.push(RuleViolation::new(
            &unresolved.name,
            format!("resolved property {} not found in unresolved rule", name),
        ));
    }
    for name in unresolved_visible.keys().filter(|n| !resolved_visible.contains_key(*n)) {
        violations.push(RuleViolation::new(
            &resolved.name,
            format!("unresolved property {} not found in resolved rule", name),
        ));
    }

    for (name, resolved_property) in &resolved_visible {
        let Some(unresolved_property) = unresolved_visible.get(name) else {
            continue;
        };
        if resolved_property.display_name != unresolved_property.display_name
            || resolved_property.description != unresolved_property.description
            || resolved_property.read_only != unresolved_property.read_only
        {
            violations.push(RuleViolation::new(
                &resolved.name,
                format!("property {} differs between unresolved and resolved rules", name),
            ));
        }
    }
}
