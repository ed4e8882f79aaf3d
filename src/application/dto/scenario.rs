//! Scenario documents replayed by the CLI
//!
//! A scenario lists the project's target frameworks and a sequence of
//! evaluation change batches, each one aimed at a single framework. The
//! same structure is read from YAML and TOML.

use crate::dependency_tree::domain::TargetFramework;
use crate::shared::error::ReplayError;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub target_frameworks: Vec<String>,
    /// Defaults to the first target framework
    #[serde(default)]
    pub active_target_framework: Option<String>,
    /// Item specs declared in the project file; enables implicit detection when present
    #[serde(default)]
    pub project_item_specs: Option<Vec<String>>,
    #[serde(default)]
    pub steps: Vec<ScenarioStep>,
}

/// One batch of changes for one target framework
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioStep {
    pub target_framework: String,
    #[serde(default)]
    pub added: Vec<AddedDependency>,
    #[serde(default)]
    pub removed: Vec<RemovedEntry>,
    /// Replaces the catalogs with a fresh instance before merging
    #[serde(default)]
    pub refresh_catalogs: bool,
    /// Replaces the project's target frameworks from this step on
    #[serde(default)]
    pub target_frameworks: Option<Vec<String>>,
    /// Replaces the active target framework from this step on
    #[serde(default)]
    pub active_target_framework: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddedDependency {
    pub provider_type: String,
    pub path: String,
    #[serde(default)]
    pub original_item_spec: Option<String>,
    #[serde(default)]
    pub resolved: bool,
    #[serde(default)]
    pub implicit: bool,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemovedEntry {
    pub provider_type: String,
    /// Model id: the original item spec, or the path when there is none
    pub id: String,
}

fn parse_frameworks(names: &[String]) -> Vec<TargetFramework> {
    names.iter().map(|name| TargetFramework::new(name)).collect()
}

fn invalid(reason: String, hint: &str) -> ReplayError {
    ReplayError::InvalidScenario {
        reason,
        hint: hint.to_string(),
    }
}

fn check_active(
    active: &TargetFramework,
    frameworks: &[TargetFramework],
    location: &str,
) -> Result<(), ReplayError> {
    if active.is_empty_or_unsupported() || frameworks.contains(active) {
        return Ok(());
    }
    Err(invalid(
        format!(
            "{}: active target framework '{}' is not one of the target frameworks",
            location, active
        ),
        "List the active target framework under target_frameworks",
    ))
}

impl Scenario {
    pub fn target_frameworks(&self) -> Vec<TargetFramework> {
        parse_frameworks(&self.target_frameworks)
    }

    /// The declared active framework, else the first target framework
    pub fn initial_active_target_framework(&self) -> TargetFramework {
        match &self.active_target_framework {
            Some(name) => TargetFramework::new(name),
            None => self.target_frameworks().into_iter().next().unwrap_or_default(),
        }
    }

    /// Checks the scenario against the target framework set each step will see
    ///
    /// A step aimed at a framework outside the current set would be dropped
    /// again by the target framework reconciliation, so it is rejected here.
    pub fn validate(&self) -> Result<(), ReplayError> {
        let mut frameworks = self.target_frameworks();
        if frameworks.is_empty() {
            return Err(invalid(
                "scenario declares no target frameworks".to_string(),
                "Add a target_frameworks list, e.g. target_frameworks: [net8.0]",
            ));
        }
        check_active(&self.initial_active_target_framework(), &frameworks, "scenario")?;
        let mut active = self.initial_active_target_framework();

        for (index, step) in self.steps.iter().enumerate() {
            let location = format!("steps[{}]", index);

            if let Some(names) = &step.target_frameworks {
                frameworks = parse_frameworks(names);
            }
            if let Some(name) = &step.active_target_framework {
                active = TargetFramework::new(name);
            }
            check_active(&active, &frameworks, &location)?;

            let target_framework = TargetFramework::new(&step.target_framework);
            if !frameworks.contains(&target_framework) {
                return Err(invalid(
                    format!(
                        "{}: target framework '{}' is not one of the target frameworks",
                        location, step.target_framework
                    ),
                    "Changes can only be applied to a framework the project targets",
                ));
            }

            for (added_index, added) in step.added.iter().enumerate() {
                if added.provider_type.trim().is_empty() || added.path.trim().is_empty() {
                    return Err(invalid(
                        format!("{}.added[{}]: provider_type and path must not be empty", location, added_index),
                        "Each added dependency needs a provider_type (e.g. NuGetDependency) and a path",
                    ));
                }
            }
            for (removed_index, removed) in step.removed.iter().enumerate() {
                if removed.provider_type.trim().is_empty() || removed.id.trim().is_empty() {
                    return Err(invalid(
                        format!("{}.removed[{}]: provider_type and id must not be empty", location, removed_index),
                        "Each removed entry needs a provider_type and the id of the dependency",
                    ));
                }
            }
        }

        Ok(())
    }
}
