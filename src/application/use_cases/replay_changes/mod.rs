use crate::application::dto::{ReplayRequest, ReplayResponse, Scenario, ScenarioStep};
use crate::application::factories::FilterChainFactory;
use crate::dependency_tree::domain::{
    DependenciesChanges, DependenciesChangesBuilder, DependenciesSnapshot, ProjectCatalogSnapshot,
    Properties, TargetFramework, TargetedDependenciesSnapshot, TargetedSnapshotMap,
};
use crate::dependency_tree::filters::{MergeContext, ProjectItemSpecs};
use crate::dependency_tree::services::{SnapshotStore, SubTreeProviderRegistry};
use crate::ports::inbound::ReplayPort;
use crate::ports::outbound::{ProgressReporter, ScenarioReader};
use crate::shared::error::DependenciesError;
use crate::shared::Result;
use anyhow::Context;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// ReplayChangesUseCase - feeds a scenario's change batches through the snapshot engine
///
/// Each step is merged into the current snapshot and published to a
/// `SnapshotStore`, the same way a project system publishes evaluation
/// results as they arrive.
///
/// # Type Parameters
/// * `SR` - ScenarioReader implementation
/// * `PR` - ProgressReporter implementation
pub struct ReplayChangesUseCase<SR, PR> {
    scenario_reader: SR,
    progress_reporter: PR,
    sub_tree_providers: SubTreeProviderRegistry,
}

impl<SR, PR> ReplayChangesUseCase<SR, PR>
where
    SR: ScenarioReader,
    PR: ProgressReporter,
{
    pub fn new(scenario_reader: SR, progress_reporter: PR, sub_tree_providers: SubTreeProviderRegistry) -> Self {
        Self {
            scenario_reader,
            progress_reporter,
            sub_tree_providers,
        }
    }

    pub fn sub_tree_providers(&self) -> &SubTreeProviderRegistry {
        &self.sub_tree_providers
    }

    /// Executes the replay
    ///
    /// # Returns
    /// The last published snapshot and how many steps changed it
    pub fn execute(&self, request: ReplayRequest) -> Result<ReplayResponse> {
        // Step 1: Load and validate the scenario
        let scenario = self.load_scenario(&request.scenario_path)?;

        // Step 2: Assemble the merge context
        let filters = FilterChainFactory::create(request.filter_names.as_deref())?;
        debug!(filters = %FilterChainFactory::describe(&filters), "snapshot filter chain");
        let project_item_specs = scenario.project_item_specs.as_ref().map(ProjectItemSpecs::new);
        let context = MergeContext::new(&filters, &self.sub_tree_providers)
            .with_project_item_specs(project_item_specs.as_ref());

        // Step 3: Publish the initial snapshot
        let mut catalogs = ProjectCatalogSnapshot::builtin();
        let store = SnapshotStore::new(Self::initial_snapshot(&scenario, &catalogs)?);

        // Step 4: Merge every step
        let total = scenario.steps.len();
        let mut steps_applied = 0;
        let mut unchanged_steps = 0;

        for (index, step) in scenario.steps.iter().enumerate() {
            if step.refresh_catalogs {
                catalogs = ProjectCatalogSnapshot::builtin();
            }

            let changes = self
                .build_changes(step)
                .with_context(|| format!("Invalid dependency in steps[{}]", index))?;

            let previous = store.current();
            let next = Self::merge_step(&previous, step, changes.as_ref(), &catalogs, &context)
                .with_context(|| format!("Failed to merge steps[{}]", index))?;

            if Arc::ptr_eq(&previous, &next) {
                debug!(step = index, target_framework = %step.target_framework, "step left the snapshot unchanged");
                unchanged_steps += 1;
            } else {
                store.compare_and_publish(&previous, next).map_err(|_| {
                    anyhow::anyhow!("Snapshot was replaced while steps[{}] was being merged", index)
                })?;
                steps_applied += 1;
            }

            self.progress_reporter
                .report_progress(index + 1, total, Some(&step.target_framework));
        }

        // Step 5: Report and return the final snapshot
        let snapshot = store.current();
        if snapshot.has_visible_unresolved_dependency() {
            self.progress_reporter
                .report_error("⚠️  Warning: Some visible dependencies are unresolved.");
        }
        self.progress_reporter.report_completion(&format!(
            "✅ Replayed {} step(s): {} changed the snapshot, {} left it unchanged",
            total, steps_applied, unchanged_steps
        ));

        Ok(ReplayResponse::new(snapshot, steps_applied, unchanged_steps))
    }

    fn load_scenario(&self, path: &Path) -> Result<Scenario> {
        self.progress_reporter
            .report(&format!("📖 Loading scenario from: {}", path.display()));

        let scenario = self.scenario_reader.read_scenario(path)?;
        scenario.validate()?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} target framework(s) and {} step(s)",
            scenario.target_frameworks.len(),
            scenario.steps.len()
        ));
        Ok(scenario)
    }

    /// Every declared framework starts empty, sharing the initial catalogs
    fn initial_snapshot(scenario: &Scenario, catalogs: &ProjectCatalogSnapshot) -> Result<Arc<DependenciesSnapshot>> {
        let map: TargetedSnapshotMap = scenario
            .target_frameworks()
            .into_iter()
            .map(|target_framework| {
                let targeted = TargetedDependenciesSnapshot::empty(target_framework.clone(), Some(catalogs.clone()));
                (target_framework, Arc::new(targeted))
            })
            .collect();

        let snapshot = DependenciesSnapshot::new(scenario.initial_active_target_framework(), map)?;
        Ok(Arc::new(snapshot))
    }

    fn build_changes(&self, step: &ScenarioStep) -> Result<Option<DependenciesChanges>> {
        let mut builder = DependenciesChangesBuilder::new();

        for removed in &step.removed {
            builder.removed(&removed.provider_type, &removed.id);
        }

        for added in &step.added {
            let properties: Properties = added
                .properties
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect();
            let model = self.sub_tree_providers.create_model(
                &added.provider_type,
                &added.path,
                added.original_item_spec.as_deref(),
                added.resolved,
                added.implicit,
                properties,
            )?;
            builder.added(model);
        }

        Ok(builder.try_build_changes())
    }

    fn merge_step(
        previous: &Arc<DependenciesSnapshot>,
        step: &ScenarioStep,
        changes: Option<&DependenciesChanges>,
        catalogs: &ProjectCatalogSnapshot,
        context: &MergeContext<'_>,
    ) -> std::result::Result<Arc<DependenciesSnapshot>, DependenciesError> {
        let target_frameworks: Option<Vec<TargetFramework>> = step
            .target_frameworks
            .as_ref()
            .map(|names| names.iter().map(|name| TargetFramework::new(name)).collect());

        DependenciesSnapshot::from_changes(
            previous,
            &TargetFramework::new(&step.target_framework),
            changes,
            Some(catalogs),
            target_frameworks.as_deref(),
            step.active_target_framework.as_deref().map(TargetFramework::new),
            context,
        )
    }
}

impl<SR, PR> ReplayPort for ReplayChangesUseCase<SR, PR>
where
    SR: ScenarioReader,
    PR: ProgressReporter,
{
    fn replay(&self, request: ReplayRequest) -> Result<ReplayResponse> {
        self.execute(request)
    }
}
