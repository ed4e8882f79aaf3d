use super::{DependenciesSnapshotFilter, FilterContext, FilterDecision};
use crate::dependency_tree::domain::{Dependency, TargetFramework};
use tracing::trace;

/// Disambiguates dependencies of one provider that would show the same caption
///
/// Every dependency sharing the caption switches to its alias,
/// `"Caption (ItemSpec)"`, including ones aliased by an earlier collision.
#[derive(Debug, Clone, Copy, Default)]
pub struct DuplicatedDependenciesSnapshotFilter;

impl DuplicatedDependenciesSnapshotFilter {
    pub const NAME: &'static str = "duplicated";
}

impl DependenciesSnapshotFilter for DuplicatedDependenciesSnapshotFilter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn before_add(
        &self,
        _target_framework: &TargetFramework,
        dependency: Dependency,
        context: &mut FilterContext<'_>,
    ) -> FilterDecision {
        let mut should_alias = false;
        let mut to_alias = Vec::new();

        for other in context.iter() {
            if other.id() == dependency.id() || other.provider_type() != dependency.provider_type() {
                continue;
            }

            if other.caption().eq_ignore_ascii_case(dependency.caption()) {
                should_alias = true;
                // The other one may already show its alias from an earlier collision
                if other.caption() != other.alias() {
                    to_alias.push(other.as_ref().clone());
                }
            } else if other.caption().eq_ignore_ascii_case(dependency.alias()) {
                should_alias = true;
            } else if other.caption() == other.alias()
                && other.model_caption().eq_ignore_ascii_case(dependency.caption())
            {
                // Already aliased twin
                should_alias = true;
            }
        }

        for other in to_alias {
            trace!(id = %other.id(), "aliasing duplicated caption");
            let alias = other.alias().to_string();
            context.add_or_update(other.with_caption(&alias));
        }

        if should_alias {
            let alias = dependency.alias().to_string();
            FilterDecision::Accept(dependency.with_caption(&alias))
        } else {
            FilterDecision::Accept(dependency)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_tree::domain::models::{AssemblyDependencyModel, ProjectDependencyModel};
    use crate::dependency_tree::domain::Properties;
    use crate::dependency_tree::services::SubTreeProviderRegistry;
    use imbl::OrdMap;

    fn tfm() -> TargetFramework {
        TargetFramework::new("net8.0")
    }

    fn project(path: &str) -> Dependency {
        let model = ProjectDependencyModel::new(path, None, true, false, Properties::new());
        Dependency::new(&model, &tfm())
    }

    fn accept(dependency: Dependency, context: &mut FilterContext<'_>) -> Dependency {
        match DuplicatedDependenciesSnapshotFilter.before_add(&tfm(), dependency, context) {
            FilterDecision::Accept(accepted) => accepted,
            FilterDecision::Reject => panic!("duplicated filter never rejects"),
        }
    }

    #[test]
    fn test_aliases_both_on_caption_collision() {
        let providers = SubTreeProviderRegistry::new();
        let mut context = FilterContext::new(OrdMap::new(), &providers, None);
        let first = project(r"..\A\Core.csproj");
        let first_id = first.id().clone();
        context.add_or_update(first);

        let second = accept(project(r"..\B\Core.csproj"), &mut context);

        assert_eq!(second.caption(), r"Core (..\B\Core.csproj)");
        assert_eq!(context.get(&first_id).unwrap().caption(), r"Core (..\A\Core.csproj)");
    }

    #[test]
    fn test_third_duplicate_is_aliased() {
        let providers = SubTreeProviderRegistry::new();
        let mut context = FilterContext::new(OrdMap::new(), &providers, None);
        let first = project(r"..\A\Core.csproj");
        let first_id = first.id().clone();
        context.add_or_update(first);
        let second = accept(project(r"..\B\Core.csproj"), &mut context);
        context.add_or_update(second);

        let third = accept(project(r"..\C\Core.csproj"), &mut context);

        assert_eq!(third.caption(), r"Core (..\C\Core.csproj)");
        assert_eq!(context.get(&first_id).unwrap().caption(), r"Core (..\A\Core.csproj)");
    }

    #[test]
    fn test_readded_duplicate_keeps_alias() {
        let providers = SubTreeProviderRegistry::new();
        let mut context = FilterContext::new(OrdMap::new(), &providers, None);
        let first = project(r"..\A\Core.csproj");
        let first_id = first.id().clone();
        context.add_or_update(first);
        let second = accept(project(r"..\B\Core.csproj"), &mut context);
        context.add_or_update(second);

        let mut reevaluated = FilterContext::new(context.into_dependencies(), &providers, None);
        let readded = accept(project(r"..\B\Core.csproj"), &mut reevaluated);

        assert_eq!(readded.caption(), r"Core (..\B\Core.csproj)");
        assert_eq!(reevaluated.get(&first_id).unwrap().caption(), r"Core (..\A\Core.csproj)");
        assert!(!reevaluated.changed());
    }

    #[test]
    fn test_other_kept_when_alias_equals_caption() {
        let providers = SubTreeProviderRegistry::new();
        let mut context = FilterContext::new(OrdMap::new(), &providers, None);
        let unresolved = AssemblyDependencyModel::new("Core", None, false, false, Properties::new());
        let existing = Dependency::new(&unresolved, &tfm());
        assert_eq!(existing.alias(), "Core");
        context.add_or_update(existing.clone());

        let mut fresh = FilterContext::new(context.into_dependencies(), &providers, None);
        let resolved = AssemblyDependencyModel::new(
            r"C:\lib\Core.dll",
            Some("Core, Version=1.0.0.0"),
            true,
            false,
            Properties::new(),
        );
        let added = accept(Dependency::new(&resolved, &tfm()), &mut fresh);

        assert_eq!(added.caption(), "Core (Core, Version=1.0.0.0)");
        assert!(!fresh.changed());
        assert_eq!(fresh.get(existing.id()).unwrap().caption(), "Core");
    }

    #[test]
    fn test_aliases_new_when_caption_matches_its_alias() {
        let providers = SubTreeProviderRegistry::new();
        let mut context = FilterContext::new(OrdMap::new(), &providers, None);
        let other = project(r"..\A\Core.csproj").with_caption(r"Core (..\B\Core.csproj)");
        context.add_or_update(other);

        let added = accept(project(r"..\B\Core.csproj"), &mut context);
        assert_eq!(added.caption(), r"Core (..\B\Core.csproj)");
    }

    #[test]
    fn test_other_providers_do_not_collide() {
        let providers = SubTreeProviderRegistry::new();
        let mut context = FilterContext::new(OrdMap::new(), &providers, None);
        let model = AssemblyDependencyModel::new(r"C:\lib\Core.dll", Some("Core"), true, false, Properties::new());
        context.add_or_update(Dependency::new(&model, &tfm()));

        let added = accept(project(r"..\B\Core.csproj"), &mut context);
        assert_eq!(added.caption(), "Core");
    }

    #[test]
    fn test_unique_caption_untouched() {
        let providers = SubTreeProviderRegistry::new();
        let mut context = FilterContext::new(OrdMap::new(), &providers, None);
        context.add_or_update(project(r"..\A\Core.csproj"));

        let added = accept(project(r"..\B\Data.csproj"), &mut context);
        assert_eq!(added.caption(), "Data");
    }
}
