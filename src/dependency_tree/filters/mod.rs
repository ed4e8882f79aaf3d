//! Snapshot filters
//!
//! Filters run in caller-supplied order over every dependency added to or
//! removed from a targeted snapshot during one merge pass. A filter can
//! transform the candidate, veto it, or update siblings through the
//! [`FilterContext`].

mod context;
mod duplicated;
mod implicit_top_level;
mod sdk_and_packages;
mod unresolved;

pub use context::{FilterContext, MergeContext, ProjectItemSpecs};
pub use duplicated::DuplicatedDependenciesSnapshotFilter;
pub use implicit_top_level::ImplicitTopLevelDependenciesSnapshotFilter;
pub use sdk_and_packages::SdkAndPackagesDependenciesSnapshotFilter;
pub use unresolved::UnresolvedDependenciesSnapshotFilter;

use crate::dependency_tree::domain::{Dependency, TargetFramework};
use crate::shared::error::DependenciesError;
use std::fmt;
use std::sync::Arc;

/// Outcome of [`DependenciesSnapshotFilter::before_add`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterDecision {
    /// Keep the (possibly transformed) dependency and pass it to the next filter
    Accept(Dependency),
    /// Drop the candidate; later filters do not see it
    Reject,
}

/// Outcome of [`DependenciesSnapshotFilter::before_remove`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveDecision {
    Accept,
    Reject,
}

/// A rule applied to dependencies as they enter or leave a targeted snapshot
pub trait DependenciesSnapshotFilter: Send + Sync + fmt::Debug {
    /// Stable name, used to select filters from configuration
    fn name(&self) -> &'static str;

    /// Called for each added dependency, before it is stored
    ///
    /// `context` exposes the in-progress map as it was before this addition.
    fn before_add(
        &self,
        target_framework: &TargetFramework,
        dependency: Dependency,
        context: &mut FilterContext<'_>,
    ) -> FilterDecision;

    /// Called for each existing dependency about to be removed
    fn before_remove(
        &self,
        _target_framework: &TargetFramework,
        _dependency: &Dependency,
        _context: &mut FilterContext<'_>,
    ) -> RemoveDecision {
        RemoveDecision::Accept
    }
}

/// Shared handle to a filter; chains are cheap to clone
pub type SnapshotFilter = Arc<dyn DependenciesSnapshotFilter>;

/// Names of the built-in filters, in their default order
pub const DEFAULT_FILTER_NAMES: [&str; 4] = [
    UnresolvedDependenciesSnapshotFilter::NAME,
    SdkAndPackagesDependenciesSnapshotFilter::NAME,
    ImplicitTopLevelDependenciesSnapshotFilter::NAME,
    DuplicatedDependenciesSnapshotFilter::NAME,
];

/// The built-in filter chain
pub fn default_filters() -> Vec<SnapshotFilter> {
    vec![
        Arc::new(UnresolvedDependenciesSnapshotFilter),
        Arc::new(SdkAndPackagesDependenciesSnapshotFilter),
        Arc::new(ImplicitTopLevelDependenciesSnapshotFilter),
        Arc::new(DuplicatedDependenciesSnapshotFilter),
    ]
}

/// Looks up a built-in filter by name (case-insensitive)
pub fn filter_by_name(name: &str) -> Result<SnapshotFilter, DependenciesError> {
    default_filters()
        .into_iter()
        .find(|filter| filter.name().eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| DependenciesError::UnknownFilter {
            name: name.to_string(),
            known: DEFAULT_FILTER_NAMES.join(", "),
        })
}
