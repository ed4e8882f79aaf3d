use crate::dependency_tree::filters::{default_filters, filter_by_name, SnapshotFilter};
use crate::shared::error::DependenciesError;

/// Builds the snapshot filter chain from configured names
pub struct FilterChainFactory;

impl FilterChainFactory {
    /// `None` yields the default chain; names keep their given order
    pub fn create(names: Option<&[String]>) -> Result<Vec<SnapshotFilter>, DependenciesError> {
        match names {
            None => Ok(default_filters()),
            Some(names) => names.iter().map(|name| filter_by_name(name)).collect(),
        }
    }

    pub fn describe(filters: &[SnapshotFilter]) -> String {
        if filters.is_empty() {
            return "none".to_string();
        }
        filters
            .iter()
            .map(|filter| filter.name())
            .collect::<Vec<_>>()
            .join(" → ")
    }
}
