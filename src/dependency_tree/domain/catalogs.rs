use super::RuleCatalog;
use std::fmt;
use std::sync::Arc;

/// Opaque snapshot of the project's schema catalogs
///
/// Compared by identity only: two snapshots are "the same" when they share
/// the same allocation, whatever their contents.
#[derive(Clone)]
pub struct ProjectCatalogSnapshot {
    rules: Arc<RuleCatalog>,
}

impl ProjectCatalogSnapshot {
    pub fn new(rules: RuleCatalog) -> Self {
        Self {
            rules: Arc::new(rules),
        }
    }

    pub fn builtin() -> Self {
        Self::new(RuleCatalog::builtin())
    }

    pub fn rules(&self) -> &RuleCatalog {
        &self.rules
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.rules, &other.rules)
    }

    /// Identity comparison of optional catalogs; `None` only matches `None`
    pub fn same(left: Option<&Self>, right: Option<&Self>) -> bool {
        match (left, right) {
            (Some(left), Some(right)) => left.ptr_eq(right),
            (None, None) => true,
            _ => false,
        }
    }
}

impl fmt::Debug for ProjectCatalogSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectCatalogSnapshot")
            .field("rules", &self.rules.len())
            .field("ptr", &Arc::as_ptr(&self.rules))
            .finish()
    }
}
