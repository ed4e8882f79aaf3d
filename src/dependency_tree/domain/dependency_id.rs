use super::TargetFramework;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Separator between the three parts of a rendered id
const SEPARATOR: char = '\\';

/// Composite key of a dependency within a snapshot
///
/// Rendered as `{tfm}\{providerType}\{modelId}`. Equality, ordering and hashing
/// all go through the rendered key so that lookups by string and by value agree.
#[derive(Debug, Clone)]
pub struct DependencyId {
    target_framework: TargetFramework,
    provider_type: Arc<str>,
    model_id: Arc<str>,
    key: Arc<str>,
}

impl DependencyId {
    pub fn new(target_framework: &TargetFramework, provider_type: &str, model_id: &str) -> Self {
        let key = format!(
            "{}{}{}{}{}",
            target_framework.short_name(),
            SEPARATOR,
            provider_type,
            SEPARATOR,
            model_id.trim_end_matches(['\\', '/'])
        );

        Self {
            target_framework: target_framework.clone(),
            provider_type: Arc::from(provider_type),
            model_id: Arc::from(model_id),
            key: Arc::from(key),
        }
    }

    pub fn target_framework(&self) -> &TargetFramework {
        &self.target_framework
    }

    pub fn provider_type(&self) -> &str {
        &self.provider_type
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn as_str(&self) -> &str {
        &self.key
    }
}

impl PartialEq for DependencyId {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for DependencyId {}

impl PartialOrd for DependencyId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DependencyId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl Hash for DependencyId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for DependencyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

impl PartialEq<str> for DependencyId {
    fn eq(&self, other: &str) -> bool {
        &*self.key == other
    }
}

impl PartialEq<&str> for DependencyId {
    fn eq(&self, other: &&str) -> bool {
        &*self.key == *other
    }
}
