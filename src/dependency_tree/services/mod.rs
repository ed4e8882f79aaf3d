mod rule_validator;
mod snapshot_store;
mod sub_tree_provider;

pub use rule_validator::{RuleValidator, RuleViolation};
pub use snapshot_store::SnapshotStore;
pub use sub_tree_provider::{
    ModelFactory, ProjectDependenciesSubTreeProvider, RuleBasedSubTreeProvider,
    SubTreeProviderRegistry,
};
