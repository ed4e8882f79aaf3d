pub mod catalogs;
pub mod changes;
pub mod dependency;
pub mod dependency_id;
pub mod dependency_model;
pub mod flags;
pub mod icon_set;
pub mod models;
pub mod rules;
pub mod snapshot;
pub mod target_framework;
pub mod targeted_snapshot;

pub use catalogs::ProjectCatalogSnapshot;
pub use changes::{DependenciesChanges, DependenciesChangesBuilder};
pub use dependency::Dependency;
pub use dependency_id::DependencyId;
pub use dependency_model::{
    DependencyModel, ModelBase, Properties, RemovedDependency, VERSION_PROPERTY, VISIBLE_PROPERTY,
};
pub use flags::{DependencyFlagCache, DependencyTreeFlags};
pub use icon_set::{DependencyIconSet, ImageMoniker};
pub use rules::{DataSource, PropertyKind, PropertySchema, RuleCatalog, RuleSchema};
pub use snapshot::{DependenciesSnapshot, TargetedSnapshotMap};
pub use target_framework::TargetFramework;
pub use targeted_snapshot::{DependencyMap, TargetedDependenciesSnapshot};
