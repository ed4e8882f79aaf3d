//! deptree - immutable dependency-tree snapshots for multi-targeted projects
//!
//! This library models the "Dependencies" node of a project tree: every
//! evaluation or design-time build batch is merged into an immutable
//! snapshot per target framework, passed through a chain of snapshot
//! filters, and published as a new aggregate snapshot. Unchanged target
//! frameworks are shared by reference between versions.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_tree`): Snapshots, dependency models, filters and rule catalogs
//! - **Application Layer** (`application`): Scenario replay use case, read models and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use deptree::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = ReplayChangesUseCase::new(
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//!     SubTreeProviderRegistry::with_defaults(),
//! );
//!
//! let request = ReplayRequest::new(PathBuf::from("deptree.scenario.yml"), None);
//! let response = use_case.execute(request)?;
//!
//! let model = DependencyTreeReadModelBuilder::new(use_case.sub_tree_providers())
//!     .build(&response.snapshot);
//! let output = MarkdownFormatter::new().format(&model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_tree;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{OutputFormat, ReplayRequest, ReplayResponse, Scenario};
    pub use crate::application::read_models::{
        DependencyTreeReadModel, DependencyTreeReadModelBuilder,
    };
    pub use crate::application::use_cases::ReplayChangesUseCase;
    pub use crate::dependency_tree::domain::{
        DependenciesChanges, DependenciesChangesBuilder, DependenciesSnapshot, Dependency,
        DependencyId, DependencyModel, DependencyTreeFlags, ProjectCatalogSnapshot, Properties,
        TargetFramework, TargetedDependenciesSnapshot,
    };
    pub use crate::dependency_tree::filters::{
        default_filters, MergeContext, ProjectItemSpecs, SnapshotFilter,
    };
    pub use crate::dependency_tree::services::{
        RuleValidator, SnapshotStore, SubTreeProviderRegistry,
    };
    pub use crate::ports::inbound::ReplayPort;
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, ScenarioReader, TreeFormatter,
    };
    pub use crate::shared::error::{DependenciesError, ExitCode, ReplayError};
    pub use crate::shared::Result;
}
