//! Read models for rendering
//!
//! Query-optimized, serializable views of a `DependenciesSnapshot`. The
//! formatters only ever see these types.

mod dependency_node_view;
mod tree_read_model;
mod tree_read_model_builder;

pub use dependency_node_view::DependencyNodeView;
pub use tree_read_model::{DependencyTreeReadModel, ProviderGroupView, TargetFrameworkView};
pub use tree_read_model_builder::DependencyTreeReadModelBuilder;
