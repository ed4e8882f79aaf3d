//! Dependency-tree core
//!
//! Immutable per-target-framework snapshots of a project's dependencies and
//! the merge engine that folds change batches into them. Nothing in here
//! performs IO.

pub mod domain;
pub mod filters;
pub mod services;
