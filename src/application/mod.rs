/// Application layer - Use cases, DTOs and read models
///
/// Orchestrates the dependency-tree core and talks to infrastructure only
/// through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;
