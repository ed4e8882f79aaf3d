/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI, the adapters and the replay use case,
/// keeping the dependency-tree core free of serde and file concerns.
mod output_format;
mod replay_request;
mod replay_response;
mod scenario;

pub use output_format::OutputFormat;
pub use replay_request::ReplayRequest;
pub use replay_response::ReplayResponse;
pub use scenario::{AddedDependency, RemovedEntry, Scenario, ScenarioStep};
