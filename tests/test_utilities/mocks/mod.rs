/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_scenario_reader;
mod test_dependency_model;

pub use mock_progress_reporter::{MockProgressReporter, ReportedStep};
pub use mock_scenario_reader::MockScenarioReader;
pub use test_dependency_model::TestDependencyModel;
