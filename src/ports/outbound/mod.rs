/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, output formats).
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod scenario_reader;

pub use formatter::TreeFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use scenario_reader::ScenarioReader;
