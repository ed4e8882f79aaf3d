/// ProgressReporter port for user-facing feedback while a scenario replays
///
/// Diagnostics go through `tracing`; this port is for what the user should
/// see regardless of the log level.
pub trait ProgressReporter {
    /// Reports a one-line status message
    fn report(&self, message: &str);

    /// Reports how many of `total` steps have been applied
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of the replay
    fn report_completion(&self, message: &str);
}
