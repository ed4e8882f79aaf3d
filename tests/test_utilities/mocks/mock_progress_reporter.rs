use deptree::prelude::*;
use parking_lot::Mutex;
use std::sync::Arc;

/// One merged scenario step as reported by the replay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportedStep {
    pub index: usize,
    pub total: usize,
    pub target_framework: Option<String>,
}

#[derive(Debug, Default)]
struct Log {
    statuses: Vec<String>,
    steps: Vec<ReportedStep>,
    warnings: Vec<String>,
    summary: Option<String>,
}

/// Mock ProgressReporter that records replay progress by kind
///
/// Clones share the same log, so a test can keep one handle while the use
/// case owns another.
#[derive(Debug, Default, Clone)]
pub struct MockProgressReporter {
    log: Arc<Mutex<Log>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn statuses(&self) -> Vec<String> {
        self.log.lock().statuses.clone()
    }

    pub fn steps(&self) -> Vec<ReportedStep> {
        self.log.lock().steps.clone()
    }

    /// Target frameworks in the order their steps were merged
    pub fn merged_frameworks(&self) -> Vec<String> {
        self.log
            .lock()
            .steps
            .iter()
            .filter_map(|step| step.target_framework.clone())
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.log.lock().warnings.clone()
    }

    pub fn summary(&self) -> Option<String> {
        self.log.lock().summary.clone()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.log.lock().statuses.push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.log.lock().steps.push(ReportedStep {
            index: current,
            total,
            target_framework: message.map(str::to_string),
        });
    }

    fn report_error(&self, message: &str) {
        self.log.lock().warnings.push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.log.lock().summary = Some(message.to_string());
    }
}
