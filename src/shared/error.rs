use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - no visible unresolved dependencies, or the check was not requested
    Success = 0,
    /// Visible unresolved dependencies were found and `--fail-on-unresolved` was given
    UnresolvedDependencies = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (scenario error, file I/O error, invalid snapshot, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::UnresolvedDependencies => write!(f, "Unresolved Dependencies (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised by the dependency-tree core.
///
/// These are programmer errors: a correctly behaving producer never
/// triggers them, so they fail fast at the call site.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DependenciesError {
    /// A constructor precondition was violated. `argument` names the parameter.
    #[error("{message} (Parameter '{argument}')")]
    InvalidArgument { argument: String, message: String },

    #[error("No sub-tree provider is registered for provider type '{provider_type}'\n\n💡 Hint: Known provider types are: {known}")]
    UnknownProviderType { provider_type: String, known: String },

    #[error("Unknown snapshot filter '{name}'\n\n💡 Hint: Known filters are: {known}")]
    UnknownFilter { name: String, known: String },
}

impl DependenciesError {
    pub fn invalid_argument(argument: &str, message: impl Into<String>) -> Self {
        DependenciesError::InvalidArgument {
            argument: argument.to_string(),
            message: message.into(),
        }
    }
}

/// Application-specific errors for the replay tool.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Scenario file not found: {path}\n\n💡 Hint: {suggestion}")]
    ScenarioNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse scenario file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the scenario is valid YAML or TOML")]
    ScenarioParseError { path: PathBuf, details: String },

    #[error("Invalid scenario: {reason}\n\n💡 Hint: {hint}")]
    InvalidScenario { reason: String, hint: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
