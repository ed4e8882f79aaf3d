/// Type alias for Result with anyhow::Error as the error type.
/// Application and adapter code uses it; the core returns `DependenciesError`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
