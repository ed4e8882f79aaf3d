use crate::shared::Result;

/// OutputPresenter port for presenting the rendered tree
///
/// Abstracts where the output goes (stdout, file).
pub trait OutputPresenter {
    /// Writes the rendered content to the destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The destination is rejected by the file-system guards
    fn present(&self, content: &str) -> Result<()>;
}
