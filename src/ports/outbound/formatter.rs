use crate::application::read_models::DependencyTreeReadModel;
use crate::shared::Result;

/// TreeFormatter port for rendering the dependencies tree
///
/// Formatters only see the read model, never the snapshot itself.
pub trait TreeFormatter {
    /// Renders the tree as text
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &DependencyTreeReadModel) -> Result<String>;
}
