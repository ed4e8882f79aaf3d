use crate::application::read_models::DependencyTreeReadModel;
use crate::ports::outbound::TreeFormatter;
use crate::shared::Result;
use anyhow::Context;

/// JsonFormatter adapter emitting the read model as pretty-printed JSON
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl TreeFormatter for JsonFormatter {
    fn format(&self, model: &DependencyTreeReadModel) -> Result<String> {
        let mut json =
            serde_json::to_string_pretty(model).context("Failed to serialize dependencies tree to JSON")?;
        json.push('\n');
        Ok(json)
    }
}
