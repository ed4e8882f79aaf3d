use crate::application::read_models::{
    DependencyNodeView, DependencyTreeReadModel, ProviderGroupView, TargetFrameworkView,
};
use crate::ports::outbound::TreeFormatter;
use crate::shared::Result;

/// Markdown table header for dependency nodes
const TABLE_HEADER: &str = "| Dependency | Status | Implicit | Properties |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|------------|--------|----------|------------|\n";

/// MarkdownFormatter adapter rendering one section per target framework
/// and one table per provider group
#[derive(Debug, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn render_status(node: &DependencyNodeView) -> &'static str {
        match (node.resolved, node.visible) {
            (true, _) => "✅ Resolved",
            (false, true) => "⚠️ Unresolved",
            (false, false) => "Unresolved (hidden)",
        }
    }

    fn render_properties(node: &DependencyNodeView) -> String {
        node.properties
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn render_group(output: &mut String, group: &ProviderGroupView) {
        output.push_str(&format!("### {}\n\n", group.caption));
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);

        for node in &group.dependencies {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&node.caption),
                Self::render_status(node),
                if node.implicit { "Yes" } else { "No" },
                Self::escape_markdown_table_cell(&Self::render_properties(node)),
            ));
        }
        output.push('\n');
    }

    fn render_target_framework(output: &mut String, target_framework: &TargetFrameworkView) {
        if target_framework.is_active {
            output.push_str(&format!("## {} (active)\n\n", target_framework.name));
        } else {
            output.push_str(&format!("## {}\n\n", target_framework.name));
        }

        if target_framework.groups.is_empty() {
            output.push_str("_No dependencies._\n\n");
            return;
        }

        for group in &target_framework.groups {
            Self::render_group(output, group);
        }
    }
}

impl TreeFormatter for MarkdownFormatter {
    fn format(&self, model: &DependencyTreeReadModel) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Dependencies\n\n");
        if !model.active_target_framework.is_empty() {
            output.push_str(&format!(
                "Active target framework: **{}**\n\n",
                model.active_target_framework
            ));
        }
        if model.has_visible_unresolved_dependency {
            output.push_str("> ⚠️ Some dependencies could not be resolved.\n\n");
        }

        for target_framework in &model.target_frameworks {
            Self::render_target_framework(&mut output, target_framework);
        }

        Ok(output)
    }
}
