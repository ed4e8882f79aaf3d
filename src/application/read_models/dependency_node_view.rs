use serde::Serialize;
use std::collections::BTreeMap;

/// View of one dependency node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyNodeView {
    pub id: String,
    pub caption: String,
    /// Moniker name of the node icon, already picked by resolution state
    pub icon: String,
    pub resolved: bool,
    pub implicit: bool,
    pub visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub flags: Vec<String>,
    /// Properties the dependency's rule shows in the properties pane
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
}
