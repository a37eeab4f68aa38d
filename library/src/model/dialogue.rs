use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::layout::EditorLayout;
use super::null_as_default;

/// A conversation: lines spoken by participants, linked by response options.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DialogueTree {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub participants: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nodes: Vec<DialogueNode>,
    #[serde(default)]
    pub root_node_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DialogueTree {
    pub fn new() -> Self {
        Self {
            id: format!("diag_{}", Uuid::new_v4().simple()),
            participants: vec!["player".to_string()],
            nodes: Vec::new(),
            root_node_id: None,
            extra: Map::new(),
        }
    }

    pub fn node(&self, id: &str) -> Option<&DialogueNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut DialogueNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct DialogueNode {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub speaker: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub choices: Vec<DialogueOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<EditorLayout>,
    /// Limitations and other runtime fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DialogueNode {
    pub fn new_at(layout: EditorLayout) -> Self {
        Self {
            id: format!("node_{}", Uuid::new_v4().simple()),
            text: "Hello...".to_string(),
            speaker: "player".to_string(),
            choices: Vec::new(),
            editor: Some(layout),
            extra: Map::new(),
        }
    }
}

/// A response the player can pick; `targetNodeId` names the next line.
///
/// Records written by the form editor use `next` instead. Both keys may be
/// present; `targetNodeId` wins.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DialogueOption {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_node_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_index: Option<usize>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DialogueOption {
    pub fn new(text: impl Into<String>, target: impl Into<String>, port: usize) -> Self {
        Self {
            text: text.into(),
            target_node_id: Some(target.into()),
            next: None,
            port_index: Some(port),
            extra: Map::new(),
        }
    }

    pub fn target(&self) -> Option<&str> {
        self.target_node_id
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| self.next.as_deref().filter(|t| !t.is_empty()))
    }
}
