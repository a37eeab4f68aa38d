use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::layout::EditorLayout;
use super::null_as_default;

/// Action tag of a choice that moves the player to another location.
pub const NAVIGATE_ACTION: &str = "navigate";

/// A place the player can be. Its navigation choices form the location graph.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Location {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub choices: Vec<Choice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<EditorLayout>,
    /// Fields this tool does not interpret (images, flags, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Location {
    /// A fresh location placed at a world position, as created from the graph.
    pub fn new_at(x: f32, y: f32) -> Self {
        let mut extra = Map::new();
        extra.insert("images".to_string(), Value::Object(Map::new()));
        Self {
            id: format!("loc_{}", Uuid::new_v4().simple()),
            name: "New Location".to_string(),
            text: Some("You are in a new location.".to_string()),
            choices: Vec::new(),
            editor: Some(EditorLayout::at(x, y)),
            extra,
        }
    }

    /// True when a `navigate` choice leads to `target`. Other actions naming
    /// the same location do not count.
    pub fn navigates_to(&self, target: &str) -> bool {
        self.choices
            .iter()
            .any(|c| c.navigation_target() == Some(target))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_index: Option<usize>,
    /// Conditions and other game-side fields, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Choice {
    pub fn navigate(text: impl Into<String>, target: impl Into<String>, port: usize) -> Self {
        Self {
            text: text.into(),
            action: NAVIGATE_ACTION.to_string(),
            target: Some(target.into()),
            port_index: Some(port),
            extra: Map::new(),
        }
    }

    /// Target id when this choice is a navigation edge.
    pub fn navigation_target(&self) -> Option<&str> {
        if self.action == NAVIGATE_ACTION {
            self.target.as_deref().filter(|t| !t.is_empty())
        } else {
            None
        }
    }
}
