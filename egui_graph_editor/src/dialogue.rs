//! Dialogue trees: nodes are spoken lines, edges are the response options
//! the player can pick.

use egui::{Align2, FontId, Pos2, Stroke, Vec2, pos2, vec2};
use story_library::{DialogueNode, DialogueOption, DialogueTree, EditorLayout};

use crate::error::EditorError;
use crate::model::{Connection, Directionality, GraphNode, NodeId, staggered_position};
use crate::render::NodeCanvas;
use crate::theme::GraphEditorTheme;
use crate::traits::{EditorHost, GraphStrategy};
use crate::types::{ConnectionRequest, LabelPrompt, NodeAction};

pub const DIALOGUE_NODE_SIZE: Vec2 = Vec2::new(220.0, 140.0);
const GRID_CELL: Vec2 = Vec2::new(260.0, 200.0);
/// Label shown for an option with no text.
const UNLABELED_OPTION: &str = "Next";

/// Strategy for a single dialogue tree.
///
/// Edges are one-way, several options may lead to the same line, and every
/// new edge asks the host for the option text first.
#[derive(Clone, Debug)]
pub struct DialogueGraph {
    pub prompt_title: String,
    pub default_response: String,
}

impl Default for DialogueGraph {
    fn default() -> Self {
        Self {
            prompt_title: "Option Text (what the player clicks):".to_owned(),
            default_response: "Continue".to_owned(),
        }
    }
}

impl DialogueGraph {
    pub fn with_default_response(default_response: impl Into<String>) -> Self {
        Self {
            default_response: default_response.into(),
            ..Default::default()
        }
    }
}

/// `"speaker: first 15 chars..."`, or the first 20 chars without a speaker.
pub fn node_title(node: &DialogueNode) -> String {
    if node.speaker.is_empty() {
        format!("{}...", truncate(&node.text, 20))
    } else {
        format!("{}: {}...", node.speaker, truncate(&node.text, 15))
    }
}

fn truncate(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

fn find_mut<'a>(tree: &'a mut DialogueTree, id: &str) -> Result<&'a mut DialogueNode, EditorError> {
    tree.node_mut(id)
        .ok_or_else(|| EditorError::UnknownRecord(id.to_owned()))
}

impl GraphStrategy for DialogueGraph {
    type Document = DialogueTree;

    fn document_key(&self, doc: &Self::Document) -> String {
        doc.id.clone()
    }

    fn theme(&self) -> GraphEditorTheme {
        GraphEditorTheme::dialogue()
    }

    fn default_node_size(&self) -> Vec2 {
        DIALOGUE_NODE_SIZE
    }

    fn load_nodes(&self, doc: &mut Self::Document) -> Vec<GraphNode> {
        let root = doc.root_node_id.clone();
        doc.nodes
            .iter_mut()
            .enumerate()
            .map(|(index, record)| {
                let mut layout = record.editor.unwrap_or_else(|| {
                    let p = staggered_position(index, GRID_CELL);
                    EditorLayout::at(p.x, p.y)
                });

                // One port per option unless more were added by hand.
                let options = record.choices.len();
                let ports = match layout.ports {
                    Some(ports) if ports > options => ports,
                    _ => options.max(1),
                };
                let highest_port = record.choices.iter().filter_map(|c| c.port_index).max();
                layout.ports = Some(ports.max(highest_port.map_or(1, |p| p + 1)));

                let mut node = GraphNode::from_layout(
                    record.id.clone(),
                    node_title(record),
                    layout,
                    DIALOGUE_NODE_SIZE,
                    index,
                );
                node.text = Some(record.text.clone());
                node.is_root = root.as_deref() == Some(record.id.as_str());
                record.editor = Some(node.layout());
                node
            })
            .collect()
    }

    fn interpret_connections(&self, doc: &Self::Document, _nodes: &[GraphNode]) -> Vec<Connection> {
        doc.nodes
            .iter()
            .flat_map(|record| {
                record
                    .choices
                    .iter()
                    .enumerate()
                    .filter_map(move |(index, option)| {
                        let target = option.target()?;
                        let label = if option.text.is_empty() {
                            UNLABELED_OPTION.to_owned()
                        } else {
                            option.text.clone()
                        };
                        Some(Connection {
                            from: record.id.clone(),
                            to: target.to_owned(),
                            label,
                            direction: Directionality::OneWay,
                            choice_index: index,
                            port: option.port_index.unwrap_or(0),
                        })
                    })
            })
            .collect()
    }

    fn on_connection_create(&self, _source: &GraphNode, _target: &GraphNode) -> ConnectionRequest {
        ConnectionRequest::Prompt(LabelPrompt {
            title: self.prompt_title.clone(),
            default: self.default_response.clone(),
        })
    }

    /// Always adds an option; each one is a distinct response.
    fn commit_connection(
        &self,
        doc: &mut Self::Document,
        source: &str,
        target: &str,
        label: &str,
        port: usize,
    ) -> Result<bool, EditorError> {
        if doc.node(target).is_none() {
            return Err(EditorError::UnknownRecord(target.to_owned()));
        }
        find_mut(doc, source)?
            .choices
            .push(DialogueOption::new(label, target, port));
        Ok(true)
    }

    /// Removes the source's options leading to the target.
    fn remove_connection(
        &self,
        doc: &mut Self::Document,
        from: &str,
        to: &str,
    ) -> Result<(), EditorError> {
        find_mut(doc, from)?
            .choices
            .retain(|c| c.target() != Some(to));
        Ok(())
    }

    /// Creates the line directly. It becomes the root when the tree has none,
    /// or when the stored root names no line.
    fn on_node_create(
        &self,
        doc: &mut Self::Document,
        at: Pos2,
        _host: &mut dyn EditorHost,
    ) -> Result<Option<NodeId>, EditorError> {
        let layout = EditorLayout::full(
            at.x,
            at.y,
            DIALOGUE_NODE_SIZE.x,
            DIALOGUE_NODE_SIZE.y,
            1,
        );
        let node = DialogueNode::new_at(layout);
        let id = node.id.clone();
        let has_root = doc
            .root_node_id
            .as_deref()
            .is_some_and(|root| doc.node(root).is_some());
        doc.nodes.push(node);

        if !has_root {
            doc.root_node_id = Some(id.clone());
        }
        Ok(Some(id))
    }

    /// Removes the line and every option leading to it. A deleted root passes
    /// to the first remaining line.
    fn remove_node(&self, doc: &mut Self::Document, node: &str) -> Result<(), EditorError> {
        let index = doc
            .nodes
            .iter()
            .position(|n| n.id == node)
            .ok_or_else(|| EditorError::UnknownRecord(node.to_owned()))?;
        doc.nodes.remove(index);

        for record in &mut doc.nodes {
            record
                .choices
                .retain(|c| c.target() != Some(node));
        }
        if doc.root_node_id.as_deref() == Some(node) {
            doc.root_node_id = doc.nodes.first().map(|n| n.id.clone());
        }
        Ok(())
    }

    fn delete_node_message(&self, node: &GraphNode) -> String {
        let name = match node.text.as_deref() {
            Some(text) if !text.is_empty() => format!("{}...", truncate(text, 30)),
            _ => node.id.clone(),
        };
        format!(
            "Delete dialogue node \"{name}\"?\n\nThis will remove the node and any connections to it."
        )
    }

    fn on_node_double_click(&self, _node: &GraphNode, _in_header: bool) -> NodeAction {
        NodeAction::OpenEditor
    }

    fn write_layout(&self, doc: &mut Self::Document, node: &GraphNode) -> Result<(), EditorError> {
        find_mut(doc, &node.id)?.editor = Some(node.layout());
        Ok(())
    }

    /// Root outline and a wrapped preview of the line.
    fn draw_node_extra(&self, canvas: &NodeCanvas<'_>, node: &GraphNode) {
        let theme = canvas.theme;
        let zoom = canvas.zoom();

        if node.is_root {
            canvas.painter.rect_stroke(
                canvas.rect(node.rect().expand(2.0)),
                0.0,
                Stroke::new(2.0 * zoom, theme.root_color),
                egui::StrokeKind::Middle,
            );
            canvas.painter.text(
                canvas.to_screen(node.pos - vec2(0.0, 6.0)),
                Align2::LEFT_BOTTOM,
                "ROOT",
                FontId::proportional(10.0 * zoom),
                theme.root_color,
            );
        }

        let Some(text) = node.text.as_deref().filter(|t| !t.is_empty()) else {
            return;
        };
        let top_left = pos2(node.pos.x + 10.0, node.pos.y + 50.0);
        let clip = egui::Rect::from_min_max(
            canvas.to_screen(top_left),
            canvas.to_screen(node.rect().max - vec2(10.0, 10.0)),
        );
        if !clip.is_positive() {
            return;
        }

        let galley = canvas.painter.layout(
            text.to_owned(),
            FontId::proportional(12.0 * zoom),
            theme.preview_text_color,
            (node.size.x - 20.0) * zoom,
        );
        canvas
            .painter
            .with_clip_rect(clip.intersect(canvas.painter.clip_rect()))
            .galley(clip.min, galley, theme.preview_text_color);
    }
}
