//! Location map: nodes are locations, edges are their `navigate` choices.

use egui::{Pos2, Vec2, vec2};
use story_library::{Choice, EditorLayout, Location};

use crate::error::EditorError;
use crate::model::{Connection, Directionality, GraphNode, NodeId, staggered_position};
use crate::theme::GraphEditorTheme;
use crate::traits::{EditorHost, GraphStrategy};
use crate::types::{ConnectionRequest, NodeAction};

pub const CHOICE_NODE_SIZE: Vec2 = Vec2::new(200.0, 120.0);
const GRID_CELL: Vec2 = Vec2::new(250.0, 200.0);

/// Strategy for a flat list of locations.
///
/// A pair of locations that navigate to each other is one bidirectional
/// edge. New edges get a generated "Go to ..." label without asking.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChoiceGraph;

fn display_name(loc: &Location) -> &str {
    if loc.name.is_empty() {
        &loc.id
    } else {
        &loc.name
    }
}

fn find_mut<'a>(doc: &'a mut [Location], id: &str) -> Result<&'a mut Location, EditorError> {
    doc.iter_mut()
        .find(|l| l.id == id)
        .ok_or_else(|| EditorError::UnknownRecord(id.to_owned()))
}

/// Drops the navigation edges to `target`; shop, talk and other choices stay.
fn remove_navigation_to(loc: &mut Location, target: &str) {
    loc.choices.retain(|c| c.navigation_target() != Some(target));
}

impl ChoiceGraph {
    fn link(&self, doc: &mut [Location], from: &str, to: &str) -> Result<(), EditorError> {
        let label = doc
            .iter()
            .find(|l| l.id == to)
            .map(|l| format!("Go to {}", display_name(l)))
            .ok_or_else(|| EditorError::UnknownRecord(to.to_owned()))?;
        find_mut(doc, from)?.choices.push(Choice::navigate(label, to, 0));
        Ok(())
    }
}

impl GraphStrategy for ChoiceGraph {
    type Document = Vec<Location>;

    fn document_key(&self, _doc: &Self::Document) -> String {
        "locations".to_owned()
    }

    fn theme(&self) -> GraphEditorTheme {
        GraphEditorTheme::choice()
    }

    fn default_node_size(&self) -> Vec2 {
        CHOICE_NODE_SIZE
    }

    fn load_nodes(&self, doc: &mut Self::Document) -> Vec<GraphNode> {
        doc.iter_mut()
            .enumerate()
            .map(|(index, loc)| {
                let mut layout = loc.editor.unwrap_or_else(|| {
                    let p = staggered_position(index, GRID_CELL);
                    EditorLayout::at(p.x, p.y)
                });
                let highest_port = loc.choices.iter().filter_map(|c| c.port_index).max();
                let ports = layout.ports.unwrap_or(loc.choices.len());
                layout.ports = Some(ports.max(highest_port.map_or(1, |p| p + 1)));

                let node = GraphNode::from_layout(
                    loc.id.clone(),
                    display_name(loc),
                    layout,
                    CHOICE_NODE_SIZE,
                    index,
                );
                loc.editor = Some(node.layout());
                node
            })
            .collect()
    }

    fn interpret_connections(&self, doc: &Self::Document, _nodes: &[GraphNode]) -> Vec<Connection> {
        let mut connections = Vec::new();
        for loc in doc {
            for (index, choice) in loc.choices.iter().enumerate() {
                let Some(target) = choice.navigation_target() else {
                    continue;
                };
                let back = doc
                    .iter()
                    .find(|l| l.id == target)
                    .is_some_and(|t| t.navigates_to(&loc.id));
                connections.push(Connection {
                    from: loc.id.clone(),
                    to: target.to_owned(),
                    label: choice.text.clone(),
                    direction: if back {
                        Directionality::Bidirectional
                    } else {
                        Directionality::OneWay
                    },
                    choice_index: index,
                    port: choice.port_index.unwrap_or(0),
                });
            }
        }
        connections
    }

    fn on_connection_create(&self, _source: &GraphNode, target: &GraphNode) -> ConnectionRequest {
        ConnectionRequest::Commit(format!("Go to {}", target.name))
    }

    fn commit_connection(
        &self,
        doc: &mut Self::Document,
        source: &str,
        target: &str,
        label: &str,
        port: usize,
    ) -> Result<bool, EditorError> {
        let loc = find_mut(doc, source)?;
        if loc.navigates_to(target) {
            return Ok(false);
        }
        loc.choices.push(Choice::navigate(label, target, port));
        Ok(true)
    }

    /// Removes the edge in both directions.
    fn remove_connection(
        &self,
        doc: &mut Self::Document,
        from: &str,
        to: &str,
    ) -> Result<(), EditorError> {
        remove_navigation_to(find_mut(doc, from)?, to);
        remove_navigation_to(find_mut(doc, to)?, from);
        Ok(())
    }

    /// With `a` the lower id: a→b, then b→a, then both, then neither.
    fn toggle_direction(
        &self,
        doc: &mut Self::Document,
        a: &str,
        b: &str,
    ) -> Result<bool, EditorError> {
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        let forward = find_mut(doc, a)?.navigates_to(b);
        let backward = find_mut(doc, b)?.navigates_to(a);

        match (forward, backward) {
            (true, false) => {
                remove_navigation_to(find_mut(doc, a)?, b);
                self.link(doc, b, a)?;
            }
            (false, true) => self.link(doc, a, b)?,
            (true, true) => {
                remove_navigation_to(find_mut(doc, a)?, b);
                remove_navigation_to(find_mut(doc, b)?, a);
            }
            (false, false) => self.link(doc, a, b)?,
        }
        Ok(true)
    }

    /// Locations are created by the host.
    fn on_node_create(
        &self,
        _doc: &mut Self::Document,
        at: Pos2,
        host: &mut dyn EditorHost,
    ) -> Result<Option<NodeId>, EditorError> {
        Ok(host.create_node_at(at))
    }

    fn remove_node(&self, doc: &mut Self::Document, node: &str) -> Result<(), EditorError> {
        let index = doc
            .iter()
            .position(|l| l.id == node)
            .ok_or_else(|| EditorError::UnknownRecord(node.to_owned()))?;
        doc.remove(index);
        for loc in doc.iter_mut() {
            loc.choices.retain(|c| c.target.as_deref() != Some(node));
        }
        Ok(())
    }

    fn delete_node_message(&self, node: &GraphNode) -> String {
        format!("Are you sure you want to delete \"{}\"?", node.name)
    }

    fn on_node_double_click(&self, _node: &GraphNode, in_header: bool) -> NodeAction {
        if in_header {
            NodeAction::Rename
        } else {
            NodeAction::OpenEditor
        }
    }

    fn rename(&self, doc: &mut Self::Document, node: &str, name: &str) -> Result<(), EditorError> {
        find_mut(doc, node)?.name = name.to_owned();
        Ok(())
    }

    fn write_layout(&self, doc: &mut Self::Document, node: &GraphNode) -> Result<(), EditorError> {
        find_mut(doc, &node.id)?.editor = Some(node.layout());
        Ok(())
    }
}
