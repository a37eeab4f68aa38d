//! In-memory graph rebuilt from the external records.
//!
//! Nodes carry their own geometry; connections are derived from the records
//! by the active strategy and are never stored back.

use std::collections::HashSet;

use egui::{Pos2, Rect, Vec2, pos2, vec2};
use log::warn;
use story_library::EditorLayout;

pub type NodeId = String;

/// Height of the title band at the top of every node.
pub const HEADER_HEIGHT: f32 = 30.0;
pub const MIN_NODE_SIZE: Vec2 = Vec2::new(100.0, 80.0);
pub const PORT_HIT_RADIUS: f32 = 10.0;
pub const RESIZE_HANDLE_SIZE: f32 = 15.0;
/// Where unplaced nodes start in the staggered grid.
pub const LAYOUT_ORIGIN: Pos2 = Pos2::new(100.0, 100.0);
const LAYOUT_COLUMNS: usize = 5;

/// Which vertical edge of a node a port sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
    pub id: NodeId,
    pub name: String,
    /// Body text shown as a preview (dialogue lines).
    pub text: Option<String>,
    pub pos: Pos2,
    pub size: Vec2,
    pub port_count: usize,
    /// Index of the owning record in the document at load time.
    pub record_index: usize,
    pub is_root: bool,
}

impl GraphNode {
    /// Builds a node from stored layout, filling gaps from `default_size`
    /// and clamping to the minimum size and one port.
    pub fn from_layout(
        id: impl Into<NodeId>,
        name: impl Into<String>,
        layout: EditorLayout,
        default_size: Vec2,
        record_index: usize,
    ) -> Self {
        let size = vec2(
            layout.w.unwrap_or(default_size.x),
            layout.h.unwrap_or(default_size.y),
        );
        Self {
            id: id.into(),
            name: name.into(),
            text: None,
            pos: pos2(layout.x, layout.y),
            size: size.max(MIN_NODE_SIZE),
            port_count: layout.ports.unwrap_or(1).max(1),
            record_index,
            is_root: false,
        }
    }

    pub fn layout(&self) -> EditorLayout {
        EditorLayout::full(
            self.pos.x,
            self.pos.y,
            self.size.x,
            self.size.y,
            self.port_count,
        )
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.pos, self.size)
    }

    pub fn center(&self) -> Pos2 {
        self.rect().center()
    }

    pub fn header_rect(&self) -> Rect {
        Rect::from_min_size(self.pos, vec2(self.size.x, HEADER_HEIGHT))
    }

    pub fn resize_handle_rect(&self) -> Rect {
        let max = self.rect().max;
        Rect::from_min_max(max - Vec2::splat(RESIZE_HANDLE_SIZE), max)
    }

    pub fn delete_rect(&self) -> Rect {
        let bottom = self.pos.y + self.size.y;
        Rect::from_min_max(
            pos2(self.pos.x + 5.0, bottom - 25.0),
            pos2(self.pos.x + 25.0, bottom - 5.0),
        )
    }

    pub fn add_port_rect(&self) -> Rect {
        let right = self.pos.x + self.size.x;
        Rect::from_min_max(
            pos2(right - 25.0, self.pos.y + 5.0),
            pos2(right - 5.0, self.pos.y + 20.0),
        )
    }

    pub fn remove_port_rect(&self) -> Rect {
        let right = self.pos.x + self.size.x;
        Rect::from_min_max(
            pos2(right - 50.0, self.pos.y + 5.0),
            pos2(right - 30.0, self.pos.y + 20.0),
        )
    }

    /// Vertical position of a port; ports are spread evenly below the header.
    /// Out-of-range indices clamp to the last port.
    pub fn port_y(&self, port: usize) -> f32 {
        let count = self.port_count.max(1);
        let port = port.min(count - 1);
        let available = self.size.y - HEADER_HEIGHT;
        let spacing = available / (count + 1) as f32;
        self.pos.y + HEADER_HEIGHT + spacing * (port + 1) as f32
    }

    pub fn port_anchor(&self, port: usize, side: Side) -> Pos2 {
        let x = match side {
            Side::Left => self.pos.x,
            Side::Right => self.pos.x + self.size.x,
        };
        pos2(x, self.port_y(port))
    }

    pub fn move_center_to(&mut self, center: Pos2) {
        self.pos = center - self.size / 2.0;
    }

    pub fn resize_to(&mut self, size: Vec2) {
        self.size = size.max(MIN_NODE_SIZE);
    }

    pub fn set_port_count(&mut self, count: usize) {
        self.port_count = count.max(1);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Directionality {
    OneWay,
    Bidirectional,
}

/// An edge derived from a choice or response option.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
    pub from: NodeId,
    pub to: NodeId,
    pub label: String,
    pub direction: Directionality,
    /// Index of the originating choice within the source record.
    pub choice_index: usize,
    pub port: usize,
}

impl Connection {
    /// A bidirectional pair is drawn once, from the lower id to the higher.
    pub fn is_drawn(&self) -> bool {
        self.direction == Directionality::OneWay || self.from < self.to
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphModel {
    pub nodes: Vec<GraphNode>,
    pub connections: Vec<Connection>,
    pub selected: Option<NodeId>,
}

impl GraphModel {
    /// Node ids must be unique; a later record reusing an id is left out.
    pub fn new(nodes: Vec<GraphNode>) -> Self {
        let mut seen = HashSet::new();
        let nodes = nodes
            .into_iter()
            .filter(|node| {
                let first = seen.insert(node.id.clone());
                if !first {
                    warn!(
                        "duplicate node id {} (record {}) ignored",
                        node.id, node.record_index
                    );
                }
                first
            })
            .collect();
        Self {
            nodes,
            ..Default::default()
        }
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut GraphNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Replaces the connection set, dropping edges whose ends are gone.
    pub fn set_connections(&mut self, connections: Vec<Connection>) {
        let mut connections = connections;
        connections.retain(|c| self.node(&c.from).is_some() && self.node(&c.to).is_some());
        self.connections = connections;
    }

    pub fn connection_between(&self, from: &str, to: &str) -> Option<&Connection> {
        self.connections
            .iter()
            .find(|c| c.from == from && c.to == to)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    /// Drops a selection that no longer names a node.
    pub(crate) fn prune_selection(&mut self) {
        if let Some(id) = &self.selected {
            if self.node(id).is_none() {
                self.selected = None;
            }
        }
    }
}

/// Deterministic position for the `index`-th node without stored layout.
///
/// Nodes fill rows of five cells; odd columns drop by a quarter cell so
/// that neighbouring edges do not line up.
pub fn staggered_position(index: usize, cell: Vec2) -> Pos2 {
    let column = index % LAYOUT_COLUMNS;
    let row = index / LAYOUT_COLUMNS;
    let stagger = if column % 2 == 1 { cell.y * 0.25 } else { 0.0 };
    pos2(
        LAYOUT_ORIGIN.x + column as f32 * cell.x,
        LAYOUT_ORIGIN.y + row as f32 * cell.y + stagger,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(ports: usize) -> GraphNode {
        GraphNode::from_layout(
            "a",
            "A",
            EditorLayout::full(0.0, 0.0, 200.0, 130.0, ports),
            vec2(200.0, 120.0),
            0,
        )
    }

    #[test]
    fn ports_spread_below_header() {
        let n = node(2);
        // 100 px of body split into three gaps
        assert!((n.port_y(0) - (30.0 + 100.0 / 3.0)).abs() < 1e-4);
        assert!((n.port_y(1) - (30.0 + 200.0 / 3.0)).abs() < 1e-4);
    }

    #[test]
    fn port_index_clamps_to_last_port() {
        let n = node(2);
        assert_eq!(n.port_y(7), n.port_y(1));
    }

    #[test]
    fn layout_fills_defaults_and_clamps() {
        let n = GraphNode::from_layout(
            "a",
            "A",
            EditorLayout {
                x: 5.0,
                y: 6.0,
                w: Some(10.0),
                h: None,
                ports: Some(0),
            },
            vec2(220.0, 140.0),
            3,
        );
        assert_eq!(n.size, vec2(100.0, 140.0));
        assert_eq!(n.port_count, 1);
        assert_eq!(n.layout(), EditorLayout::full(5.0, 6.0, 100.0, 140.0, 1));
    }

    #[test]
    fn resize_floors_at_minimum() {
        let mut n = node(1);
        n.resize_to(vec2(10.0, 500.0));
        assert_eq!(n.size, vec2(100.0, 500.0));
    }

    #[test]
    fn staggered_positions_are_stable_and_distinct() {
        let cell = vec2(250.0, 200.0);
        let positions: Vec<Pos2> = (0..12).map(|i| staggered_position(i, cell)).collect();
        assert_eq!(positions[0], LAYOUT_ORIGIN);
        assert_eq!(positions[1], pos2(350.0, 150.0));
        assert_eq!(positions[5], pos2(100.0, 300.0));
        for (i, a) in positions.iter().enumerate() {
            for b in &positions[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(staggered_position(7, cell), positions[7]);
    }

    #[test]
    fn duplicate_ids_keep_first_node() {
        let mut second = node(1);
        second.pos = pos2(400.0, 0.0);
        second.record_index = 1;
        let model = GraphModel::new(vec![node(1), second]);

        assert_eq!(model.nodes.len(), 1);
        assert_eq!(model.nodes[0].pos, pos2(0.0, 0.0));
        assert_eq!(model.nodes[0].record_index, 0);
    }

    #[test]
    fn dangling_connections_are_dropped() {
        let mut model = GraphModel::new(vec![node(1)]);
        model.set_connections(vec![Connection {
            from: "a".into(),
            to: "ghost".into(),
            label: String::new(),
            direction: Directionality::OneWay,
            choice_index: 0,
            port: 0,
        }]);
        assert!(model.connections.is_empty());
    }
}
