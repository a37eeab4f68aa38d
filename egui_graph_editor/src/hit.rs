//! Finds the interactive target under a world point.

use egui::Pos2;

use crate::model::{Connection, GraphModel, GraphNode, PORT_HIT_RADIUS, Side};
use crate::router::route;

/// Radius around an edge's midpoint that counts as hitting the edge.
pub const CONNECTION_HIT_RADIUS: f32 = 20.0;
/// Horizontal slack around a node when dropping a connection on it.
pub const RELEASE_MARGIN: f32 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    ResizeHandle(usize),
    DeleteControl(usize),
    AddPort(usize),
    RemovePort(usize),
    Port { node: usize, port: usize, side: Side },
    Body(usize),
    Canvas,
}

/// Tests nodes topmost first (last drawn wins). Within a node the small
/// controls take priority over ports, and ports over the body.
pub fn hit_test(nodes: &[GraphNode], world: Pos2) -> HitTarget {
    for (index, node) in nodes.iter().enumerate().rev() {
        if node.resize_handle_rect().contains(world) {
            return HitTarget::ResizeHandle(index);
        }
        if node.delete_rect().contains(world) {
            return HitTarget::DeleteControl(index);
        }
        if node.add_port_rect().contains(world) {
            return HitTarget::AddPort(index);
        }
        if node.remove_port_rect().contains(world) {
            return HitTarget::RemovePort(index);
        }
        for port in 0..node.port_count {
            for side in [Side::Right, Side::Left] {
                if node.port_anchor(port, side).distance(world) < PORT_HIT_RADIUS {
                    return HitTarget::Port {
                        node: index,
                        port,
                        side,
                    };
                }
            }
        }
        if node.rect().contains(world) {
            return HitTarget::Body(index);
        }
    }
    HitTarget::Canvas
}

/// Topmost node whose body contains the point.
pub fn node_at(nodes: &[GraphNode], world: Pos2) -> Option<usize> {
    nodes.iter().rposition(|n| n.rect().contains(world))
}

/// First drawn connection whose midpoint lies within [`CONNECTION_HIT_RADIUS`].
pub fn connection_at(model: &GraphModel, world: Pos2) -> Option<&Connection> {
    model.connections.iter().filter(|c| c.is_drawn()).find(|conn| {
        let (Some(from), Some(to)) = (model.node(&conn.from), model.node(&conn.to)) else {
            return false;
        };
        route(from, to, conn.port).midpoint().distance(world) < CONNECTION_HIT_RADIUS
    })
}

/// Node a connection drag dropped onto, never the source itself.
pub fn release_target(nodes: &[GraphNode], source: usize, world: Pos2) -> Option<usize> {
    nodes.iter().enumerate().rev().find_map(|(index, node)| {
        let rect = node.rect();
        let inside = world.x >= rect.min.x - RELEASE_MARGIN
            && world.x <= rect.max.x + RELEASE_MARGIN
            && world.y >= rect.min.y
            && world.y <= rect.max.y;
        (index != source && inside).then_some(index)
    })
}
