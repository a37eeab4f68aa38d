//! Anchor and control points for drawing an edge between two nodes.

use egui::{Pos2, pos2, vec2};

use crate::model::{Directionality, GraphNode, Side};

/// Smallest horizontal distance between an anchor and its control point.
pub const MIN_CONTROL_OFFSET: f32 = 50.0;

/// A cubic curve from a source port to the target's facing edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Route {
    pub start: Pos2,
    pub ctrl1: Pos2,
    pub ctrl2: Pos2,
    pub end: Pos2,
}

/// Symbol drawn in the midpoint badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    ChevronRight,
    ChevronLeft,
    Equals,
}

impl Route {
    pub fn points(&self) -> [Pos2; 4] {
        [self.start, self.ctrl1, self.ctrl2, self.end]
    }

    /// Midpoint of the chord; the badge and the edge hit area sit here.
    pub fn midpoint(&self) -> Pos2 {
        self.start.lerp(self.end, 0.5)
    }

    pub fn glyph(&self, direction: Directionality) -> Glyph {
        match direction {
            Directionality::Bidirectional => Glyph::Equals,
            Directionality::OneWay if self.end.x < self.start.x => Glyph::ChevronLeft,
            Directionality::OneWay => Glyph::ChevronRight,
        }
    }
}

/// Routes an edge leaving `source` through `port`.
///
/// When the target lies to the right the edge leaves the source's right edge
/// and enters the target's left edge at mid height; otherwise it is mirrored.
/// Control points push outward from each node so the curve never folds back
/// through a node body.
pub fn route(source: &GraphNode, target: &GraphNode, port: usize) -> Route {
    let target_right = target.center().x > source.center().x;
    let port_y = source.port_y(port);
    let target_mid = target.center().y;

    let (start, end) = if target_right {
        (
            pos2(source.pos.x + source.size.x, port_y),
            pos2(target.pos.x, target_mid),
        )
    } else {
        (
            pos2(source.pos.x, port_y),
            pos2(target.pos.x + target.size.x, target_mid),
        )
    };

    let offset = ((end.x - start.x).abs() / 2.0).max(MIN_CONTROL_OFFSET);
    let outward = if target_right { offset } else { -offset };

    Route {
        start,
        ctrl1: start + vec2(outward, 0.0),
        ctrl2: end - vec2(outward, 0.0),
        end,
    }
}

/// Start of the live preview line: the source edge nearest the pointer.
pub fn preview_start(source: &GraphNode, port: usize, pointer: Pos2) -> Pos2 {
    let side = if pointer.x > source.center().x {
        Side::Right
    } else {
        Side::Left
    };
    source.port_anchor(port, side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use story_library::EditorLayout;

    fn node_at(id: &str, x: f32, y: f32) -> GraphNode {
        GraphNode::from_layout(
            id,
            id,
            EditorLayout::full(x, y, 200.0, 120.0, 1),
            egui::vec2(200.0, 120.0),
            0,
        )
    }

    #[test]
    fn target_on_right_uses_right_then_left_edges() {
        let a = node_at("a", 0.0, 0.0);
        let b = node_at("b", 400.0, 100.0);
        let r = route(&a, &b, 0);

        assert_eq!(r.start, pos2(200.0, 75.0));
        assert_eq!(r.end, pos2(400.0, 160.0));
        assert_eq!(r.ctrl1, pos2(300.0, 75.0));
        assert_eq!(r.ctrl2, pos2(300.0, 160.0));
        assert_eq!(r.glyph(Directionality::OneWay), Glyph::ChevronRight);
    }

    #[test]
    fn target_on_left_is_mirrored() {
        let a = node_at("a", 400.0, 0.0);
        let b = node_at("b", 0.0, 0.0);
        let r = route(&a, &b, 0);

        assert_eq!(r.start, pos2(400.0, 75.0));
        assert_eq!(r.end, pos2(200.0, 60.0));
        assert_eq!(r.ctrl1.x, 300.0);
        assert_eq!(r.ctrl2.x, 300.0);
        assert_eq!(r.glyph(Directionality::OneWay), Glyph::ChevronLeft);
        assert_eq!(r.glyph(Directionality::Bidirectional), Glyph::Equals);
    }

    #[test]
    fn close_nodes_keep_minimum_control_offset() {
        let a = node_at("a", 0.0, 0.0);
        let b = node_at("b", 220.0, 0.0);
        let r = route(&a, &b, 0);

        assert_eq!(r.ctrl1.x - r.start.x, MIN_CONTROL_OFFSET);
        assert_eq!(r.end.x - r.ctrl2.x, MIN_CONTROL_OFFSET);
    }

    #[test]
    fn midpoint_is_chord_center() {
        let a = node_at("a", 0.0, 0.0);
        let b = node_at("b", 400.0, 0.0);
        assert_eq!(route(&a, &b, 0).midpoint(), pos2(300.0, 67.5));
    }

    #[test]
    fn preview_leaves_from_pointer_side() {
        let a = node_at("a", 0.0, 0.0);
        assert_eq!(preview_start(&a, 0, pos2(500.0, 0.0)).x, 200.0);
        assert_eq!(preview_start(&a, 0, pos2(-50.0, 0.0)).x, 0.0);
    }
}
