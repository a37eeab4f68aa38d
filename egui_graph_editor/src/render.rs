//! Paints one frame of the editor. Read-only over the model.

use egui::{Painter, Pos2, Rect};

use crate::drawing::{draw_grid, draw_preview, draw_route};
use crate::editor::GraphEditor;
use crate::node_rendering::draw_node;
use crate::router::{preview_start, route};
use crate::space::CoordinateSpace;
use crate::theme::GraphEditorTheme;
use crate::traits::GraphStrategy;

/// Painter plus the transform from world coordinates to absolute screen
/// coordinates for the canvas being drawn.
pub struct NodeCanvas<'a> {
    pub painter: &'a Painter,
    /// Top-left corner of the canvas on screen.
    pub origin: Pos2,
    pub space: CoordinateSpace,
    pub theme: &'a GraphEditorTheme,
}

impl NodeCanvas<'_> {
    pub fn to_screen(&self, world: Pos2) -> Pos2 {
        self.space.to_screen(world) + self.origin.to_vec2()
    }

    pub fn rect(&self, world: Rect) -> Rect {
        self.space
            .rect_to_screen(world)
            .translate(self.origin.to_vec2())
    }

    pub fn zoom(&self) -> f32 {
        self.space.scale()
    }
}

pub fn paint<S: GraphStrategy>(painter: &Painter, canvas_rect: Rect, editor: &GraphEditor<S>) {
    let theme = editor.theme();
    let model = editor.model();
    let painter = painter.with_clip_rect(canvas_rect);
    let canvas = NodeCanvas {
        painter: &painter,
        origin: canvas_rect.min,
        space: *editor.space(),
        theme,
    };

    painter.rect_filled(canvas_rect, 0.0, theme.background_color);
    draw_grid(
        &canvas,
        canvas_rect.size(),
        theme.grid_color,
        theme.grid_spacing,
    );

    for conn in model.connections.iter().filter(|c| c.is_drawn()) {
        let (Some(from), Some(to)) = (model.node(&conn.from), model.node(&conn.to)) else {
            continue;
        };
        let r = route(from, to, conn.port);
        draw_route(&canvas, &r, r.glyph(conn.direction));
    }

    for node in &model.nodes {
        draw_node(&canvas, node, model.is_selected(&node.id));
        editor.strategy().draw_node_extra(&canvas, node);
    }

    if let Some((source, port, pointer)) = editor.state().connection_preview() {
        if let Some(node) = model.node(source) {
            draw_preview(&canvas, preview_start(node, port, pointer), pointer);
        }
    }
}
