//! Drawing utilities for the graph editor.

use egui::epaint::CubicBezierShape;
use egui::{Color32, Pos2, Shape, Stroke, Vec2, pos2, vec2};

use crate::render::NodeCanvas;
use crate::router::{Glyph, Route};

/// Draw the background grid with lines on multiples of `spacing` world units,
/// limited to the visible part of the world.
pub fn draw_grid(canvas: &NodeCanvas<'_>, canvas_size: Vec2, color: Color32, spacing: f32) {
    if spacing <= 0.0 {
        return;
    }
    let visible = canvas.space.visible_world_rect(canvas_size);
    let stroke = Stroke::new(1.0, color);

    let mut x = (visible.min.x / spacing).floor() * spacing;
    while x <= visible.max.x {
        canvas.painter.line_segment(
            [
                canvas.to_screen(pos2(x, visible.min.y)),
                canvas.to_screen(pos2(x, visible.max.y)),
            ],
            stroke,
        );
        x += spacing;
    }

    let mut y = (visible.min.y / spacing).floor() * spacing;
    while y <= visible.max.y {
        canvas.painter.line_segment(
            [
                canvas.to_screen(pos2(visible.min.x, y)),
                canvas.to_screen(pos2(visible.max.x, y)),
            ],
            stroke,
        );
        y += spacing;
    }
}

/// Draw a routed edge as a cubic bezier, with its badge at the midpoint.
pub fn draw_route(canvas: &NodeCanvas<'_>, route: &Route, glyph: Glyph) {
    let theme = canvas.theme;
    let zoom = canvas.zoom();
    let points = route.points().map(|p| canvas.to_screen(p));

    canvas.painter.add(CubicBezierShape::from_points_stroke(
        points,
        false,
        Color32::TRANSPARENT,
        Stroke::new(theme.connection_width * zoom, theme.connection_color),
    ));

    draw_badge(canvas, canvas.to_screen(route.midpoint()), glyph);
}

fn draw_badge(canvas: &NodeCanvas<'_>, center: Pos2, glyph: Glyph) {
    let theme = canvas.theme;
    let zoom = canvas.zoom();
    let radius = theme.badge_radius * zoom;
    let stroke = Stroke::new(2.0 * zoom, theme.badge_stroke);

    canvas
        .painter
        .circle(center, radius, theme.badge_fill, stroke);

    let s = radius * 0.4;
    match glyph {
        Glyph::ChevronRight | Glyph::ChevronLeft => {
            let dir = if glyph == Glyph::ChevronRight { 1.0 } else { -1.0 };
            canvas.painter.add(Shape::line(
                vec![
                    center + vec2(-s * 0.5 * dir, -s),
                    center + vec2(s * 0.5 * dir, 0.0),
                    center + vec2(-s * 0.5 * dir, s),
                ],
                stroke,
            ));
        }
        Glyph::Equals => {
            for dy in [-s * 0.4, s * 0.4] {
                canvas.painter.line_segment(
                    [center + vec2(-s, dy), center + vec2(s, dy)],
                    stroke,
                );
            }
        }
    }
}

/// Draw the dashed line that follows the pointer while connecting.
pub fn draw_preview(canvas: &NodeCanvas<'_>, from: Pos2, to: Pos2) {
    let theme = canvas.theme;
    let zoom = canvas.zoom();
    let shapes = Shape::dashed_line(
        &[canvas.to_screen(from), canvas.to_screen(to)],
        Stroke::new(theme.connection_width * zoom, theme.preview_color),
        5.0 * zoom,
        5.0 * zoom,
    );
    canvas.painter.extend(shapes);
}
