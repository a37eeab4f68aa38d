//! Painting of the node chrome shared by every graph flavor.

use egui::{self, Align2, Color32, CornerRadius, FontId, Pos2, Rect, Shadow, Stroke, StrokeKind};

use crate::model::{GraphNode, Side};
use crate::render::NodeCanvas;

/// Draw body, header, controls and ports of one node.
pub(crate) fn draw_node(canvas: &NodeCanvas<'_>, node: &GraphNode, is_selected: bool) {
    let theme = canvas.theme;
    let zoom = canvas.zoom();
    let rect = canvas.rect(node.rect());
    let rounding = theme.node_rounding * zoom;

    // Shadow
    let shadow = Shadow {
        offset: [0, 2],
        blur: if is_selected { 15 } else { 5 },
        spread: 0,
        color: if is_selected {
            theme.selection_color.gamma_multiply(0.6)
        } else {
            Color32::from_black_alpha(140)
        },
    };
    canvas
        .painter
        .add(shadow.as_shape(rect, CornerRadius::same(rounding as u8)));

    // Body
    canvas
        .painter
        .rect_filled(rect, rounding, theme.node_body_color);
    let border = if is_selected {
        Stroke::new(2.0 * zoom, theme.selection_color)
    } else {
        Stroke::new(1.0 * zoom, theme.border_color)
    };
    canvas
        .painter
        .rect_stroke(rect, rounding, border, StrokeKind::Inside);

    draw_header(canvas, node, rounding as u8);
    draw_port_controls(canvas, node);
    draw_ports(canvas, node);
    draw_delete_control(canvas, node);
    draw_resize_handle(canvas, node);
}

fn draw_header(canvas: &NodeCanvas<'_>, node: &GraphNode, rounding: u8) {
    let theme = canvas.theme;
    let zoom = canvas.zoom();
    let header = canvas.rect(node.header_rect());

    canvas.painter.rect_filled(
        header,
        CornerRadius {
            nw: rounding,
            ne: rounding,
            sw: 0,
            se: 0,
        },
        theme.header_color,
    );

    let clip = canvas
        .painter
        .with_clip_rect(header.with_max_x(header.max.x - 55.0 * zoom));
    clip.text(
        header.left_center() + egui::vec2(10.0 * zoom, 0.0),
        Align2::LEFT_CENTER,
        &node.name,
        FontId::proportional(14.0 * zoom),
        theme.title_color,
    );

    // id just below the header
    canvas.painter.text(
        canvas.to_screen(node.pos + egui::vec2(10.0, 40.0)),
        Align2::LEFT_CENTER,
        &node.id,
        FontId::monospace(10.0 * zoom),
        theme.muted_text_color,
    );
}

fn draw_port_controls(canvas: &NodeCanvas<'_>, node: &GraphNode) {
    let theme = canvas.theme;
    let zoom = canvas.zoom();
    let font = FontId::proportional(14.0 * zoom);

    let minus_color = if node.port_count > 1 {
        theme.title_color
    } else {
        theme.muted_text_color
    };
    for (rect, label, color) in [
        (node.add_port_rect(), "+", theme.title_color),
        (node.remove_port_rect(), "\u{2212}", minus_color),
    ] {
        let rect = canvas.rect(rect);
        canvas
            .painter
            .rect_filled(rect, 3.0 * zoom, theme.node_body_color);
        canvas
            .painter
            .text(rect.center(), Align2::CENTER_CENTER, label, font.clone(), color);
    }
}

fn draw_ports(canvas: &NodeCanvas<'_>, node: &GraphNode) {
    let theme = canvas.theme;
    let zoom = canvas.zoom();
    let radius = theme.port_radius * zoom;
    let stroke = Stroke::new(1.0 * zoom, theme.border_color);

    for port in 0..node.port_count {
        for side in [Side::Left, Side::Right] {
            let center = canvas.to_screen(node.port_anchor(port, side));
            canvas
                .painter
                .circle(center, radius, theme.port_color, stroke);
        }
    }
}

fn draw_delete_control(canvas: &NodeCanvas<'_>, node: &GraphNode) {
    let rect = canvas.rect(node.delete_rect());
    let inset = rect.shrink(rect.width() * 0.25);
    let stroke = Stroke::new(2.0 * canvas.zoom(), canvas.theme.delete_color);

    canvas
        .painter
        .line_segment([inset.left_top(), inset.right_bottom()], stroke);
    canvas
        .painter
        .line_segment([inset.right_top(), inset.left_bottom()], stroke);
}

/// Draw the resize grip triangle in the bottom-right corner.
fn draw_resize_handle(canvas: &NodeCanvas<'_>, node: &GraphNode) {
    let handle: Rect = canvas.rect(node.resize_handle_rect());
    let pts = vec![
        handle.right_bottom(),
        Pos2::new(handle.left(), handle.bottom()),
        Pos2::new(handle.right(), handle.top()),
    ];
    canvas.painter.add(egui::Shape::convex_polygon(
        pts,
        canvas.theme.border_color,
        Stroke::NONE,
    ));
}
