//! Theming for the graph editor.

use egui::Color32;

/// Colors and metrics used when painting the canvas.
///
/// Lengths are in world units and get multiplied by the zoom scale.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphEditorTheme {
    /// Canvas background.
    pub background_color: Color32,
    /// Grid line color.
    pub grid_color: Color32,
    /// Grid spacing.
    pub grid_spacing: f32,
    /// Node body fill.
    pub node_body_color: Color32,
    /// Header band fill.
    pub header_color: Color32,
    /// Node outline (unselected).
    pub border_color: Color32,
    /// Node outline and glow when selected.
    pub selection_color: Color32,
    /// Corner rounding for nodes.
    pub node_rounding: f32,
    /// Title text.
    pub title_color: Color32,
    /// Secondary text such as the id line.
    pub muted_text_color: Color32,
    /// Port circle fill.
    pub port_color: Color32,
    /// Port circle radius.
    pub port_radius: f32,
    /// Connection line color.
    pub connection_color: Color32,
    /// Connection line width.
    pub connection_width: f32,
    /// Midpoint badge fill.
    pub badge_fill: Color32,
    /// Midpoint badge outline and glyph.
    pub badge_stroke: Color32,
    /// Midpoint badge radius.
    pub badge_radius: f32,
    /// Live connection preview line.
    pub preview_color: Color32,
    /// Delete control tint.
    pub delete_color: Color32,
    /// Outline and label of the root node.
    pub root_color: Color32,
    /// Body text preview.
    pub preview_text_color: Color32,
}

impl GraphEditorTheme {
    /// Palette for the location map.
    pub fn choice() -> Self {
        Self {
            background_color: Color32::from_rgb(0x1e, 0x1e, 0x1e),
            grid_color: Color32::from_rgb(0x2a, 0x2a, 0x2a),
            grid_spacing: 50.0,
            node_body_color: Color32::from_rgb(0x2d, 0x2d, 0x2d),
            header_color: Color32::from_rgb(0x38, 0x38, 0x38),
            border_color: Color32::from_rgb(0x44, 0x44, 0x44),
            selection_color: Color32::from_rgb(0x0a, 0x84, 0xff),
            node_rounding: 8.0,
            title_color: Color32::WHITE,
            muted_text_color: Color32::from_rgb(0x88, 0x88, 0x88),
            port_color: Color32::from_rgb(0xaa, 0xaa, 0xaa),
            port_radius: 5.0,
            connection_color: Color32::from_rgb(0x88, 0x88, 0x88),
            connection_width: 3.0,
            badge_fill: Color32::from_rgb(0x22, 0x22, 0x22),
            badge_stroke: Color32::from_rgb(0xaa, 0xaa, 0xaa),
            badge_radius: 12.0,
            preview_color: Color32::WHITE,
            delete_color: Color32::from_rgb(0xff, 0x45, 0x3a),
            root_color: Color32::YELLOW,
            preview_text_color: Color32::from_rgb(0xcc, 0xcc, 0xcc),
        }
    }

    /// Palette for dialogue trees.
    pub fn dialogue() -> Self {
        Self {
            node_body_color: Color32::from_rgb(0x23, 0x23, 0x38),
            header_color: Color32::from_rgb(0x2e, 0x2e, 0x4a),
            border_color: Color32::from_rgb(0x55, 0x55, 0x66),
            ..Self::choice()
        }
    }
}

impl Default for GraphEditorTheme {
    fn default() -> Self {
        Self::choice()
    }
}
