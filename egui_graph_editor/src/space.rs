//! Conversion between canvas (screen) coordinates and world coordinates.

use egui::{Pos2, Rect, Vec2};

pub const MIN_SCALE: f32 = 0.1;
pub const MAX_SCALE: f32 = 5.0;
/// Multiplicative zoom change per wheel notch.
pub const ZOOM_STEP: f32 = 0.1;

/// Pan offset and zoom scale of the canvas.
///
/// Screen points are relative to the canvas' top-left corner.
/// `screen = world * scale + pan`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateSpace {
    pan: Vec2,
    scale: f32,
}

impl Default for CoordinateSpace {
    fn default() -> Self {
        Self {
            pan: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

impl CoordinateSpace {
    pub fn new(pan: Vec2, scale: f32) -> Self {
        let mut space = Self {
            pan,
            ..Default::default()
        };
        space.set_scale(scale);
        space
    }

    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn to_world(&self, screen: Pos2) -> Pos2 {
        ((screen.to_vec2() - self.pan) / self.scale).to_pos2()
    }

    pub fn to_screen(&self, world: Pos2) -> Pos2 {
        (world.to_vec2() * self.scale + self.pan).to_pos2()
    }

    pub fn rect_to_screen(&self, world: Rect) -> Rect {
        Rect::from_min_max(self.to_screen(world.min), self.to_screen(world.max))
    }

    /// World rectangle covered by a canvas of the given size.
    pub fn visible_world_rect(&self, canvas_size: Vec2) -> Rect {
        Rect::from_min_max(
            self.to_world(Pos2::ZERO),
            self.to_world(canvas_size.to_pos2()),
        )
    }

    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    /// Sets the scale, clamped to `[MIN_SCALE, MAX_SCALE]`. Non-finite values are ignored.
    pub fn set_scale(&mut self, scale: f32) {
        if scale.is_finite() {
            self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
        }
    }

    /// Applies one wheel notch. Positive zooms in, negative zooms out.
    ///
    /// The pan offset is left alone, so zoom pivots on the world origin
    /// rather than on the cursor.
    pub fn zoom(&mut self, notches: f32) {
        let factor = if notches > 0.0 {
            1.0 + ZOOM_STEP
        } else if notches < 0.0 {
            1.0 - ZOOM_STEP
        } else {
            return;
        };
        self.set_scale(self.scale * factor);
    }
}
