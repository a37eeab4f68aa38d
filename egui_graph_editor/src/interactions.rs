//! Turns egui input for the canvas into [`PointerEvent`]s.

use egui::{self, PointerButton, Pos2, Rect, Vec2};

use crate::types::PointerEvent;

/// Collect this frame's pointer events, in canvas-local screen coordinates.
///
/// Presses inside `blocked` (the inline title editor) belong to that widget
/// and are not reported.
pub(crate) fn collect_events(
    ui: &egui::Ui,
    response: &egui::Response,
    blocked: Option<Rect>,
) -> Vec<PointerEvent> {
    let mut events = Vec::new();
    let (latest, delta, released, scroll) = ui.input(|i| {
        (
            i.pointer.latest_pos(),
            i.pointer.delta(),
            i.pointer.any_released(),
            i.raw_scroll_delta.y,
        )
    });
    let Some(pointer) = latest else {
        return events;
    };

    let origin = response.rect.min;
    let pos = (pointer - origin).to_pos2();
    let inside = response.contains_pointer() && blocked.is_none_or(|r| !r.contains(pointer));

    if inside {
        for button in [PointerButton::Primary, PointerButton::Middle] {
            if ui.input(|i| i.pointer.button_pressed(button)) {
                events.push(PointerEvent::Down { pos, button });
            }
        }
    }
    if delta != Vec2::ZERO {
        events.push(PointerEvent::Move { pos });
    }
    if released {
        events.push(PointerEvent::Up { pos });
    }
    if inside && scroll != 0.0 {
        events.push(PointerEvent::Wheel {
            notches: scroll.signum(),
        });
    }
    if inside && response.double_clicked() {
        events.push(PointerEvent::DoubleClick { pos });
    }
    if inside && response.secondary_clicked() {
        events.push(PointerEvent::SecondaryClick { pos });
    }

    events
}

/// Move a canvas-local rectangle to absolute screen coordinates.
pub(crate) fn to_absolute(origin: Pos2, local: Rect) -> Rect {
    local.translate(origin.to_vec2())
}
