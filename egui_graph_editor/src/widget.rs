//! Main graph editor widget.

use egui::{self, FontId, Key, Rect, Sense};

use crate::editor::GraphEditor;
use crate::interactions::{self, to_absolute};
use crate::render;
use crate::traits::{EditorHost, GraphStrategy};

/// Shows a [`GraphEditor`] on the remaining space of a `Ui`.
pub struct GraphEditorWidget<'a, S: GraphStrategy> {
    editor: &'a mut GraphEditor<S>,
}

impl<'a, S: GraphStrategy> GraphEditorWidget<'a, S> {
    pub fn new(editor: &'a mut GraphEditor<S>) -> Self {
        Self { editor }
    }

    /// Feed this frame's input to the editor, then paint it.
    pub fn show(
        self,
        ui: &mut egui::Ui,
        doc: &mut S::Document,
        host: &mut dyn EditorHost,
    ) -> egui::Response {
        self.editor.ensure_loaded(doc);

        let available = ui.available_rect_before_wrap();
        let (response, painter) = ui.allocate_painter(available.size(), Sense::click_and_drag());
        let canvas_rect = response.rect;

        let blocked = self
            .editor
            .rename_field()
            .map(|field| to_absolute(canvas_rect.min, field));
        for event in interactions::collect_events(ui, &response, blocked) {
            self.editor.handle_event(doc, host, event);
        }

        render::paint(&painter, canvas_rect, self.editor);
        self.show_rename_field(ui, canvas_rect, doc, host);

        response
    }

    /// Inline title editor over the header. Enter or focus loss commits,
    /// Escape discards.
    fn show_rename_field(
        self,
        ui: &mut egui::Ui,
        canvas_rect: Rect,
        doc: &mut S::Document,
        host: &mut dyn EditorHost,
    ) {
        let Some(field) = self.editor.rename_field() else {
            return;
        };
        let rect = to_absolute(canvas_rect.min, field);
        let font = FontId::proportional(14.0 * self.editor.space().scale());
        let Some(buffer) = self.editor.rename_buffer_mut() else {
            return;
        };

        let edit = ui.put(rect, egui::TextEdit::singleline(buffer).font(font));
        if edit.lost_focus() {
            if ui.input(|i| i.key_pressed(Key::Escape)) {
                self.editor.cancel_rename();
            } else {
                self.editor.commit_rename(doc, host);
            }
        } else if !edit.has_focus() {
            edit.request_focus();
        }
    }
}
