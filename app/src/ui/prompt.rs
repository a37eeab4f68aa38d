use eframe::egui::{self, Align2, Color32, Context, Id, Key, Order};
use egui_graph_editor::LabelPrompt;

#[derive(Clone, Debug, PartialEq)]
pub enum PromptOutcome {
    Submitted(String),
    Cancelled,
}

/// Modal single-line text prompt. Enter or OK submits, Escape or Cancel
/// dismisses.
pub struct TextPrompt {
    id: Id,
    title: String,
    text: String,
    focused: bool,
}

impl TextPrompt {
    pub fn new(title: impl Into<String>, default: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id: Id::new("text_prompt").with(&title),
            title,
            text: default.into(),
            focused: false,
        }
    }

    pub fn from_label(prompt: &LabelPrompt) -> Self {
        Self::new(&prompt.title, &prompt.default)
    }

    /// Returns the outcome on the frame the prompt closes.
    pub fn show(&mut self, ctx: &Context) -> Option<PromptOutcome> {
        // Blocking backdrop
        egui::Area::new(self.id.with("backdrop"))
            .interactable(true)
            .fixed_pos(egui::pos2(0.0, 0.0))
            .order(Order::Middle)
            .show(ctx, |ui| {
                let screen_rect = ctx.input(|i| i.screen_rect());
                ui.allocate_rect(screen_rect, egui::Sense::click());
                ui.painter()
                    .rect_filled(screen_rect, 0.0, Color32::from_black_alpha(100));
            });

        let mut outcome = None;
        egui::Window::new("Input")
            .id(self.id)
            .collapsible(false)
            .resizable(false)
            .order(Order::Foreground)
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(&self.title);
                let edit = ui.text_edit_singleline(&mut self.text);
                if !self.focused {
                    edit.request_focus();
                    self.focused = true;
                }
                if edit.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                    outcome = Some(PromptOutcome::Submitted(self.text.clone()));
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        outcome = Some(PromptOutcome::Submitted(self.text.clone()));
                    }
                    if ui.button("Cancel").clicked() {
                        outcome = Some(PromptOutcome::Cancelled);
                    }
                });
            });

        if outcome.is_none() && ctx.input(|i| i.key_pressed(Key::Escape)) {
            outcome = Some(PromptOutcome::Cancelled);
        }
        outcome
    }
}
