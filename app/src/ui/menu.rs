use eframe::egui::{self, Button};
use egui_phosphor::regular as icons;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    OpenProject,
    Save,
    Quit,
}

pub fn menu_bar(ui: &mut egui::Ui, triggered_action: &mut Option<MenuAction>) {
    egui::MenuBar::new().ui(ui, |ui| {
        ui.menu_button("File", |ui| {
            for (action, icon, text, shortcut) in [
                (MenuAction::OpenProject, icons::FOLDER_OPEN, "Open...", "Ctrl+O"),
                (MenuAction::Save, icons::FLOPPY_DISK, "Save", "Ctrl+S"),
                (MenuAction::Quit, icons::SIGN_OUT, "Quit", ""),
            ] {
                let button = Button::new(egui::RichText::new(format!("{icon} {text}")))
                    .shortcut_text(shortcut);
                if ui.add(button).clicked() {
                    *triggered_action = Some(action);
                    ui.close();
                }
            }
        });
    });
}

/// Keyboard equivalents of the menu entries.
pub fn shortcut_action(ctx: &egui::Context) -> Option<MenuAction> {
    ctx.input_mut(|i| {
        if i.consume_key(egui::Modifiers::COMMAND, egui::Key::S) {
            Some(MenuAction::Save)
        } else if i.consume_key(egui::Modifiers::COMMAND, egui::Key::O) {
            Some(MenuAction::OpenProject)
        } else {
            None
        }
    })
}
