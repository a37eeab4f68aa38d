use eframe::egui;
use story_library::{DialogueNode, Location};

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct PanelResponse {
    pub changed: bool,
    pub make_root: bool,
}

/// Inspector fields of a location. Returns whether anything was edited.
pub fn location_panel(ui: &mut egui::Ui, location: &mut Location) -> bool {
    let mut changed = false;

    ui.heading("Location");
    ui.label(egui::RichText::new(&location.id).monospace().weak());
    ui.separator();

    ui.label("Name");
    changed |= ui.text_edit_singleline(&mut location.name).changed();

    ui.label("Description");
    let mut text = location.text.clone().unwrap_or_default();
    if ui.text_edit_multiline(&mut text).changed() {
        location.text = Some(text);
        changed = true;
    }

    ui.separator();
    ui.label(format!("{} choices", location.choices.len()));
    for choice in &location.choices {
        match choice.navigation_target() {
            Some(target) => ui.label(format!("{} → {}", choice.text, target)),
            None => ui.label(format!("{} ({})", choice.text, choice.action)),
        };
    }

    changed
}

pub fn dialogue_node_panel(
    ui: &mut egui::Ui,
    node: &mut DialogueNode,
    is_root: bool,
) -> PanelResponse {
    let mut response = PanelResponse::default();

    ui.heading("Dialogue node");
    ui.label(egui::RichText::new(&node.id).monospace().weak());
    ui.separator();

    ui.label("Speaker");
    response.changed |= ui.text_edit_singleline(&mut node.speaker).changed();

    ui.label("Text");
    response.changed |= ui.text_edit_multiline(&mut node.text).changed();

    ui.separator();
    for option in &mut node.choices {
        ui.horizontal(|ui| {
            response.changed |= ui.text_edit_singleline(&mut option.text).changed();
            ui.label(format!("→ {}", option.target().unwrap_or("-")));
        });
    }

    ui.separator();
    if is_root {
        ui.label("Root node");
    } else if ui.button("Set as root").clicked() {
        response.make_root = true;
    }

    response
}
