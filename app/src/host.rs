use egui::Pos2;
use egui_graph_editor::{EditorHost, LabelPrompt, NodeId};
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

/// Collects what the graph editor asks for during a frame. The app acts on
/// the requests once the canvas has been drawn.
#[derive(Default, Debug)]
pub struct AppHost {
    pub save_requested: bool,
    pub prompt: Option<LabelPrompt>,
    pub open_request: Option<NodeId>,
    pub create_request: Option<Pos2>,
    pub selected: Option<NodeId>,
}

impl EditorHost for AppHost {
    fn persist(&mut self) {
        self.save_requested = true;
    }

    fn confirm_destructive(&mut self, message: &str) -> bool {
        let result = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title("Confirm")
            .set_description(message)
            .set_buttons(MessageButtons::YesNo)
            .show();
        matches!(result, MessageDialogResult::Yes)
    }

    fn request_text(&mut self, prompt: &LabelPrompt) {
        self.prompt = Some(prompt.clone());
    }

    fn open_node_editor(&mut self, node: &str) {
        self.open_request = Some(node.to_owned());
    }

    /// Locations are added by the app after the frame.
    fn create_node_at(&mut self, world: Pos2) -> Option<NodeId> {
        self.create_request = Some(world);
        None
    }

    fn node_selected(&mut self, node: &str) {
        self.selected = Some(node.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_are_recorded() {
        let mut host = AppHost::default();
        host.persist();
        host.request_text(&LabelPrompt {
            title: "Label".into(),
            default: "Continue".into(),
        });
        host.open_node_editor("loc_1");
        assert_eq!(host.create_node_at(egui::pos2(10.0, 20.0)), None);

        assert!(host.save_requested);
        assert_eq!(host.prompt.map(|p| p.default), Some("Continue".to_string()));
        assert_eq!(host.open_request.as_deref(), Some("loc_1"));
        assert_eq!(host.create_request, Some(egui::pos2(10.0, 20.0)));
    }
}
