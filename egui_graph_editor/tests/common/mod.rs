#![allow(dead_code)]

use egui::{PointerButton, Pos2, pos2};
use egui_graph_editor::{EditorHost, GraphEditor, GraphStrategy, LabelPrompt, NodeId, PointerEvent};

/// Host double that scripts confirmation answers and records every call.
pub struct RecordingHost {
    pub confirm_answer: bool,
    pub confirmations: Vec<String>,
    pub persist_count: usize,
    pub prompts: Vec<LabelPrompt>,
    pub opened: Vec<String>,
    pub create_requests: Vec<Pos2>,
    pub selected: Vec<String>,
}

impl RecordingHost {
    pub fn approving() -> Self {
        Self {
            confirm_answer: true,
            confirmations: Vec::new(),
            persist_count: 0,
            prompts: Vec::new(),
            opened: Vec::new(),
            create_requests: Vec::new(),
            selected: Vec::new(),
        }
    }

    pub fn declining() -> Self {
        Self {
            confirm_answer: false,
            ..Self::approving()
        }
    }
}

impl EditorHost for RecordingHost {
    fn persist(&mut self) {
        self.persist_count += 1;
    }

    fn confirm_destructive(&mut self, message: &str) -> bool {
        self.confirmations.push(message.to_owned());
        self.confirm_answer
    }

    fn request_text(&mut self, prompt: &LabelPrompt) {
        self.prompts.push(prompt.clone());
    }

    fn open_node_editor(&mut self, node: &str) {
        self.opened.push(node.to_owned());
    }

    fn create_node_at(&mut self, world: Pos2) -> Option<NodeId> {
        self.create_requests.push(world);
        None
    }

    fn node_selected(&mut self, node: &str) {
        self.selected.push(node.to_owned());
    }
}

pub fn send<S: GraphStrategy>(
    editor: &mut GraphEditor<S>,
    doc: &mut S::Document,
    host: &mut RecordingHost,
    event: PointerEvent,
) {
    editor.handle_event(doc, host, event);
}

pub fn press(x: f32, y: f32) -> PointerEvent {
    PointerEvent::Down {
        pos: pos2(x, y),
        button: PointerButton::Primary,
    }
}

pub fn middle_press(x: f32, y: f32) -> PointerEvent {
    PointerEvent::Down {
        pos: pos2(x, y),
        button: PointerButton::Middle,
    }
}

pub fn move_to(x: f32, y: f32) -> PointerEvent {
    PointerEvent::Move { pos: pos2(x, y) }
}

pub fn release(x: f32, y: f32) -> PointerEvent {
    PointerEvent::Up { pos: pos2(x, y) }
}

pub fn double_click(x: f32, y: f32) -> PointerEvent {
    PointerEvent::DoubleClick { pos: pos2(x, y) }
}

pub fn secondary_click(x: f32, y: f32) -> PointerEvent {
    PointerEvent::SecondaryClick { pos: pos2(x, y) }
}

/// Press at `from`, move to `to` and release there.
pub fn drag<S: GraphStrategy>(
    editor: &mut GraphEditor<S>,
    doc: &mut S::Document,
    host: &mut RecordingHost,
    from: (f32, f32),
    to: (f32, f32),
) {
    send(editor, doc, host, press(from.0, from.1));
    send(editor, doc, host, move_to(to.0, to.1));
    send(editor, doc, host, release(to.0, to.1));
}
