//! Input events and the side effects a transition asks for.

use egui::{PointerButton, Pos2, Vec2};

use crate::model::NodeId;

/// Pointer input, in canvas-relative screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down { pos: Pos2, button: PointerButton },
    Move { pos: Pos2 },
    Up { pos: Pos2 },
    /// Positive notches zoom in.
    Wheel { notches: f32 },
    DoubleClick { pos: Pos2 },
    SecondaryClick { pos: Pos2 },
}

/// Work requested by a transition, applied by the editor in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Select(NodeId),
    /// Center the node on a world position.
    MoveNode { node: NodeId, center: Pos2 },
    ResizeNode { node: NodeId, size: Vec2 },
    PanBy(Vec2),
    Zoom { notches: f32 },
    AdjustPorts { node: NodeId, delta: i32 },
    DeleteNode(NodeId),
    DeleteConnection { from: NodeId, to: NodeId },
    ToggleDirection { from: NodeId, to: NodeId },
    Connect { source: NodeId, target: NodeId, port: usize },
    DoubleClickNode { node: NodeId, in_header: bool },
    /// Double-click on empty canvas, in world coordinates.
    CreateNodeAt(Pos2),
    CommitRename { node: NodeId, name: String },
    /// Write layout back to the records and persist.
    Persist,
}

/// What to do with a released connection.
#[derive(Clone, Debug, PartialEq)]
pub enum ConnectionRequest {
    /// Commit right away with this label.
    Commit(String),
    /// Ask for the label first; the gesture stays suspended until answered.
    Prompt(LabelPrompt),
}

#[derive(Clone, Debug, PartialEq)]
pub struct LabelPrompt {
    pub title: String,
    pub default: String,
}

/// Response to a double-click on a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeAction {
    Rename,
    OpenEditor,
}
