//! Transient gesture state of the editor.

use egui::Pos2;

use crate::model::NodeId;

/// Exactly one gesture is live at a time; input is single-pointer.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum InteractionState {
    #[default]
    Idle,
    /// Dragging the canvas. `last` is the previous pointer position on screen.
    Panning { last: Pos2 },
    Dragging { node: NodeId },
    Resizing { node: NodeId },
    Connecting {
        source: NodeId,
        port: usize,
        phase: ConnectPhase,
    },
    /// Inline title editor open over the node header.
    Renaming { node: NodeId, buffer: String },
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConnectPhase {
    /// Pointer still down; `pointer` is the live world position.
    Dragging { pointer: Pos2 },
    /// Released over `target`; the edge waits for its label to be resolved.
    Pending { target: NodeId },
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// True while a connection waits on the label prompt.
    pub fn is_suspended(&self) -> bool {
        matches!(
            self,
            Self::Connecting {
                phase: ConnectPhase::Pending { .. },
                ..
            }
        )
    }

    /// Source, port and pointer of a connection being dragged.
    pub fn connection_preview(&self) -> Option<(&str, usize, Pos2)> {
        match self {
            Self::Connecting {
                source,
                port,
                phase: ConnectPhase::Dragging { pointer },
            } => Some((source.as_str(), *port, *pointer)),
            _ => None,
        }
    }
}
