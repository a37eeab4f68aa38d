//! egui-based editor for directed story graphs.
//!
//! One engine, [`GraphEditor`], handles pan/zoom, dragging, resizing,
//! connecting and deleting. A [`GraphStrategy`] decides what nodes and edges
//! mean for a kind of record: [`ChoiceGraph`] for location maps and
//! [`DialogueGraph`] for dialogue trees. The host application implements
//! [`EditorHost`] for persistence, prompts and confirmations.

pub mod choice;
pub mod dialogue;
pub mod drawing;
pub mod editor;
pub mod error;
pub mod hit;
mod interactions;
pub mod machine;
pub mod model;
mod node_rendering;
pub mod render;
pub mod router;
pub mod space;
pub mod state;
pub mod theme;
pub mod traits;
pub mod types;
pub mod widget;

pub use choice::ChoiceGraph;
pub use dialogue::DialogueGraph;
pub use editor::GraphEditor;
pub use error::EditorError;
pub use model::{Connection, Directionality, GraphModel, GraphNode, NodeId};
pub use space::CoordinateSpace;
pub use state::{ConnectPhase, InteractionState};
pub use theme::GraphEditorTheme;
pub use traits::{EditorHost, GraphStrategy};
pub use types::*;
pub use widget::GraphEditorWidget;
