//! Seams between the editor engine, the record flavor it edits and the host
//! application.

use egui::{Pos2, Vec2};

use crate::error::EditorError;
use crate::model::{Connection, GraphNode, NodeId};
use crate::render::NodeCanvas;
use crate::theme::GraphEditorTheme;
use crate::types::{ConnectionRequest, LabelPrompt, NodeAction};

/// Services the editor calls out to. Implemented by the application.
pub trait EditorHost {
    /// Save the records. Fire-and-forget; failures are the host's business.
    fn persist(&mut self);

    /// Ask before a destructive edit. Returning `false` leaves everything untouched.
    fn confirm_destructive(&mut self, message: &str) -> bool;

    /// Start collecting a line of text. The host answers later through
    /// [`GraphEditor::resolve_prompt`](crate::GraphEditor::resolve_prompt);
    /// the connection gesture stays suspended until then.
    fn request_text(&mut self, prompt: &LabelPrompt);

    /// Open the full record editor for a node.
    fn open_node_editor(&mut self, node: &str);

    /// Create a record at a world position on the host's side.
    ///
    /// Returns the id of the new record, or `None` if nothing was created.
    fn create_node_at(&mut self, world: Pos2) -> Option<NodeId>;

    /// A node was picked on the canvas.
    fn node_selected(&mut self, node: &str) {
        let _ = node;
    }
}

/// Record flavor the engine edits: how nodes and edges are read from the
/// records and how gestures write back into them.
pub trait GraphStrategy {
    /// The records this strategy edits.
    type Document;

    /// Identity of the document; a change triggers a full rebuild.
    fn document_key(&self, doc: &Self::Document) -> String;

    fn theme(&self) -> GraphEditorTheme;

    fn default_node_size(&self) -> Vec2;

    /// Builds one node per record. Missing layout is synthesized and written
    /// back into the record.
    fn load_nodes(&self, doc: &mut Self::Document) -> Vec<GraphNode>;

    fn interpret_connections(&self, doc: &Self::Document, nodes: &[GraphNode]) -> Vec<Connection>;

    /// Decides whether a released connection commits right away or needs a label.
    fn on_connection_create(&self, source: &GraphNode, target: &GraphNode) -> ConnectionRequest;

    /// Writes a new edge into the records. `Ok(false)` means nothing changed.
    fn commit_connection(
        &self,
        doc: &mut Self::Document,
        source: &str,
        target: &str,
        label: &str,
        port: usize,
    ) -> Result<bool, EditorError>;

    fn remove_connection(
        &self,
        doc: &mut Self::Document,
        from: &str,
        to: &str,
    ) -> Result<(), EditorError>;

    /// Advances the directionality cycle of the pair. `Ok(false)` if the
    /// flavor has no such concept.
    fn toggle_direction(
        &self,
        doc: &mut Self::Document,
        a: &str,
        b: &str,
    ) -> Result<bool, EditorError> {
        let _ = (doc, a, b);
        Ok(false)
    }

    /// Double-click on empty canvas.
    fn on_node_create(
        &self,
        doc: &mut Self::Document,
        at: Pos2,
        host: &mut dyn EditorHost,
    ) -> Result<Option<NodeId>, EditorError>;

    /// Removes the record and every reference to it.
    fn remove_node(&self, doc: &mut Self::Document, node: &str) -> Result<(), EditorError>;

    fn delete_node_message(&self, node: &GraphNode) -> String;

    fn delete_connection_message(&self) -> String {
        "Remove this connection?".to_owned()
    }

    fn on_node_double_click(&self, node: &GraphNode, in_header: bool) -> NodeAction;

    fn rename(&self, doc: &mut Self::Document, node: &str, name: &str) -> Result<(), EditorError> {
        let _ = (doc, node, name);
        Err(EditorError::Unsupported("rename"))
    }

    /// Stores the node's geometry in its record.
    fn write_layout(&self, doc: &mut Self::Document, node: &GraphNode) -> Result<(), EditorError>;

    /// Extra painting on top of the standard node chrome.
    fn draw_node_extra(&self, canvas: &NodeCanvas<'_>, node: &GraphNode) {
        let _ = (canvas, node);
    }
}
