//! The editor engine: owns the model, view transform and gesture state for
//! one view, and applies transition effects to the records.

use egui::{Pos2, Rect};
use log::{debug, warn};

use crate::error::EditorError;
use crate::machine::{TransitionInput, transition};
use crate::model::{GraphModel, NodeId};
use crate::space::CoordinateSpace;
use crate::state::{ConnectPhase, InteractionState};
use crate::theme::GraphEditorTheme;
use crate::traits::{EditorHost, GraphStrategy};
use crate::types::{ConnectionRequest, Effect, NodeAction, PointerEvent};

pub struct GraphEditor<S: GraphStrategy> {
    strategy: S,
    model: GraphModel,
    space: CoordinateSpace,
    state: InteractionState,
    theme: GraphEditorTheme,
    loaded_key: Option<String>,
}

impl<S: GraphStrategy> GraphEditor<S> {
    pub fn new(strategy: S) -> Self {
        let theme = strategy.theme();
        Self {
            strategy,
            model: GraphModel::default(),
            space: CoordinateSpace::default(),
            state: InteractionState::Idle,
            theme,
            loaded_key: None,
        }
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn model(&self) -> &GraphModel {
        &self.model
    }

    pub fn space(&self) -> &CoordinateSpace {
        &self.space
    }

    pub fn space_mut(&mut self) -> &mut CoordinateSpace {
        &mut self.space
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn theme(&self) -> &GraphEditorTheme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: GraphEditorTheme) {
        self.theme = theme;
    }

    /// Rebuilds nodes and connections from the records.
    ///
    /// Any gesture in progress is dropped, including a pending label prompt.
    pub fn load(&mut self, doc: &mut S::Document) {
        let selected = self.model.selected.take();
        let mut model = GraphModel::new(self.strategy.load_nodes(doc));
        model.set_connections(self.strategy.interpret_connections(doc, &model.nodes));
        model.selected = selected;
        model.prune_selection();

        self.model = model;
        self.state = InteractionState::Idle;
        self.loaded_key = Some(self.strategy.document_key(doc));
    }

    /// Loads the document if it is not the one currently shown.
    /// Returns `true` when a rebuild happened.
    pub fn ensure_loaded(&mut self, doc: &mut S::Document) -> bool {
        let key = self.strategy.document_key(doc);
        if self.loaded_key.as_deref() == Some(key.as_str()) {
            return false;
        }
        debug!("loading graph {key}");
        self.load(doc);
        true
    }

    /// Recomputes connections from the records, keeping node geometry.
    pub fn update_connections(&mut self, doc: &S::Document) {
        let connections = self.strategy.interpret_connections(doc, &self.model.nodes);
        self.model.set_connections(connections);
    }

    /// Writes the geometry of every node back to its record, then asks the
    /// host to save.
    pub fn persist(&mut self, doc: &mut S::Document, host: &mut dyn EditorHost) {
        self.write_layouts(doc);
        host.persist();
    }

    pub fn handle_event(
        &mut self,
        doc: &mut S::Document,
        host: &mut dyn EditorHost,
        event: PointerEvent,
    ) {
        let state = std::mem::take(&mut self.state);
        let input = TransitionInput {
            model: &self.model,
            space: &self.space,
        };
        let (next, effects) = transition(state, &event, &input);
        self.state = next;

        for effect in effects {
            self.apply(doc, host, effect);
        }
    }

    /// Resumes a suspended connection with the host's answer.
    ///
    /// `None` or blank text aborts without touching the records. The editor
    /// is idle afterwards either way.
    pub fn resolve_prompt(
        &mut self,
        doc: &mut S::Document,
        host: &mut dyn EditorHost,
        answer: Option<String>,
    ) {
        let state = std::mem::take(&mut self.state);
        let InteractionState::Connecting {
            source,
            port,
            phase: ConnectPhase::Pending { target },
        } = state
        else {
            self.state = state;
            return;
        };

        match answer.filter(|text| !text.trim().is_empty()) {
            Some(label) => self.finish_connection(doc, host, &source, &target, &label, port),
            None => debug!("connection {source} -> {target} cancelled"),
        }
    }

    /// Mutable access to the inline title editor's text.
    pub fn rename_buffer_mut(&mut self) -> Option<&mut String> {
        match &mut self.state {
            InteractionState::Renaming { buffer, .. } => Some(buffer),
            _ => None,
        }
    }

    /// Canvas-local screen rectangle of the header being renamed.
    pub fn rename_field(&self) -> Option<Rect> {
        let InteractionState::Renaming { node, .. } = &self.state else {
            return None;
        };
        let node = self.model.node(node)?;
        Some(self.space.rect_to_screen(node.header_rect()))
    }

    pub fn commit_rename(&mut self, doc: &mut S::Document, host: &mut dyn EditorHost) {
        if let InteractionState::Renaming { node, buffer } = std::mem::take(&mut self.state) {
            self.rename(doc, host, &node, &buffer);
        }
    }

    pub fn cancel_rename(&mut self) {
        if matches!(self.state, InteractionState::Renaming { .. }) {
            self.state = InteractionState::Idle;
        }
    }

    // ---------------------------------------------------------------------------
    // Effects
    // ---------------------------------------------------------------------------

    fn apply(&mut self, doc: &mut S::Document, host: &mut dyn EditorHost, effect: Effect) {
        match effect {
            Effect::Select(id) => {
                host.node_selected(&id);
                self.model.selected = Some(id);
            }
            Effect::MoveNode { node, center } => {
                if let Some(node) = self.model.node_mut(&node) {
                    node.move_center_to(center);
                }
            }
            Effect::ResizeNode { node, size } => {
                if let Some(node) = self.model.node_mut(&node) {
                    node.resize_to(size);
                }
            }
            Effect::PanBy(delta) => self.space.pan_by(delta),
            Effect::Zoom { notches } => self.space.zoom(notches),
            Effect::AdjustPorts { node, delta } => {
                let Some(node) = self.model.node_mut(&node) else {
                    return;
                };
                let count = (node.port_count as i64 + delta as i64).max(1) as usize;
                node.set_port_count(count);
                self.persist(doc, host);
            }
            Effect::DeleteNode(id) => self.delete_node(doc, host, &id),
            Effect::DeleteConnection { from, to } => {
                if !host.confirm_destructive(&self.strategy.delete_connection_message()) {
                    return;
                }
                match self.strategy.remove_connection(doc, &from, &to) {
                    Ok(()) => {
                        debug!("connection {from} -> {to} removed");
                        self.update_connections(doc);
                        self.persist(doc, host);
                    }
                    Err(err) => self.recover(doc, err),
                }
            }
            Effect::ToggleDirection { from, to } => {
                match self.strategy.toggle_direction(doc, &from, &to) {
                    Ok(true) => {
                        self.update_connections(doc);
                        self.persist(doc, host);
                    }
                    Ok(false) => {}
                    Err(err) => self.recover(doc, err),
                }
            }
            Effect::Connect {
                source,
                target,
                port,
            } => {
                let (Some(s), Some(t)) = (self.model.node(&source), self.model.node(&target))
                else {
                    self.state = InteractionState::Idle;
                    return;
                };
                match self.strategy.on_connection_create(s, t) {
                    ConnectionRequest::Commit(label) => {
                        self.state = InteractionState::Idle;
                        self.finish_connection(doc, host, &source, &target, &label, port);
                    }
                    ConnectionRequest::Prompt(prompt) => host.request_text(&prompt),
                }
            }
            Effect::DoubleClickNode { node, in_header } => {
                let Some(n) = self.model.node(&node) else {
                    return;
                };
                match self.strategy.on_node_double_click(n, in_header) {
                    NodeAction::Rename => {
                        self.state = InteractionState::Renaming {
                            buffer: n.name.clone(),
                            node,
                        };
                    }
                    NodeAction::OpenEditor => host.open_node_editor(&node),
                }
            }
            Effect::CreateNodeAt(at) => self.create_node_at(doc, host, at),
            Effect::CommitRename { node, name } => self.rename(doc, host, &node, &name),
            Effect::Persist => self.persist(doc, host),
        }
    }

    fn finish_connection(
        &mut self,
        doc: &mut S::Document,
        host: &mut dyn EditorHost,
        source: &str,
        target: &str,
        label: &str,
        port: usize,
    ) {
        match self
            .strategy
            .commit_connection(doc, source, target, label, port)
        {
            Ok(true) => {
                if let Some(node) = self.model.node_mut(source) {
                    if node.port_count <= port {
                        node.set_port_count(port + 1);
                    }
                }
                debug!("connection {source} -> {target} created on port {port}");
                self.update_connections(doc);
                self.persist(doc, host);
            }
            Ok(false) => debug!("connection {source} -> {target} already exists"),
            Err(err) => self.recover(doc, err),
        }
    }

    fn delete_node(&mut self, doc: &mut S::Document, host: &mut dyn EditorHost, id: &str) {
        let Some(node) = self.model.node(id) else {
            return;
        };
        let message = self.strategy.delete_node_message(node);
        if !host.confirm_destructive(&message) {
            return;
        }

        self.write_layouts(doc);
        match self.strategy.remove_node(doc, id) {
            Ok(()) => {
                debug!("node {id} deleted");
                self.load(doc);
                host.persist();
            }
            Err(err) => self.recover(doc, err),
        }
    }

    fn create_node_at(&mut self, doc: &mut S::Document, host: &mut dyn EditorHost, at: Pos2) {
        self.write_layouts(doc);
        match self.strategy.on_node_create(doc, at, host) {
            Ok(Some(id)) => {
                debug!("node {id} created at {at:?}");
                self.load(doc);
                host.persist();
            }
            Ok(None) => {}
            Err(err) => self.recover(doc, err),
        }
    }

    fn rename(&mut self, doc: &mut S::Document, host: &mut dyn EditorHost, id: &NodeId, name: &str) {
        let name = name.trim();
        let unchanged = self.model.node(id).is_none_or(|n| n.name == name);
        if name.is_empty() || unchanged {
            return;
        }
        match self.strategy.rename(doc, id, name) {
            Ok(()) => {
                if let Some(node) = self.model.node_mut(id) {
                    node.name = name.to_owned();
                }
                self.persist(doc, host);
            }
            Err(err) => self.recover(doc, err),
        }
    }

    fn write_layouts(&self, doc: &mut S::Document) {
        for node in &self.model.nodes {
            if let Err(err) = self.strategy.write_layout(doc, node) {
                warn!("could not store layout of {}: {err}", node.id);
            }
        }
    }

    /// A record vanished under us; log it and resync the model.
    fn recover(&mut self, doc: &mut S::Document, err: EditorError) {
        warn!("graph edit failed: {err}");
        self.load(doc);
    }
}
