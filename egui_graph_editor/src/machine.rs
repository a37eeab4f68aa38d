//! Pure transition function: `(state, event) -> (state, effects)`.
//!
//! The function only reads the model; every mutation comes back as an
//! [`Effect`] for the editor to apply.

use egui::{PointerButton, Pos2};

use crate::hit::{self, HitTarget};
use crate::model::{GraphModel, HEADER_HEIGHT, MIN_NODE_SIZE};
use crate::space::CoordinateSpace;
use crate::state::{ConnectPhase, InteractionState};
use crate::types::{Effect, PointerEvent};

pub struct TransitionInput<'a> {
    pub model: &'a GraphModel,
    pub space: &'a CoordinateSpace,
}

pub type Transition = (InteractionState, Vec<Effect>);

pub fn transition(
    state: InteractionState,
    event: &PointerEvent,
    input: &TransitionInput,
) -> Transition {
    use InteractionState as S;

    match (state, *event) {
        // A pending label prompt owns the editor until it resolves.
        (state, _) if state.is_suspended() => (state, Vec::new()),
        (state, PointerEvent::Wheel { notches }) => (state, vec![Effect::Zoom { notches }]),
        // Clicking away from the title editor commits it, then the press
        // is handled as usual.
        (S::Renaming { node, buffer }, PointerEvent::Down { pos, button }) => {
            let (next, effects) = pointer_down(pos, button, input);
            let mut all = vec![Effect::CommitRename { node, name: buffer }];
            all.extend(effects);
            (next, all)
        }
        (state @ S::Renaming { .. }, _) => (state, Vec::new()),
        (S::Idle, PointerEvent::Down { pos, button }) => pointer_down(pos, button, input),
        (S::Idle, PointerEvent::DoubleClick { pos }) => double_click(pos, input),
        (S::Idle, PointerEvent::SecondaryClick { pos }) => secondary_click(pos, input),
        (S::Idle, _) => (S::Idle, Vec::new()),
        (state, PointerEvent::Move { pos }) => pointer_move(state, pos, input),
        (state, PointerEvent::Up { pos }) => pointer_up(state, pos, input),
        (state, _) => (state, Vec::new()),
    }
}

fn pointer_down(pos: Pos2, button: PointerButton, input: &TransitionInput) -> Transition {
    use InteractionState as S;

    let world = input.space.to_world(pos);
    let nodes = &input.model.nodes;

    match button {
        PointerButton::Primary => {}
        PointerButton::Middle => {
            let effects = hit::connection_at(input.model, world)
                .map(|conn| Effect::DeleteConnection {
                    from: conn.from.clone(),
                    to: conn.to.clone(),
                })
                .into_iter()
                .collect();
            return (S::Idle, effects);
        }
        _ => return (S::Idle, Vec::new()),
    }

    match hit::hit_test(nodes, world) {
        HitTarget::ResizeHandle(i) => (
            S::Resizing {
                node: nodes[i].id.clone(),
            },
            Vec::new(),
        ),
        HitTarget::DeleteControl(i) => (S::Idle, vec![Effect::DeleteNode(nodes[i].id.clone())]),
        HitTarget::AddPort(i) => (
            S::Idle,
            vec![Effect::AdjustPorts {
                node: nodes[i].id.clone(),
                delta: 1,
            }],
        ),
        HitTarget::RemovePort(i) => {
            let effects = if nodes[i].port_count > 1 {
                vec![Effect::AdjustPorts {
                    node: nodes[i].id.clone(),
                    delta: -1,
                }]
            } else {
                Vec::new()
            };
            (S::Idle, effects)
        }
        HitTarget::Port { node, port, .. } => (
            S::Connecting {
                source: nodes[node].id.clone(),
                port,
                phase: ConnectPhase::Dragging { pointer: world },
            },
            Vec::new(),
        ),
        HitTarget::Body(i) => {
            let id = nodes[i].id.clone();
            (S::Dragging { node: id.clone() }, vec![Effect::Select(id)])
        }
        HitTarget::Canvas => (S::Panning { last: pos }, Vec::new()),
    }
}

fn pointer_move(state: InteractionState, pos: Pos2, input: &TransitionInput) -> Transition {
    use InteractionState as S;

    let world = input.space.to_world(pos);
    match state {
        S::Panning { last } => (S::Panning { last: pos }, vec![Effect::PanBy(pos - last)]),
        S::Dragging { node } => {
            let effects = vec![Effect::MoveNode {
                node: node.clone(),
                center: world,
            }];
            (S::Dragging { node }, effects)
        }
        S::Resizing { node } => {
            let effects = input
                .model
                .node(&node)
                .map(|n| Effect::ResizeNode {
                    node: node.clone(),
                    size: (world - n.pos).max(MIN_NODE_SIZE),
                })
                .into_iter()
                .collect();
            (S::Resizing { node }, effects)
        }
        S::Connecting {
            source,
            port,
            phase: ConnectPhase::Dragging { .. },
        } => (
            S::Connecting {
                source,
                port,
                phase: ConnectPhase::Dragging { pointer: world },
            },
            Vec::new(),
        ),
        state => (state, Vec::new()),
    }
}

fn pointer_up(state: InteractionState, pos: Pos2, input: &TransitionInput) -> Transition {
    use InteractionState as S;

    match state {
        S::Connecting {
            source,
            port,
            phase: ConnectPhase::Dragging { .. },
        } => {
            let world = input.space.to_world(pos);
            let model = input.model;
            let target = model
                .index_of(&source)
                .and_then(|src| hit::release_target(&model.nodes, src, world))
                .map(|i| model.nodes[i].id.clone());

            match target {
                Some(target) => (
                    S::Connecting {
                        source: source.clone(),
                        port,
                        phase: ConnectPhase::Pending {
                            target: target.clone(),
                        },
                    },
                    vec![Effect::Connect {
                        source,
                        target,
                        port,
                    }],
                ),
                None => {
                    log::debug!("connection from {source} released over empty canvas");
                    (S::Idle, Vec::new())
                }
            }
        }
        S::Dragging { .. } | S::Resizing { .. } => (S::Idle, vec![Effect::Persist]),
        _ => (S::Idle, Vec::new()),
    }
}

fn double_click(pos: Pos2, input: &TransitionInput) -> Transition {
    let world = input.space.to_world(pos);
    let nodes = &input.model.nodes;

    let effect = match hit::node_at(nodes, world) {
        Some(i) => Effect::DoubleClickNode {
            node: nodes[i].id.clone(),
            in_header: world.y <= nodes[i].pos.y + HEADER_HEIGHT,
        },
        None => Effect::CreateNodeAt(world),
    };
    (InteractionState::Idle, vec![effect])
}

fn secondary_click(pos: Pos2, input: &TransitionInput) -> Transition {
    let world = input.space.to_world(pos);
    let effects = hit::connection_at(input.model, world)
        .map(|conn| Effect::ToggleDirection {
            from: conn.from.clone(),
            to: conn.to.clone(),
        })
        .into_iter()
        .collect();
    (InteractionState::Idle, effects)
}
