mod common;

use common::*;
use egui::{pos2, vec2};
use egui_graph_editor::{ChoiceGraph, Directionality, GraphEditor, GraphStrategy, PointerEvent};
use story_library::{Choice, EditorLayout, Location, NAVIGATE_ACTION};

fn location(id: &str, name: &str, x: f32, y: f32) -> Location {
    Location {
        id: id.into(),
        name: name.into(),
        editor: Some(EditorLayout::full(x, y, 200.0, 120.0, 1)),
        ..Default::default()
    }
}

/// A at (0,0) and B at (300,0), both 200x120 with one port.
fn two_locations() -> Vec<Location> {
    vec![location("a", "Hall", 0.0, 0.0), location("b", "Garden", 300.0, 0.0)]
}

fn loaded(doc: &mut Vec<Location>) -> GraphEditor<ChoiceGraph> {
    let mut editor = GraphEditor::new(ChoiceGraph);
    editor.load(doc);
    editor
}

fn targets(loc: &Location) -> Vec<&str> {
    loc.choices
        .iter()
        .filter_map(|c| c.target.as_deref())
        .collect()
}

#[test]
fn test_connect_creates_choice_once() {
    let mut doc = two_locations();
    let mut editor = loaded(&mut doc);
    let mut host = RecordingHost::approving();

    // A's right port sits at (200, 75)
    drag(&mut editor, &mut doc, &mut host, (200.0, 75.0), (350.0, 60.0));

    assert!(editor.state().is_idle());
    assert_eq!(doc[0].choices.len(), 1);
    let choice = &doc[0].choices[0];
    assert_eq!(choice.target.as_deref(), Some("b"));
    assert_eq!(choice.action, NAVIGATE_ACTION);
    assert_eq!(choice.text, "Go to Garden");
    assert_eq!(choice.port_index, Some(0));
    assert_eq!(host.persist_count, 1);
    assert!(host.prompts.is_empty());

    assert_eq!(editor.model().connections.len(), 1);
    assert_eq!(
        editor.model().connections[0].direction,
        Directionality::OneWay
    );

    drag(&mut editor, &mut doc, &mut host, (200.0, 75.0), (350.0, 60.0));
    assert_eq!(doc[0].choices.len(), 1);
    assert_eq!(host.persist_count, 1);
}

#[test]
fn test_release_over_empty_canvas_is_noop() {
    let mut doc = two_locations();
    let mut editor = loaded(&mut doc);
    let mut host = RecordingHost::approving();

    drag(&mut editor, &mut doc, &mut host, (200.0, 75.0), (250.0, 400.0));

    assert!(editor.state().is_idle());
    assert!(doc[0].choices.is_empty());
    assert_eq!(host.persist_count, 0);
}

#[test]
fn test_load_drops_dangling_references() {
    let mut doc = two_locations();
    doc[0].choices.push(Choice::navigate("Go to Ghost", "ghost", 0));
    doc[0].choices.push(Choice::navigate("Go to Garden", "b", 0));
    let editor = loaded(&mut doc);

    let model = editor.model();
    assert_eq!(model.connections.len(), 1);
    for conn in &model.connections {
        assert!(model.node(&conn.from).is_some());
        assert!(model.node(&conn.to).is_some());
    }
    // The record itself is left alone
    assert_eq!(doc[0].choices.len(), 2);
}

#[test]
fn test_load_is_idempotent() {
    let mut doc = two_locations();
    doc[1].editor = None;
    doc.push(Location {
        id: "c".into(),
        name: "Cellar".into(),
        ..Default::default()
    });
    doc[0].choices.push(Choice::navigate("Go to Garden", "b", 0));
    doc[1].choices.push(Choice::navigate("Go to Hall", "a", 0));

    let mut editor = loaded(&mut doc);
    let first = editor.model().clone();
    let records = doc.clone();

    editor.load(&mut doc);
    assert_eq!(editor.model(), &first);
    assert_eq!(doc, records);
}

#[test]
fn test_delete_node_cascades() {
    let mut doc = two_locations();
    doc.push(location("c", "Cellar", 600.0, 0.0));
    doc[1].choices.push(Choice::navigate("Go to Hall", "a", 0));
    doc[2].choices.push(Choice::navigate("Go to Hall", "a", 0));
    doc[2].choices.push(Choice::navigate("Go to Garden", "b", 0));
    let mut editor = loaded(&mut doc);
    let mut host = RecordingHost::approving();

    // Delete control of A: (5..25, 95..115)
    send(&mut editor, &mut doc, &mut host, press(15.0, 105.0));

    assert_eq!(host.confirmations, vec!["Are you sure you want to delete \"Hall\"?"]);
    assert_eq!(doc.len(), 2);
    assert!(doc.iter().all(|l| l.id != "a"));
    assert!(targets(&doc[0]).is_empty());
    assert_eq!(targets(&doc[1]), vec!["b"]);
    assert_eq!(editor.model().nodes.len(), 2);
    assert_eq!(editor.model().connections.len(), 1);
    assert_eq!(host.persist_count, 1);
}

#[test]
fn test_declined_delete_changes_nothing() {
    let mut doc = two_locations();
    doc[1].choices.push(Choice::navigate("Go to Hall", "a", 0));
    let before = doc.clone();
    let mut editor = loaded(&mut doc);
    let mut host = RecordingHost::declining();

    send(&mut editor, &mut doc, &mut host, press(15.0, 105.0));

    assert_eq!(host.confirmations.len(), 1);
    assert_eq!(doc, before);
    assert_eq!(editor.model().nodes.len(), 2);
    assert_eq!(host.persist_count, 0);
}

#[test]
fn test_direction_toggle_cycles() {
    let mut doc = two_locations();
    doc[0].choices.push(Choice::navigate("Go to Garden", "b", 0));
    let mut editor = loaded(&mut doc);
    let mut host = RecordingHost::approving();

    // The badge sits at (250, 67.5) whichever way the edge runs.
    let badge = (250.0, 67.5);

    // a→b  ->  b→a
    send(&mut editor, &mut doc, &mut host, secondary_click(badge.0, badge.1));
    assert!(targets(&doc[0]).is_empty());
    assert_eq!(targets(&doc[1]), vec!["a"]);
    assert_eq!(doc[1].choices[0].text, "Go to Hall");

    // b→a  ->  both
    send(&mut editor, &mut doc, &mut host, secondary_click(badge.0, badge.1));
    assert_eq!(targets(&doc[0]), vec!["b"]);
    assert_eq!(targets(&doc[1]), vec!["a"]);
    assert!(
        editor
            .model()
            .connections
            .iter()
            .all(|c| c.direction == Directionality::Bidirectional)
    );

    // both  ->  none
    send(&mut editor, &mut doc, &mut host, secondary_click(badge.0, badge.1));
    assert!(targets(&doc[0]).is_empty());
    assert!(targets(&doc[1]).is_empty());
    assert!(editor.model().connections.is_empty());
    assert_eq!(host.persist_count, 3);

    // none  ->  a→b; with no edge left to click, drive the strategy directly
    assert_eq!(ChoiceGraph.toggle_direction(&mut doc, "b", "a"), Ok(true));
    assert_eq!(targets(&doc[0]), vec!["b"]);
    assert!(targets(&doc[1]).is_empty());
}

#[test]
fn test_middle_click_deletes_both_directions() {
    let mut doc = two_locations();
    doc[0].choices.push(Choice::navigate("Go to Garden", "b", 0));
    doc[1].choices.push(Choice::navigate("Go to Hall", "a", 0));
    let mut editor = loaded(&mut doc);
    let mut host = RecordingHost::approving();

    send(&mut editor, &mut doc, &mut host, middle_press(250.0, 67.5));

    assert_eq!(host.confirmations, vec!["Remove this connection?"]);
    assert!(doc.iter().all(|l| l.choices.is_empty()));
    assert!(editor.model().connections.is_empty());
}

#[test]
fn test_declined_connection_delete_changes_nothing() {
    let mut doc = two_locations();
    doc[0].choices.push(Choice::navigate("Go to Garden", "b", 0));
    let before = doc.clone();
    let mut editor = loaded(&mut doc);
    let connections = editor.model().connections.clone();
    let mut host = RecordingHost::declining();

    send(&mut editor, &mut doc, &mut host, middle_press(250.0, 67.5));

    assert_eq!(host.confirmations, vec!["Remove this connection?"]);
    assert_eq!(doc, before);
    assert_eq!(editor.model().connections, connections);
    assert_eq!(host.persist_count, 0);
    assert!(editor.state().is_idle());
}

#[test]
fn test_shop_choice_back_does_not_hide_edge() {
    let mut doc = two_locations();
    let mut shop = Choice::navigate("Browse wares", "b", 0);
    shop.action = "shop".into();
    doc[0].choices.push(shop);
    doc[1].choices.push(Choice::navigate("Go to Hall", "a", 0));
    let mut editor = loaded(&mut doc);
    let mut host = RecordingHost::approving();

    let drawn: Vec<_> = editor
        .model()
        .connections
        .iter()
        .filter(|c| c.is_drawn())
        .collect();
    assert_eq!(drawn.len(), 1);
    assert_eq!(drawn[0].from, "b");
    assert_eq!(drawn[0].direction, Directionality::OneWay);

    // The b→a edge can still be picked at its midpoint and removed
    send(&mut editor, &mut doc, &mut host, middle_press(250.0, 67.5));
    assert!(doc[1].choices.is_empty());
    assert_eq!(doc[0].choices.len(), 1);
    assert_eq!(doc[0].choices[0].action, "shop");
}

#[test]
fn test_duplicate_location_id_is_shown_once() {
    let mut doc = vec![
        location("a", "Hall", 0.0, 0.0),
        location("a", "Hall copy", 300.0, 0.0),
    ];
    let mut editor = loaded(&mut doc);
    let mut host = RecordingHost::approving();

    assert_eq!(editor.model().nodes.len(), 1);
    assert_eq!(editor.model().nodes[0].name, "Hall");

    // Where the copy would sit is empty canvas; dragging there pans
    drag(&mut editor, &mut doc, &mut host, (400.0, 60.0), (410.0, 60.0));
    assert_eq!(editor.model().nodes[0].pos, pos2(0.0, 0.0));
    assert_eq!(editor.space().pan(), vec2(10.0, 0.0));
    assert!(host.selected.is_empty());
}

#[test]
fn test_resize_clamps_to_minimum() {
    let mut doc = two_locations();
    let mut editor = loaded(&mut doc);
    let mut host = RecordingHost::approving();

    // Resize handle: bottom-right 15x15 of A
    drag(&mut editor, &mut doc, &mut host, (195.0, 115.0), (10.0, 50.0));

    assert_eq!(editor.model().nodes[0].size, vec2(100.0, 80.0));
    assert_eq!(
        doc[0].editor,
        Some(EditorLayout::full(0.0, 0.0, 100.0, 80.0, 1))
    );
    assert_eq!(host.persist_count, 1);
}

#[test]
fn test_drag_centers_node_and_selects() {
    let mut doc = two_locations();
    let mut editor = loaded(&mut doc);
    let mut host = RecordingHost::approving();

    drag(&mut editor, &mut doc, &mut host, (100.0, 60.0), (500.0, 400.0));

    assert_eq!(host.selected, vec!["a"]);
    assert!(editor.model().is_selected("a"));
    assert_eq!(editor.model().nodes[0].pos, pos2(400.0, 340.0));
    let layout = doc[0].editor.unwrap();
    assert_eq!((layout.x, layout.y), (400.0, 340.0));
    assert_eq!(host.persist_count, 1);
}

#[test]
fn test_pan_and_zoom() {
    let mut doc = two_locations();
    let mut editor = loaded(&mut doc);
    let mut host = RecordingHost::approving();

    drag(&mut editor, &mut doc, &mut host, (250.0, 400.0), (300.0, 450.0));
    assert_eq!(editor.space().pan(), vec2(50.0, 50.0));
    assert_eq!(host.persist_count, 0);

    for _ in 0..50 {
        send(&mut editor, &mut doc, &mut host, PointerEvent::Wheel { notches: 1.0 });
    }
    assert_eq!(editor.space().scale(), 5.0);
    assert_eq!(editor.space().pan(), vec2(50.0, 50.0));

    editor.space_mut().set_scale(10.0);
    assert_eq!(editor.space().scale(), 5.0);
    editor.space_mut().set_scale(0.01);
    assert_eq!(editor.space().scale(), 0.1);
}

#[test]
fn test_port_controls() {
    let mut doc = two_locations();
    let mut editor = loaded(&mut doc);
    let mut host = RecordingHost::approving();

    // "+" at (175..195, 5..20), "-" at (150..170, 5..20)
    send(&mut editor, &mut doc, &mut host, press(185.0, 10.0));
    send(&mut editor, &mut doc, &mut host, release(185.0, 10.0));
    assert_eq!(editor.model().nodes[0].port_count, 2);
    assert_eq!(doc[0].editor.and_then(|e| e.ports), Some(2));

    for _ in 0..2 {
        send(&mut editor, &mut doc, &mut host, press(160.0, 10.0));
        send(&mut editor, &mut doc, &mut host, release(160.0, 10.0));
    }
    assert_eq!(editor.model().nodes[0].port_count, 1);
    assert_eq!(host.persist_count, 2);
}

#[test]
fn test_header_double_click_renames() {
    let mut doc = two_locations();
    let mut editor = loaded(&mut doc);
    let mut host = RecordingHost::approving();

    send(&mut editor, &mut doc, &mut host, double_click(50.0, 10.0));
    assert!(editor.rename_field().is_some());
    *editor.rename_buffer_mut().unwrap() = "  Atrium ".into();
    editor.commit_rename(&mut doc, &mut host);

    assert!(editor.state().is_idle());
    assert_eq!(doc[0].name, "Atrium");
    assert_eq!(editor.model().nodes[0].name, "Atrium");
    assert_eq!(host.persist_count, 1);

    // Unchanged text commits nothing
    send(&mut editor, &mut doc, &mut host, double_click(50.0, 10.0));
    editor.commit_rename(&mut doc, &mut host);
    assert_eq!(host.persist_count, 1);
}

#[test]
fn test_click_away_commits_rename() {
    let mut doc = two_locations();
    let mut editor = loaded(&mut doc);
    let mut host = RecordingHost::approving();

    send(&mut editor, &mut doc, &mut host, double_click(350.0, 10.0));
    *editor.rename_buffer_mut().unwrap() = "Rose Garden".into();
    send(&mut editor, &mut doc, &mut host, press(250.0, 400.0));

    assert_eq!(doc[1].name, "Rose Garden");
}

#[test]
fn test_body_double_click_opens_editor() {
    let mut doc = two_locations();
    let mut editor = loaded(&mut doc);
    let mut host = RecordingHost::approving();

    send(&mut editor, &mut doc, &mut host, double_click(400.0, 80.0));
    assert_eq!(host.opened, vec!["b"]);
    assert!(editor.state().is_idle());
}

#[test]
fn test_canvas_double_click_asks_host() {
    let mut doc = two_locations();
    let mut editor = loaded(&mut doc);
    let mut host = RecordingHost::approving();

    send(&mut editor, &mut doc, &mut host, double_click(120.0, 500.0));
    assert_eq!(host.create_requests, vec![pos2(120.0, 500.0)]);
    assert_eq!(doc.len(), 2);
}

#[test]
fn test_connect_to_higher_port_grows_source() {
    let mut doc = two_locations();
    doc[0].editor = Some(EditorLayout::full(0.0, 0.0, 200.0, 120.0, 3));
    let mut editor = loaded(&mut doc);
    let mut host = RecordingHost::approving();

    // Third port of A: 30 + 90/4 * 3
    let y = 30.0 + 90.0 / 4.0 * 3.0;
    drag(&mut editor, &mut doc, &mut host, (200.0, y), (350.0, 60.0));
    assert_eq!(doc[0].choices[0].port_index, Some(2));
    assert_eq!(editor.model().connections[0].port, 2);
}
