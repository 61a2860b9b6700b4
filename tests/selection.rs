//! Tests for the selection state machine.
mod common;
use common::*;
use seizu::prelude::*;

fn fixtures() -> (FormNode, Form, FormNode, Form) {
    let graph = chain_graph();
    (
        graph.nodes[0].clone(),
        graph.forms[0].clone(),
        graph.nodes[1].clone(),
        graph.forms[1].clone(),
    )
}

fn assert_single_modal(selection: &Selection) {
    assert!(!(selection.editor_open() && selection.mapper_open()));
}

#[test]
fn test_select_opens_the_editor() {
    let (node_a, form_a, ..) = fixtures();
    let mut controller = SelectionController::new();
    assert!(controller.state().is_idle());

    controller.select_node(node_a.clone(), form_a);
    assert!(controller.state().editor_open());
    assert_eq!(controller.state().node().unwrap().id, node_a.id);
}

#[test]
fn test_reselecting_the_same_node_closes_the_editor() {
    let (node_a, form_a, ..) = fixtures();
    let mut controller = SelectionController::new();

    controller.select_node(node_a.clone(), form_a.clone());
    controller.select_node(node_a, form_a);
    assert!(controller.state().is_idle());
}

#[test]
fn test_selecting_another_node_switches_the_editor() {
    let (node_a, form_a, node_b, form_b) = fixtures();
    let mut controller = SelectionController::new();

    controller.select_node(node_a, form_a);
    controller.select_node(node_b.clone(), form_b);
    assert!(controller.state().editor_open());
    assert_eq!(controller.state().node().unwrap().id, node_b.id);
}

#[test]
fn test_field_activation_swaps_editor_for_mapper() {
    let (node_a, form_a, ..) = fixtures();
    let mut controller = SelectionController::new();

    controller.select_node(node_a, form_a);
    controller.map_field("email");

    assert!(controller.state().mapper_open());
    assert!(!controller.state().editor_open());
    assert_eq!(controller.state().field(), Some("email"));
}

#[test]
fn test_finish_mapping_returns_to_the_editor() {
    let (node_a, form_a, ..) = fixtures();
    let mut controller = SelectionController::new();

    controller.select_node(node_a.clone(), form_a);
    controller.map_field("email");
    controller.finish_mapping();

    assert!(controller.state().editor_open());
    assert_eq!(controller.state().field(), None);
    assert_eq!(controller.state().node().unwrap().id, node_a.id);
}

#[test]
fn test_invalid_transitions_are_no_ops() {
    let (node_a, form_a, node_b, form_b) = fixtures();
    let mut controller = SelectionController::new();

    // Mapping without an open editor.
    controller.map_field("email");
    assert!(controller.state().is_idle());

    // Finishing without an open mapper.
    controller.finish_mapping();
    assert!(controller.state().is_idle());

    // Graph clicks are swallowed while the mapper is open.
    controller.select_node(node_a.clone(), form_a.clone());
    controller.map_field("email");
    controller.select_node(node_b, form_b);
    assert!(controller.state().mapper_open());
    assert_eq!(controller.state().node().unwrap().id, node_a.id);
}

#[test]
fn test_close_returns_to_idle_from_any_state() {
    let (node_a, form_a, ..) = fixtures();

    let mut controller = SelectionController::new();
    controller.close();
    assert!(controller.state().is_idle());

    controller.select_node(node_a.clone(), form_a.clone());
    controller.close();
    assert!(controller.state().is_idle());

    controller.select_node(node_a, form_a);
    controller.map_field("email");
    controller.close();
    assert!(controller.state().is_idle());
}

#[test]
fn test_modals_are_mutually_exclusive_across_action_sequences() {
    let (node_a, form_a, node_b, form_b) = fixtures();
    let mut controller = SelectionController::new();

    // Exercise every transition in one long sequence, checking the
    // invariant after each step.
    controller.select_node(node_a.clone(), form_a.clone());
    assert_single_modal(controller.state());
    controller.map_field("email");
    assert_single_modal(controller.state());
    controller.finish_mapping();
    assert_single_modal(controller.state());
    controller.map_field("name");
    assert_single_modal(controller.state());
    controller.close();
    assert_single_modal(controller.state());
    controller.select_node(node_b.clone(), form_b.clone());
    assert_single_modal(controller.state());
    controller.map_field("firstName");
    assert_single_modal(controller.state());
    controller.finish_mapping();
    assert_single_modal(controller.state());
    controller.select_node(node_b, form_b);
    assert_single_modal(controller.state());

    // Re-selecting the open node ends the sequence back at idle.
    assert!(controller.state().is_idle());
}
