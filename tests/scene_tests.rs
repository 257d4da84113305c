//! Scene Graph Tests
//!
//! Tests for:
//! - Node insertion at the root and under parents
//! - attach/detach reparenting keeping both link ends in sync
//! - Cycle rejection on attach
//! - World-matrix composition through the hierarchy, including after reparent

use cubefold::{FoldError, Node, NodeKey, SceneGraph};
use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

const EPSILON: f32 = 1e-5;

fn approx_vec(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < EPSILON
}

// ============================================================================
// Insertion & Links
// ============================================================================

#[test]
fn add_node_lands_in_root_list() {
    let mut graph = SceneGraph::new();
    let key = graph.add_node(Node::new("a"));
    assert!(graph.root_nodes().contains(&key));
    assert_eq!(graph.get_node(key).unwrap().parent(), None);
}

#[test]
fn add_to_parent_links_both_ends() {
    let mut graph = SceneGraph::new();
    let parent = graph.add_node(Node::new("parent"));
    let child = graph.add_to_parent(Node::new("child"), parent);

    assert_eq!(graph.get_node(child).unwrap().parent(), Some(parent));
    assert!(graph.get_node(parent).unwrap().children().contains(&child));
    assert!(!graph.root_nodes().contains(&child));
}

// ============================================================================
// Reparenting
// ============================================================================

#[test]
fn attach_moves_between_parents() {
    let mut graph = SceneGraph::new();
    let a = graph.add_node(Node::new("a"));
    let b = graph.add_node(Node::new("b"));
    let child = graph.add_to_parent(Node::new("child"), a);

    graph.attach(child, b).unwrap();

    assert_eq!(graph.get_node(child).unwrap().parent(), Some(b));
    assert!(!graph.get_node(a).unwrap().children().contains(&child));
    assert!(graph.get_node(b).unwrap().children().contains(&child));
}

#[test]
fn attach_root_node_leaves_root_list() {
    let mut graph = SceneGraph::new();
    let parent = graph.add_node(Node::new("parent"));
    let child = graph.add_node(Node::new("child"));

    graph.attach(child, parent).unwrap();

    assert!(!graph.root_nodes().contains(&child));
    assert_eq!(graph.get_node(child).unwrap().parent(), Some(parent));
}

#[test]
fn detach_to_root_restores_independence() {
    let mut graph = SceneGraph::new();
    let parent = graph.add_node(Node::new("parent"));
    let child = graph.add_to_parent(Node::new("child"), parent);

    graph.detach_to_root(child);

    assert_eq!(graph.get_node(child).unwrap().parent(), None);
    assert!(graph.get_node(parent).unwrap().children().is_empty());
    assert!(graph.root_nodes().contains(&child));
}

#[test]
fn detach_to_root_is_noop_for_root_node() {
    let mut graph = SceneGraph::new();
    let key = graph.add_node(Node::new("a"));

    graph.detach_to_root(key);

    assert_eq!(
        graph.root_nodes().iter().filter(|&&k| k == key).count(),
        1,
        "root list must not grow duplicates"
    );
}

#[test]
fn attach_rejects_self_parent() {
    let mut graph = SceneGraph::new();
    let key = graph.add_node(Node::new("a"));
    assert!(matches!(
        graph.attach(key, key),
        Err(FoldError::HierarchyCycle { .. })
    ));
}

#[test]
fn attach_rejects_descendant_as_parent() {
    let mut graph = SceneGraph::new();
    let root = graph.add_node(Node::new("root"));
    let mid = graph.add_to_parent(Node::new("mid"), root);
    let leaf = graph.add_to_parent(Node::new("leaf"), mid);

    // root under its own grandchild would cycle
    assert!(matches!(
        graph.attach(root, leaf),
        Err(FoldError::HierarchyCycle { .. })
    ));
    // topology untouched
    assert_eq!(graph.get_node(root).unwrap().parent(), None);
    assert_eq!(graph.get_node(leaf).unwrap().parent(), Some(mid));
}

#[test]
fn attach_rejects_missing_parent() {
    let mut graph = SceneGraph::new();
    let key = graph.add_node(Node::new("a"));
    assert!(matches!(
        graph.attach(key, NodeKey::default()),
        Err(FoldError::NodeNotFound(_))
    ));
}

// ============================================================================
// World-Matrix Composition
// ============================================================================

#[test]
fn world_matrix_composes_parent_chain() {
    let mut graph = SceneGraph::new();
    let parent = graph.add_node(Node::new("parent"));
    let child = graph.add_to_parent(Node::new("child"), parent);

    graph.get_node_mut(parent).unwrap().transform.position = Vec3::new(1.0, 0.0, 0.0);
    graph.get_node_mut(child).unwrap().transform.position = Vec3::new(0.0, 1.0, 0.0);

    graph.update_world_matrices();

    let world = graph.get_node(child).unwrap().world_matrix().translation;
    assert!(approx_vec(world.into(), Vec3::new(1.0, 1.0, 0.0)));
}

#[test]
fn world_matrix_applies_euler_rotation() {
    let mut graph = SceneGraph::new();
    let parent = graph.add_node(Node::new("parent"));
    let child = graph.add_to_parent(Node::new("child"), parent);

    // Yaw of +90° maps the child's +Z offset onto +X.
    graph.get_node_mut(parent).unwrap().transform.rotation = Vec3::new(0.0, FRAC_PI_2, 0.0);
    graph.get_node_mut(child).unwrap().transform.position = Vec3::new(0.0, 0.0, 1.0);

    graph.update_world_matrices();

    let world = graph.get_node(child).unwrap().world_matrix().translation;
    assert!(
        approx_vec(world.into(), Vec3::new(1.0, 0.0, 0.0)),
        "got {world:?}"
    );
}

#[test]
fn world_matrix_refreshes_after_reparent() {
    let mut graph = SceneGraph::new();
    let a = graph.add_node(Node::new("a"));
    let b = graph.add_node(Node::new("b"));
    let child = graph.add_to_parent(Node::new("child"), a);

    graph.get_node_mut(a).unwrap().transform.position = Vec3::new(10.0, 0.0, 0.0);
    graph.get_node_mut(b).unwrap().transform.position = Vec3::new(0.0, 10.0, 0.0);
    graph.update_world_matrices();

    let world = graph.get_node(child).unwrap().world_matrix().translation;
    assert!(approx_vec(world.into(), Vec3::new(10.0, 0.0, 0.0)));

    // Moving the child under b must recompose its world chain even though
    // the child's own local fields did not change.
    graph.attach(child, b).unwrap();
    graph.update_world_matrices();

    let world = graph.get_node(child).unwrap().world_matrix().translation;
    assert!(approx_vec(world.into(), Vec3::new(0.0, 10.0, 0.0)));
}
