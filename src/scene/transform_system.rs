//! World-matrix hierarchy update.
//!
//! Decoupled from [`SceneGraph`](crate::scene::SceneGraph) so it only borrows
//! the node storage and the root list. Uses an explicit work stack instead of
//! recursion, which keeps deep hierarchies off the call stack and avoids
//! repeated re-borrowing.

use glam::Affine3A;
use slotmap::SlotMap;

use crate::scene::NodeKey;
use crate::scene::node::Node;

/// Propagates world matrices through the whole hierarchy.
///
/// A node's world matrix is recomposed when its own local fields changed or
/// when any ancestor's matrix changed this update.
pub fn update_hierarchy(nodes: &mut SlotMap<NodeKey, Node>, roots: &[NodeKey]) {
    // Work stack: (node, parent world matrix, parent changed this update)
    let mut stack: Vec<(NodeKey, Affine3A, bool)> = Vec::with_capacity(16);

    for &root in roots.iter().rev() {
        stack.push((root, Affine3A::IDENTITY, false));
    }

    while let Some((key, parent_world, parent_changed)) = stack.pop() {
        let Some(node) = nodes.get_mut(key) else {
            continue;
        };

        let local_changed = node.transform.update_local_matrix();
        let world_needs_update = local_changed || parent_changed;

        if world_needs_update {
            let new_world = parent_world * *node.transform.local_matrix();
            node.transform.set_world_matrix(new_world);
        }

        let current_world = node.transform.world_matrix;
        let child_count = node.children.len();

        // Push children in reverse to preserve declaration order.
        for i in (0..child_count).rev() {
            if let Some(node) = nodes.get(key)
                && let Some(&child) = node.children.get(i)
            {
                stack.push((child, current_world, world_needs_update));
            }
        }
    }
}
