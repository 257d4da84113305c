use slotmap::SlotMap;

use crate::errors::{FoldError, Result};
use crate::scene::NodeKey;
use crate::scene::node::Node;
use crate::scene::transform_system;

/// Container for the pivot hierarchy.
///
/// Owns the node storage and the list of nodes hanging directly off the world
/// root. All parent/child mutation goes through [`SceneGraph::attach`] and
/// [`SceneGraph::detach_to_root`], which update the child's parent slot and
/// both affected child sets within one call — partial link states are never
/// observable.
pub struct SceneGraph {
    pub(crate) nodes: SlotMap<NodeKey, Node>,
    pub(crate) root_nodes: Vec<NodeKey>,
}

impl SceneGraph {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),
        }
    }

    /// Adds a node under the world root and returns its handle.
    pub fn add_node(&mut self, node: Node) -> NodeKey {
        let key = self.nodes.insert(node);
        self.root_nodes.push(key);
        key
    }

    /// Adds a node as a child of `parent` and returns its handle.
    pub fn add_to_parent(&mut self, child: Node, parent: NodeKey) -> NodeKey {
        let key = self.nodes.insert(child);
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(key);
        }
        if let Some(c) = self.nodes.get_mut(key) {
            c.parent = Some(parent);
        }
        key
    }

    #[must_use]
    pub fn get_node(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    pub fn get_node_mut(&mut self, key: NodeKey) -> Option<&mut Node> {
        self.nodes.get_mut(key)
    }

    /// Handles of the nodes attached directly to the world root.
    #[must_use]
    pub fn root_nodes(&self) -> &[NodeKey] {
        &self.root_nodes
    }

    /// Re-parents `child` under `parent`.
    ///
    /// Detaches `child` from its current parent (or the root list), then
    /// attaches it to `parent`'s child set. Rejects attachments that would
    /// make a node its own ancestor.
    pub fn attach(&mut self, child: NodeKey, parent: NodeKey) -> Result<()> {
        if !self.nodes.contains_key(parent) {
            return Err(FoldError::NodeNotFound(format!("{parent:?}")));
        }
        if child == parent || self.is_ancestor(child, parent) {
            log::warn!("rejected attach: would create a hierarchy cycle");
            return Err(FoldError::HierarchyCycle {
                child: self.node_name(child),
                parent: self.node_name(parent),
            });
        }

        self.unlink(child);

        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(child);
        }
        if let Some(c) = self.nodes.get_mut(child) {
            c.parent = Some(parent);
            c.transform.mark_dirty();
        }
        Ok(())
    }

    /// Detaches `child` from its current parent and hangs it off the world
    /// root. No-op if it is already a root node.
    pub fn detach_to_root(&mut self, child: NodeKey) {
        let Some(node) = self.nodes.get(child) else {
            return;
        };
        if node.parent.is_none() {
            return;
        }

        self.unlink(child);
        self.root_nodes.push(child);
        if let Some(c) = self.nodes.get_mut(child) {
            c.parent = None;
            c.transform.mark_dirty();
        }
    }

    /// Recomputes every node's world matrix. The rendering surface calls this
    /// once per frame after the choreography tick, then samples
    /// [`Node::world_matrix`].
    pub fn update_world_matrices(&mut self) {
        transform_system::update_hierarchy(&mut self.nodes, &self.root_nodes);
    }

    /// True if `ancestor` appears on `node`'s parent chain.
    fn is_ancestor(&self, ancestor: NodeKey, node: NodeKey) -> bool {
        let mut cursor = self.nodes.get(node).and_then(|n| n.parent);
        while let Some(key) = cursor {
            if key == ancestor {
                return true;
            }
            cursor = self.nodes.get(key).and_then(|n| n.parent);
        }
        false
    }

    /// Removes `child` from its parent's child set or from the root list,
    /// leaving its own parent slot untouched.
    fn unlink(&mut self, child: NodeKey) {
        let old_parent = self.nodes.get(child).and_then(|n| n.parent);
        if let Some(p) = old_parent {
            if let Some(n) = self.nodes.get_mut(p)
                && let Some(i) = n.children.iter().position(|&k| k == child)
            {
                n.children.remove(i);
            }
        } else if let Some(i) = self.root_nodes.iter().position(|&k| k == child) {
            self.root_nodes.remove(i);
        }
    }

    fn node_name(&self, key: NodeKey) -> String {
        self.nodes
            .get(key)
            .map_or_else(|| format!("{key:?}"), |n| n.name.clone())
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}
