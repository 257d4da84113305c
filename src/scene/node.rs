use crate::scene::NodeKey;
use crate::scene::transform::Transform;
use glam::Affine3A;

/// A node in the pivot hierarchy.
///
/// Nodes form a tree through parent-child links: `parent` is `None` for nodes
/// hanging off the world root, and `children` lists the handles carried by
/// this node. Both sides of a link are kept in sync by
/// [`SceneGraph::attach`](crate::scene::SceneGraph::attach) and
/// [`SceneGraph::detach_to_root`](crate::scene::SceneGraph::detach_to_root);
/// a node is in exactly one child set (or the root list) at any instant.
#[derive(Debug, Clone)]
pub struct Node {
    /// Parent node handle (None while attached to the world root).
    pub(crate) parent: Option<NodeKey>,
    /// Child node handles.
    pub(crate) children: Vec<NodeKey>,

    /// Local transform (hot data, written by tweens every frame).
    pub transform: Transform,

    /// Stable display name, used in logs and errors.
    pub name: String,
}

impl Node {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            transform: Transform::new(),
            name: name.to_string(),
        }
    }

    /// Returns the parent node handle, if any.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    /// Returns a read-only slice of child node handles.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    /// World transformation matrix, composed by the transform system.
    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.transform.world_matrix
    }
}
