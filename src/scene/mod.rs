//! Hierarchical pivot graph.
//!
//! - [`Node`]: a scene node with parent/child links and a [`Transform`]
//! - [`Transform`]: local position/rotation/scale plus matrix caches
//! - [`SceneGraph`]: node storage and reparenting operations
//! - `transform_system`: decoupled world-matrix hierarchy update

pub mod graph;
pub mod node;
pub mod transform;
pub mod transform_system;

pub use graph::SceneGraph;
pub use node::Node;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    /// Generational handle to a [`Node`] in a [`SceneGraph`].
    pub struct NodeKey;
}
