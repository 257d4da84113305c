//! # cubefold
//!
//! Fold/unfold choreography over a hierarchy of rigid transform pivots.
//!
//! Six pivot nodes — the faces of a cube — are animated between two stable
//! configurations (folded and unfolded) by driving individual rotation and
//! position scalars over logical frames. Groups of simultaneous tweens are
//! join-synchronized, dependent phases are sequenced by an explicit state
//! machine, and the hierarchy itself is re-parented between phases.
//!
//! The crate is renderer-agnostic: an external driver calls
//! [`FoldController::tick`] once per displayed frame, and a rendering surface
//! reads each node's parent link and world matrix through [`SceneGraph`].

pub mod animation;
pub mod choreography;
pub mod errors;
pub mod scene;

pub use animation::{Channel, JoinBarrier, Tween};
pub use choreography::{Face, FoldController};
pub use errors::FoldError;
pub use scene::{Node, NodeKey, SceneGraph, Transform};
