//! Fold/unfold choreography over the six cube-face pivots.

pub mod controller;
pub mod faces;
pub mod poses;

pub use controller::FoldController;
pub use faces::Face;
pub use poses::{DEFAULT_PHASE_FRAMES, Pose};
