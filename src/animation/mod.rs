//! Single-property tweening and join synchronization.

pub mod barrier;
pub mod tween;

pub use barrier::JoinBarrier;
pub use tween::{Channel, Tween};
