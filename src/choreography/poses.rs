//! Canonical pose tables for the fold/unfold choreography.
//!
//! Angles are XYZ Euler radians, positions are offsets of each pivot from its
//! parent. The folded table doubles as the rig's startup configuration and as
//! the fold targets; the unfolded table holds the fully-open side targets.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec3;

use crate::choreography::faces::Face;

/// Frames per choreography phase; the classic 60-frame sweep.
pub const DEFAULT_PHASE_FRAMES: u32 = 60;

/// A rotation/position pair for one pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub rotation: Vec3,
    pub position: Vec3,
}

impl Pose {
    #[must_use]
    pub const fn new(rotation: Vec3, position: Vec3) -> Self {
        Self { rotation, position }
    }
}

/// Pose of a face in the closed cube.
#[must_use]
pub fn folded(face: Face) -> Pose {
    match face {
        Face::Front => Pose::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 0.5)),
        Face::Back => Pose::new(Vec3::new(0.0, PI, 0.0), Vec3::new(0.0, 0.0, -0.5)),
        Face::Left => Pose::new(Vec3::new(0.0, -FRAC_PI_2, 0.0), Vec3::new(-0.5, 0.0, 0.0)),
        Face::Right => Pose::new(Vec3::new(0.0, FRAC_PI_2, 0.0), Vec3::new(0.5, 0.0, 0.0)),
        Face::Bottom => Pose::new(Vec3::new(-FRAC_PI_2, 0.0, 0.0), Vec3::ZERO),
        Face::Top => Pose::new(Vec3::new(FRAC_PI_2, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)),
    }
}

/// Fully-open target for the faces animated in the unfold's parallel phase.
///
/// # Panics
///
/// Panics for faces that have no unfolded side target (back, bottom and top
/// follow their own phases) — asking for one is a choreography bug.
#[must_use]
pub fn unfolded_side(face: Face) -> Pose {
    match face {
        Face::Front => Pose::new(Vec3::new(FRAC_PI_2, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.5)),
        Face::Left => Pose::new(Vec3::new(0.0, -PI, 0.0), Vec3::new(-1.0, 0.0, 1.0)),
        Face::Right => Pose::new(Vec3::new(0.0, PI, 0.0), Vec3::new(1.0, 0.0, 1.0)),
        _ => unreachable!("{} has no unfolded side target", face.name()),
    }
}

/// Resting pose of the top face at full unfold, expressed in the back face's
/// frame (the top is carried by the back while unfolded).
pub const TOP_REST: Pose = Pose::new(Vec3::new(PI, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0));

/// Rotation-x of the back face when fully swung open.
pub const BACK_OPEN_ROT_X: f32 = -FRAC_PI_2;

/// Rotation-x of the top face when folded down onto the closed box.
pub const TOP_FOLD_ROT_X: f32 = FRAC_PI_2;

/// Faces snapped to their unfold-approach start values before the unfold
/// phases launch. The left face is deliberately absent, matching the original
/// choreography; from the folded stable state it already sits at its start
/// value.
pub const UNFOLD_SNAP: [Face; 5] = [Face::Front, Face::Back, Face::Right, Face::Bottom, Face::Top];
