use glam::{Affine3A, EulerRot, Quat, Vec3};

/// Local transform of a node with cached matrices.
///
/// Rotation is stored as raw XYZ Euler angles (radians) rather than a
/// quaternion: the choreography animates individual angle scalars over an
/// unbounded range and snaps them to exact terminal values, which must
/// round-trip bit-for-bit. The quaternion is built only when the local matrix
/// is recomposed.
///
/// Matrix recomputation is guarded by a shadow-state dirty check: the public
/// fields are compared against their last-seen values and the local matrix is
/// rebuilt only when something changed.
#[derive(Debug, Clone)]
pub struct Transform {
    pub position: Vec3,
    /// XYZ Euler angles in radians, unbounded, never normalized.
    pub rotation: Vec3,
    pub scale: Vec3,

    pub(crate) local_matrix: Affine3A,
    pub(crate) world_matrix: Affine3A,

    last_position: Vec3,
    last_rotation: Vec3,
    last_scale: Vec3,
    force_update: bool,
}

impl Transform {
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,

            local_matrix: Affine3A::IDENTITY,
            world_matrix: Affine3A::IDENTITY,

            last_position: Vec3::ZERO,
            last_rotation: Vec3::ZERO,
            last_scale: Vec3::ONE,
            force_update: true,
        }
    }

    /// Recomputes the local matrix if position/rotation/scale changed since
    /// the last call. Returns whether a recomputation happened.
    pub fn update_local_matrix(&mut self) -> bool {
        let changed = self.position != self.last_position
            || self.rotation != self.last_rotation
            || self.scale != self.last_scale
            || self.force_update;

        if changed {
            let quat = Quat::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            );
            self.local_matrix =
                Affine3A::from_scale_rotation_translation(self.scale, quat, self.position);

            self.last_position = self.position;
            self.last_rotation = self.rotation;
            self.last_scale = self.scale;
            self.force_update = false;
        }

        changed
    }

    /// Local matrix (valid after [`Transform::update_local_matrix`]).
    #[inline]
    #[must_use]
    pub fn local_matrix(&self) -> &Affine3A {
        &self.local_matrix
    }

    /// World matrix, written by the transform system each update.
    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.world_matrix
    }

    pub(crate) fn set_world_matrix(&mut self, mat: Affine3A) {
        self.world_matrix = mat;
    }

    /// Forces a matrix rebuild on the next update, e.g. after a reparent
    /// where the local fields are unchanged but the world chain is not.
    pub fn mark_dirty(&mut self) {
        self.force_update = true;
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}
