//! Local-to-world affine transforms
//!
//! Mesh vertices are stored in model space and mapped into the world on
//! demand with `T = Translate(position) * Rotate(angle) * Scale(scale)`:
//! scale in the local frame, rotate about the local origin, then place in
//! the world.

use crate::ecs::components::Motion;
use crate::foundation::math::{Mat3, Point2, Vec2};

/// 2D affine transform stored as a homogeneous 3x3 matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform2D {
    matrix: Mat3,
}

impl AffineTransform2D {
    /// Build the transform from position, rotation in degrees, and scale
    ///
    /// Rotation uses the standard matrix `[cos -sin; sin cos]`, the same
    /// convention the renderer and the velocity-derived facing angles use. In
    /// the y-down screen space of the game a positive angle turns clockwise
    /// on screen.
    pub fn new(position: Vec2, angle_degrees: f32, scale: Vec2) -> Self {
        let translation = Mat3::new_translation(&position);
        let rotation = Mat3::new_rotation(angle_degrees.to_radians());
        let scaling = Mat3::new_nonuniform_scaling(&scale);
        Self {
            matrix: translation * rotation * scaling,
        }
    }

    /// Build the transform of an entity's motion
    ///
    /// The signed scale is used so mirrored sprites collide with their
    /// mirrored mesh.
    pub fn from_motion(motion: &Motion) -> Self {
        Self::new(motion.position, motion.angle, motion.scale)
    }

    /// Identity transform
    pub fn identity() -> Self {
        Self {
            matrix: Mat3::identity(),
        }
    }

    /// The homogeneous matrix
    pub fn matrix(&self) -> &Mat3 {
        &self.matrix
    }

    /// Map a local point into world space
    pub fn transform_point(&self, local: &Vec2) -> Vec2 {
        self.matrix
            .transform_point(&Point2::new(local.x, local.y))
            .coords
    }
}

impl Default for AffineTransform2D {
    fn default() -> Self {
        Self::identity()
    }
}
