//! Math utilities and types
//!
//! Provides the 2D math types used by the simulation. Entities live in a
//! 2D world; mesh vertices carry a z component that collision ignores.

pub use nalgebra::{Vector2, Vector3, Matrix3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 3x3 matrix type (2D homogeneous transforms)
pub type Mat3 = Matrix3<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// Z component of the 2D cross product (`a.x * b.y - a.y * b.x`)
#[inline]
pub fn cross2(a: &Vec2, b: &Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Counter-clockwise perpendicular of a vector
#[inline]
pub fn perpendicular(v: &Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross2_sign() {
        let x = Vec2::new(1.0, 0.0);
        let y = Vec2::new(0.0, 1.0);
        assert_eq!(cross2(&x, &y), 1.0);
        assert_eq!(cross2(&y, &x), -1.0);
        assert_eq!(cross2(&x, &(x * 3.0)), 0.0);
    }

    #[test]
    fn test_perpendicular_is_orthogonal() {
        let v = Vec2::new(3.0, -2.0);
        assert_eq!(v.dot(&perpendicular(&v)), 0.0);
    }
}
