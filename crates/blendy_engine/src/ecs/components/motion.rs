//! Motion component shared by movement, AI and the collision core
//!
//! Movement and AI logic own and mutate this every tick; collision only reads it.

use serde::{Serialize, Deserialize};

use crate::foundation::math::Vec2;

/// Position, orientation, size and velocity of an entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    /// World-space origin
    pub position: Vec2,

    /// Rotation in degrees about `position`
    pub angle: f32,

    /// Size of the entity. A negative component mirrors the sprite to flip
    /// facing; only the magnitude describes the extent.
    pub scale: Vec2,

    /// Linear velocity in units per second
    pub velocity: Vec2,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            angle: 0.0,
            velocity: Vec2::zeros(),
            scale: Vec2::new(10.0, 10.0),
        }
    }
}

impl Motion {
    /// Create a motion at `position` with the given `scale`
    pub fn new(position: Vec2, scale: Vec2) -> Self {
        Self {
            position,
            scale,
            ..Default::default()
        }
    }

    /// Set rotation in degrees
    pub fn with_angle(mut self, degrees: f32) -> Self {
        self.angle = degrees;
        self
    }

    /// Set velocity
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Mirror the entity horizontally by negating the x scale
    pub fn facing_left(mut self) -> Self {
        self.scale.x = -self.scale.x.abs();
        self
    }
}
