//! Collision layer system for filtering collision detection
//!
//! Each [`CollidableKind`](crate::ecs::components::CollidableKind) lives on one
//! layer; its mask lists the layers it is willing to be tested against.

use bitflags::bitflags;
use serde::{Serialize, Deserialize};

bitflags! {
    /// Collision layer bitmask
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CollisionLayers: u32 {
        /// Player character layer
        const PLAYER = 1 << 0;
        /// Enemy character layer
        const ENEMY = 1 << 1;
        /// Projectiles fired by the player
        const PLAYER_BULLET = 1 << 2;
        /// Projectiles fired by enemies
        const ENEMY_BULLET = 1 << 3;
        /// Pickups and power-ups
        const POWER_UP = 1 << 4;

        /// All collision layers
        const ALL = Self::PLAYER.bits()
            | Self::ENEMY.bits()
            | Self::PLAYER_BULLET.bits()
            | Self::ENEMY_BULLET.bits()
            | Self::POWER_UP.bits();
    }
}

impl CollisionLayers {
    /// No collision layer
    pub const NONE: Self = Self::empty();

    /// Check if two entities should collide based on their layers and masks
    ///
    /// A's layer must be in B's mask AND B's layer must be in A's mask.
    pub fn should_collide(layer_a: Self, mask_a: Self, layer_b: Self, mask_b: Self) -> bool {
        mask_b.intersects(layer_a) && mask_a.intersects(layer_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_collide_mutual() {
        assert!(CollisionLayers::should_collide(
            CollisionLayers::PLAYER,
            CollisionLayers::ENEMY,
            CollisionLayers::ENEMY,
            CollisionLayers::PLAYER,
        ));
    }

    #[test]
    fn test_should_not_collide_one_way() {
        // Player wants the enemy, the enemy only listens for bullets
        assert!(!CollisionLayers::should_collide(
            CollisionLayers::PLAYER,
            CollisionLayers::ENEMY,
            CollisionLayers::ENEMY,
            CollisionLayers::PLAYER_BULLET,
        ));
    }

    #[test]
    fn test_none_mask_collides_with_nothing() {
        assert!(!CollisionLayers::should_collide(
            CollisionLayers::PLAYER,
            CollisionLayers::NONE,
            CollisionLayers::ENEMY,
            CollisionLayers::ALL,
        ));
    }
}
