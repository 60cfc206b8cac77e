//! Collision eligibility component
//!
//! Entities that should take part in collision detection carry exactly one
//! [`CollidableKind`]. Everything else (backgrounds, lights, score and FPS
//! counters, UI panels) carries none and is never paired.

use serde::{Serialize, Deserialize};

use crate::physics::collision_layers::CollisionLayers;

/// Closed set of entity kinds that can collide
///
/// Both the pair filter and gameplay resolution switch over this enum instead
/// of probing for marker components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollidableKind {
    /// The player character
    Player,
    /// Any enemy (minion, shooter, roamer)
    Enemy,
    /// Projectile fired by the player
    PlayerBullet,
    /// Projectile fired by an enemy
    EnemyBullet,
    /// Collectible power-up
    PowerUp,
}

impl CollidableKind {
    /// Every kind, in declaration order
    pub const ALL: [Self; 5] = [
        Self::Player,
        Self::Enemy,
        Self::PlayerBullet,
        Self::EnemyBullet,
        Self::PowerUp,
    ];

    /// The collision layer this kind lives on
    pub fn layer(self) -> CollisionLayers {
        match self {
            Self::Player => CollisionLayers::PLAYER,
            Self::Enemy => CollisionLayers::ENEMY,
            Self::PlayerBullet => CollisionLayers::PLAYER_BULLET,
            Self::EnemyBullet => CollisionLayers::ENEMY_BULLET,
            Self::PowerUp => CollisionLayers::POWER_UP,
        }
    }

    /// Whether this kind is a projectile
    pub fn is_projectile(self) -> bool {
        matches!(self, Self::PlayerBullet | Self::EnemyBullet)
    }

    /// Whether this kind is on the player's side
    pub fn is_friendly(self) -> bool {
        matches!(self, Self::Player | Self::PlayerBullet)
    }
}
