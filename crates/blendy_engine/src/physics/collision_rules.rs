//! Per-kind collision rules and the pair filter
//!
//! The pair filter runs before the broad phase: a pair it rejects is never
//! bounds-tested, let alone SAT-tested.

use serde::{Serialize, Deserialize};

use super::collision_layers::CollisionLayers;
use crate::ecs::components::CollidableKind;

/// Geometry used for an entity in the narrow phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionGeometry {
    /// Exact test against the entity's mesh triangles
    Polygon,
    /// The axis-aligned bounding box is the collision shape
    Bounds,
}

/// Collision rule for one kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindRule {
    /// Narrow-phase geometry
    pub geometry: CollisionGeometry,
    /// Layers this kind is tested against
    pub mask: CollisionLayers,
}

impl KindRule {
    /// Create a rule
    pub const fn new(geometry: CollisionGeometry, mask: CollisionLayers) -> Self {
        Self { geometry, mask }
    }
}

/// Collision rules for every [`CollidableKind`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionRules {
    /// Rule for [`CollidableKind::Player`]
    pub player: KindRule,
    /// Rule for [`CollidableKind::Enemy`]
    pub enemy: KindRule,
    /// Rule for [`CollidableKind::PlayerBullet`]
    pub player_bullet: KindRule,
    /// Rule for [`CollidableKind::EnemyBullet`]
    pub enemy_bullet: KindRule,
    /// Rule for [`CollidableKind::PowerUp`]
    pub power_up: KindRule,
}

impl CollisionRules {
    /// Test every pair of kinds against each other with polygon geometry
    pub fn permissive() -> Self {
        let rule = KindRule::new(CollisionGeometry::Polygon, CollisionLayers::ALL);
        Self {
            player: rule,
            enemy: rule,
            player_bullet: rule,
            enemy_bullet: rule,
            power_up: rule,
        }
    }

    /// Rule for a kind
    pub fn rule(&self, kind: CollidableKind) -> &KindRule {
        match kind {
            CollidableKind::Player => &self.player,
            CollidableKind::Enemy => &self.enemy,
            CollidableKind::PlayerBullet => &self.player_bullet,
            CollidableKind::EnemyBullet => &self.enemy_bullet,
            CollidableKind::PowerUp => &self.power_up,
        }
    }

    /// Mutable rule for a kind
    pub fn rule_mut(&mut self, kind: CollidableKind) -> &mut KindRule {
        match kind {
            CollidableKind::Player => &mut self.player,
            CollidableKind::Enemy => &mut self.enemy,
            CollidableKind::PlayerBullet => &mut self.player_bullet,
            CollidableKind::EnemyBullet => &mut self.enemy_bullet,
            CollidableKind::PowerUp => &mut self.power_up,
        }
    }

    /// Narrow-phase geometry for a kind
    pub fn geometry(&self, kind: CollidableKind) -> CollisionGeometry {
        self.rule(kind).geometry
    }
}

impl Default for CollisionRules {
    fn default() -> Self {
        use CollisionGeometry::{Bounds, Polygon};
        type L = CollisionLayers;

        Self {
            player: KindRule::new(Polygon, L::ENEMY | L::ENEMY_BULLET | L::POWER_UP),
            enemy: KindRule::new(Polygon, L::PLAYER | L::PLAYER_BULLET),
            player_bullet: KindRule::new(Polygon, L::ENEMY),
            enemy_bullet: KindRule::new(Polygon, L::PLAYER),
            power_up: KindRule::new(Bounds, L::PLAYER),
        }
    }
}

/// Predicate deciding whether a pair of kinds is tested at all
pub trait PairFilter {
    /// Return `false` to skip the pair before the broad phase
    fn should_test(&self, a: CollidableKind, b: CollidableKind) -> bool;
}

impl PairFilter for CollisionRules {
    fn should_test(&self, a: CollidableKind, b: CollidableKind) -> bool {
        CollisionLayers::should_collide(a.layer(), self.rule(a).mask, b.layer(), self.rule(b).mask)
    }
}

impl<F> PairFilter for F
where
    F: Fn(CollidableKind, CollidableKind) -> bool,
{
    fn should_test(&self, a: CollidableKind, b: CollidableKind) -> bool {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::CollidableKind::*;

    #[test]
    fn test_default_rules_are_symmetric() {
        let rules = CollisionRules::default();
        for a in CollidableKind::ALL {
            for b in CollidableKind::ALL {
                assert_eq!(rules.should_test(a, b), rules.should_test(b, a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_default_rules_skip_same_side_projectiles() {
        let rules = CollisionRules::default();
        assert!(!rules.should_test(PlayerBullet, PlayerBullet));
        assert!(!rules.should_test(EnemyBullet, EnemyBullet));
        assert!(!rules.should_test(Player, PlayerBullet));
        assert!(!rules.should_test(Enemy, EnemyBullet));
    }

    #[test]
    fn test_default_rules_game_table() {
        let rules = CollisionRules::default();
        assert!(rules.should_test(Player, Enemy));
        assert!(rules.should_test(PlayerBullet, Enemy));
        assert!(rules.should_test(EnemyBullet, Player));
        assert!(rules.should_test(PowerUp, Player));
        assert!(!rules.should_test(PowerUp, Enemy));
        assert!(!rules.should_test(Enemy, Enemy));
        assert_eq!(rules.geometry(PowerUp), CollisionGeometry::Bounds);
        assert_eq!(rules.geometry(Player), CollisionGeometry::Polygon);
    }

    #[test]
    fn test_permissive_tests_everything() {
        let rules = CollisionRules::permissive();
        for a in CollidableKind::ALL {
            for b in CollidableKind::ALL {
                assert!(rules.should_test(a, b));
            }
        }
    }

    #[test]
    fn test_closure_filter() {
        let only_enemies = |a: CollidableKind, b: CollidableKind| a == Enemy || b == Enemy;
        assert!(only_enemies.should_test(Player, Enemy));
        assert!(!only_enemies.should_test(Player, PowerUp));
    }
}
