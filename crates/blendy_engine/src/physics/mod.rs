//! Physics module: collision detection and motion integration
//!
//! Detection only. There is no collision response; gameplay code reads the
//! event stream and decides what a hit means.

pub mod collision;
pub mod collision_layers;
pub mod collision_rules;
pub mod collision_system;
pub mod integration;

pub use collision::{
    AffineTransform2D,
    Aabb,
    NarrowPhase,
    OverlapBox,
    SeparatingAxisTest,
    Triangle2,
    WorldSpaceMesh,
};
pub use collision_layers::CollisionLayers;
pub use collision_rules::{CollisionGeometry, CollisionRules, KindRule, PairFilter};
pub use collision_system::{CollisionStats, PhysicsCollisionSystem};
pub use integration::integrate_motions;
