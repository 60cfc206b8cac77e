//! Core collision detection system
//!
//! One pass per simulation tick, split into the usual two phases:
//!
//! 1. **Broad phase**: every unordered pair of collidable entities is checked
//!    against the pair filter, then against the entities' scale-sized boxes.
//! 2. **Narrow phase**: surviving pairs are tested triangle by triangle with
//!    SAT, using each entity's mesh placed in the world.
//!
//! Every pair that survives both phases is written to the event store as two
//! symmetric events. The pass never fails: malformed or missing geometry only
//! ever results in "no collision".

use std::cell::OnceCell;

use crate::assets::Mesh;
use crate::core::config::PhysicsConfig;
use crate::ecs::components::{CollidableKind, Motion};
use crate::ecs::{Entity, World};
use crate::events::CollisionEvents;
use crate::foundation::logging::{debug, trace};
use crate::physics::collision::{Aabb, AffineTransform2D, NarrowPhase, WorldSpaceMesh};
use crate::physics::collision_rules::{CollisionGeometry, PairFilter};

/// Counters from the most recent collision pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionStats {
    /// Unordered pairs of collidable entities
    pub candidate_pairs: usize,
    /// Pairs rejected by the pair filter
    pub filtered_pairs: usize,
    /// Pairs whose boxes overlap
    pub broad_phase_hits: usize,
    /// Pairs handed to the triangle test
    pub narrow_phase_tests: usize,
    /// Pairs reported as colliding
    pub collisions: usize,
    /// Pairs dropped because a polygon entity had no usable mesh
    pub skipped_missing_mesh: usize,
}

/// Per-tick view of one collidable entity
///
/// The world-space mesh is built the first time a pair needs it and reused
/// for every other pair the entity is part of.
struct Participant<'w> {
    entity: Entity,
    kind: CollidableKind,
    motion: &'w Motion,
    aabb: Aabb,
    geometry: CollisionGeometry,
    mesh: Option<&'w Mesh>,
    world_mesh: OnceCell<Option<WorldSpaceMesh>>,
}

impl<'w> Participant<'w> {
    fn shape(&self) -> Option<&WorldSpaceMesh> {
        self.world_mesh
            .get_or_init(|| match self.geometry {
                CollisionGeometry::Bounds => Some(WorldSpaceMesh::from_aabb(&self.aabb)),
                CollisionGeometry::Polygon => match self.mesh {
                    Some(mesh) => Some(WorldSpaceMesh::from_mesh(
                        mesh,
                        &AffineTransform2D::from_motion(self.motion),
                    )),
                    None => {
                        debug!("{:?} entity {} has no mesh, excluded from narrow phase", self.kind, self.entity);
                        None
                    }
                },
            })
            .as_ref()
    }
}

/// Collision detection over the entities of a [`World`]
#[derive(Debug, Clone, Default)]
pub struct PhysicsCollisionSystem {
    config: PhysicsConfig,
    narrow_phase: NarrowPhase,
    stats: CollisionStats,
}

impl PhysicsCollisionSystem {
    /// Create a collision system
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            narrow_phase: NarrowPhase::from_config(&config),
            config,
            stats: CollisionStats::default(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Replace the configuration
    pub fn set_config(&mut self, config: PhysicsConfig) {
        self.narrow_phase = NarrowPhase::from_config(&config);
        self.config = config;
    }

    /// Counters from the last pass
    pub fn stats(&self) -> CollisionStats {
        self.stats
    }

    /// Run a collision pass filtered by the configured rules
    ///
    /// `events` is cleared first and then holds this tick's events.
    pub fn detect_collisions(&mut self, world: &World, events: &mut CollisionEvents) {
        let rules = self.config.rules.clone();
        self.detect_collisions_with(world, events, &rules);
    }

    /// Run a collision pass with a custom pair filter
    ///
    /// Narrow-phase geometry still comes from the configured rules.
    pub fn detect_collisions_with<F>(&mut self, world: &World, events: &mut CollisionEvents, filter: &F)
    where
        F: PairFilter + ?Sized,
    {
        if !events.is_empty() {
            debug!("Dropping {} undrained collision events from the previous tick", events.len());
            events.clear();
        }

        let rules = &self.config.rules;
        let participants: Vec<Participant<'_>> = world
            .motions
            .iter()
            .filter_map(|(entity, motion)| {
                let kind = world.kind_of(entity)?;
                Some(Participant {
                    entity,
                    kind,
                    motion,
                    aabb: Aabb::from_motion(motion),
                    geometry: rules.geometry(kind),
                    mesh: world.mesh_of(entity),
                    world_mesh: OnceCell::new(),
                })
            })
            .collect();

        let mut stats = CollisionStats::default();

        for (i, a) in participants.iter().enumerate() {
            for b in &participants[i + 1..] {
                stats.candidate_pairs += 1;

                if !filter.should_test(a.kind, b.kind) {
                    stats.filtered_pairs += 1;
                    continue;
                }

                if !a.aabb.overlaps(&b.aabb) {
                    continue;
                }
                stats.broad_phase_hits += 1;

                let colliding = match (a.geometry, b.geometry) {
                    (CollisionGeometry::Bounds, CollisionGeometry::Bounds) => true,
                    _ => match (a.shape(), b.shape()) {
                        (Some(shape_a), Some(shape_b)) => {
                            stats.narrow_phase_tests += 1;
                            self.narrow_phase.meshes_intersect(shape_a, shape_b)
                        }
                        _ => {
                            stats.skipped_missing_mesh += 1;
                            false
                        }
                    },
                };

                if colliding {
                    stats.collisions += 1;
                    events.record_pair(a.entity, b.entity);
                }
            }
        }

        trace!(
            "Collision pass: {} pairs, {} filtered, {} broad-phase hits, {} narrow-phase tests, {} collisions",
            stats.candidate_pairs,
            stats.filtered_pairs,
            stats.broad_phase_hits,
            stats.narrow_phase_tests,
            stats.collisions
        );
        self.stats = stats;
    }
}
