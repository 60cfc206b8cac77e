//! # Blendy Engine
//!
//! Simulation core of Blendy's Revenge: per-tick movement and mesh-accurate
//! 2D collision detection.
//!
//! ## Features
//!
//! - **Broad Phase**: Pairwise box pruning sized by entity scale
//! - **Narrow Phase**: Separating Axis Theorem over mesh triangles
//! - **Collision Rules**: Closed entity kinds with layer masks
//! - **Event Stream**: Symmetric per-tick collision events
//! - **Configuration**: TOML/RON files with validation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use blendy_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut world = World::new();
//!     let mesh = world.add_mesh(Mesh::unit_square());
//!     let player = world.spawn_with_mesh(Motion::default(), CollidableKind::Player, mesh);
//!     world.spawn_with_mesh(
//!         Motion::new(Vec2::new(8.0, 0.0), Vec2::new(10.0, 10.0)),
//!         CollidableKind::Enemy,
//!         mesh,
//!     );
//!
//!     let mut simulation = Simulation::new(ApplicationConfig::default(), 1234)?;
//!     simulation.step(&mut world, 16.0);
//!     for event in simulation.drain_events() {
//!         if event.subject == player {
//!             // Resolve the hit
//!         }
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core engine modules
pub mod core;
pub mod config;

pub mod foundation;
pub mod ecs;
pub mod assets;
pub mod physics;
pub mod events;
pub mod debug;

mod simulation;

pub use simulation::{Simulation, SimulationContext};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Simulation, SimulationContext,
        foundation::math::{Vec2, Vec3},
        ecs::{World, Entity, components::{Motion, CollidableKind}},
        assets::{Mesh, MeshHandle, ObjLoader},
        events::{CollisionEvent, CollisionEvents},
        physics::{CollisionRules, PairFilter, PhysicsCollisionSystem},
        core::config::{ApplicationConfig, EngineConfig, PhysicsConfig, Config},
    };
}
