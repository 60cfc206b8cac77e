//! Per-tick simulation driver
//!
//! A tick moves every entity by its velocity, runs the collision pass and,
//! in debug mode, rebuilds the collision debug lines. State that used to be
//! process-wide (frame counter, random generator) lives in
//! [`SimulationContext`] and is handed to whoever needs it.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::config::{ApplicationConfig, ConfigError};
use crate::debug::CollisionDebugVisualizer;
use crate::ecs::World;
use crate::events::{CollisionEvent, CollisionEvents};
use crate::foundation::logging::{self, info};
use crate::physics::{integrate_motions, CollisionStats, PhysicsCollisionSystem};

/// Explicit per-run state for producers such as AI and spawning
#[derive(Debug, Clone)]
pub struct SimulationContext {
    frame: u64,
    elapsed_ms: f64,
    rng: StdRng,
}

impl SimulationContext {
    /// Create a context whose random sequence is fixed by `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            frame: 0,
            elapsed_ms: 0.0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Number of completed ticks
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Simulated time in milliseconds
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Random generator shared by everything in this run
    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    fn advance(&mut self, elapsed_ms: f32) {
        self.frame += 1;
        self.elapsed_ms += f64::from(elapsed_ms);
    }
}

/// Owns the collision system, its event store and the simulation context
#[derive(Debug)]
pub struct Simulation {
    context: SimulationContext,
    physics: PhysicsCollisionSystem,
    events: CollisionEvents,
    debug: Option<CollisionDebugVisualizer>,
}

impl Simulation {
    /// Validate `config`, install logging and create a simulation
    pub fn new(config: ApplicationConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        logging::init_with_filter(&config.engine.log_level);

        let debug = config.engine.debug_mode.then(CollisionDebugVisualizer::new);
        info!(
            "Simulation ready (seed {}, debug {}, overlap prefilter {})",
            seed,
            config.engine.debug_mode,
            config.physics.overlap_prefilter
        );

        Ok(Self {
            context: SimulationContext::new(seed),
            physics: PhysicsCollisionSystem::new(config.physics),
            events: CollisionEvents::new(),
            debug,
        })
    }

    /// Run one tick and return its collision events
    ///
    /// Events not drained since the previous tick are discarded.
    pub fn step(&mut self, world: &mut World, elapsed_ms: f32) -> &CollisionEvents {
        integrate_motions(world, elapsed_ms);
        self.physics.detect_collisions(world, &mut self.events);

        if let Some(debug) = self.debug.as_mut() {
            debug.rebuild(world, &self.events);
        }

        self.context.advance(elapsed_ms);
        &self.events
    }

    /// Hand this tick's events to gameplay resolution
    pub fn drain_events(&mut self) -> Vec<CollisionEvent> {
        self.events.drain().collect()
    }

    /// Events of the last tick
    pub fn events(&self) -> &CollisionEvents {
        &self.events
    }

    /// Counters of the last collision pass
    pub fn stats(&self) -> CollisionStats {
        self.physics.stats()
    }

    /// The collision system
    pub fn physics(&self) -> &PhysicsCollisionSystem {
        &self.physics
    }

    /// Per-run state
    pub fn context(&self) -> &SimulationContext {
        &self.context
    }

    /// Per-run state, mutably
    pub fn context_mut(&mut self) -> &mut SimulationContext {
        &mut self.context
    }

    /// Debug visualizer, present in debug mode
    pub fn debug(&self) -> Option<&CollisionDebugVisualizer> {
        self.debug.as_ref()
    }
}
