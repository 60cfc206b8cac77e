//! # Unified Configuration System
//!
//! Collects the configuration structures for the engine and the collision
//! core into one serializable tree.
//!
//! ## Configuration Categories
//!
//! - **Engine Config**: Logging and debug features
//! - **Physics Config**: Narrow-phase tolerances, prefiltering and per-kind collision rules

use serde::{Serialize, Deserialize};

use crate::physics::collision_rules::CollisionRules;

// Re-export from the config module for compatibility
pub use crate::config::{Config, ConfigError};

/// Default tolerance for treating two separating axes as parallel
pub const DEFAULT_PARALLEL_TOLERANCE: f32 = 1e-7;

/// # Engine Configuration
///
/// Core engine behavior configuration including logging and debug features.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Log level for the engine
    pub log_level: String,
    /// Whether to build collision debug geometry each tick
    pub debug_mode: bool,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            debug_mode: false,
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable debug mode
    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug_mode = enabled;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::Invalid("Log level cannot be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Physics Configuration
///
/// Tuning for the collision pass. Defaults match the shipped game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Absolute cross-product tolerance under which two candidate axes count as parallel
    pub parallel_tolerance: f32,
    /// Skip triangles that cannot reach the overlap region before running SAT
    pub overlap_prefilter: bool,
    /// Per-kind layer masks and geometry modes
    pub rules: CollisionRules,
}

impl PhysicsConfig {
    /// Create a physics configuration with default tuning
    pub fn new() -> Self {
        Self {
            parallel_tolerance: DEFAULT_PARALLEL_TOLERANCE,
            overlap_prefilter: true,
            rules: CollisionRules::default(),
        }
    }

    /// Replace the collision rules
    pub fn with_rules(mut self, rules: CollisionRules) -> Self {
        self.rules = rules;
        self
    }

    /// Enable or disable the overlap-region prefilter
    pub fn with_overlap_prefilter(mut self, enabled: bool) -> Self {
        self.overlap_prefilter = enabled;
        self
    }

    /// Set the axis de-duplication tolerance
    pub fn with_parallel_tolerance(mut self, tolerance: f32) -> Self {
        self.parallel_tolerance = tolerance;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.parallel_tolerance.is_finite() || self.parallel_tolerance < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "Parallel tolerance must be finite and non-negative, got {}",
                self.parallel_tolerance
            )));
        }
        Ok(())
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Complete Application Configuration
///
/// Top-level configuration that encompasses all engine subsystems.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Engine core configuration
    #[serde(default)]
    pub engine: EngineConfig,
    /// Collision core configuration
    #[serde(default)]
    pub physics: PhysicsConfig,
}

impl ApplicationConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()?;
        self.physics.validate()?;
        Ok(())
    }
}

impl Config for ApplicationConfig {}
