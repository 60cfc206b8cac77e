//! Debug module for visualization and debugging tools
//!
//! Produces line geometry only; drawing it is up to the renderer.

pub mod collision_debug;

pub use collision_debug::{CollisionDebugColors, CollisionDebugVisualizer, DebugLine};
