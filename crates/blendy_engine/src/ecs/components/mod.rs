//! ECS Components module
//!
//! Components read by the collision core

pub mod motion;
pub mod collision;

pub use motion::Motion;
pub use collision::CollidableKind;
