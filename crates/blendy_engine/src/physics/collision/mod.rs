//! Collision geometry: transforms, boxes, SAT and the mesh narrow phase
//!
//! Meshes are stored once in model space and placed in the world per tick
//! through an [`AffineTransform2D`]. Boxes come from the entity scale and
//! drive the broad phase; the narrow phase works on [`WorldSpaceMesh`]es.

pub mod bounds;
pub mod narrow_phase;
pub mod sat;
pub mod transform;

pub use bounds::{broad_phase_overlap, half_extent, Aabb, OverlapBox};
pub use narrow_phase::{NarrowPhase, WorldSpaceMesh};
pub use sat::{Interval, SeparatingAxisTest, Triangle2};
pub use transform::AffineTransform2D;
