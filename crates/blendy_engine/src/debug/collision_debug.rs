//! Collision-specific debug visualization
//!
//! Rebuilt once per tick after the collision pass: every collidable entity
//! gets its broad-phase box outlined, red when it collided this tick and green
//! otherwise. Mesh triangles can be outlined as well.

use std::collections::HashSet;

use crate::ecs::{Entity, World};
use crate::events::CollisionEvents;
use crate::foundation::math::{Vec2, Vec3};
use crate::physics::collision::{Aabb, AffineTransform2D, Triangle2};

/// A world-space line segment to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugLine {
    /// Start point
    pub from: Vec2,
    /// End point
    pub to: Vec2,
    /// RGB colour
    pub color: Vec3,
}

/// Color scheme for collision visualization
#[derive(Clone, Debug)]
pub struct CollisionDebugColors {
    /// Box of an entity that is not colliding
    pub bounds_default: Vec3,
    /// Box of an entity that collided this tick
    pub bounds_colliding: Vec3,
    /// Mesh triangle edges
    pub triangles: Vec3,
}

impl Default for CollisionDebugColors {
    fn default() -> Self {
        Self {
            bounds_default: Vec3::new(0.0, 1.0, 0.0),   // Green
            bounds_colliding: Vec3::new(1.0, 0.0, 0.0), // Red
            triangles: Vec3::new(0.0, 1.0, 1.0),        // Cyan
        }
    }
}

/// Collision-specific debug visualizer
#[derive(Debug, Default)]
pub struct CollisionDebugVisualizer {
    colors: CollisionDebugColors,
    lines: Vec<DebugLine>,

    /// Outline mesh triangles in addition to boxes
    pub show_triangles: bool,
}

impl CollisionDebugVisualizer {
    /// Create a new collision debug visualizer
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom color scheme
    pub fn with_colors(mut self, colors: CollisionDebugColors) -> Self {
        self.colors = colors;
        self
    }

    /// Enable triangle outlines
    pub fn with_triangles(mut self, enabled: bool) -> Self {
        self.show_triangles = enabled;
        self
    }

    /// Replace the line list with the state of `world` and this tick's events
    pub fn rebuild(&mut self, world: &World, events: &CollisionEvents) {
        self.lines.clear();
        let colliding: HashSet<Entity> = events.iter().map(|event| event.subject).collect();

        for (entity, motion) in world.motions.iter() {
            if world.kind_of(entity).is_none() {
                continue;
            }

            let color = if colliding.contains(&entity) {
                self.colors.bounds_colliding
            } else {
                self.colors.bounds_default
            };
            let [a, b, c, d] = Aabb::from_motion(motion).corners();
            self.push_loop(&[a, b, c, d], color);

            if self.show_triangles {
                if let Some(mesh) = world.mesh_of(entity) {
                    let transform = AffineTransform2D::from_motion(motion);
                    for local in mesh.local_triangles() {
                        let triangle = Triangle2::transformed(&local, &transform);
                        self.push_loop(&triangle.vertices, self.colors.triangles);
                    }
                }
            }
        }
    }

    /// Lines from the last rebuild
    pub fn lines(&self) -> &[DebugLine] {
        &self.lines
    }

    /// Drop every line
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    fn push_loop(&mut self, points: &[Vec2], color: Vec3) {
        for (i, &from) in points.iter().enumerate() {
            let to = points[(i + 1) % points.len()];
            self.lines.push(DebugLine { from, to, color });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Mesh;
    use crate::ecs::components::{CollidableKind, Motion};

    #[test]
    fn test_boxes_colored_by_collision_state() {
        let mut world = World::new();
        let mesh = world.add_mesh(Mesh::unit_square());
        let hit = world.spawn_with_mesh(Motion::default(), CollidableKind::Player, mesh);
        let other = world.spawn_with_mesh(Motion::default(), CollidableKind::Enemy, mesh);
        world.spawn_with_mesh(Motion::new(Vec2::new(100.0, 0.0), Vec2::new(10.0, 10.0)), CollidableKind::Enemy, mesh);
        world.spawn_decoration(Motion::default());

        let mut events = CollisionEvents::new();
        events.record_pair(hit, other);

        let mut visualizer = CollisionDebugVisualizer::new();
        visualizer.rebuild(&world, &events);

        let colors = CollisionDebugColors::default();
        let lines = visualizer.lines();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines.iter().filter(|l| l.color == colors.bounds_colliding).count(), 8);
        assert_eq!(lines.iter().filter(|l| l.color == colors.bounds_default).count(), 4);
    }

    #[test]
    fn test_triangle_outlines() {
        let mut world = World::new();
        let mesh = world.add_mesh(Mesh::unit_square());
        world.spawn_with_mesh(Motion::default(), CollidableKind::Player, mesh);

        let mut visualizer = CollisionDebugVisualizer::new().with_triangles(true);
        visualizer.rebuild(&world, &CollisionEvents::new());
        // 4 box edges + 2 triangles * 3 edges
        assert_eq!(visualizer.lines().len(), 10);

        visualizer.clear();
        assert!(visualizer.lines().is_empty());
    }
}
