//! World-space meshes and the triangle-level narrow phase

use crate::assets::Mesh;
use crate::core::config::PhysicsConfig;
use crate::foundation::logging::debug;

use super::bounds::{Aabb, OverlapBox};
use super::sat::{SeparatingAxisTest, Triangle2};
use super::transform::AffineTransform2D;

/// A collision mesh placed in the world for one tick
#[derive(Debug, Clone, Default)]
pub struct WorldSpaceMesh {
    /// World-space triangles
    pub triangles: Vec<Triangle2>,
    /// Bounds of every vertex, `None` for an empty mesh
    pub bounds: Option<Aabb>,
}

impl WorldSpaceMesh {
    /// Transform every well-formed triangle of `mesh`
    pub fn from_mesh(mesh: &Mesh, transform: &AffineTransform2D) -> Self {
        let triangles: Vec<Triangle2> = mesh
            .local_triangles()
            .map(|local| Triangle2::transformed(&local, transform))
            .collect();

        let skipped = mesh.triangle_count() - triangles.len();
        if skipped > 0 {
            debug!("Skipped {} malformed triangle(s) of {}", skipped, mesh.triangle_count());
        }

        Self::from_triangles(triangles)
    }

    /// Stand-in geometry for an entity that collides by its box: the
    /// rectangle split along its diagonal
    pub fn from_aabb(aabb: &Aabb) -> Self {
        let [a, b, c, d] = aabb.corners();
        Self::from_triangles(vec![Triangle2::new(a, b, c), Triangle2::new(a, c, d)])
    }

    /// Wrap already-placed triangles
    pub fn from_triangles(triangles: Vec<Triangle2>) -> Self {
        let bounds = Aabb::from_points(triangles.iter().flat_map(|t| t.vertices.iter()));
        Self { triangles, bounds }
    }

    /// Whether there is any geometry to test
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

/// Exact mesh-versus-mesh test
///
/// Triangles are tested pairwise with SAT, stopping at the first
/// intersecting pair. When the prefilter is enabled, triangles whose box does
/// not reach the region shared by both meshes are left out first; such a
/// triangle has no point in common with the other mesh, so the verdict is the
/// same either way.
#[derive(Debug, Clone, Copy)]
pub struct NarrowPhase {
    sat: SeparatingAxisTest,
    prefilter: bool,
}

impl Default for NarrowPhase {
    fn default() -> Self {
        Self::from_config(&PhysicsConfig::default())
    }
}

impl NarrowPhase {
    /// Create a narrow phase
    pub fn new(sat: SeparatingAxisTest, prefilter: bool) -> Self {
        Self { sat, prefilter }
    }

    /// Create a narrow phase from physics settings
    pub fn from_config(config: &PhysicsConfig) -> Self {
        Self::new(
            SeparatingAxisTest::new(config.parallel_tolerance),
            config.overlap_prefilter,
        )
    }

    /// The triangle test in use
    pub fn sat(&self) -> &SeparatingAxisTest {
        &self.sat
    }

    /// True if any triangle of `a` intersects any triangle of `b`
    pub fn meshes_intersect(&self, a: &WorldSpaceMesh, b: &WorldSpaceMesh) -> bool {
        let (Some(bounds_a), Some(bounds_b)) = (a.bounds, b.bounds) else {
            return false;
        };

        let region = OverlapBox::between(&bounds_a, &bounds_b);
        if region.is_degenerate() {
            return false;
        }

        let relevant = |triangle: &&Triangle2| !self.prefilter || region.intersects_aabb(&triangle.bounds());
        let candidates_b: Vec<&Triangle2> = b.triangles.iter().filter(relevant).collect();
        if candidates_b.is_empty() {
            return false;
        }

        a.triangles.iter().filter(relevant).any(|triangle_a| {
            candidates_b
                .iter()
                .any(|triangle_b| self.sat.triangles_intersect(triangle_a, triangle_b))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::ColoredVertex;
    use crate::foundation::math::{Vec2, Vec3};
    use approx::assert_relative_eq;

    fn square(position: Vec2, angle: f32) -> WorldSpaceMesh {
        let transform = AffineTransform2D::new(position, angle, Vec2::new(10.0, 10.0));
        WorldSpaceMesh::from_mesh(&Mesh::unit_square(), &transform)
    }

    fn both_modes(a: &WorldSpaceMesh, b: &WorldSpaceMesh) -> bool {
        let filtered = NarrowPhase::new(SeparatingAxisTest::default(), true);
        let unfiltered = NarrowPhase::new(SeparatingAxisTest::default(), false);
        let verdict = filtered.meshes_intersect(a, b);
        assert_eq!(verdict, unfiltered.meshes_intersect(a, b));
        assert_eq!(verdict, filtered.meshes_intersect(b, a));
        verdict
    }

    #[test]
    fn test_world_mesh_bounds() {
        let mesh = square(Vec2::new(20.0, -5.0), 0.0);
        assert_eq!(mesh.triangles.len(), 2);
        let bounds = mesh.bounds.unwrap();
        assert_relative_eq!(bounds.min(), Vec2::new(15.0, -10.0), epsilon = 1e-5);
        assert_relative_eq!(bounds.max(), Vec2::new(25.0, 0.0), epsilon = 1e-5);
    }

    #[test]
    fn test_overlapping_squares_collide() {
        assert!(both_modes(&square(Vec2::zeros(), 0.0), &square(Vec2::new(8.0, 0.0), 0.0)));
    }

    #[test]
    fn test_distant_squares_do_not_collide() {
        assert!(!both_modes(&square(Vec2::zeros(), 0.0), &square(Vec2::new(15.0, 0.0), 0.0)));
    }

    #[test]
    fn test_rotated_square_reaches_past_scale_box() {
        // A 45 degree square reaches 5 * sqrt(2) from its center along x
        let rotated = square(Vec2::zeros(), 45.0);
        let probe = square(Vec2::new(11.5, 0.0), 0.0);
        assert!(both_modes(&rotated, &probe));
    }

    #[test]
    fn test_corner_gap_between_rotated_squares() {
        // Boxes overlap near the corner but the rotated shape does not
        let rotated = square(Vec2::zeros(), 45.0);
        let probe = square(Vec2::new(9.0, 9.0), 0.0);
        assert!(!both_modes(&rotated, &probe));
    }

    #[test]
    fn test_from_aabb_covers_rectangle() {
        let aabb = Aabb::new(Vec2::new(2.0, 2.0), Vec2::new(1.0, 1.0));
        let rect = WorldSpaceMesh::from_aabb(&aabb);
        assert_eq!(rect.triangles.len(), 2);
        assert_eq!(rect.bounds, Some(aabb));

        let inside = WorldSpaceMesh::from_triangles(vec![Triangle2::new(
            Vec2::new(1.9, 1.9),
            Vec2::new(2.1, 1.9),
            Vec2::new(2.0, 2.1),
        )]);
        assert!(both_modes(&rect, &inside));
    }

    #[test]
    fn test_empty_mesh_never_collides() {
        let empty = WorldSpaceMesh::default();
        assert!(empty.is_empty());
        assert!(!both_modes(&empty, &square(Vec2::zeros(), 0.0)));
    }

    #[test]
    fn test_malformed_triangles_are_dropped() {
        let white = Vec3::new(1.0, 1.0, 1.0);
        let mesh = Mesh::new(
            vec![
                ColoredVertex::new(Vec3::new(-0.5, -0.5, 0.0), white),
                ColoredVertex::new(Vec3::new(0.5, -0.5, 0.0), white),
                ColoredVertex::new(Vec3::new(0.0, 0.5, 0.0), white),
            ],
            vec![0, 1, 2, 0, 1, 40],
        );
        let world = WorldSpaceMesh::from_mesh(&mesh, &AffineTransform2D::identity());
        assert_eq!(world.triangles.len(), 1);
    }

    #[test]
    fn test_flat_triangles_need_shared_points() {
        let flat = |from: f32, to: f32| Triangle2::new(
            Vec2::new(from, 0.0),
            Vec2::new(to, 0.0),
            Vec2::new((from + to) / 2.0, 0.0),
        );
        let left_padding = Triangle2::new(Vec2::new(0.0, -5.0), Vec2::new(1.0, -5.0), Vec2::new(0.0, -4.0));
        let right_padding = Triangle2::new(Vec2::new(8.0, 5.0), Vec2::new(9.0, 5.0), Vec2::new(8.0, 6.0));

        let a = WorldSpaceMesh::from_triangles(vec![flat(4.0, 5.0), left_padding]);
        let apart = WorldSpaceMesh::from_triangles(vec![flat(3.0, 3.5), right_padding]);
        let overlapping = WorldSpaceMesh::from_triangles(vec![flat(4.5, 6.0), right_padding]);

        assert!(!both_modes(&a, &apart));
        assert!(both_modes(&a, &overlapping));
    }

    #[test]
    fn test_prefilter_skips_far_triangles_only() {
        // A long strip whose far triangle is outside the shared region
        let strip = WorldSpaceMesh::from_triangles(vec![
            Triangle2::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)),
            Triangle2::new(Vec2::new(50.0, 0.0), Vec2::new(51.0, 0.0), Vec2::new(50.0, 1.0)),
        ]);
        let near_first = square(Vec2::new(0.0, 0.0), 0.0);
        let near_last = square(Vec2::new(50.0, 0.0), 0.0);
        assert!(both_modes(&strip, &near_first));
        assert!(both_modes(&strip, &near_last));
    }
}
