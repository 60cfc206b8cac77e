//! Separating Axis Theorem test for world-space triangles
//!
//! Two convex shapes are disjoint iff some axis separates their projections.
//! For triangles the candidate axes are the edge normals of both shapes, so
//! at most six axes are tested per pair.

use crate::core::config::DEFAULT_PARALLEL_TOLERANCE;
use crate::foundation::math::{cross2, perpendicular, Vec2};

use super::bounds::Aabb;
use super::transform::AffineTransform2D;

/// Edges shorter than this produce no axis
const MIN_EDGE_LENGTH: f32 = f32::EPSILON;

/// Triangle in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle2 {
    /// The three corners, in mesh winding order
    pub vertices: [Vec2; 3],
}

impl Triangle2 {
    /// Create a triangle from its corners
    pub fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self { vertices: [a, b, c] }
    }

    /// Map a model-space triangle into the world
    pub fn transformed(local: &[Vec2; 3], transform: &AffineTransform2D) -> Self {
        Self {
            vertices: local.map(|v| transform.transform_point(&v)),
        }
    }

    /// Edge vectors `v1 - v0`, `v2 - v1`, `v0 - v2`
    pub fn edges(&self) -> [Vec2; 3] {
        let [a, b, c] = self.vertices;
        [b - a, c - b, a - c]
    }

    /// The longest of the three edge vectors
    pub fn longest_edge(&self) -> Vec2 {
        let [e0, e1, e2] = self.edges();
        [e1, e2]
            .into_iter()
            .fold(e0, |longest, edge| if edge.norm_squared() > longest.norm_squared() { edge } else { longest })
    }

    /// Bounding box of the three corners
    pub fn bounds(&self) -> Aabb {
        let [a, b, c] = self.vertices;
        Aabb::from_min_max(a.inf(&b).inf(&c), a.sup(&b).sup(&c))
    }

    /// Project the corners onto `axis`
    pub fn project(&self, axis: &Vec2) -> Interval {
        let [a, b, c] = self.vertices.map(|v| v.dot(axis));
        Interval {
            min: a.min(b).min(c),
            max: a.max(b).max(c),
        }
    }
}

/// Closed 1-D interval produced by projecting a shape onto an axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Smallest projection
    pub min: f32,
    /// Largest projection
    pub max: f32,
}

impl Interval {
    /// Closed overlap; intervals that only touch overlap
    pub fn overlaps(&self, other: &Interval) -> bool {
        !(self.max < other.min || other.max < self.min)
    }
}

/// Unit axes collected from two triangles, parallel duplicates removed
#[derive(Debug)]
struct AxisSet {
    axes: [Vec2; 6],
    len: usize,
}

impl Default for AxisSet {
    fn default() -> Self {
        Self {
            axes: [Vec2::zeros(); 6],
            len: 0,
        }
    }
}

impl AxisSet {
    fn collect(a: &Triangle2, b: &Triangle2, parallel_tolerance: f32) -> Self {
        let mut set = Self::default();
        for triangle in [a, b] {
            for axis in Self::triangle_axes(triangle, parallel_tolerance).as_slice() {
                set.push(*axis, parallel_tolerance);
            }
        }
        set
    }

    /// Edge normals of one triangle
    ///
    /// A flat triangle (corners on one line) has a single normal. Its longest
    /// edge direction is added so shapes further along the same line still
    /// separate.
    fn triangle_axes(triangle: &Triangle2, parallel_tolerance: f32) -> Self {
        let mut own = Self::default();
        for edge in &triangle.edges() {
            // Zero-length edges cannot be normalized
            if let Some(axis) = perpendicular(edge).try_normalize(MIN_EDGE_LENGTH) {
                own.push(axis, parallel_tolerance);
            }
        }
        if own.len == 1 {
            if let Some(direction) = triangle.longest_edge().try_normalize(MIN_EDGE_LENGTH) {
                own.push(direction, parallel_tolerance);
            }
        }
        own
    }

    fn push(&mut self, axis: Vec2, parallel_tolerance: f32) {
        let parallel = self
            .as_slice()
            .iter()
            .any(|existing| cross2(existing, &axis).abs() < parallel_tolerance);
        if !parallel && self.len < self.axes.len() {
            self.axes[self.len] = axis;
            self.len += 1;
        }
    }

    fn as_slice(&self) -> &[Vec2] {
        &self.axes[..self.len]
    }
}

/// Triangle-triangle intersection via edge-normal SAT
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeparatingAxisTest {
    parallel_tolerance: f32,
}

impl Default for SeparatingAxisTest {
    fn default() -> Self {
        Self::new(DEFAULT_PARALLEL_TOLERANCE)
    }
}

impl SeparatingAxisTest {
    /// Create a test that treats axes whose cross product is below
    /// `parallel_tolerance` as the same axis
    pub fn new(parallel_tolerance: f32) -> Self {
        Self { parallel_tolerance }
    }

    /// Tolerance used for axis de-duplication
    pub fn parallel_tolerance(&self) -> f32 {
        self.parallel_tolerance
    }

    /// True if the triangles share at least one point
    ///
    /// Axes come from the edge normals of both triangles, plus the edge
    /// direction of any flat triangle. Zero-length edges contribute no axis.
    /// If both triangles are single points there is no axis at all and the
    /// points are compared directly.
    pub fn triangles_intersect(&self, a: &Triangle2, b: &Triangle2) -> bool {
        let axes = AxisSet::collect(a, b, self.parallel_tolerance);
        if axes.as_slice().is_empty() {
            return (a.vertices[0] - b.vertices[0]).norm() <= MIN_EDGE_LENGTH;
        }

        axes.as_slice()
            .iter()
            .all(|axis| a.project(axis).overlaps(&b.project(axis)))
    }
}
