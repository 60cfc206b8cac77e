//! Axis-aligned boxes for the broad phase and the overlap region

use crate::ecs::components::Motion;
use crate::foundation::math::Vec2;

/// Half-extent of an entity's box, independent of the scale's sign
#[inline]
pub fn half_extent(motion: &Motion) -> Vec2 {
    motion.scale.abs() / 2.0
}

/// Axis-aligned bounding box described by center and half-extent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Box center
    pub center: Vec2,
    /// Half of the box size on each axis
    pub half_extent: Vec2,
}

impl Aabb {
    /// Create a box from center and half-extent
    pub fn new(center: Vec2, half_extent: Vec2) -> Self {
        Self { center, half_extent }
    }

    /// Box of an entity: centered at its position, sized by `|scale|`
    pub fn from_motion(motion: &Motion) -> Self {
        Self::new(motion.position, half_extent(motion))
    }

    /// Create a box from its corners
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self::new((min + max) / 2.0, (max - min) / 2.0)
    }

    /// Tightest box around a set of points, `None` when empty
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Vec2>,
    {
        let mut points = points.into_iter();
        let first = *points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| (min.inf(p), max.sup(p)));
        Some(Self::from_min_max(min, max))
    }

    /// Lower corner
    pub fn min(&self) -> Vec2 {
        self.center - self.half_extent
    }

    /// Upper corner
    pub fn max(&self) -> Vec2 {
        self.center + self.half_extent
    }

    /// Strict overlap on both axes; boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let delta = (self.center - other.center).abs();
        let reach = self.half_extent + other.half_extent;
        delta.x < reach.x && delta.y < reach.y
    }

    /// Inclusive overlap; shared edges and corners count
    pub fn touches(&self, other: &Aabb) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x <= b_max.x && b_min.x <= a_max.x && a_min.y <= b_max.y && b_min.y <= a_max.y
    }

    /// The four corners in counter-clockwise order starting at `min`
    pub fn corners(&self) -> [Vec2; 4] {
        let (min, max) = (self.min(), self.max());
        [min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y)]
    }
}

/// Broad-phase test between two entities
///
/// True means the pair is worth a detailed check; false means it cannot
/// collide this tick.
pub fn broad_phase_overlap(a: &Motion, b: &Motion) -> bool {
    Aabb::from_motion(a).overlaps(&Aabb::from_motion(b))
}

/// Intersection rectangle of two boxes
///
/// When the boxes are disjoint the region is degenerate: it collapses to a
/// zero-area box and every containment query on it answers "exclude".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlapBox {
    /// Region center
    pub center: Vec2,
    /// Region half-extent, zero when degenerate
    pub half_extent: Vec2,
    degenerate: bool,
}

impl OverlapBox {
    /// Compute the region shared by `a` and `b`
    pub fn between(a: &Aabb, b: &Aabb) -> Self {
        let top_left = a.min().sup(&b.min());
        let bottom_right = a.max().inf(&b.max());
        let extent = bottom_right - top_left;

        if extent.x < 0.0 || extent.y < 0.0 {
            return Self {
                center: (top_left + bottom_right) / 2.0,
                half_extent: Vec2::zeros(),
                degenerate: true,
            };
        }

        Self {
            center: (top_left + bottom_right) / 2.0,
            half_extent: extent / 2.0,
            degenerate: false,
        }
    }

    /// True when the source boxes do not intersect
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// Area of the region
    pub fn area(&self) -> f32 {
        4.0 * self.half_extent.x * self.half_extent.y
    }

    /// The region as a plain box, `None` when degenerate
    pub fn as_aabb(&self) -> Option<Aabb> {
        (!self.degenerate).then(|| Aabb::new(self.center, self.half_extent))
    }

    /// Inclusive point containment, always false when degenerate
    pub fn contains_point(&self, point: &Vec2) -> bool {
        self.as_aabb().map_or(false, |region| {
            let (min, max) = (region.min(), region.max());
            point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
        })
    }

    /// Inclusive box intersection, always false when degenerate
    pub fn intersects_aabb(&self, other: &Aabb) -> bool {
        self.as_aabb().map_or(false, |region| region.touches(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square_at(x: f32, y: f32) -> Motion {
        Motion::new(Vec2::new(x, y), Vec2::new(10.0, 10.0))
    }

    #[test]
    fn test_half_extent_ignores_sign() {
        let motion = Motion::new(Vec2::zeros(), Vec2::new(-12.0, 8.0));
        assert_relative_eq!(half_extent(&motion), Vec2::new(6.0, 4.0));
    }

    #[test]
    fn test_broad_phase_gap_is_rejected() {
        assert!(!broad_phase_overlap(&square_at(0.0, 0.0), &square_at(15.0, 0.0)));
    }

    #[test]
    fn test_broad_phase_shared_edge_is_rejected() {
        assert!(!broad_phase_overlap(&square_at(0.0, 0.0), &square_at(10.0, 0.0)));
    }

    #[test]
    fn test_broad_phase_overlap_accepted() {
        assert!(broad_phase_overlap(&square_at(0.0, 0.0), &square_at(8.0, 0.0)));
        assert!(broad_phase_overlap(&square_at(8.0, 0.0), &square_at(0.0, 0.0)));
    }

    #[test]
    fn test_broad_phase_needs_both_axes() {
        assert!(!broad_phase_overlap(&square_at(0.0, 0.0), &square_at(8.0, 30.0)));
    }

    #[test]
    fn test_broad_phase_flipped_entity() {
        let flipped = square_at(8.0, 0.0).facing_left();
        assert!(broad_phase_overlap(&square_at(0.0, 0.0), &flipped));
    }

    #[test]
    fn test_from_points() {
        let points = [Vec2::new(1.0, 4.0), Vec2::new(-2.0, 0.0), Vec2::new(3.0, 2.0)];
        let aabb = Aabb::from_points(&points).unwrap();
        assert_relative_eq!(aabb.min(), Vec2::new(-2.0, 0.0));
        assert_relative_eq!(aabb.max(), Vec2::new(3.0, 4.0));
        assert!(Aabb::from_points(&[] as &[Vec2]).is_none());
    }

    #[test]
    fn test_overlap_region() {
        let a = Aabb::from_motion(&square_at(0.0, 0.0));
        let b = Aabb::from_motion(&square_at(8.0, 2.0));
        let region = OverlapBox::between(&a, &b);
        assert!(!region.is_degenerate());
        assert_relative_eq!(region.center, Vec2::new(4.0, 1.0));
        assert_relative_eq!(region.half_extent, Vec2::new(1.0, 4.0));
        assert_relative_eq!(region.area(), 16.0);
        assert!(region.contains_point(&Vec2::new(3.0, 3.0)));
        assert!(!region.contains_point(&Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_overlap_region_is_symmetric() {
        let a = Aabb::from_motion(&square_at(0.0, 0.0));
        let b = Aabb::from_motion(&square_at(-3.0, 6.0));
        assert_eq!(OverlapBox::between(&a, &b), OverlapBox::between(&b, &a));
    }

    #[test]
    fn test_disjoint_boxes_give_degenerate_region() {
        let a = Aabb::from_motion(&square_at(0.0, 0.0));
        let b = Aabb::from_motion(&square_at(15.0, 0.0));
        let region = OverlapBox::between(&a, &b);
        assert!(region.is_degenerate());
        assert!(region.area() <= 0.0);
        assert!(region.as_aabb().is_none());
        assert!(!region.contains_point(&region.center));
        assert!(!region.intersects_aabb(&a));
        assert!(!region.intersects_aabb(&b));
    }

    #[test]
    fn test_touching_boxes_give_flat_region() {
        let a = Aabb::from_motion(&square_at(0.0, 0.0));
        let b = Aabb::from_motion(&square_at(10.0, 0.0));
        let region = OverlapBox::between(&a, &b);
        assert!(!region.is_degenerate());
        assert_relative_eq!(region.area(), 0.0);
        assert!(region.contains_point(&Vec2::new(5.0, 0.0)));
    }
}
