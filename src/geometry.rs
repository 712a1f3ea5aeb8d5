//! Axis-aligned rectangle and line segment primitives used for collision probes.

use glam::Vec2;

/// An axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Builds a square rect centered on `center` with the given half extent.
    pub fn from_center(center: Vec2, half_extent: f32) -> Self {
        let half = Vec2::splat(half_extent);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Inclusive overlap test between two rects.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// The right boundary of the rect, displaced horizontally by `dx`.
    pub fn right_edge(&self, dx: f32) -> LineSegment {
        LineSegment::new(
            Vec2::new(self.max.x + dx, self.min.y),
            Vec2::new(self.max.x + dx, self.max.y),
        )
    }

    /// The left boundary of the rect, displaced horizontally by `dx`.
    pub fn left_edge(&self, dx: f32) -> LineSegment {
        LineSegment::new(
            Vec2::new(self.min.x + dx, self.min.y),
            Vec2::new(self.min.x + dx, self.max.y),
        )
    }

    /// The bottom boundary of the rect, displaced vertically by `dy`.
    /// The y axis grows downward, so this is the leading edge when moving down.
    pub fn bottom_edge(&self, dy: f32) -> LineSegment {
        LineSegment::new(
            Vec2::new(self.min.x, self.max.y + dy),
            Vec2::new(self.max.x, self.max.y + dy),
        )
    }

    /// The top boundary of the rect, displaced vertically by `dy`.
    pub fn top_edge(&self, dy: f32) -> LineSegment {
        LineSegment::new(
            Vec2::new(self.min.x, self.min.y + dy),
            Vec2::new(self.max.x, self.min.y + dy),
        )
    }
}

/// A line segment between two points in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub from: Vec2,
    pub to: Vec2,
}

impl LineSegment {
    pub fn new(from: Vec2, to: Vec2) -> Self {
        Self { from, to }
    }

    /// A zero-length segment, useful for probing a single point.
    pub fn at(point: Vec2) -> Self {
        Self::new(point, point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_center() {
        let rect = Rect::from_center(Vec2::new(10.0, 20.0), 4.0);
        assert_eq!(rect.min, Vec2::new(6.0, 16.0));
        assert_eq!(rect.max, Vec2::new(14.0, 24.0));
    }

    #[test]
    fn test_intersects_overlap() {
        let a = Rect::from_center(Vec2::new(0.0, 0.0), 4.0);
        let b = Rect::from_center(Vec2::new(6.0, 0.0), 4.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_intersects_touching_edges() {
        let a = Rect::from_center(Vec2::new(0.0, 0.0), 4.0);
        let b = Rect::from_center(Vec2::new(8.0, 0.0), 4.0);
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_intersects_disjoint() {
        let a = Rect::from_center(Vec2::new(0.0, 0.0), 4.0);
        let b = Rect::from_center(Vec2::new(20.0, 0.0), 4.0);
        assert!(!a.intersects(&b));

        let c = Rect::from_center(Vec2::new(0.0, 20.0), 4.0);
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_leading_edges() {
        let rect = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(8.0, 8.0));

        let right = rect.right_edge(2.0);
        assert_eq!(right.from, Vec2::new(10.0, 0.0));
        assert_eq!(right.to, Vec2::new(10.0, 8.0));

        let left = rect.left_edge(-2.0);
        assert_eq!(left.from, Vec2::new(-2.0, 0.0));
        assert_eq!(left.to, Vec2::new(-2.0, 8.0));

        let bottom = rect.bottom_edge(2.0);
        assert_eq!(bottom.from, Vec2::new(0.0, 10.0));
        assert_eq!(bottom.to, Vec2::new(8.0, 10.0));

        let top = rect.top_edge(-2.0);
        assert_eq!(top.from, Vec2::new(0.0, -2.0));
        assert_eq!(top.to, Vec2::new(8.0, -2.0));
    }
}
