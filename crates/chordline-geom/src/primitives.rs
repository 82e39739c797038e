use core::f32::consts::TAU;

use super::Point2D;

/// Number of rim samples used when a circle is drawn as a closed polyline.
pub const DEFAULT_CIRCLE_SEGMENTS: usize = 100;

/// Circle defined by a drag: the press point is the center, the release point
/// lies on the rim.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    pub center: Point2D,
    pub radius: f32,
}

impl Circle {
    /// Builds the circle for a finished drag.
    ///
    /// The radius is always the start/end distance; there is no other way to
    /// set it, so it is never negative.
    #[inline]
    pub fn from_drag(start: Point2D, end: Point2D) -> Self {
        Self {
            center: start,
            radius: start.distance(end),
        }
    }

    /// Returns `segments` equally spaced rim points starting at angle 0.
    ///
    /// The last point is not repeated; callers close the loop.
    pub fn rim_points(&self, segments: usize) -> Vec<Point2D> {
        let step = TAU / segments.max(1) as f32;
        (0..segments)
            .map(|i| {
                let theta = i as f32 * step;
                Point2D::new(
                    self.center.x + self.radius * theta.cos(),
                    self.center.y + self.radius * theta.sin(),
                )
            })
            .collect()
    }
}

/// Line segment between two drag points.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    pub start: Point2D,
    pub end: Point2D,
}

impl Segment {
    #[inline]
    pub const fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }

    /// Direction vector `end - start` (not normalized).
    #[inline]
    pub fn direction(&self) -> Point2D {
        self.end - self.start
    }

    /// Point at parameter `t`, where `t = 0` is `start` and `t = 1` is `end`.
    #[inline]
    pub fn point_at(&self, t: f32) -> Point2D {
        self.start + self.direction() * t
    }
}

/// A finalized primitive, in the order the session produces them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Primitive {
    Circle(Circle),
    Segment(Segment),
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn circle_from_unit_drag_is_exact() {
        let c = Circle::from_drag(Point2D::new(0.0, 0.0), Point2D::new(1.0, 0.0));
        assert_eq!(c.center, Point2D::new(0.0, 0.0));
        assert_eq!(c.radius, 1.0);
    }

    #[test]
    fn circle_radius_ignores_drag_direction() {
        let a = Circle::from_drag(Point2D::new(0.2, 0.1), Point2D::new(-0.1, -0.3));
        assert_relative_eq!(a.radius, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn rim_points_lie_on_the_circle() {
        let c = Circle { center: Point2D::new(0.3, -0.2), radius: 0.4 };
        let pts = c.rim_points(DEFAULT_CIRCLE_SEGMENTS);
        assert_eq!(pts.len(), DEFAULT_CIRCLE_SEGMENTS);
        for p in pts {
            assert_relative_eq!(p.distance(c.center), 0.4, epsilon = 1e-5);
        }
    }

    #[test]
    fn rim_starts_at_angle_zero() {
        let c = Circle { center: Point2D::origin(), radius: 0.5 };
        let first = c.rim_points(4)[0];
        assert_relative_eq!(first.x, 0.5);
        assert_relative_eq!(first.y, 0.0);
    }

    #[test]
    fn segment_point_at_endpoints() {
        let s = Segment::new(Point2D::new(-1.0, 0.5), Point2D::new(1.0, -0.5));
        assert_eq!(s.point_at(0.0), s.start);
        assert_eq!(s.point_at(1.0), s.end);
        assert_eq!(s.point_at(0.5), Point2D::new(0.0, 0.0));
    }
}
