//! Closed-form segment/circle intersection.
//!
//! The segment is parameterized as `P(t) = start + t * (end - start)` and
//! substituted into `|P(t) - center|² = r²`, giving `A t² + B t + C = 0`.
//! Roots with `t` in `[0, 1]` (inclusive) are points on the segment.

use thiserror::Error;

use super::{Circle, Point2D, Segment};

/// Error returned by [`solve`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SolveError {
    /// The segment has zero length, so the quadratic degenerates (`A = 0`).
    #[error("segment from {start} to {end} has zero length")]
    DegenerateSegment { start: Point2D, end: Point2D },
}

/// Zero, one or two intersection points, in root order (`t1` before `t2`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Intersections {
    points: Vec<Point2D>,
}

impl Intersections {
    #[inline]
    pub fn none() -> Self {
        Self::default()
    }

    #[inline]
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Point2D> {
        self.points.iter()
    }
}

/// Quadratic coefficients for `circle` against the line through `segment`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quadratic {
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl Quadratic {
    pub fn for_pair(circle: &Circle, segment: &Segment) -> Self {
        let s = segment.start;
        let o = circle.center;
        let d = segment.direction();

        let a = d.x * d.x + d.y * d.y;
        let b = 2.0 * (d.x * (s.x - o.x) + d.y * (s.y - o.y));
        let c = s.x * s.x + s.y * s.y + o.x * o.x + o.y * o.y
            - circle.radius * circle.radius
            - 2.0 * (s.x * o.x + s.y * o.y);

        Self { a, b, c }
    }

    #[inline]
    pub fn discriminant(&self) -> f32 {
        self.b * self.b - 4.0 * self.a * self.c
    }
}

/// Intersects `circle` with `segment`.
///
/// A double root (discriminant exactly zero, the tangent case) is reported
/// once. Endpoints lying on the circle count as intersections.
pub fn solve(circle: &Circle, segment: &Segment) -> Result<Intersections, SolveError> {
    let q = Quadratic::for_pair(circle, segment);
    if q.a == 0.0 {
        return Err(SolveError::DegenerateSegment {
            start: segment.start,
            end: segment.end,
        });
    }

    let disc = q.discriminant();
    if disc < 0.0 {
        return Ok(Intersections::none());
    }

    let sqrt_d = disc.sqrt();
    let t1 = (-q.b + sqrt_d) / (2.0 * q.a);
    let t2 = (-q.b - sqrt_d) / (2.0 * q.a);

    let roots: &[f32] = if disc == 0.0 { &[t1] } else { &[t1, t2] };

    let points = roots
        .iter()
        .copied()
        .filter(|t| (0.0..=1.0).contains(t))
        .map(|t| segment.point_at(t))
        .collect();

    Ok(Intersections { points })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_circle() -> Circle {
        Circle { center: Point2D::origin(), radius: 1.0 }
    }

    fn seg(x0: f32, y0: f32, x1: f32, y1: f32) -> Segment {
        Segment::new(Point2D::new(x0, y0), Point2D::new(x1, y1))
    }

    // ── misses ────────────────────────────────────────────────────────────

    #[test]
    fn line_missing_the_circle_has_no_points() {
        let c = Circle { center: Point2D::origin(), radius: 0.5 };
        let s = seg(-1.0, 0.9, 1.0, 0.9);
        assert!(Quadratic::for_pair(&c, &s).discriminant() < 0.0);
        assert!(solve(&c, &s).unwrap().is_empty());
    }

    #[test]
    fn segment_short_of_the_circle_has_no_points() {
        // The infinite line crosses the circle, but both roots have t < 0.
        let c = Circle { center: Point2D::origin(), radius: 0.5 };
        let s = seg(0.8, 0.8, 1.0, 0.9);
        assert!(Quadratic::for_pair(&c, &s).discriminant() > 0.0);
        assert!(solve(&c, &s).unwrap().is_empty());
    }

    #[test]
    fn chord_inside_the_circle_has_no_points() {
        let s = seg(-0.2, 0.0, 0.3, 0.1);
        assert!(solve(&unit_circle(), &s).unwrap().is_empty());
    }

    // ── crossings ─────────────────────────────────────────────────────────

    #[test]
    fn diameter_reports_both_rim_points_in_root_order() {
        let hits = solve(&unit_circle(), &seg(-2.0, 0.0, 2.0, 0.0)).unwrap();
        // B = -16, sqrt(D) = 8: t1 = 0.75 comes from the +sqrt(D) branch.
        assert_eq!(hits.points(), &[Point2D::new(1.0, 0.0), Point2D::new(-1.0, 0.0)]);
    }

    #[test]
    fn off_center_diameter_points_lie_on_circle_and_segment() {
        let c = Circle { center: Point2D::new(0.2, 0.1), radius: 0.5 };
        let s = seg(-0.6, 0.1, 1.0, 0.1);
        let hits = solve(&c, &s).unwrap();
        assert_eq!(hits.len(), 2);
        for p in hits.iter() {
            assert_relative_eq!(p.distance(c.center), 0.5, epsilon = 1e-5);
            assert_relative_eq!(p.y, 0.1, epsilon = 1e-6);
            assert!(p.x >= -0.6 && p.x <= 1.0);
        }
    }

    #[test]
    fn segment_leaving_the_circle_reports_one_point() {
        let hits = solve(&unit_circle(), &seg(0.0, 0.0, 0.0, 2.0)).unwrap();
        assert_eq!(hits.points(), &[Point2D::new(0.0, 1.0)]);
    }

    #[test]
    fn endpoint_on_the_rim_is_included() {
        let hits = solve(&unit_circle(), &seg(1.0, 0.0, 2.0, 0.0)).unwrap();
        assert_eq!(hits.points(), &[Point2D::new(1.0, 0.0)]);
    }

    // ── tangency ──────────────────────────────────────────────────────────

    #[test]
    fn tangent_segment_reports_the_touch_point_once() {
        let s = seg(-2.0, 1.0, 2.0, 1.0);
        assert_eq!(Quadratic::for_pair(&unit_circle(), &s).discriminant(), 0.0);

        let hits = solve(&unit_circle(), &s).unwrap();
        assert_eq!(hits.len(), 1);
        assert_relative_eq!(hits.points()[0].x, 0.0);
        assert_relative_eq!(hits.points()[0].y, 1.0);
    }

    // ── degenerate input ──────────────────────────────────────────────────

    #[test]
    fn zero_length_segment_is_an_error() {
        let p = Point2D::new(0.3, 0.3);
        let err = solve(&unit_circle(), &Segment::new(p, p)).unwrap_err();
        assert_eq!(err, SolveError::DegenerateSegment { start: p, end: p });
    }

    #[test]
    fn coefficients_match_the_expanded_form() {
        let q = Quadratic::for_pair(&unit_circle(), &seg(-2.0, 0.0, 2.0, 0.0));
        assert_eq!(q, Quadratic { a: 16.0, b: -16.0, c: 3.0 });
        assert_eq!(q.discriminant(), 64.0);
    }
}
