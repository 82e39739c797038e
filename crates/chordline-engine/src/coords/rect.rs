use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.y >= self.origin.y && p.x < max.x && p.y < max.y
    }

    /// Position of `p` relative to the rectangle's top-left corner.
    #[inline]
    pub fn local(self, p: Vec2) -> Vec2 {
        p - self.origin
    }

    /// Rectangle in physical pixels, snapped outwards to whole pixels.
    pub fn to_physical(self, scale_factor: f32) -> Rect {
        let min = self.min() * scale_factor;
        let max = self.max() * scale_factor;
        let (x0, y0) = (min.x.floor(), min.y.floor());
        let (x1, y1) = (max.x.ceil(), max.y.ceil());
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_interior_point() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn contains_top_left_inclusive() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn contains_bottom_right_exclusive() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn contains_outside() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(-1.0, 5.0)));
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(5.0, -1.0)));
    }

    // ── local ─────────────────────────────────────────────────────────────

    #[test]
    fn local_is_offset_from_origin() {
        let plot = r(200.0, 0.0, 600.0, 600.0);
        assert_eq!(plot.local(Vec2::new(500.0, 300.0)), Vec2::new(300.0, 300.0));
    }

    // ── to_physical ───────────────────────────────────────────────────────

    #[test]
    fn to_physical_scales() {
        assert_eq!(r(10.0, 20.0, 100.0, 50.0).to_physical(2.0), r(20.0, 40.0, 200.0, 100.0));
    }

    #[test]
    fn to_physical_snaps_outwards() {
        assert_eq!(r(0.5, 0.5, 10.0, 10.0).to_physical(1.0), r(0.0, 0.0, 11.0, 11.0));
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(r(0.0, 0.0, 5.0, 0.0).is_empty());
    }

    #[test]
    fn is_empty_positive_size() {
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
