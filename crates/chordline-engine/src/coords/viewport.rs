use super::{Rect, Vec2};

/// Surface size in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    #[inline]
    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Largest square that fits the surface, centered on the short axis.
    pub fn square_fit(self) -> Rect {
        if !self.is_valid() {
            return Rect::default();
        }
        let side = self.width.min(self.height);
        let origin = Vec2::new((self.width - side) * 0.5, (self.height - side) * 0.5);
        Rect::from_origin_size(origin, Vec2::new(side, side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_surface_fits_exactly() {
        let vp = Viewport::new(700.0, 700.0);
        assert_eq!(vp.square_fit(), Rect::new(0.0, 0.0, 700.0, 700.0));
    }

    #[test]
    fn wide_surface_centers_horizontally() {
        let vp = Viewport::new(1000.0, 600.0);
        assert_eq!(vp.square_fit(), Rect::new(200.0, 0.0, 600.0, 600.0));
    }

    #[test]
    fn tall_surface_centers_vertically() {
        let vp = Viewport::new(400.0, 800.0);
        assert_eq!(vp.square_fit(), Rect::new(0.0, 200.0, 400.0, 400.0));
    }

    #[test]
    fn invalid_surface_fits_nothing() {
        assert!(Viewport::new(0.0, 300.0).square_fit().is_empty());
        assert!(Viewport::new(f32::NAN, 300.0).square_fit().is_empty());
    }
}
