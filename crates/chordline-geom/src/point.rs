use core::fmt;
use core::ops::{Add, Mul, Sub};

/// A point in normalized device coordinates (`[-1, 1]` on both axes, +Y up).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Maps a pixel position on a `width × height` surface to NDC.
    ///
    /// Pixel space has its origin top-left with +Y down, so Y is flipped.
    #[inline]
    pub fn from_pixels(px: f32, py: f32, width: f32, height: f32) -> Self {
        Self::new((px / width) * 2.0 - 1.0, -((py / height) * 2.0 - 1.0))
    }

    #[inline]
    pub fn distance(self, other: Point2D) -> f32 {
        (other - self).length()
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }
}

impl Add for Point2D {
    type Output = Point2D;
    #[inline]
    fn add(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2D {
    type Output = Point2D;
    #[inline]
    fn sub(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point2D {
    type Output = Point2D;
    #[inline]
    fn mul(self, rhs: f32) -> Point2D {
        Point2D::new(self.x * rhs, self.y * rhs)
    }
}

/// Formats as `(x, y)` with two decimals, the form used in status lines.
impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `+ 0.0` turns the -0.0 produced by the Y flip into 0.0.
        write!(f, "({:.2}, {:.2})", self.x + 0.0, self.y + 0.0)
    }
}
