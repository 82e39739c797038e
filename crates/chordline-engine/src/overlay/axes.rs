use glam::{Mat4, Vec2, Vec4};

use crate::paint::Color;
use crate::scene::{DrawList, ZIndex};

/// Coordinate axes from the origin along +X and +Y.
#[derive(Debug, Clone, PartialEq)]
pub struct Axes {
    /// Axis length in world units.
    pub length: f32,
    pub x_color: Color,
    pub y_color: Color,
}

impl Default for Axes {
    fn default() -> Self {
        Self {
            length: 0.85,
            x_color: Color::rgb(1.0, 0.0, 0.0),
            y_color: Color::rgb(0.0, 1.0, 0.0),
        }
    }
}

impl Axes {
    pub fn with_length(mut self, length: f32) -> Self {
        self.length = length;
        self
    }

    pub fn with_colors(mut self, x_color: Color, y_color: Color) -> Self {
        self.x_color = x_color;
        self.y_color = y_color;
        self
    }

    /// Both axes as NDC line endpoints, x axis first.
    pub fn lines(&self, view: Mat4, proj: Mat4) -> [(Vec2, Vec2, Color); 2] {
        let clip = proj * view;
        let project = |p: Vec4| {
            let c = clip * p;
            // Points behind a perspective camera have w <= 0; leave them unscaled.
            if c.w > f32::EPSILON { c.truncate().truncate() / c.w } else { c.truncate().truncate() }
        };

        let origin = project(Vec4::new(0.0, 0.0, 0.0, 1.0));
        let x_end = project(Vec4::new(self.length, 0.0, 0.0, 1.0));
        let y_end = project(Vec4::new(0.0, self.length, 0.0, 1.0));

        [(origin, x_end, self.x_color), (origin, y_end, self.y_color)]
    }

    /// Records both axes as overlay lines.
    pub fn push(&self, list: &mut DrawList, view: Mat4, proj: Mat4) {
        for (a, b, color) in self.lines(view, proj) {
            list.push_line(ZIndex::OVERLAY, a, b, color);
        }
    }
}
