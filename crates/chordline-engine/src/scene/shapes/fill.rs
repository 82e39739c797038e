use glam::Vec2;

use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Solid axis-aligned rectangle between two NDC corners.
#[derive(Debug, Clone, PartialEq)]
pub struct FillCmd {
    pub min: Vec2,
    pub max: Vec2,
    pub color: Color,
}

impl FillCmd {
    /// Corners in counter-clockwise order starting at `min`.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            self.max,
            Vec2::new(self.min.x, self.max.y),
        ]
    }
}

impl DrawList {
    /// Records a filled rectangle. Corners may be given in any order.
    pub fn push_fill(&mut self, z: ZIndex, a: Vec2, b: Vec2, color: Color) {
        self.push(z, DrawCmd::Fill(FillCmd { min: a.min(b), max: a.max(b), color }));
    }
}
