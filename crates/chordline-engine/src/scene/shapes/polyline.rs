use glam::Vec2;

use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Connected line strip in NDC.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineCmd {
    pub points: Vec<Vec2>,
    /// Joins the last point back to the first.
    pub closed: bool,
    pub color: Color,
}

impl PolylineCmd {
    /// Line-list segments, two endpoints each.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.points.len();
        let count = match (n, self.closed) {
            (0 | 1, _) => 0,
            (2, _) => 1,
            (_, true) => n,
            (_, false) => n - 1,
        };
        (0..count).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }
}

impl DrawList {
    /// Records a line strip. Fewer than two points draw nothing.
    pub fn push_polyline(
        &mut self,
        z: ZIndex,
        points: impl IntoIterator<Item = Vec2>,
        closed: bool,
        color: Color,
    ) {
        let points: Vec<Vec2> = points.into_iter().collect();
        if points.len() < 2 {
            return;
        }
        self.push(z, DrawCmd::Polyline(PolylineCmd { points, closed, color }));
    }

    /// Records a single line from `a` to `b`.
    pub fn push_line(&mut self, z: ZIndex, a: Vec2, b: Vec2, color: Color) {
        self.push_polyline(z, [a, b], false, color);
    }
}
