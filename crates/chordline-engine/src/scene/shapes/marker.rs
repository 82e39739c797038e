use glam::Vec2;

use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Screen-aligned filled square centered on a point.
///
/// The center is in NDC; the side length is in logical pixels so markers keep
/// their size when the window is resized.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerCmd {
    pub center: Vec2,
    pub size_px: f32,
    pub color: Color,
}

impl DrawList {
    pub fn push_marker(&mut self, z: ZIndex, center: Vec2, size_px: f32, color: Color) {
        self.push(z, DrawCmd::Marker(MarkerCmd { center, size_px, color }));
    }
}
