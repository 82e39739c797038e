//! Conversion of the geometry scene into engine draw commands.

use chordline_engine::paint::Color;
use chordline_engine::scene::{DrawList, ZIndex};
use chordline_geom::{Point2D, SceneItem, Shape};

#[inline]
fn ndc(p: Point2D) -> glam::Vec2 {
    glam::Vec2::new(p.x, p.y)
}

/// Records `items` in order; points become `marker_size_px` squares.
pub fn push_scene(list: &mut DrawList, items: &[SceneItem], marker_size_px: f32) {
    for item in items {
        let color = Color::from_rgba_array(item.color);
        match &item.shape {
            Shape::Polyline { points, closed } => {
                list.push_polyline(
                    ZIndex::GEOMETRY,
                    points.iter().copied().map(ndc),
                    *closed,
                    color,
                );
            }
            Shape::Point(p) => list.push_marker(ZIndex::GEOMETRY, ndc(*p), marker_size_px, color),
        }
    }
}
