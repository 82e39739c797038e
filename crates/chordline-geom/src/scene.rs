//! Renderer-independent description of what the exercise shows.
//!
//! The scene is rebuilt from the [`Session`] on every redraw. Coordinates are
//! NDC, the same space the primitives are stored in.

use super::primitives::DEFAULT_CIRCLE_SEGMENTS;
use super::session::Session;
use super::{Circle, Point2D};

/// Straight-alpha RGBA.
pub type Rgba = [f32; 4];

/// Which part of the exercise an item belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Role {
    Circle,
    Segment,
    Preview,
    Intersection,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Connected points; `closed` joins the last point back to the first.
    Polyline { points: Vec<Point2D>, closed: bool },
    /// A single point drawn as a marker.
    Point(Point2D),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneItem {
    pub role: Role,
    pub shape: Shape,
    pub color: Rgba,
}

/// Colors and tessellation used when building the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneStyle {
    pub circle_color: Rgba,
    pub segment_color: Rgba,
    pub preview_color: Rgba,
    pub intersection_color: Rgba,
    pub circle_segments: usize,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            circle_color: [1.0, 0.0, 1.0, 1.0],
            segment_color: [1.0, 1.0, 0.0, 1.0],
            preview_color: [0.5, 0.5, 0.5, 1.0],
            intersection_color: [1.0, 0.5, 0.0, 1.0],
            circle_segments: DEFAULT_CIRCLE_SEGMENTS,
        }
    }
}

/// Builds the scene in paint order: circle, segment, preview, intersections.
pub fn build_scene(session: &Session, style: &SceneStyle) -> Vec<SceneItem> {
    let mut items = Vec::new();

    if let Some(circle) = session.circle() {
        items.push(circle_item(circle, Role::Circle, style.circle_color, style));
    }

    if let Some(segment) = session.segment() {
        items.push(SceneItem {
            role: Role::Segment,
            shape: Shape::Polyline { points: vec![segment.start, segment.end], closed: false },
            color: style.segment_color,
        });
    }

    let capture = session.capture();
    if let (Some(start), Some(current)) = (capture.drag_start(), capture.drag_current()) {
        if session.circle().is_none() {
            let preview = Circle::from_drag(start, current);
            items.push(circle_item(&preview, Role::Preview, style.preview_color, style));
        } else {
            items.push(SceneItem {
                role: Role::Preview,
                shape: Shape::Polyline { points: vec![start, current], closed: false },
                color: style.preview_color,
            });
        }
    }

    if let Some(Ok(hits)) = session.intersections() {
        items.extend(hits.iter().map(|p| SceneItem {
            role: Role::Intersection,
            shape: Shape::Point(*p),
            color: style.intersection_color,
        }));
    }

    items
}

fn circle_item(circle: &Circle, role: Role, color: Rgba, style: &SceneStyle) -> SceneItem {
    SceneItem {
        role,
        shape: Shape::Polyline {
            points: circle.rim_points(style.circle_segments),
            closed: true,
        },
        color,
    }
}
