//! Interactive circle/segment intersection, without any rendering.
//!
//! A [`Session`] consumes pointer events in normalized device coordinates.
//! The first finished drag defines a [`Circle`], the second a [`Segment`];
//! the intersection is solved once, right after the segment is finalized.
//! [`scene::build_scene`] and [`StatusLines`] describe what to show.

mod point;
mod primitives;
mod session;
mod status;

pub mod capture;
pub mod scene;
pub mod solve;

pub use capture::{CaptureState, Phase, PointerEvent, Transition};
pub use point::Point2D;
pub use primitives::{Circle, Primitive, Segment, DEFAULT_CIRCLE_SEGMENTS};
pub use scene::{build_scene, Role, SceneItem, SceneStyle, Shape};
pub use session::{Effects, Session};
pub use solve::{solve, Intersections, SolveError};
pub use status::{StatusLines, STATUS_SLOTS};
