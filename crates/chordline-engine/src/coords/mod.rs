//! Screen-space coordinate types.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Geometry itself lives in normalized device coordinates (see
//! `chordline_geom::Point2D`); these types describe where on the surface the
//! plot sits and where text goes.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
