//! Chordline applications.
//!
//! - [`intersect::IntersectApp`]: drag a circle, then a segment, and see
//!   where they cross.
//! - [`hello::HelloApp`]: four colored quadrants in a square viewport.
//!
//! Both run on `chordline_engine::window::Runtime` and read
//! [`options::StudioOptions`] at start-up.

pub mod draw;
pub mod fatal;
pub mod hello;
pub mod intersect;
pub mod options;
