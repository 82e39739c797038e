//! Chordline engine crate.
//!
//! Platform and GPU runtime pieces used by the exercises: the winit event
//! loop, the wgpu device/surface, platform-agnostic input, a draw list and
//! the renderers that consume it.

pub mod core;
pub mod device;
pub mod input;
pub mod window;

pub mod coords;
pub mod logging;
pub mod overlay;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
