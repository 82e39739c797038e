//! Color representation shared by the renderers.

pub mod color;

pub use color::Color;
