//! Overlays drawn on top of application geometry: coordinate axes and
//! slot-positioned status text.

mod axes;
mod text;

pub use axes::Axes;
pub use text::{TextHandle, TextOverlay};
