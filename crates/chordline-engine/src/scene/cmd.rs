use crate::scene::shapes::fill::FillCmd;
use crate::scene::shapes::marker::MarkerCmd;
use crate::scene::shapes::polyline::PolylineCmd;
use crate::scene::shapes::text::TextCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - teach a renderer under `render::shapes::*` to consume it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Polyline(PolylineCmd),
    Marker(MarkerCmd),
    Fill(FillCmd),
    Text(TextCmd),
}
