pub(crate) mod fill;
pub(crate) mod marker;
pub(crate) mod polyline;
pub(crate) mod text;

pub use fill::FillCmd;
pub use marker::MarkerCmd;
pub use polyline::PolylineCmd;
pub use text::TextCmd;
