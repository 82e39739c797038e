//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and issue GPU commands via wgpu.
//! Each renderer is responsible for its own GPU resources (pipelines, buffers).
//!
//! Convention:
//! - Geometry arrives in NDC of a plot rectangle; the line renderer maps it
//!   there with a render-pass viewport.
//! - Text arrives in logical pixels; its vertex shader converts to NDC using
//!   a viewport uniform.

mod ctx;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
pub use shapes::line::LineRenderer;
pub use shapes::text::TextRenderer;
