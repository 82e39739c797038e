//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime (platform loop) and
//! the applications built on it, without leaking winit or wgpu plumbing into
//! application code.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, InputCtx, WindowCtx};
