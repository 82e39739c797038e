use crate::input::InputEvent;

use super::ctx::{FrameCtx, InputCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the binaries.
///
/// The runtime redraws only on demand: after start-up, resizes, scale
/// changes, and whenever a callback calls `ctx.runtime.request_redraw()`.
pub trait App {
    /// Called for every translated input event, before the runtime handles
    /// window lifecycle for it.
    fn on_input(&mut self, ctx: &mut InputCtx<'_>, event: &InputEvent) -> AppControl {
        let _ = (ctx, event);
        AppControl::Continue
    }

    /// Called once per redraw.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
