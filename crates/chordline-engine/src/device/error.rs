/// What the runtime should do after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; draw again on the next redraw.
    Reconfigured,
    /// Transient error; drop this frame.
    SkipFrame,
    /// Out of memory; the runtime shuts down.
    Fatal,
}

impl SurfaceErrorAction {
    /// True when the frame should be retried with a fresh redraw request.
    pub fn wants_redraw(self) -> bool {
        matches!(self, SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame)
    }
}
