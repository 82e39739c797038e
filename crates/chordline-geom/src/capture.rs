//! Drag capture state machine.
//!
//! `Idle → Dragging → Idle → Dragging → Done`. The first completed drag
//! defines the circle, the second the segment; `Done` ignores further input.
//! [`CaptureState::transition`] is pure: it takes the current state and a
//! pointer event and returns the next state plus what happened.

use super::Point2D;

/// At most this many primitives are captured per session.
pub const MAX_PRIMITIVES: u8 = 2;

/// Pointer input, already mapped to normalized device coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PointerEvent {
    Down(Point2D),
    Move(Point2D),
    Up,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Phase {
    Idle,
    Dragging {
        start: Point2D,
        /// `None` until the first move after the press.
        current: Option<Point2D>,
    },
    Done,
}

/// Outcome of a single transition.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Transition {
    /// Event had no effect; nothing to redraw.
    Ignored,
    /// A drag started. The preview needs a second point, so no redraw yet.
    Started,
    /// The live drag point moved; the preview must be redrawn.
    Preview,
    /// A drag finished. `index` is 0 for the first primitive, 1 for the second.
    Completed { index: u8, start: Point2D, end: Point2D },
}

impl Transition {
    #[inline]
    pub fn needs_redraw(&self) -> bool {
        matches!(self, Transition::Preview | Transition::Completed { .. })
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CaptureState {
    phase: Phase,
    finalized: u8,
}

impl CaptureState {
    #[inline]
    pub const fn new() -> Self {
        Self { phase: Phase::Idle, finalized: 0 }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of primitives finalized so far (0, 1 or 2).
    #[inline]
    pub fn finalized(&self) -> u8 {
        self.finalized
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    #[inline]
    pub fn drag_start(&self) -> Option<Point2D> {
        match self.phase {
            Phase::Dragging { start, .. } => Some(start),
            _ => None,
        }
    }

    #[inline]
    pub fn drag_current(&self) -> Option<Point2D> {
        match self.phase {
            Phase::Dragging { current, .. } => current,
            _ => None,
        }
    }

    /// Computes the next state for `event`.
    pub fn transition(self, event: PointerEvent) -> (CaptureState, Transition) {
        match (self.phase, event) {
            (Phase::Idle, PointerEvent::Down(p)) if self.finalized < MAX_PRIMITIVES => (
                CaptureState {
                    phase: Phase::Dragging { start: p, current: None },
                    ..self
                },
                Transition::Started,
            ),

            (Phase::Dragging { start, .. }, PointerEvent::Move(p)) => (
                CaptureState {
                    phase: Phase::Dragging { start, current: Some(p) },
                    ..self
                },
                Transition::Preview,
            ),

            (Phase::Dragging { start, current: Some(end) }, PointerEvent::Up) => {
                let index = self.finalized;
                let finalized = self.finalized + 1;
                let phase = if finalized >= MAX_PRIMITIVES { Phase::Done } else { Phase::Idle };
                (
                    CaptureState { phase, finalized },
                    Transition::Completed { index, start, end },
                )
            }

            // Release without any move, a second press mid-drag, stray moves
            // while idle, and everything once done.
            _ => (self, Transition::Ignored),
        }
    }
}

impl Default for CaptureState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point2D {
        Point2D::new(x, y)
    }

    fn run(state: CaptureState, events: &[PointerEvent]) -> (CaptureState, Vec<Transition>) {
        let mut state = state;
        let mut out = Vec::new();
        for ev in events {
            let (next, t) = state.transition(*ev);
            state = next;
            out.push(t);
        }
        (state, out)
    }

    #[test]
    fn press_starts_a_drag_without_redraw() {
        let (s, t) = CaptureState::new().transition(PointerEvent::Down(p(0.1, 0.2)));
        assert_eq!(t, Transition::Started);
        assert!(!t.needs_redraw());
        assert_eq!(s.drag_start(), Some(p(0.1, 0.2)));
        assert_eq!(s.drag_current(), None);
    }

    #[test]
    fn move_updates_the_live_point_and_redraws() {
        let (s, ts) = run(
            CaptureState::new(),
            &[PointerEvent::Down(p(0.0, 0.0)), PointerEvent::Move(p(0.5, 0.0))],
        );
        assert_eq!(ts[1], Transition::Preview);
        assert!(ts[1].needs_redraw());
        assert_eq!(s.drag_current(), Some(p(0.5, 0.0)));
    }

    #[test]
    fn release_without_move_keeps_dragging() {
        let (s, ts) = run(CaptureState::new(), &[PointerEvent::Down(p(0.0, 0.0)), PointerEvent::Up]);
        assert_eq!(ts[1], Transition::Ignored);
        assert!(s.is_dragging());
        assert_eq!(s.finalized(), 0);
    }

    #[test]
    fn release_after_move_completes_first_primitive() {
        let (s, ts) = run(
            CaptureState::new(),
            &[
                PointerEvent::Down(p(0.0, 0.0)),
                PointerEvent::Move(p(1.0, 0.0)),
                PointerEvent::Up,
            ],
        );
        assert_eq!(
            ts[2],
            Transition::Completed { index: 0, start: p(0.0, 0.0), end: p(1.0, 0.0) }
        );
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.finalized(), 1);
        assert_eq!(s.drag_start(), None);
        assert_eq!(s.drag_current(), None);
    }

    #[test]
    fn second_press_mid_drag_is_ignored() {
        let (s, ts) = run(
            CaptureState::new(),
            &[
                PointerEvent::Down(p(0.0, 0.0)),
                PointerEvent::Move(p(0.2, 0.0)),
                PointerEvent::Down(p(0.9, 0.9)),
            ],
        );
        assert_eq!(ts[2], Transition::Ignored);
        assert_eq!(s.drag_start(), Some(p(0.0, 0.0)));
        assert_eq!(s.drag_current(), Some(p(0.2, 0.0)));
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let (s, t) = CaptureState::new().transition(PointerEvent::Move(p(0.3, 0.3)));
        assert_eq!(t, Transition::Ignored);
        assert_eq!(s, CaptureState::new());
    }

    #[test]
    fn two_drags_reach_done_and_stay_there() {
        let drag = |a: Point2D, b: Point2D| {
            [PointerEvent::Down(a), PointerEvent::Move(b), PointerEvent::Up]
        };
        let mut events = Vec::new();
        events.extend(drag(p(0.0, 0.0), p(1.0, 0.0)));
        events.extend(drag(p(-1.0, 0.0), p(1.0, 0.0)));
        let (s, ts) = run(CaptureState::new(), &events);

        assert_eq!(
            ts[5],
            Transition::Completed { index: 1, start: p(-1.0, 0.0), end: p(1.0, 0.0) }
        );
        assert!(s.is_done());
        assert_eq!(s.finalized(), MAX_PRIMITIVES);

        let (after, ts) = run(s, &drag(p(0.5, 0.5), p(0.6, 0.6)));
        assert_eq!(after, s);
        assert!(ts.iter().all(|t| *t == Transition::Ignored));
    }

    #[test]
    fn move_after_finalizing_release_has_no_effect() {
        let (s, ts) = run(
            CaptureState::new(),
            &[
                PointerEvent::Down(p(0.0, 0.0)),
                PointerEvent::Move(p(0.4, 0.0)),
                PointerEvent::Up,
                PointerEvent::Move(p(0.8, 0.0)),
            ],
        );
        assert_eq!(ts[3], Transition::Ignored);
        assert_eq!(s.phase(), Phase::Idle);
    }
}
