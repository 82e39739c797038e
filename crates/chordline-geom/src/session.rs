use super::capture::{CaptureState, PointerEvent, Transition};
use super::solve::{solve, Intersections, SolveError};
use super::{Circle, Primitive, Segment};

/// What the driver has to do after an event.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Effects {
    pub redraw: bool,
    pub finalized: Option<Primitive>,
}

/// Everything the intersection exercise knows, owned by the app driver.
///
/// The circle, segment and intersection result are written exactly once, in
/// that order; only [`Session::reset`] clears them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    capture: CaptureState,
    circle: Option<Circle>,
    segment: Option<Segment>,
    intersections: Option<Result<Intersections, SolveError>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn capture(&self) -> &CaptureState {
        &self.capture
    }

    #[inline]
    pub fn circle(&self) -> Option<&Circle> {
        self.circle.as_ref()
    }

    #[inline]
    pub fn segment(&self) -> Option<&Segment> {
        self.segment.as_ref()
    }

    /// Solver outcome. `None` until the segment exists.
    #[inline]
    pub fn intersections(&self) -> Option<&Result<Intersections, SolveError>> {
        self.intersections.as_ref()
    }

    /// Applies one pointer event and reports the effects.
    pub fn handle(&mut self, event: PointerEvent) -> Effects {
        let (next, transition) = self.capture.transition(event);
        self.capture = next;

        let finalized = match transition {
            Transition::Completed { index: 0, start, end } => {
                let circle = Circle::from_drag(start, end);
                log::info!(
                    "circle finalized: center {} radius {:.3}",
                    circle.center,
                    circle.radius
                );
                self.circle = Some(circle);
                Some(Primitive::Circle(circle))
            }
            Transition::Completed { start, end, .. } => {
                let segment = Segment::new(start, end);
                log::info!("segment finalized: {} ~ {}", segment.start, segment.end);
                self.segment = Some(segment);
                self.solve_once(&segment);
                Some(Primitive::Segment(segment))
            }
            Transition::Started | Transition::Preview => {
                log::debug!("capture {:?} after {:?}", self.capture.phase(), event);
                None
            }
            Transition::Ignored => None,
        };

        Effects {
            redraw: transition.needs_redraw(),
            finalized,
        }
    }

    /// Returns to the initial state with no primitives.
    pub fn reset(&mut self) {
        log::debug!("session reset");
        *self = Self::new();
    }

    fn solve_once(&mut self, segment: &Segment) {
        let Some(circle) = self.circle else {
            // The capture machine always finalizes the circle first.
            log::error!("segment finalized without a circle");
            return;
        };

        let outcome = solve(&circle, segment);
        match &outcome {
            Ok(hits) => log::info!("{} intersection point(s): {:?}", hits.len(), hits.points()),
            Err(e) => log::warn!("no intersection computed: {e}"),
        }
        self.intersections = Some(outcome);
    }
}
